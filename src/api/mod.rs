//! HTTP surface of the payment API.
//!
//! [`create_routes`] wires the handlers to their paths over a shared
//! [`AppState`]. Handlers live in [`payments`].

mod payments;

use std::sync::Arc;

use axum::extract::FromRequest;
use axum::routing::{get, post};
use axum::{Json, Router};
use tokio::sync::RwLock;

use crate::dto::Welcome;
use crate::gateway::GatewayClient;
use crate::id::{IdGenerator, UuidIdGenerator};
use crate::stores::PaymentsStore;
use crate::Error;

/// State shared by every request. The store sits behind a single lock: creates
/// take it for writing, lookups for reading.
#[derive(Clone)]
pub struct AppState {
    store: Arc<RwLock<PaymentsStore>>,
    ids: Arc<dyn IdGenerator>,
    gateway: Arc<GatewayClient>,
}

impl AppState {
    pub fn new(gateway: GatewayClient) -> Self {
        Self::with_id_generator(gateway, UuidIdGenerator)
    }

    pub fn with_id_generator(gateway: GatewayClient, ids: impl IdGenerator + 'static) -> Self {
        Self {
            store: Arc::new(RwLock::new(PaymentsStore::new())),
            ids: Arc::new(ids),
            gateway: Arc::new(gateway),
        }
    }

    /// Number of stored payments.
    pub async fn payment_count(&self) -> usize {
        self.store.read().await.len()
    }
}

/// JSON body extractor whose rejections use the API error envelope.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(Error))]
pub struct ApiJson<T>(pub T);

pub fn create_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(welcome))
        .route("/api/v1/payments", post(payments::create_payment))
        .route("/api/v1/payments/{id}", get(payments::get_payment_by_id))
        .with_state(state)
}

async fn welcome() -> Json<Welcome> {
    Json(Welcome {
        message: "Welcome to the Payment API!",
    })
}
