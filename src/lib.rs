mod api;
mod config;
mod dto;
mod error;
mod gateway;
mod id;
mod runner;
mod stores;

pub use api::{create_routes, AppState};
pub use config::{Config, ConfigError, DEFAULT_PORT};
pub use dto::{CreatePaymentRequest, NewPayment, PaymentRecord, PaymentStatus};
pub use error::Error;
pub use gateway::GatewayClient;
pub use id::{IdGenerator, UuidIdGenerator, PAYMENT_ID_PREFIX};
pub use runner::{run, serve};
pub use stores::PaymentsStore;
