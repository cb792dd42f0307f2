//! Domain-specific errors for the payment API.
//!
//! Contains error variants for the failure cases a request can hit:
//! - Input validation errors (missing or empty field, malformed body)
//! - Lookup errors (unknown payment identifier)
//!
//! Every variant renders as the JSON error envelope
//! `{"status": "error", "message": ...}` with a matching HTTP status code.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::dto::ErrorEnvelope;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Validation(String),
    #[error("Payment not found")]
    PaymentNotFound,
    /// Failures talking to the payment gateway. Reserved for gateway calls;
    /// the create/get flow does not make any yet.
    #[error("payment gateway error: {0}")]
    Gateway(#[from] reqwest::Error),
}

impl Error {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::Validation(_) => StatusCode::BAD_REQUEST,
            Error::PaymentNotFound => StatusCode::NOT_FOUND,
            Error::Gateway(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        Error::Validation(rejection.body_text())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        (status, Json(ErrorEnvelope::new(self.to_string()))).into_response()
    }
}
