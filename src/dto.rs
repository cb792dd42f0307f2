use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::Error;

const REQUIRED_FIELDS_MESSAGE: &str =
    "All fields (customer_name, customer_email, amount) are required.";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentRecord {
    pub id: String,
    pub customer_name: String,
    pub customer_email: String,
    /// Kept exactly as the client sent it. Neither type nor sign is checked.
    pub amount: Value,
    pub status: PaymentStatus,
}

impl PaymentRecord {
    /// Builds a freshly created record. New payments always start out pending.
    pub fn pending(id: String, payment: NewPayment) -> Self {
        Self {
            id,
            customer_name: payment.customer_name,
            customer_email: payment.customer_email,
            amount: payment.amount,
            status: PaymentStatus::Pending,
        }
    }
}

/// Body of `POST /api/v1/payments` as received. Every field is optional here so
/// that absent fields surface as a validation error rather than a decode error.
#[derive(Debug, Default, Deserialize)]
pub struct CreatePaymentRequest {
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
    pub amount: Option<Value>,
}

/// A create request that passed validation.
#[derive(Debug, PartialEq)]
pub struct NewPayment {
    pub customer_name: String,
    pub customer_email: String,
    pub amount: Value,
}

impl CreatePaymentRequest {
    /// Presence checks only: a field fails when it is absent, `null` or `""`.
    pub fn validate(self) -> Result<NewPayment, Error> {
        let customer_name = required(self.customer_name)?;
        let customer_email = required(self.customer_email)?;
        let amount = match self.amount {
            Some(Value::String(s)) => Value::String(required(Some(s))?),
            Some(Value::Null) | None => return Err(missing_fields()),
            Some(amount) => amount,
        };
        Ok(NewPayment {
            customer_name,
            customer_email,
            amount,
        })
    }
}

fn required(field: Option<String>) -> Result<String, Error> {
    match field {
        Some(text) if !text.is_empty() => Ok(text),
        _ => Err(missing_fields()),
    }
}

fn missing_fields() -> Error {
    Error::Validation(REQUIRED_FIELDS_MESSAGE.to_string())
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvelopeStatus {
    Success,
    Error,
}

/// `{"status": "success", "payment": {...}}`
#[derive(Debug, Serialize)]
pub struct PaymentEnvelope {
    pub status: EnvelopeStatus,
    pub payment: PaymentRecord,
}

impl PaymentEnvelope {
    pub fn new(payment: PaymentRecord) -> Self {
        Self {
            status: EnvelopeStatus::Success,
            payment,
        }
    }
}

/// `{"status": "error", "message": "..."}`
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub status: EnvelopeStatus,
    pub message: String,
}

impl ErrorEnvelope {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: EnvelopeStatus::Error,
            message: message.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Welcome {
    pub message: &'static str,
}
