use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::{debug, info};

use super::{ApiJson, AppState};
use crate::dto::{CreatePaymentRequest, PaymentEnvelope, PaymentRecord};
use crate::Error;

/// `POST /api/v1/payments`
pub async fn create_payment(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreatePaymentRequest>,
) -> Result<(StatusCode, Json<PaymentEnvelope>), Error> {
    let new_payment = request.validate()?;
    let payment = PaymentRecord::pending(state.ids.next_id(), new_payment);
    let payment = state.store.write().await.create(payment).clone();

    info!(payment.id = %payment.id, payment.amount = %payment.amount, "payment created");
    debug!(
        payment.id = %payment.id,
        authorization_url = %state.gateway.authorization_url(&payment.id),
        "payment awaiting gateway authorization"
    );

    Ok((StatusCode::CREATED, Json(PaymentEnvelope::new(payment))))
}

/// `GET /api/v1/payments/{id}`
pub async fn get_payment_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PaymentEnvelope>, Error> {
    let payment = state.store.read().await.find_by_id(&id)?.clone();
    Ok(Json(PaymentEnvelope::new(payment)))
}
