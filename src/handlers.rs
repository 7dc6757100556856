use axum::{
    body::Bytes,
    extract::State,
    response::{IntoResponse, Json, Response},
};
use serde_json::{json, Value};

use crate::dtos::{CreatePaymentRequest, PaymentIntentResult};
use crate::error::PaymentError;
use crate::models::PaymentRequest;
use crate::processor::CreatedPaymentIntent;
use crate::AppState;

pub async fn create_payment_intent(State(state): State<AppState>, body: Bytes) -> Response {
    match create(&state, &body).await {
        Ok(intent) => Json(PaymentIntentResult::created(intent)).into_response(),
        Err(err) => {
            if err.status().is_client_error() {
                tracing::warn!("Rejected payment request: {}", err);
            } else {
                tracing::error!("Error creating payment intent: {}", err.message());
            }
            err.into_response()
        }
    }
}

async fn create(state: &AppState, body: &[u8]) -> Result<CreatedPaymentIntent, PaymentError> {
    let request = PaymentRequest::try_from(CreatePaymentRequest::from_body(body)?)?;

    tracing::info!(
        "Creating payment intent for {}, amount: {}",
        request.customer_email,
        request.amount
    );

    let intent = state
        .processor
        .create_payment_intent(request.to_new_intent())
        .await?;

    tracing::info!("Payment Intent created successfully: {}", intent.id);
    Ok(intent)
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
