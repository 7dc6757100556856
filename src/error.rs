use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use thiserror::Error;

use crate::dtos::PaymentIntentResult;
use crate::processor::ProcessorError;

pub const FALLBACK_MESSAGE: &str = "Failed to create payment intent";

#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("Invalid amount")]
    InvalidAmount,
    #[error("Customer email and name are required")]
    MissingCustomer,
    #[error("{0}")]
    Decode(#[from] serde_json::Error),
    #[error("{0}")]
    Processor(#[from] ProcessorError),
}

impl PaymentError {
    pub fn status(&self) -> StatusCode {
        match self {
            PaymentError::InvalidAmount | PaymentError::MissingCustomer => StatusCode::BAD_REQUEST,
            PaymentError::Decode(_) | PaymentError::Processor(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message shown to the caller; never empty.
    pub fn message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            FALLBACK_MESSAGE.to_string()
        } else {
            message
        }
    }
}

impl IntoResponse for PaymentError {
    fn into_response(self) -> Response {
        (self.status(), Json(PaymentIntentResult::failed(self.message()))).into_response()
    }
}
