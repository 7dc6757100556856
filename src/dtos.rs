use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::processor::CreatedPaymentIntent;

/// Request body as sent by the client. Fields stay untyped here so that
/// `PaymentRequest::try_from` checks them in order: amount, customer,
/// currency.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentRequest {
    pub amount: Option<Value>,
    pub currency: Option<Value>,
    pub customer_email: Option<Value>,
    pub customer_name: Option<Value>,
}

impl CreatePaymentRequest {
    pub fn from_body(body: &[u8]) -> Result<Self, serde_json::Error> {
        Self::from_value(serde_json::from_slice(body)?)
    }

    /// A JSON string holds a text-encoded body and is decoded once more.
    /// Only objects carry fields; `null` is a decode error and any other
    /// document is an empty request.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        let value = match value {
            Value::String(text) => serde_json::from_str(&text)?,
            other => other,
        };
        match value {
            Value::Object(_) | Value::Null => serde_json::from_value(value),
            _ => Ok(Self::default()),
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntentResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_intent_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PaymentIntentResult {
    pub fn created(intent: CreatedPaymentIntent) -> Self {
        Self {
            success: true,
            client_secret: Some(intent.client_secret),
            payment_intent_id: Some(intent.id),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            client_secret: None,
            payment_intent_id: None,
            error: Some(error.into()),
        }
    }
}
