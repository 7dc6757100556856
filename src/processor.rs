//! Payment processor seam.
//!
//! The handler only sees [`PaymentProcessor`]; [`StripeProcessor`] is the
//! production implementation backed by `async-stripe`.

use std::collections::BTreeMap;

use async_trait::async_trait;
use secrecy::{ExposeSecret, Secret};
use stripe::{
    ApiVersion, Client, CreatePaymentIntent, CreatePaymentIntentAutomaticPaymentMethods, Currency,
    PaymentIntent, StripeError,
};
use thiserror::Error;

/// Stripe API version the `async-stripe` client sends with every request.
pub const STRIPE_API_VERSION: ApiVersion = stripe::generated::core::version::VERSION;

/// Parameters for a new payment intent.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPaymentIntent {
    /// Amount in minor units (cents for USD).
    pub amount_minor: i64,
    /// Lower-case ISO currency code.
    pub currency: String,
    pub automatic_payment_methods: bool,
    pub metadata: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreatedPaymentIntent {
    pub id: String,
    pub client_secret: String,
}

#[derive(Error, Debug)]
pub enum ProcessorError {
    #[error("{0}")]
    Rejected(String),
    #[error("Invalid currency: {0}")]
    UnsupportedCurrency(String),
    #[error("payment intent {0} has no client secret")]
    MissingClientSecret(String),
    #[error("{0}")]
    Transport(String),
}

impl From<StripeError> for ProcessorError {
    fn from(err: StripeError) -> Self {
        match err {
            StripeError::Stripe(request) => {
                let message = request.message.clone().unwrap_or_else(|| request.to_string());
                ProcessorError::Rejected(message)
            }
            other => ProcessorError::Transport(other.to_string()),
        }
    }
}

#[async_trait]
pub trait PaymentProcessor: Send + Sync {
    async fn create_payment_intent(
        &self,
        intent: NewPaymentIntent,
    ) -> Result<CreatedPaymentIntent, ProcessorError>;
}

pub struct StripeProcessor {
    client: Client,
}

impl StripeProcessor {
    pub fn new(secret_key: &Secret<String>) -> Self {
        Self {
            client: Client::new(secret_key.expose_secret().clone()),
        }
    }
}

#[async_trait]
impl PaymentProcessor for StripeProcessor {
    async fn create_payment_intent(
        &self,
        intent: NewPaymentIntent,
    ) -> Result<CreatedPaymentIntent, ProcessorError> {
        let currency: Currency = intent
            .currency
            .parse()
            .map_err(|_| ProcessorError::UnsupportedCurrency(intent.currency.clone()))?;

        let mut params = CreatePaymentIntent::new(intent.amount_minor, currency);
        params.automatic_payment_methods = Some(CreatePaymentIntentAutomaticPaymentMethods {
            allow_redirects: None,
            enabled: intent.automatic_payment_methods,
        });
        params.metadata = Some(intent.metadata.into_iter().collect());

        let created = PaymentIntent::create(&self.client, params).await?;
        let id = created.id.to_string();
        let client_secret = created
            .client_secret
            .ok_or_else(|| ProcessorError::MissingClientSecret(id.clone()))?;

        Ok(CreatedPaymentIntent { id, client_secret })
    }
}
