use std::collections::BTreeMap;
use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde_json::Value;

use crate::dtos::CreatePaymentRequest;
use crate::error::PaymentError;
use crate::processor::NewPaymentIntent;

pub const DEFAULT_CURRENCY: &str = "usd";

/// A request that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentRequest {
    pub amount: Decimal,
    pub amount_minor: i64,
    pub currency: String,
    pub customer_email: String,
    pub customer_name: String,
}

impl TryFrom<CreatePaymentRequest> for PaymentRequest {
    type Error = PaymentError;

    fn try_from(body: CreatePaymentRequest) -> Result<Self, Self::Error> {
        let amount = match body.amount {
            Some(Value::Number(number)) => parse_amount(&number)?,
            _ => return Err(PaymentError::InvalidAmount),
        };
        if amount.is_sign_negative() || amount.is_zero() {
            return Err(PaymentError::InvalidAmount);
        }
        let amount_minor = to_minor_units(amount).ok_or(PaymentError::InvalidAmount)?;

        let (Some(customer_email), Some(customer_name)) = (
            non_empty_string(body.customer_email),
            non_empty_string(body.customer_name),
        ) else {
            return Err(PaymentError::MissingCustomer);
        };

        // A currency that is present but not a string fails the decode.
        let currency = match body.currency {
            None => DEFAULT_CURRENCY.to_string(),
            Some(value) => serde_json::from_value::<String>(value)?,
        }
        .to_lowercase();

        Ok(Self {
            amount,
            amount_minor,
            currency,
            customer_email,
            customer_name,
        })
    }
}

impl PaymentRequest {
    pub fn to_new_intent(&self) -> NewPaymentIntent {
        let metadata = BTreeMap::from([
            ("customerEmail".to_string(), self.customer_email.clone()),
            ("customerName".to_string(), self.customer_name.clone()),
        ]);
        NewPaymentIntent {
            amount_minor: self.amount_minor,
            currency: self.currency.clone(),
            automatic_payment_methods: true,
            metadata,
        }
    }
}

fn non_empty_string(value: Option<Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) if !s.is_empty() => Some(s),
        _ => None,
    }
}

// serde_json prints floats in their shortest round-trip form, so 19.995
// parses to exactly 19.995 rather than the nearest binary value.
fn parse_amount(number: &serde_json::Number) -> Result<Decimal, PaymentError> {
    let text = number.to_string();
    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .map_err(|_| PaymentError::InvalidAmount)
}

/// Converts a major-unit amount to minor units, rounding half away from zero.
pub fn to_minor_units(amount: Decimal) -> Option<i64> {
    amount
        .checked_mul(Decimal::ONE_HUNDRED)?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
}
