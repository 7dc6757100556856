use std::env;
use std::net::SocketAddr;

use dotenvy::dotenv;
use secrecy::Secret;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("STRIPE_SECRET_KEY must be set")]
    MissingSecretKey,
    #[error("invalid listen address {0}")]
    InvalidAddress(String),
}

#[derive(Clone, Debug)]
pub struct Config {
    pub stripe_secret_key: Secret<String>,
    pub addr: SocketAddr,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let stripe_secret_key = lookup("STRIPE_SECRET_KEY")
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingSecretKey)?;

        let host = lookup("PAYMENT_FUNCTION_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = lookup("PAYMENT_FUNCTION_PORT").unwrap_or_else(|| "3000".to_string());
        let raw = format!("{host}:{port}");
        let addr = raw.parse().map_err(|_| ConfigError::InvalidAddress(raw))?;

        Ok(Self {
            stripe_secret_key: Secret::new(stripe_secret_key),
            addr,
        })
    }
}
