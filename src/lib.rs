use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod dtos;
pub mod error;
pub mod handlers;
pub mod models;
pub mod processor;

use processor::PaymentProcessor;

#[derive(Clone)]
pub struct AppState {
    pub processor: Arc<dyn PaymentProcessor>,
}

impl AppState {
    pub fn new(processor: Arc<dyn PaymentProcessor>) -> Self {
        Self { processor }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", post(handlers::create_payment_intent))
        .route("/payments/intent", post(handlers::create_payment_intent))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
