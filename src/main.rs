use std::sync::Arc;

use payment_intent_function::{
    build_router,
    config::Config,
    processor::{StripeProcessor, STRIPE_API_VERSION},
    AppState,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "payment_intent_function=debug,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let processor = Arc::new(StripeProcessor::new(&config.stripe_secret_key));
    tracing::debug!("stripe client ready (api version {})", STRIPE_API_VERSION.as_str());

    let app = build_router(AppState::new(processor));

    tracing::debug!("listening on {}", config.addr);
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
