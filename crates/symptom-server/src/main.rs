//! HTTP server entry point.
//!
//! Loads `.env`, reads the provider credential, and serves the API on port 8000.

use std::sync::Arc;

use anyhow::Result;
use symptom_config::{AppConfig, BIND_ADDR};
use symptom_server::{build_router, ServerState};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .compact()
        .init();

    let config = AppConfig::from_env();
    let state = Arc::new(ServerState::new(&config));
    match state.analyzer.is_live() {
        true => info!("Live mode: forwarding to {} ({})", config.api_url, config.model),
        false => info!("Mock mode: GROK_API_KEY not set, serving canned responses"),
    }

    let app = build_router(state);

    info!("Starting server on {}", BIND_ADDR);
    let listener = tokio::net::TcpListener::bind(BIND_ADDR).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
