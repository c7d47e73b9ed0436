//! Order Intake API - Main entry point
//!
//! A small HTTP service fronting the order-intake pipeline:
//! - `POST /process` echoes a ProcessRequest back to the caller
//! - `POST /ingest` accepts a full order payload
//! - `GET /health` liveness check

mod api;
mod config;
mod error;
mod router;

use anyhow::Result;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::AppConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "info,order_intake=debug".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Order Intake API");

    // Load configuration
    let config = AppConfig::from_env();
    tracing::info!("Configuration loaded: {:?}", config);

    let app = router::create_router(&config)
        .layer(TraceLayer::new_for_http());

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Order Intake API listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
