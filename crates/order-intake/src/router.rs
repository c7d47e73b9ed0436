//! API router
//!
//! Wires the intake endpoints and the boundary behavior: body-size
//! limit, JSON 404 fallback. Request tracing is layered on in main.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::api;
use crate::config::AppConfig;
use crate::error::ApiError;

/// Create the API router
pub fn create_router(config: &AppConfig) -> Router {
    Router::new()
        .route("/process", post(api::process))
        .route("/ingest", post(api::ingest))
        .route("/health", get(api::health_check))
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
}

/// JSON 404 for unmatched routes
async fn not_found() -> ApiError {
    ApiError::NotFound
}
