//! Application configuration

use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Port for the HTTP API
    pub port: u16,

    /// Maximum accepted request body size in bytes
    pub max_body_bytes: usize,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            port: env::var("ORDER_INTAKE_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(8080),

            max_body_bytes: env::var("ORDER_INTAKE_MAX_BODY_BYTES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(1024 * 1024),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
