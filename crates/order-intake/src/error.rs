//! API error types
//!
//! Handlers themselves cannot fail; errors only arise at the boundary
//! (body deserialization) or from unmatched routes. Both are reported
//! to clients as a JSON error envelope.

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Errors surfaced to API clients
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),

    #[error("not found")]
    NotFound,
}

impl ApiError {
    /// Convert the error to an HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            // The rejection already carries the right client-error
            // status (400 for syntax errors, 415 for a missing JSON
            // content type, 422 for shape mismatches)
            ApiError::InvalidBody(rejection) => rejection.status(),
            ApiError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.to_string()
        }));
        (self.status_code(), body).into_response()
    }
}

/// JSON extractor that reports boundary rejections as [`ApiError`],
/// so malformed bodies get the JSON error envelope instead of axum's
/// plain-text rejection body.
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}
