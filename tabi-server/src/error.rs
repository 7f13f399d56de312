//! Error types for tabi-server.

use crate::provider::ProviderError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

/// Request-handling errors, rendered as the flat `{error, message}` envelope.
///
/// Validation failures and provider failures share the envelope shape and
/// differ only by status code; provider detail travels in `message`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    InvalidRequest(String),

    #[error("{0}")]
    Completion(#[from] ProviderError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = match &self {
            ApiError::InvalidRequest(_) => (StatusCode::BAD_REQUEST, "invalid request"),
            ApiError::Completion(_) => (StatusCode::INTERNAL_SERVER_ERROR, "completion failed"),
        };

        let body = serde_json::json!({
            "error": error,
            "message": self.to_string(),
        });

        (status, Json(body)).into_response()
    }
}
