//! API error type and status-code mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Errors surfaced by the JSON API.
///
/// Validation problems map to 400; anything else (predictor failures
/// included) maps to 500. The body is always `{"error": "..."}`.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message.clone()),
            ApiError::Internal(source) => {
                error!("Request failed: {source:#}");
                (StatusCode::INTERNAL_SERVER_ERROR, source.to_string())
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}
