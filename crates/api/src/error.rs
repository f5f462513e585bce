//! API error types with HTTP response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use status_store::StatusError;
use thiserror::Error;

/// API-level error type that maps to HTTP responses.
///
/// Every variant renders as `{"error": <message>}`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request body could not be read as the expected JSON shape.
    #[error("{0}")]
    BadRequest(String),
    /// A status store operation was rejected.
    #[error(transparent)]
    Status(#[from] StatusError),
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Status(err) => match err {
                StatusError::MissingField | StatusError::InvalidFormat { .. } => {
                    StatusCode::BAD_REQUEST
                }
                StatusError::Conflict { .. } => StatusCode::CONFLICT,
                StatusError::NotFound { .. } => StatusCode::NOT_FOUND,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = serde_json::json!({ "error": self.to_string() });
        (status, axum::Json(body)).into_response()
    }
}
