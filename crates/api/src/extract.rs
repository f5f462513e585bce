//! Request body extraction.

use axum::Json;
use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::{HeaderMap, header};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// JSON body extractor that treats a body it does not parse as `{}`.
///
/// Only `application/json` bodies are read. Any other (or no) content type,
/// and an empty JSON body, yield `T::default()`, so clients that omit the
/// body get field-level validation errors instead of a rejection. Malformed
/// JSON is an [`ApiError::BadRequest`].
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

fn has_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case("application/json"))
}

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !has_json_content_type(req.headers()) {
            return Ok(Self(T::default()));
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::BadRequest(e.body_text()))?;

        if bytes.is_empty() {
            return Ok(Self(T::default()));
        }

        Json::<T>::from_bytes(&bytes)
            .map(|Json(value)| Self(value))
            .map_err(|e| ApiError::BadRequest(e.body_text()))
    }
}
