//! Lenient JSON body extractor.
//!
//! Unlike `axum::Json`, this does not require a JSON content type, and it
//! reports every failure as an [`ApiError`] so clients always get a JSON
//! error body. A body that is empty, or valid JSON but not an object,
//! yields `T::default()` so the handler reports the missing field.

use crate::error::ApiError;
use axum::async_trait;
use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Request body parsed as JSON into `T`
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                ApiError::PayloadTooLarge
            } else {
                ApiError::BodyRead(rejection.body_text())
            }
        })?;

        parse_body(&bytes).map(JsonBody)
    }
}

/// Parse raw body bytes
pub fn parse_body<T>(bytes: &[u8]) -> Result<T, ApiError>
where
    T: DeserializeOwned + Default,
{
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }

    let value: Value =
        serde_json::from_slice(bytes).map_err(|e| ApiError::MalformedJson(e.to_string()))?;

    match value {
        Value::Object(_) => {
            serde_json::from_value(value).map_err(|e| ApiError::MalformedJson(e.to_string()))
        }
        _ => Ok(T::default()),
    }
}
