//! HTTP error mapping.
//!
//! Every failure leaves the service as a JSON body with an `error` field.
//! Internal errors also carry a short `message`, never a backtrace.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use haven_common::{ClassifyError, ErrorResponse};
use thiserror::Error;

/// Errors returned by route handlers
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Classify(#[from] ClassifyError),

    #[error("Invalid JSON in request body")]
    MalformedJson(String),

    #[error("Request body too large")]
    PayloadTooLarge,

    /// Body could not be read for a reason other than its size
    #[error("Failed to read request body")]
    BodyRead(String),

    #[error("Endpoint not found")]
    NotFound,

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Request timeout")]
    Timeout,

    #[error("Internal server error")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Classify(ClassifyError::Internal(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Classify(_) => StatusCode::BAD_REQUEST,
            ApiError::MalformedJson(_) | ApiError::BodyRead(_) => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Timeout => StatusCode::REQUEST_TIMEOUT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// JSON body for this error
    pub fn body(&self) -> ErrorResponse {
        match self {
            ApiError::Classify(ClassifyError::Internal(detail)) | ApiError::Internal(detail) => {
                ErrorResponse::new("Internal server error").with_message(detail.clone())
            }
            ApiError::MalformedJson(detail) | ApiError::BodyRead(detail) => {
                ErrorResponse::new(self.to_string()).with_message(detail.clone())
            }
            _ => ErrorResponse::new(self.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.body())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_are_bad_request() {
        let cases = [
            (ClassifyError::missing_text(), "Missing text field in request body"),
            (ClassifyError::missing_texts(), "Missing texts field in request body"),
            (ClassifyError::EmptyText, "Text cannot be empty"),
            (ClassifyError::InvalidInput, "Invalid text input"),
            (ClassifyError::InvalidBatchShape, "Texts must be a list"),
        ];
        for (err, message) in cases {
            let api: ApiError = err.into();
            assert_eq!(api.status(), StatusCode::BAD_REQUEST);
            assert_eq!(api.body(), ErrorResponse::new(message));
        }
    }

    #[test]
    fn test_internal_errors_carry_message() {
        let api: ApiError = ClassifyError::Internal("scorer failed: x".to_string()).into();
        assert_eq!(api.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            api.body(),
            ErrorResponse::new("Internal server error").with_message("scorer failed: x")
        );

        let api = ApiError::Internal("panic".to_string());
        assert_eq!(api.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api.body().message.as_deref(), Some("panic"));
    }

    #[test]
    fn test_routing_errors() {
        assert_eq!(ApiError::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::NotFound.body(),
            ErrorResponse::new("Endpoint not found")
        );
        assert_eq!(
            ApiError::MethodNotAllowed.status(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(
            ApiError::MethodNotAllowed.body(),
            ErrorResponse::new("Method not allowed")
        );
        assert_eq!(
            ApiError::PayloadTooLarge.status(),
            StatusCode::PAYLOAD_TOO_LARGE
        );
    }

    #[test]
    fn test_timeout_is_json_error() {
        assert_eq!(ApiError::Timeout.status(), StatusCode::REQUEST_TIMEOUT);
        assert_eq!(ApiError::Timeout.body(), ErrorResponse::new("Request timeout"));
    }

    #[test]
    fn test_malformed_json_body() {
        let api = ApiError::MalformedJson("expected value at line 1 column 1".to_string());
        assert_eq!(api.status(), StatusCode::BAD_REQUEST);
        let body = api.body();
        assert_eq!(body.error, "Invalid JSON in request body");
        assert!(body.message.is_some());
    }
}
