//! Request middleware: body limits, deadlines and panic recovery.

use crate::error::ApiError;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::any::Any;
use std::time::Duration;
use tracing::{error, warn};

/// Body size limit middleware
///
/// Checks the Content-Length header and rejects requests declaring more
/// than `max_bytes` before the body is read. Bodies without the header are
/// capped while buffering by `DefaultBodyLimit`.
pub async fn body_size_limit(
    State(max_bytes): State<usize>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    if let Some(length) = declared_length(&request) {
        if length > max_bytes {
            warn!(
                "Request body too large: {} bytes (max: {})",
                length, max_bytes
            );
            return Err(ApiError::PayloadTooLarge);
        }
    }

    Ok(next.run(request).await)
}

fn declared_length(request: &Request) -> Option<usize> {
    request
        .headers()
        .get("content-length")?
        .to_str()
        .ok()?
        .parse()
        .ok()
}

/// Request deadline middleware
///
/// Drops the in-flight handler once `deadline` passes and answers with a
/// JSON 408.
pub async fn request_timeout(
    State(deadline): State<Duration>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    match tokio::time::timeout(deadline, next.run(request)).await {
        Ok(response) => Ok(response),
        Err(_) => {
            warn!("Request timed out after {:?}: {} {}", deadline, method, path);
            Err(ApiError::Timeout)
        }
    }
}

/// Turn a handler panic into a JSON 500 response
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    error!("Handler panicked: {}", detail);
    ApiError::Internal(detail).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::Router;
    use tower::ServiceExt;

    fn deadline_router(handler_delay: Duration) -> Router {
        Router::new()
            .route(
                "/",
                get(move || async move {
                    tokio::time::sleep(handler_delay).await;
                    "done"
                }),
            )
            .layer(axum::middleware::from_fn_with_state(
                Duration::from_millis(50),
                request_timeout,
            ))
    }

    async fn status_of(router: Router) -> StatusCode {
        let request = axum::http::Request::builder()
            .uri("/")
            .body(Body::empty())
            .unwrap();
        router.oneshot(request).await.unwrap().status()
    }

    #[tokio::test]
    async fn test_request_timeout_expires() {
        let status = status_of(deadline_router(Duration::from_millis(500))).await;
        assert_eq!(status, StatusCode::REQUEST_TIMEOUT);
    }

    #[tokio::test]
    async fn test_request_within_deadline() {
        let status = status_of(deadline_router(Duration::ZERO)).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[test]
    fn test_panic_response_with_str() {
        let response = panic_response(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_panic_response_with_string() {
        let response = panic_response(Box::new(String::from("boom")));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_declared_length() {
        let request = axum::http::Request::builder()
            .header("content-length", "42")
            .body(axum::body::Body::empty())
            .unwrap();
        assert_eq!(declared_length(&request), Some(42));

        let request = axum::http::Request::builder()
            .body(axum::body::Body::empty())
            .unwrap();
        assert_eq!(declared_length(&request), None);
    }
}
