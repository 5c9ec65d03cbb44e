//! HTTP server for havend

use crate::config::ServiceConfig;
use crate::middleware;
use crate::routes;
use anyhow::{Context, Result};
use axum::extract::DefaultBodyLimit;
use axum::Router;
use haven_common::Normalizer;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Application state shared across handlers
pub struct AppState {
    /// Normalizer over the process-wide scorer
    pub normalizer: Arc<Normalizer>,
    pub config: ServiceConfig,
}

impl AppState {
    pub fn new(normalizer: Normalizer, config: ServiceConfig) -> Self {
        Self {
            normalizer: Arc::new(normalizer),
            config,
        }
    }
}

/// Build the application router with all layers
pub fn router(state: AppState) -> Router {
    let max_body_bytes = state.config.server.max_body_bytes;
    let request_timeout = state.config.request_timeout();
    let state = Arc::new(state);

    // Only the analysis endpoints take a body
    let analysis = routes::analysis_routes().route_layer(axum::middleware::from_fn_with_state(
        max_body_bytes,
        middleware::body_size_limit,
    ));

    Router::new()
        .merge(routes::health_routes())
        .merge(analysis)
        .fallback(routes::not_found)
        .with_state(state)
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(axum::middleware::from_fn_with_state(
            request_timeout,
            middleware::request_timeout,
        ))
        .layer(CatchPanicLayer::custom(middleware::panic_response))
        .layer(TraceLayer::new_for_http())
}

/// Run the HTTP server until Ctrl-C or SIGTERM
pub async fn run(state: AppState) -> Result<()> {
    let addr = state.config.bind_addr();
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("  Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutting down gracefully");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
