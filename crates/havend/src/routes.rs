//! API routes for havend
//!
//! GET  /health         - liveness and version
//! POST /analyze        - classify one text
//! POST /batch-analyze  - classify a list of texts

use crate::error::ApiError;
use crate::extract::JsonBody;
use crate::server::AppState;
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use haven_common::{
    AnalysisResult, AnalyzeRequest, BatchAnalysis, BatchAnalyzeRequest, ClassifyError,
    HealthResponse,
};
use std::sync::Arc;
use tracing::error;

type AppStateArc = Arc<AppState>;

// ============================================================================
// Health Routes
// ============================================================================

pub fn health_routes() -> Router<AppStateArc> {
    Router::new().route("/health", get(health_check).fallback(method_not_allowed))
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy(env!("CARGO_PKG_VERSION")))
}

// ============================================================================
// Analysis Routes
// ============================================================================

pub fn analysis_routes() -> Router<AppStateArc> {
    Router::new()
        .route(
            "/analyze",
            post(analyze_sentiment).fallback(method_not_allowed),
        )
        .route(
            "/batch-analyze",
            post(batch_analyze).fallback(method_not_allowed),
        )
}

async fn analyze_sentiment(
    State(state): State<AppStateArc>,
    JsonBody(req): JsonBody<AnalyzeRequest>,
) -> Result<Json<AnalysisResult>, ApiError> {
    let input = req.text.ok_or_else(ClassifyError::missing_text)?;

    let normalizer = state.normalizer.clone();
    let result = run_blocking(move || normalizer.classify_input(&input))
        .await
        .map_err(|e| {
            if !e.is_validation() {
                error!("Error analyzing sentiment: {}", e);
            }
            e
        })?;

    Ok(Json(result))
}

async fn batch_analyze(
    State(state): State<AppStateArc>,
    JsonBody(req): JsonBody<BatchAnalyzeRequest>,
) -> Result<Json<BatchAnalysis>, ApiError> {
    let texts = req.texts.ok_or_else(ClassifyError::missing_texts)?;

    let normalizer = state.normalizer.clone();
    let batch = run_blocking(move || normalizer.classify_batch(&texts))
        .await
        .map_err(|e| {
            if !e.is_validation() {
                error!("Error in batch analysis: {}", e);
            }
            e
        })?;

    Ok(Json(batch))
}

/// Classification is CPU-bound; keep it off the async workers
async fn run_blocking<T, F>(work: F) -> Result<T, ClassifyError>
where
    F: FnOnce() -> Result<T, ClassifyError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|e| ClassifyError::Internal(format!("classification task failed: {}", e)))?
}

// ============================================================================
// Fallbacks
// ============================================================================

/// Any path without a route
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}

/// Known path, unsupported method
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
