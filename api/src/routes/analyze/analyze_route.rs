//! POST /analyze: asks the oracle for the complexity of a code snippet.

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use complexity_analyzer::AnalysisResult;
use tracing::{debug, info, instrument, warn};

use crate::{
    core::app_state::AppState,
    error_handler::{AppError, AppResult},
    routes::analyze::analyze_request::AnalyzeRequest,
};

/// Handler: POST /analyze
///
/// # Example
/// ```bash
/// curl -X POST http://127.0.0.1:5000/analyze \
///   -H 'content-type: application/json' \
///   -d '{"code":"for i in range(n): print(i)"}'
/// ```
#[instrument(skip_all)]
pub async fn analyze(
    State(state): State<Arc<AppState>>,
    body: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> AppResult<Json<AnalysisResult>> {
    let Json(req) = body.map_err(|rejection| {
        debug!(error = %rejection, "unusable request body");
        AppError::NoCode
    })?;

    let code = req.code().ok_or(AppError::NoCode)?;

    let result = state.analyzer.analyze(code).await.map_err(|e| {
        warn!(error = %e, "analysis failed");
        AppError::from(e)
    })?;

    info!(
        worst_time = ?result.time_complexity().map(|c| c.worst_case().to_string()),
        "analysis completed"
    );

    Ok(Json(result))
}
