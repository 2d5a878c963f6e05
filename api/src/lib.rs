//! HTTP surface: `/` (form page), `/analyze` and `/health`.

use std::sync::Arc;

pub mod core;
pub mod error_handler;
mod routes;

use ai_llm_service::LlmModelConfig;
use axum::{
    Router,
    routing::{get, post},
};
use tokio::signal;
use tracing::{info, warn};

use crate::{
    core::app_state::{AppState, api_address_from_env},
    error_handler::{AppError, AppResult},
    routes::{analyze::analyze_route::analyze, health_route::health, index_route::index},
};

/// Builds the application router over shared state.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/analyze", post(analyze))
        .route("/health", get(health))
        .with_state(state)
}

/// Builds state from `llm_cfg`, binds `API_ADDRESS` and serves until Ctrl+C.
pub async fn start(llm_cfg: LlmModelConfig) -> AppResult<()> {
    let host_url = api_address_from_env();
    let state = Arc::new(AppState::from_llm_config(llm_cfg)?);

    // Bind to address
    let listener = tokio::net::TcpListener::bind(&host_url)
        .await
        .map_err(|source| AppError::Bind {
            addr: host_url.clone(),
            source,
        })?;

    info!(address = %host_url, "listening");

    // Start server with graceful shutdown on Ctrl+C
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Server)?;

    info!("server stopped");
    Ok(())
}

/// Returns a future that resolves when Ctrl+C is pressed
async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
