use ai_llm_service::AiLlmError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use complexity_analyzer::{AnalyzeError, NO_CODE_MESSAGE};
use serde::Serialize;
use thiserror::Error;

/// Public application error type.
#[derive(Debug, Error)]
pub enum AppError {
    // --- Boot / config ---
    #[error(transparent)]
    Llm(#[from] AiLlmError),

    // --- IO / network / server ---
    #[error("failed to bind listener on {addr}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server error")]
    Server(#[source] std::io::Error),

    // --- Request ---
    /// Body missing, not JSON, or without a string `code` field.
    #[error("no code provided")]
    NoCode,

    #[error(transparent)]
    Analyze(#[from] AnalyzeError),
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NoCode => StatusCode::BAD_REQUEST,
            AppError::Analyze(e) if e.is_client_error() => StatusCode::BAD_REQUEST,
            AppError::Analyze(_) => StatusCode::INTERNAL_SERVER_ERROR,

            // startup-only
            AppError::Llm(_) | AppError::Bind { .. } | AppError::Server(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message placed in the response body. Oracle details never leak here.
    fn public_message(&self) -> String {
        match self {
            AppError::NoCode => NO_CODE_MESSAGE.to_string(),
            AppError::Analyze(e) => e.public_message().to_string(),
            other => other.to_string(),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.public_message(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}

/// Handy result alias used across handlers.
pub type AppResult<T> = Result<T, AppError>;
