//! Typed error for the analyzer crate.

use ai_llm_service::AiLlmError;
use thiserror::Error;

pub const NO_CODE_MESSAGE: &str = "No code provided.";
pub const COULD_NOT_ANALYZE_MESSAGE: &str = "Could not analyze the code.";
pub const INVALID_JSON_MESSAGE: &str = "Invalid JSON response from the model.";
pub const MISSING_FIELDS_MESSAGE: &str = "Missing expected fields in the response.";

#[derive(Debug, Error)]
pub enum AnalyzeError {
    /// The submitted snippet is empty or whitespace only.
    #[error("no code provided")]
    EmptyCode,

    /// The oracle answered without any usable candidate.
    #[error("oracle returned no candidate")]
    NoCandidate,

    /// The oracle call itself failed (transport, HTTP status, decoding).
    #[error("oracle call failed: {0}")]
    Oracle(#[from] AiLlmError),

    /// The candidate text is not JSON, with or without fences.
    #[error("oracle reply is not valid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    /// The reply parsed but lacks a required top-level field.
    #[error("oracle reply lacks required field `{0}`")]
    MissingFields(&'static str),
}

impl AnalyzeError {
    /// Fixed caller-facing message; internal details stay in the logs.
    pub fn public_message(&self) -> &'static str {
        match self {
            AnalyzeError::EmptyCode => NO_CODE_MESSAGE,
            AnalyzeError::NoCandidate | AnalyzeError::Oracle(_) => COULD_NOT_ANALYZE_MESSAGE,
            AnalyzeError::InvalidJson(_) => INVALID_JSON_MESSAGE,
            AnalyzeError::MissingFields(_) => MISSING_FIELDS_MESSAGE,
        }
    }

    /// True when the caller sent bad input, false for oracle-side failures.
    pub fn is_client_error(&self) -> bool {
        matches!(self, AnalyzeError::EmptyCode)
    }
}
