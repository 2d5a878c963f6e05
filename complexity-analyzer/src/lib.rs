//! Code complexity analysis on top of a text-completion oracle.
//!
//! Public API: [`ComplexityAnalyzer::analyze`]. It builds a fixed prompt
//! around the snippet, calls the oracle once (no retries), extracts JSON from
//! the first candidate and checks the required fields. Callers get either a
//! validated [`AnalysisResult`] or a classified [`AnalyzeError`] whose
//! [`AnalyzeError::public_message`] is safe to show to clients.

mod error;
pub mod extract;
mod model;
mod normalize;
pub mod prompt;

use std::sync::Arc;

use ai_llm_service::TextOracle;
use tracing::{debug, error, instrument};

pub use error::{
    AnalyzeError, COULD_NOT_ANALYZE_MESSAGE, INVALID_JSON_MESSAGE, MISSING_FIELDS_MESSAGE,
    NO_CODE_MESSAGE,
};
pub use model::{AnalysisResult, CaseComplexity, ComplexityValue};
pub use normalize::normalize_reply;

/// Analyzer bound to one oracle. Cheap to clone.
#[derive(Clone)]
pub struct ComplexityAnalyzer {
    oracle: Arc<dyn TextOracle>,
}

impl ComplexityAnalyzer {
    pub fn new(oracle: Arc<dyn TextOracle>) -> Self {
        Self { oracle }
    }

    /// Analyzes `code` with a single oracle round trip.
    ///
    /// # Errors
    /// - [`AnalyzeError::EmptyCode`] for blank input (the oracle is not called)
    /// - [`AnalyzeError::Oracle`] when the oracle call fails
    /// - any error of [`normalize_reply`]
    #[instrument(skip_all, fields(code_len = code.len()))]
    pub async fn analyze(&self, code: &str) -> Result<AnalysisResult, AnalyzeError> {
        if code.trim().is_empty() {
            return Err(AnalyzeError::EmptyCode);
        }

        let prompt = prompt::build_prompt(code);
        debug!(prompt_len = prompt.len(), "prompt built");

        let reply = self.oracle.complete(&prompt).await.map_err(|e| {
            error!(error = %e, "oracle call failed");
            AnalyzeError::Oracle(e)
        })?;

        normalize_reply(&reply)
    }
}
