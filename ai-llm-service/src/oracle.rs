//! Provider-neutral text-completion interface.
//!
//! The rest of the workspace only sees [`TextOracle`]: a prompt goes in, an
//! [`OracleReply`] with zero or more candidate texts comes out. Concrete
//! clients live in [`crate::services`]; [`build_oracle`] picks one from a
//! [`LlmModelConfig`].

use std::{future::Future, pin::Pin, sync::Arc};

use crate::{
    config::{llm_model_config::LlmModelConfig, llm_provider::LlmProvider},
    error_handler::AiLlmError,
    services::{gemini_service::GeminiService, ollama_service::OllamaService},
};

/// Future returned by [`TextOracle::complete`].
pub type OracleFuture<'a> = Pin<Box<dyn Future<Output = Result<OracleReply, AiLlmError>> + Send + 'a>>;

/// Black-box text generator.
///
/// Implement this trait to plug in another backend or a test stub.
pub trait TextOracle: Send + Sync {
    /// Sends `prompt` once and returns every candidate the backend produced.
    fn complete<'a>(&'a self, prompt: &'a str) -> OracleFuture<'a>;
}

/// Candidate texts of one completion call, in backend order.
///
/// Clients stop at the first candidate without text, so `candidates[0]` is
/// always the backend's first candidate and an empty list means it produced
/// nothing usable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OracleReply {
    pub candidates: Vec<String>,
}

impl OracleReply {
    pub fn new(candidates: Vec<String>) -> Self {
        Self { candidates }
    }

    /// Reply with exactly one candidate.
    pub fn single(text: impl Into<String>) -> Self {
        Self {
            candidates: vec![text.into()],
        }
    }

    /// Reply without candidates.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn first(&self) -> Option<&str> {
        self.candidates.first().map(String::as_str)
    }
}

/// Builds the client matching `cfg.provider`.
///
/// # Errors
/// Propagates constructor validation errors of the selected client.
pub fn build_oracle(cfg: LlmModelConfig) -> Result<Arc<dyn TextOracle>, AiLlmError> {
    let oracle: Arc<dyn TextOracle> = match cfg.provider {
        LlmProvider::Gemini => Arc::new(GeminiService::new(cfg)?),
        LlmProvider::Ollama => Arc::new(OllamaService::new(cfg)?),
    };
    Ok(oracle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_candidate_wins() {
        let reply = OracleReply::new(vec!["a".into(), "b".into()]);
        assert_eq!(reply.first(), Some("a"));
        assert_eq!(OracleReply::empty().first(), None);
    }
}
