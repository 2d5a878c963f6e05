//! Text-completion oracles behind a single trait.
//!
//! - [`oracle::TextOracle`]: prompt in, candidate texts out.
//! - [`services`]: Gemini and Ollama clients.
//! - [`config`]: env-driven [`config::llm_model_config::LlmModelConfig`].
//! - [`health_service`]: non-failing reachability probes.
//! - [`telemetry`]: tracing-subscriber layer and filter.

pub mod config;
pub mod error_handler;
pub mod health_service;
pub mod oracle;
pub mod services;
pub mod telemetry;

pub use config::{
    default_config::config_from_env, llm_model_config::LlmModelConfig, llm_provider::LlmProvider,
};
pub use error_handler::AiLlmError;
pub use oracle::{OracleFuture, OracleReply, TextOracle, build_oracle};
