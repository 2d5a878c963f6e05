//! Oracle configuration loaded from environment variables.
//!
//! # Environment variables
//!
//! Common:
//! - `LLM_PROVIDER`     = `gemini` (default) or `ollama`
//! - `LLM_MAX_TOKENS`   = optional max output tokens (u32)
//! - `LLM_TEMPERATURE`  = optional sampling temperature (0.0..=2.0)
//! - `LLM_TIMEOUT_SECS` = optional request timeout; unset keeps the client default
//!
//! Gemini:
//! - `GEMINI_API_KEY`  (mandatory)
//! - `GEMINI_MODEL`    (default `gemini-1.5-flash`)
//! - `GEMINI_ENDPOINT` (default `https://generativelanguage.googleapis.com/v1beta`)
//!
//! Ollama:
//! - `OLLAMA_URL` or `OLLAMA_PORT` (mandatory)
//! - `OLLAMA_MODEL`                (mandatory)

use crate::{
    config::{llm_model_config::LlmModelConfig, llm_provider::LlmProvider},
    error_handler::{
        AiLlmError, ConfigError, must_var, opt_number, opt_var, validate_http_endpoint,
        validate_range_f32,
    },
};

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Reads the oracle config from the process environment.
pub fn config_from_env() -> Result<LlmModelConfig, AiLlmError> {
    config_from_vars(&|name: &str| std::env::var(name).ok())
}

/// Builds the oracle config from an arbitrary variable source.
///
/// # Errors
/// - [`ConfigError::UnsupportedProvider`] for an unknown `LLM_PROVIDER`
/// - [`ConfigError::MissingVar`] when a provider's mandatory variable is absent
/// - [`ConfigError::InvalidNumber`] / [`ConfigError::OutOfRange`] for bad knobs
pub fn config_from_vars<F>(get: &F) -> Result<LlmModelConfig, AiLlmError>
where
    F: Fn(&str) -> Option<String>,
{
    let provider = match opt_var(get, "LLM_PROVIDER") {
        Some(raw) => raw.parse::<LlmProvider>()?,
        None => LlmProvider::default(),
    };

    let mut cfg = match provider {
        LlmProvider::Gemini => gemini_config(get)?,
        LlmProvider::Ollama => ollama_config(get)?,
    };

    cfg.max_tokens = opt_number(get, "LLM_MAX_TOKENS", "expected u32")?;
    cfg.timeout_secs = opt_number(get, "LLM_TIMEOUT_SECS", "expected u64 seconds")?;
    cfg.temperature = opt_number(get, "LLM_TEMPERATURE", "expected f32")?;
    if let Some(t) = cfg.temperature {
        validate_range_f32("LLM_TEMPERATURE", t, 0.0, 2.0)?;
    }

    Ok(cfg)
}

fn gemini_config<F>(get: &F) -> Result<LlmModelConfig, AiLlmError>
where
    F: Fn(&str) -> Option<String>,
{
    let api_key = must_var(get, "GEMINI_API_KEY")?;
    let model = opt_var(get, "GEMINI_MODEL").unwrap_or_else(|| DEFAULT_GEMINI_MODEL.into());
    let endpoint =
        opt_var(get, "GEMINI_ENDPOINT").unwrap_or_else(|| DEFAULT_GEMINI_ENDPOINT.into());
    validate_http_endpoint("GEMINI_ENDPOINT", &endpoint)?;

    Ok(LlmModelConfig {
        provider: LlmProvider::Gemini,
        model,
        endpoint,
        api_key: Some(api_key),
        max_tokens: None,
        temperature: None,
        top_p: None,
        timeout_secs: None,
    })
}

/// Precedence: `OLLAMA_URL`, then `OLLAMA_PORT` → `http://localhost:{port}`.
fn ollama_endpoint<F>(get: &F) -> Result<String, AiLlmError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = opt_var(get, "OLLAMA_URL") {
        validate_http_endpoint("OLLAMA_URL", &url)?;
        return Ok(url);
    }
    if let Some(port) = opt_number::<_, u16>(get, "OLLAMA_PORT", "expected u16 (1..=65535)")? {
        return Ok(format!("http://localhost:{port}"));
    }
    Err(ConfigError::MissingVar("OLLAMA_URL or OLLAMA_PORT").into())
}

fn ollama_config<F>(get: &F) -> Result<LlmModelConfig, AiLlmError>
where
    F: Fn(&str) -> Option<String>,
{
    let endpoint = ollama_endpoint(get)?;
    let model = must_var(get, "OLLAMA_MODEL")?;

    Ok(LlmModelConfig {
        provider: LlmProvider::Ollama,
        model,
        endpoint,
        api_key: None,
        max_tokens: None,
        temperature: None,
        top_p: None,
        timeout_secs: None,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn from(pairs: &[(&str, &str)]) -> Result<LlmModelConfig, AiLlmError> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        config_from_vars(&|k: &str| map.get(k).cloned())
    }

    #[test]
    fn gemini_is_default_and_needs_a_key() {
        let err = from(&[]).unwrap_err();
        assert!(matches!(
            err,
            AiLlmError::Config(ConfigError::MissingVar("GEMINI_API_KEY"))
        ));

        let cfg = from(&[("GEMINI_API_KEY", "k")]).unwrap();
        assert_eq!(cfg.provider, LlmProvider::Gemini);
        assert_eq!(cfg.model, DEFAULT_GEMINI_MODEL);
        assert_eq!(cfg.endpoint, DEFAULT_GEMINI_ENDPOINT);
        assert_eq!(cfg.api_key.as_deref(), Some("k"));
        assert_eq!(cfg.timeout_secs, None);
    }

    #[test]
    fn ollama_uses_port_fallback() {
        let cfg = from(&[
            ("LLM_PROVIDER", "ollama"),
            ("OLLAMA_PORT", "11434"),
            ("OLLAMA_MODEL", "qwen3:14b"),
            ("LLM_TIMEOUT_SECS", "90"),
        ])
        .unwrap();
        assert_eq!(cfg.endpoint, "http://localhost:11434");
        assert_eq!(cfg.timeout_secs, Some(90));
        assert!(cfg.api_key.is_none());
    }

    #[test]
    fn rejects_bad_knobs() {
        assert!(from(&[("GEMINI_API_KEY", "k"), ("LLM_TEMPERATURE", "7.5")]).is_err());
        assert!(from(&[("GEMINI_API_KEY", "k"), ("LLM_MAX_TOKENS", "-1")]).is_err());
        assert!(from(&[("GEMINI_API_KEY", "k"), ("GEMINI_ENDPOINT", "ftp://x")]).is_err());
        assert!(from(&[("LLM_PROVIDER", "mystery")]).is_err());
    }
}
