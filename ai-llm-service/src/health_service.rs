//! Health probes for the configured oracle.
//!
//! - Gemini: `GET {endpoint}/models/{model}` with `x-goog-api-key` (model metadata lookup)
//! - Ollama: `GET {endpoint}/api/tags` (best-effort model existence check)
//!
//! [`HealthService::check`] never fails: errors become `ok = false`.
//! The returned [`HealthStatus`] is JSON-serializable for a `/health` route.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::{
    config::{llm_model_config::LlmModelConfig, llm_provider::LlmProvider},
    error_handler::{AiLlmError, HealthError, HttpError, is_http_url, make_snippet},
    services::gemini_service::API_KEY_HEADER,
};

/// A serializable health snapshot for the oracle.
#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    pub provider: String,
    pub endpoint: String,
    pub model: String,
    pub ok: bool,
    pub latency_ms: u128,
    pub message: String,
}

impl HealthStatus {
    fn new(cfg: &LlmModelConfig, ok: bool, latency_ms: u128, message: impl Into<String>) -> Self {
        Self {
            provider: cfg.provider.to_string(),
            endpoint: cfg.endpoint.clone(),
            model: cfg.model.clone(),
            ok,
            latency_ms,
            message: message.into(),
        }
    }
}

/// Health checker with its own short-timeout HTTP client.
pub struct HealthService {
    client: reqwest::Client,
}

impl HealthService {
    /// Creates a health service whose probes time out after `timeout_secs`
    /// (default 10).
    pub fn new(timeout_secs: Option<u64>) -> Result<Self, AiLlmError> {
        let timeout = Duration::from_secs(timeout_secs.unwrap_or(10));
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    /// Probes the oracle described by `cfg`.
    pub async fn check(&self, cfg: &LlmModelConfig) -> HealthStatus {
        if !is_http_url(&cfg.endpoint) {
            warn!(provider = %cfg.provider, endpoint = %cfg.endpoint, "invalid endpoint");
            return HealthStatus::new(cfg, false, 0, "endpoint is empty or missing http/https");
        }

        let start = Instant::now();
        let result = match cfg.provider {
            LlmProvider::Gemini => self.try_probe_gemini(cfg).await,
            LlmProvider::Ollama => self.try_probe_ollama(cfg).await,
        };
        let latency = start.elapsed().as_millis();

        match result {
            Ok((ok, message)) => {
                info!(provider = %cfg.provider, model = %cfg.model, ok, latency_ms = latency, "health probe completed");
                HealthStatus::new(cfg, ok, latency, message)
            }
            Err(err) => {
                warn!(provider = %cfg.provider, model = %cfg.model, error = %err, latency_ms = latency, "health probe failed");
                HealthStatus::new(cfg, false, latency, err.to_string())
            }
        }
    }

    async fn try_probe_gemini(&self, cfg: &LlmModelConfig) -> Result<(bool, String), AiLlmError> {
        let key = cfg
            .api_key
            .as_deref()
            .ok_or_else(|| HealthError::Misconfigured("missing Gemini API key".into()))?;
        let url = format!("{}/models/{}", cfg.base_url(), cfg.model);

        debug!("GET {}", url);
        let resp = self
            .client
            .get(&url)
            .header(API_KEY_HEADER, key)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let snippet = make_snippet(&resp.text().await.unwrap_or_default());
            return Err(HealthError::HttpStatus(HttpError { status, url, snippet }).into());
        }

        Ok((true, "Gemini is reachable; model metadata found".into()))
    }

    async fn try_probe_ollama(&self, cfg: &LlmModelConfig) -> Result<(bool, String), AiLlmError> {
        let url = format!("{}/api/tags", cfg.base_url());

        debug!("GET {}", url);
        let resp = self.client.get(&url).send().await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let snippet = make_snippet(&resp.text().await.unwrap_or_default());
            return Err(HealthError::HttpStatus(HttpError { status, url, snippet }).into());
        }

        // Expected minimal JSON: { "models": [ { "name": "<model>" }, ... ] }
        #[derive(Deserialize)]
        struct Tag {
            name: String,
        }
        #[derive(Deserialize)]
        struct Tags {
            models: Option<Vec<Tag>>,
        }

        match resp.json::<Tags>().await {
            Ok(Tags {
                models: Some(models),
            }) => {
                if models.iter().any(|m| m.name == cfg.model) {
                    Ok((true, "Ollama is healthy; model is available".into()))
                } else {
                    Ok((false, "Ollama is up, but model not found in /api/tags".into()))
                }
            }
            Ok(Tags { models: None }) => Ok((
                true,
                "Ollama is healthy; tags response without `models` field".into(),
            )),
            Err(e) => Ok((
                true,
                format!("Ollama is reachable; failed to decode /api/tags: {e}"),
            )),
        }
    }
}
