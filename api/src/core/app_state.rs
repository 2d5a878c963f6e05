use ai_llm_service::{
    AiLlmError, LlmModelConfig, build_oracle, health_service::HealthService,
};
use complexity_analyzer::ComplexityAnalyzer;

/// Default listen address when `API_ADDRESS` is unset.
pub const DEFAULT_API_ADDRESS: &str = "127.0.0.1:5000";

/// Shared state for all HTTP handlers.
pub struct AppState {
    /// Prompt + oracle + normalization pipeline.
    pub analyzer: ComplexityAnalyzer,
    /// Oracle configuration, used by the health probe.
    pub llm_config: LlmModelConfig,
    /// Reachability checker for the oracle.
    pub health: HealthService,
}

impl AppState {
    pub fn new(analyzer: ComplexityAnalyzer, llm_config: LlmModelConfig, health: HealthService) -> Self {
        Self {
            analyzer,
            llm_config,
            health,
        }
    }

    /// Builds the oracle described by `llm_config` and wires it in.
    pub fn from_llm_config(llm_config: LlmModelConfig) -> Result<Self, AiLlmError> {
        let oracle = build_oracle(llm_config.clone())?;
        Ok(Self::new(
            ComplexityAnalyzer::new(oracle),
            llm_config,
            HealthService::new(None)?,
        ))
    }
}

/// `API_ADDRESS` from the environment, or [`DEFAULT_API_ADDRESS`].
pub fn api_address_from_env() -> String {
    std::env::var("API_ADDRESS")
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_API_ADDRESS.into())
}
