use std::{fmt, str::FromStr};

use crate::error_handler::{ConfigError, Provider};

/// Backend used to answer prompts.
///
/// Parsed from `LLM_PROVIDER` (case-insensitive). Gemini is the hosted
/// default; Ollama allows running the same analysis against a local model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LlmProvider {
    /// Google Gemini `generateContent` API.
    #[default]
    Gemini,
    /// Local Ollama runtime.
    Ollama,
}

impl LlmProvider {
    /// Tag used in provider-attributed errors.
    pub fn as_error_tag(self) -> Provider {
        match self {
            LlmProvider::Gemini => Provider::Gemini,
            LlmProvider::Ollama => Provider::Ollama,
        }
    }
}

impl fmt::Display for LlmProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LlmProvider::Gemini => f.write_str("gemini"),
            LlmProvider::Ollama => f.write_str("ollama"),
        }
    }
}

impl FromStr for LlmProvider {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gemini" | "google" => Ok(LlmProvider::Gemini),
            "ollama" => Ok(LlmProvider::Ollama),
            other => Err(ConfigError::UnsupportedProvider(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_providers() {
        assert_eq!("Gemini".parse::<LlmProvider>().unwrap(), LlmProvider::Gemini);
        assert_eq!(" ollama ".parse::<LlmProvider>().unwrap(), LlmProvider::Ollama);
        assert!("chatgpt".parse::<LlmProvider>().is_err());
    }
}
