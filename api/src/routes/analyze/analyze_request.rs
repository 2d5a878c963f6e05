use serde::Deserialize;
use serde_json::Value;

/// Request payload for /analyze.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// Source snippet to analyze. Anything but a string is treated as absent.
    #[serde(default)]
    pub code: Option<Value>,
}

impl AnalyzeRequest {
    /// The snippet, if `code` is a string.
    pub fn code(&self) -> Option<&str> {
        self.code.as_ref().and_then(Value::as_str)
    }
}
