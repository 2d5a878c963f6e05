//! JSON extraction from possibly fenced model text.

use serde_json::Value;

const JSON_FENCE: &str = "```json";
const FENCE: &str = "```";

/// Parses `text` as JSON, tolerating markdown fences around it.
///
/// 1. The trimmed text is parsed as-is.
/// 2. If that fails, every literal "```json" and "```" marker is removed
///    and the trimmed remainder is parsed.
///
/// The error of the last attempt is returned when neither parses.
pub fn extract_json(text: &str) -> Result<Value, serde_json::Error> {
    let trimmed = text.trim();
    match serde_json::from_str(trimmed) {
        Ok(value) => Ok(value),
        Err(raw_err) => {
            if !trimmed.contains(FENCE) {
                return Err(raw_err);
            }
            serde_json::from_str(strip_fence_markers(trimmed).trim())
        }
    }
}

/// Removes fence markers wherever they appear. Textual, not a markdown parse.
pub fn strip_fence_markers(text: &str) -> String {
    text.replace(JSON_FENCE, "").replace(FENCE, "")
}
