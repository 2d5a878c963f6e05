//! Canonical analysis result.
//!
//! The oracle's object is kept as-is (key order included) and relayed
//! verbatim; typed accessors give read-only views for server-side use.
//!
//! Schema: `timeComplexity` and `spaceComplexity` are requested as
//! `{bestCase, averageCase, worstCase}` objects and `summary` as a string.
//! `spaceComplexity` is also accepted as a single string, since the object
//! is never coerced.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::AnalyzeError;

pub const TIME_COMPLEXITY: &str = "timeComplexity";
pub const SPACE_COMPLEXITY: &str = "spaceComplexity";
pub const SUMMARY: &str = "summary";

/// A validated analysis: a JSON object with both complexity fields present.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AnalysisResult(Map<String, Value>);

/// Per-case complexity triple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseComplexity {
    pub best_case: String,
    pub average_case: String,
    pub worst_case: String,
}

/// Either a single bound or a best/average/worst triple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ComplexityValue {
    Overall(String),
    Cases(CaseComplexity),
}

impl ComplexityValue {
    pub fn worst_case(&self) -> &str {
        match self {
            ComplexityValue::Overall(s) => s,
            ComplexityValue::Cases(c) => &c.worst_case,
        }
    }
}

impl AnalysisResult {
    /// Typed view of `timeComplexity`, if it has a recognised shape.
    pub fn time_complexity(&self) -> Option<ComplexityValue> {
        self.typed(TIME_COMPLEXITY)
    }

    /// Typed view of `spaceComplexity`, if it has a recognised shape.
    pub fn space_complexity(&self) -> Option<ComplexityValue> {
        self.typed(SPACE_COMPLEXITY)
    }

    pub fn summary(&self) -> Option<&str> {
        self.0.get(SUMMARY).and_then(Value::as_str)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }

    fn typed(&self, key: &str) -> Option<ComplexityValue> {
        self.0
            .get(key)
            .and_then(|v| serde_json::from_value(v.clone()).ok())
    }
}

impl TryFrom<Value> for AnalysisResult {
    type Error = AnalyzeError;

    /// Accepts any object carrying both complexity keys; values are not coerced.
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let Value::Object(map) = value else {
            return Err(AnalyzeError::MissingFields(TIME_COMPLEXITY));
        };
        for key in [TIME_COMPLEXITY, SPACE_COMPLEXITY] {
            if !map.contains_key(key) {
                return Err(AnalyzeError::MissingFields(key));
            }
        }
        Ok(Self(map))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn requires_both_complexity_keys() {
        let err = AnalysisResult::try_from(json!({"timeComplexity": "O(n)"})).unwrap_err();
        assert!(matches!(err, AnalyzeError::MissingFields(SPACE_COMPLEXITY)));

        let err = AnalysisResult::try_from(json!({"spaceComplexity": "O(1)"})).unwrap_err();
        assert!(matches!(err, AnalyzeError::MissingFields(TIME_COMPLEXITY)));

        assert!(AnalysisResult::try_from(json!(["timeComplexity", "spaceComplexity"])).is_err());
    }

    #[test]
    fn typed_views_accept_both_space_shapes() {
        let scalar = AnalysisResult::try_from(json!({
            "timeComplexity": {"bestCase": "O(1)", "averageCase": "O(n)", "worstCase": "O(n^2)"},
            "spaceComplexity": "O(1)",
            "summary": "Nested loop."
        }))
        .unwrap();
        assert_eq!(scalar.time_complexity().unwrap().worst_case(), "O(n^2)");
        assert_eq!(
            scalar.space_complexity(),
            Some(ComplexityValue::Overall("O(1)".into()))
        );
        assert_eq!(scalar.summary(), Some("Nested loop."));

        let cases = AnalysisResult::try_from(json!({
            "timeComplexity": "O(n)",
            "spaceComplexity": {"bestCase": "O(1)", "averageCase": "O(n)", "worstCase": "O(n)"}
        }))
        .unwrap();
        assert_eq!(cases.space_complexity().unwrap().worst_case(), "O(n)");
        assert_eq!(cases.summary(), None);
    }

    #[test]
    fn serializes_verbatim_with_key_order() {
        let text = r#"{"summary":"s","spaceComplexity":"O(1)","timeComplexity":{"worstCase":"O(n)"},"extra":[1]}"#;
        let value: Value = serde_json::from_str(text).unwrap();
        let result = AnalysisResult::try_from(value).unwrap();
        assert_eq!(serde_json::to_string(&result).unwrap(), text);
        assert!(result.time_complexity().is_none());
    }
}
