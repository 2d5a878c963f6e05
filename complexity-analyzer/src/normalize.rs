//! Turns a raw oracle reply into a validated [`AnalysisResult`].

use ai_llm_service::OracleReply;
use tracing::warn;

use crate::{error::AnalyzeError, extract::extract_json, model::AnalysisResult};

/// Upper bound of raw model text copied into logs.
const LOG_SNIPPET_CHARS: usize = 2000;

/// First candidate → JSON extraction → required-field check.
///
/// # Errors
/// - [`AnalyzeError::NoCandidate`] when the reply has no candidate
/// - [`AnalyzeError::InvalidJson`] when the text is not JSON after fence stripping
/// - [`AnalyzeError::MissingFields`] when a complexity field is absent
pub fn normalize_reply(reply: &OracleReply) -> Result<AnalysisResult, AnalyzeError> {
    let raw = reply.first().ok_or(AnalyzeError::NoCandidate)?;

    let value = extract_json(raw).map_err(|e| {
        warn!(
            error = %e,
            raw = %log_snippet(raw),
            "model reply is not valid JSON"
        );
        AnalyzeError::InvalidJson(e)
    })?;

    AnalysisResult::try_from(value).inspect_err(|e| {
        warn!(error = %e, raw = %log_snippet(raw), "model reply lacks expected fields");
    })
}

fn log_snippet(raw: &str) -> String {
    let mut s: String = raw.chars().take(LOG_SNIPPET_CHARS).collect();
    if raw.chars().count() > LOG_SNIPPET_CHARS {
        s.push_str("...");
    }
    s
}
