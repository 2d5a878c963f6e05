pub mod gemini_service;
pub mod ollama_service;

use std::time::Duration;

/// Shared HTTP client builder for provider clients.
///
/// A timeout is only installed when configured; otherwise reqwest's
/// defaults apply.
pub(crate) fn http_client(timeout_secs: Option<u64>) -> Result<reqwest::Client, reqwest::Error> {
    let mut builder = reqwest::Client::builder().gzip(true);
    if let Some(secs) = timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    builder.build()
}
