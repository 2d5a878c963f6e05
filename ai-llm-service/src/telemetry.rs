//! Logging setup shared by the binary and integration tests.

use std::io::{self, IsTerminal};

use tracing_subscriber::filter::Directive;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer, fmt};

/// Workspace crates whose events are always kept at `debug` when the
/// default filter is used.
const WORKSPACE_TARGETS: [&str; 3] = ["ai_llm_service", "complexity_analyzer", "api"];

/// RFC3339 UTC timer implemented via `chrono`.
/// Example output: `2025-09-12T10:20:30Z`
#[derive(Clone, Debug, Default)]
struct ChronoRfc3339Utc;

impl FormatTime for ChronoRfc3339Utc {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        let now = chrono::Utc::now();
        w.write_str(&now.to_rfc3339_opts(chrono::SecondsFormat::Secs, true))
    }
}

/// Compact single-line formatting layer.
///
/// - RFC3339 UTC timestamps
/// - `file:line` and target
/// - span close events (durations of instrumented calls)
/// - ANSI colors only when stdout is a terminal
pub fn layer<S>() -> impl Layer<S> + Send + Sync
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    fmt::layer()
        .with_timer(ChronoRfc3339Utc)
        .with_level(true)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(io::stdout().is_terminal())
        .with_span_events(fmt::format::FmtSpan::CLOSE)
        .event_format(fmt::format().compact().with_source_location(true))
}

/// `RUST_LOG` if set, otherwise `default` plus `debug` for workspace crates.
pub fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(default))
}

fn default_filter(default: &str) -> EnvFilter {
    WORKSPACE_TARGETS
        .iter()
        .filter_map(|t| format!("{t}=debug").parse::<Directive>().ok())
        .fold(EnvFilter::new(default), |f, d| f.add_directive(d))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_mentions_workspace_crates() {
        let rendered = default_filter("info").to_string();
        for t in WORKSPACE_TARGETS {
            assert!(rendered.contains(&format!("{t}=debug")), "{rendered}");
        }
    }
}
