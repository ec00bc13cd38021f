use tracing::{Level, Span};

use super::TraceId;

/// Root span for one process run (one feed, one engine).
pub fn run_span(name: &'static str, trace_id: &TraceId) -> Span {
    tracing::span!(
        Level::INFO,
        "run",
        name = %name,
        trace_id = %trace_id.as_str()
    )
}

/// Child span for a quote producer; inherits the run's trace id.
pub fn feed_span(instruments: u64) -> Span {
    tracing::span!(Level::INFO, "feed", instruments = instruments)
}
