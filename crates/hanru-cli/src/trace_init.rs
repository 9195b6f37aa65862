use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;

pub const TRACE_FILE: &str = "hanru-trace.jsonl";

/// Install a JSON subscriber writing to `log_dir/hanru-trace.jsonl`.
///
/// Returns `None` if a global subscriber is already set. Keep the guard alive
/// until exit so buffered events are flushed.
pub fn init_tracing(log_dir: &Path) -> Option<WorkerGuard> {
    let file_appender = tracing_appender::rolling::never(log_dir, TRACE_FILE);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .json()
        .with_writer(non_blocking)
        .with_target(true)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("hanru_core=debug,hanru_cli=debug")
            }),
        )
        .try_init()
        .ok()?;

    Some(guard)
}
