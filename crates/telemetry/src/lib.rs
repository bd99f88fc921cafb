//! Tracing subscriber bootstrap.
//!
//! Everything is written to stderr; stdout is reserved for report output.

use anyhow::{anyhow, Context};
use book_report_kernel::settings::{LogFormat, TelemetrySettings};
use tracing_subscriber::EnvFilter;

const FALLBACK_LEVEL: &str = "warn";

/// Initialize the tracing pipeline described by `settings`.
///
/// `RUST_LOG` takes precedence over the configured level when it is set.
/// An invalid configured level falls back to `warn` and is reported once the
/// subscriber is installed.
pub fn init(settings: &TelemetrySettings) -> anyhow::Result<()> {
    let (filter, rejected) = match EnvFilter::try_from_default_env() {
        Ok(filter) => (filter, None),
        Err(_) => resolve_filter(&settings.log_level),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let installed = match settings.log_format {
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    installed.map_err(|err| anyhow!(err))?;

    if let Some(err) = rejected {
        tracing::warn!(
            target: "book-report-telemetry",
            error = %err,
            fallback = FALLBACK_LEVEL,
            "ignoring configured log level"
        );
    }

    tracing::debug!(
        target: "book-report-telemetry",
        format = ?settings.log_format,
        "telemetry initialized"
    );

    Ok(())
}

/// Build an `EnvFilter` from a configured directive such as `info` or `book_report=debug`.
pub fn filter_for_level(level: &str) -> anyhow::Result<EnvFilter> {
    EnvFilter::try_new(level).with_context(|| format!("invalid log level directive '{}'", level))
}

/// The filter for `level`, or the fallback filter plus the parse error.
pub fn resolve_filter(level: &str) -> (EnvFilter, Option<anyhow::Error>) {
    match filter_for_level(level) {
        Ok(filter) => (filter, None),
        Err(err) => (EnvFilter::new(FALLBACK_LEVEL), Some(err)),
    }
}
