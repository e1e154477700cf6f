use anyhow::Context;
use tracing_subscriber::{
    EnvFilter, Registry, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt,
};

/// Handle for replacing the log filter once settings are known.
pub type FilterHandle = reload::Handle<EnvFilter, Registry>;

/// Filter used until the configured level is applied.
const STARTUP_FILTER: &str = "warn";

/// ## Summary
/// Installs the global subscriber. Logs go to stderr so stdout carries only the report.
///
/// ## Errors
/// Returns an error if a global subscriber is already set.
pub fn init() -> anyhow::Result<FilterHandle> {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new(STARTUP_FILTER));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(filter_handle)
}

/// ## Summary
/// Switches the active filter to `level`, any `EnvFilter` directive string.
/// An invalid directive keeps the current filter.
pub fn apply_level(handle: &FilterHandle, level: &str) {
    match EnvFilter::try_new(level) {
        Ok(filter) => {
            if let Err(e) = handle.modify(|current| *current = filter) {
                tracing::warn!(error = %e, "Failed to update log filter");
            }
        }
        Err(e) => {
            tracing::warn!(level = %level, error = %e, "Invalid log level, keeping current filter");
        }
    }
}

/// Maps `-v` repetitions onto a level; `None` keeps the configured one.
#[must_use]
pub fn verbosity_level(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}
