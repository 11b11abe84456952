//! Logging setup and structured request logging helpers.

use std::time::Duration;

use numwin_domain::NumWinError;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// Filtering follows `RUST_LOG` (default `info`). Setting
/// `NUMWIN_LOG_FORMAT=json` switches to JSON lines.
///
/// # Errors
/// Returns an error if a global subscriber was already installed.
pub fn init_tracing() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = std::env::var("NUMWIN_LOG_FORMAT")
        .map(|format| format.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(true);
    let result = if json { builder.json().try_init() } else { builder.try_init() };

    result.map_err(|err| anyhow::anyhow!("failed to install tracing subscriber: {err}"))
}

/// Log the outcome of a `/numbers/{selector}` request with structured
/// fields.
///
/// `selector` comes from the request path and is logged as-is; it never
/// carries credentials.
#[inline]
pub fn log_request_outcome(selector: &str, elapsed: Duration, error: Option<&NumWinError>) {
    let duration_ms = elapsed.as_millis() as u64;

    match error {
        None => info!(selector, duration_ms, "numbers_request_success"),
        Some(err) => warn!(
            selector,
            duration_ms,
            error_type = error_label(err),
            error = %err,
            "numbers_request_failure"
        ),
    }
}

/// Convert a `NumWinError` into a stable label suitable for logging.
#[inline]
pub fn error_label(error: &NumWinError) -> &'static str {
    match error {
        NumWinError::InvalidSelector(_) => "invalid_selector",
        NumWinError::Upstream(_) => "upstream",
        NumWinError::Config(_) => "config",
    }
}
