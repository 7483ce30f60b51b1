//! Tracing subscriber initialization.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber: JSON lines on stdout, filtered by
/// `RUST_LOG` (default `info`).
///
/// Errors from a second install are swallowed so tests that each call
/// [`crate::init`] can share one process.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}
