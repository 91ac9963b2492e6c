//! Development-time tracing for debugging mailroom.
//!
//! Diagnostics go to stderr so they never interleave with the interactive
//! menu on stdout. Reports and letters are product output and are unaffected
//! by `RUST_LOG`.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset or invalid.
const DEFAULT_FILTER: &str = "warn";

/// Initialize tracing subscriber for development logging.
///
/// Output: stderr, compact format without timestamps.
///
/// # Example
/// ```bash
/// RUST_LOG=mailroom=debug cargo run -- --letters-dir ./letters
/// ```
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time()
                .compact(),
        )
        .init();
}
