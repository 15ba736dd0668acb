//! Log initialisation for the `referee` binary.
//!
//! Engine and provider events go through `tracing`; this installs a `fmt`
//! subscriber writing to stderr so stdout stays clean for command output.
//! Filtering follows `RUST_LOG`, e.g. `RUST_LOG=referee_engine=debug`.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;

/// Directive used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "warn,referee_cli=info";

/// Initialize logging for the application. A second call is a no-op.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}
