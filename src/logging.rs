//! Diagnostic logging setup.
//!
//! Library code emits `tracing` events; the binary installs a subscriber that
//! writes them to stderr so stdout stays clean for listing and JSON output.

use tracing_subscriber::EnvFilter;

/// Pick the default filter directive for the given verbosity.
#[must_use]
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "warn" }
}

/// Install the global stderr subscriber.
///
/// `RUST_LOG` takes precedence when set. Calling this more than once is a no-op.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
