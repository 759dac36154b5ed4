//! Diagnostic logging to stderr.
//!
//! Quiet by default. `--verbose` turns on this crate's debug events
//! (connection, row counts); `RUST_LOG` overrides either default. The
//! verbose report itself is regular stdout output and does not go through here.

use tracing_subscriber::EnvFilter;

const QUIET_FILTER: &str = "warn";
const VERBOSE_FILTER: &str = "warn,gcat=debug";

pub fn default_filter(verbose: bool) -> &'static str {
    if verbose { VERBOSE_FILTER } else { QUIET_FILTER }
}

/// Install the global subscriber. Repeated calls are no-ops.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
