//! Logging setup for the binary.
//!
//! Diagnostics go to stderr so stdout carries only the comparison report.
//! `RUST_LOG` takes precedence over the default level unless `verbose` is set.

use is_terminal::IsTerminal;
use std::sync::OnceLock;
use tracing_subscriber::EnvFilter;

static INIT: OnceLock<()> = OnceLock::new();

const DEFAULT_LEVEL: &str = "warn";
const VERBOSE_LEVEL: &str = "debug";

/// Installs the global subscriber. Subsequent calls are no-ops.
pub fn init(verbose: bool) {
    INIT.get_or_init(|| {
        let filter = if verbose {
            EnvFilter::new(VERBOSE_LEVEL)
        } else {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
        };

        // another subscriber may already be installed by an embedding program
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_ansi(std::io::stderr().is_terminal())
            .with_target(false)
            .without_time()
            .try_init();
    });
}
