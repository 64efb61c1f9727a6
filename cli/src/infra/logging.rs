//! Diagnostic logging via `tracing`.
//!
//! Logs go to stderr so they never mix with command output. `IRONS_LOG`
//! takes an `EnvFilter` directive; `--verbose` forces `debug`.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "IRONS_LOG";

/// Filter used when neither `IRONS_LOG` nor `--verbose` is set.
const DEFAULT_DIRECTIVE: &str = "warn";

/// Build the active filter.
#[must_use]
pub fn filter(verbose: bool) -> EnvFilter {
    if verbose {
        return EnvFilter::new("irons_cli=debug,irons=debug,info");
    }
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Install the global subscriber. Safe to call more than once.
pub fn init(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
