//! Diagnostic logging to stderr

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Environment variable holding `tracing` filter directives
pub const LOG_ENV: &str = "JTIMELINE_LOG";

/// Install the global subscriber. Stdout stays reserved for the timeline.
///
/// `JTIMELINE_LOG` directives win over the default level; `verbose` lowers the
/// default from `warn` to `debug`.
pub fn init(verbose: bool) {
    let default_level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };

    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .with_env_var(LOG_ENV)
        .from_env_lossy();

    // A subscriber may already be set when embedded; keep the existing one
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .try_init();
}
