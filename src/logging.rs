//! Logging setup for the giturl binary

use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive, e.g. `giturl=trace`
pub const LOG_ENV: &str = "GITURL_LOG";

/// Install a stderr fmt subscriber
///
/// `GITURL_LOG` wins when set; otherwise only warnings are shown, or debug
/// output for giturl itself with `--verbose`.
pub fn init_logging(verbose: bool) {
    let env_filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    // Keep an already-installed subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    tracing::debug!("giturl logging initialized");
}

fn default_directive(verbose: bool) -> &'static str {
    if verbose { "warn,giturl=debug" } else { "warn" }
}
