use tracing_subscriber::EnvFilter;

/// Environment variable holding an explicit `tracing` filter directive.
pub const LOG_ENV: &str = "LICENSE_VETTER_LOG";

/// Install the global subscriber. Logs go to stderr; stdout carries the report.
///
/// `LICENSE_VETTER_LOG` wins when set, otherwise the level follows
/// `--verbose` / `--quiet`.
pub fn init(verbose: bool, quiet: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbose, quiet)));

    // A subscriber may already be installed (tests); keep the existing one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn default_level(verbose: bool, quiet: bool) -> &'static str {
    match (verbose, quiet) {
        (_, true) => "error",
        (true, false) => "debug",
        (false, false) => "warn",
    }
}
