use tracing_subscriber::EnvFilter;

/// Environment variable holding a tracing filter, e.g. `TRIFIX_LOG=debug`
pub const LOG_ENV: &str = "TRIFIX_LOG";

/// Build the filter: `TRIFIX_LOG` if set and valid, otherwise `default_level`
pub fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Install the global subscriber; logs go to stderr so fixtures piped to stdout stay clean
pub fn init_tracing(default_level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

