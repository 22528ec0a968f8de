//! Logging setup for the terminal binary.
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

/// Installs a stderr subscriber filtered by `RUST_LOG`, defaulting to `info`.
pub fn setup_logging() {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(&directives))
        .with_writer(std::io::stderr)
        .init();
}

/// Builds the filter for `directives`; `info` applies when none are given.
/// Unparseable directives are skipped rather than aborting startup.
fn env_filter(directives: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(directives)
}
