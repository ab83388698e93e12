//! Diagnostic logging on stderr, filtered by `OFFICELOG_LOG` (default `warn`).

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "OFFICELOG_LOG";

pub fn enable_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{}=warn",
            env!("CARGO_PKG_NAME").replace('-', "_")
        ))
    });

    // A second call (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
