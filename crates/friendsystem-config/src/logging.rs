//! Logging initialization for the friend system.

use tracing_subscriber::EnvFilter;

/// Initialize the logging system.
///
/// Sets up a tracing fmt subscriber writing to stderr, with the log level
/// taken from `RUST_LOG` when set and the provided default otherwise. Call
/// once at startup from the embedding front end.
///
/// # Example
///
/// ```ignore
/// init_logging("info");
/// tracing::info!("Friend system started");
/// ```
pub fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
