//! Structured logging for the simulator using the tracing crate.
//!
//! Events go to stderr so a `--snapshot` run can be piped without noise.

use anyhow::anyhow;
use tracing_subscriber::prelude::*;

/// Initializes the global subscriber.
///
/// Log level is controlled by the RUST_LOG environment variable (defaults to "info").
///
/// # Errors
/// - If a global subscriber was already installed
pub fn init_logging() -> Result<(), anyhow::Error> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true),
        )
        .try_init()
        .map_err(|e| anyhow!("Logging already initialized: {e}"))?;

    tracing::debug!("Logging initialized");
    Ok(())
}
