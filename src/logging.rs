//! Tracing subscriber setup

use tracing_subscriber::EnvFilter;

/// Initialize logging to stderr
///
/// The level comes from `RUST_LOG` and defaults to INFO.
pub fn init() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .try_init()
}
