use anyhow::{Result, anyhow};
use tracing_subscriber::{EnvFilter, fmt};

/// RUST_LOG, when set, wins over the configured level.
pub(crate) fn init_logging(default_level: &str) -> Result<()> {
    let fallback =
        EnvFilter::try_new(default_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let filter = EnvFilter::try_from_default_env().unwrap_or(fallback);

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|e| anyhow!("failed to init logging: {e}"))?;

    Ok(())
}
