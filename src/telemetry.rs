//! `tracing` subscriber setup.

use tracing_subscriber::EnvFilter;

use crate::config::CoreConfig;

/// Builds the log filter: `RUST_LOG` wins, otherwise the configured
/// directive is used.
///
/// # Errors
///
/// Returns an error if the configured directive cannot be parsed.
pub fn build_filter(config: &CoreConfig) -> anyhow::Result<EnvFilter> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))?;
    Ok(filter)
}

/// Installs the global fmt subscriber described by `config`.
///
/// # Errors
///
/// Returns an error if the filter is invalid or a global subscriber has
/// already been installed.
pub fn init(config: &CoreConfig) -> anyhow::Result<()> {
    let filter = build_filter(config)?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let installed = if config.log_json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.map_err(|e| anyhow::anyhow!("failed to install subscriber: {e}"))?;

    tracing::debug!(json = config.log_json, "tracing initialized");
    Ok(())
}
