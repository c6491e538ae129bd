use anyhow::Context;
use caalookup_domain::{CliOverrides, Config};
use tracing::debug;

/// Loads the configuration file (if any), applies CLI overrides and
/// validates the result.
pub fn load_config(path: Option<&str>, cli_overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(path, cli_overrides).context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;

    debug!(
        server = %config.upstream.server,
        timeout_ms = config.upstream.query_timeout_ms,
        tcp_fallback = config.upstream.tcp_fallback,
        max_recursions = config.resolution.max_recursions,
        "Configuration loaded"
    );

    Ok(config)
}
