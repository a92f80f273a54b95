//! Configuration validation
//!
//! Validates critical configuration values at startup to catch misconfigurations early.

use anyhow::Result;
use navsite_core::Config;

/// Validate critical configuration values
///
/// Runs `Config::validate` and the checks that only matter for a running server.
pub fn validate_config(config: &Config) -> Result<()> {
    config.validate()?;

    if config.db_max_connections() == 0 {
        return Err(anyhow::anyhow!("Database max connections cannot be 0"));
    }

    if config.db_timeout_seconds() == 0 {
        return Err(anyhow::anyhow!("Database timeout cannot be 0"));
    }

    if config.server_port() == 0 {
        return Err(anyhow::anyhow!("SERVER_PORT cannot be 0"));
    }

    if config.db_max_connections() > 100 {
        tracing::warn!(
            db_max_connections = config.db_max_connections(),
            "DB_MAX_CONNECTIONS is very high - ensure the database allows this many connections"
        );
    }

    if config.is_production() && config.upload_dir().is_relative() {
        tracing::warn!(
            upload_dir = %config.upload_dir().display(),
            "UPLOAD_DIR is relative - uploads depend on the working directory"
        );
    }

    Ok(())
}
