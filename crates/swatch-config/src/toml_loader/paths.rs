//! Config path resolution.

use std::path::PathBuf;

use swatch_common::ConfigError;

/// Get the platform-specific default config file path.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))?;
    Ok(config_dir.join("swatch").join("config.toml"))
}
