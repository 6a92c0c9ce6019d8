//! Core TOML config loading: from a string, a path, or the platform default.

use std::path::Path;

use swatch_common::ConfigError;
use tracing::{info, warn};

use super::paths::default_config_path;
use crate::schema::SwatchConfig;
use crate::validation;

/// Parse config from TOML text, using serde defaults for missing fields.
pub fn load_from_str(content: &str) -> Result<SwatchConfig, ConfigError> {
    toml::from_str(content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))
}

/// Load config from a specific TOML file path.
///
/// If validation fails a warning is logged and the parsed config is
/// returned as-is; callers that need strictness run
/// [`validation::validate`] themselves.
pub fn load_from_path(path: &Path) -> Result<SwatchConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }
    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config = load_from_str(&content)?;

    if let Err(e) = validation::validate(&config) {
        warn!("config validation warning: {e}");
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform default path, or defaults if there is no file.
pub fn load_default() -> Result<SwatchConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, using defaults", path.display());
            Ok(SwatchConfig::default())
        }
        Err(e) => Err(e),
    }
}
