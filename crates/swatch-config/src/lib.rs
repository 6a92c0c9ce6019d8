//! Swatch configuration.
//!
//! TOML-based settings for the color-name codec: which key spelling to emit,
//! how gradients are reduced for the text-contrast decision, the defaults used
//! when migrating legacy names, and export/logging options. Every section has
//! serde defaults so partial files work.
//!
//! ```rust,no_run
//! use swatch_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{
    CodecConfig, ContrastConfig, ExportConfig, LoggingConfig, MigrationConfig, SwatchConfig,
};
pub use toml_loader::{default_config_path, load_default, load_from_path, load_from_str};

use swatch_common::ConfigError;

/// Load config from the platform default path and validate it.
pub fn load_config() -> Result<SwatchConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &SwatchConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let json = config_to_json(&SwatchConfig::default());
        assert!(json.contains("\"codec\""));
        assert!(json.contains("\"contrast\""));
        assert!(json.contains("\"migration\""));
        assert!(json.contains("\"export\""));
        assert!(json.contains("\"logging\""));
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let json = config_to_json(&SwatchConfig::default());
        let parsed: SwatchConfig = serde_json::from_str(&json).unwrap();
        assert!(parsed.codec.abbreviated_keys);
        assert_eq!(parsed.contrast.position, 0.5);
        assert_eq!(parsed.migration.default_group_name, "未分類");
    }
}
