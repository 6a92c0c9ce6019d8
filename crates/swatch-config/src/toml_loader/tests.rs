//! Tests for TOML config loading.

use super::*;
use std::path::Path;
use swatch_common::{ConfigError, ContrastMode, GradientType};

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_swatch_config.toml"));
    assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
}

#[test]
fn load_empty_string_gives_defaults() {
    let config = load_from_str("").unwrap();
    assert_eq!(config, crate::SwatchConfig::default());
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[codec]
abbreviated_keys = false

[contrast]
mode = "average"

[migration]
gradient_type = "radial"
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert!(!config.codec.abbreviated_keys);
    assert_eq!(config.contrast.mode, ContrastMode::Average);
    assert_eq!(config.migration.gradient_type, GradientType::Radial);
    // Defaults preserved
    assert_eq!(config.contrast.position, 0.5);
    assert_eq!(config.migration.default_group_sort, 1);
    assert_eq!(config.export.file_prefix, "xd_assets_colors_");
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let result = load_from_path(&path);
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

#[test]
fn load_unknown_contrast_mode_is_parse_error() {
    let result = load_from_str("[contrast]\nmode = \"median\"\n");
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

#[test]
fn load_out_of_range_values_still_returns_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[contrast]\nposition = 3.0\n").unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.contrast.position, 3.0);
}

#[test]
fn default_config_path_ends_with_swatch_config() {
    if let Ok(path) = default_config_path() {
        assert!(path.ends_with("swatch/config.toml"));
    }
}
