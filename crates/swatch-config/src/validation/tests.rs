//! Tests for the validation pipeline.

use super::*;

#[test]
fn default_config_validates() {
    assert!(validate(&SwatchConfig::default()).is_ok());
}

#[test]
fn catches_position_out_of_range() {
    let mut config = SwatchConfig::default();
    config.contrast.position = 1.5;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("contrast.position"));
}

#[test]
fn catches_nan_position() {
    let mut config = SwatchConfig::default();
    config.contrast.position = f64::NAN;
    assert!(validate(&config).is_err());
}

#[test]
fn catches_empty_group_name() {
    let mut config = SwatchConfig::default();
    config.migration.default_group_name = "  ".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("migration.default_group_name"));
}

#[test]
fn catches_path_separator_in_prefix() {
    let mut config = SwatchConfig::default();
    config.export.file_prefix = "../colors_".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("export.file_prefix"));
}

#[test]
fn catches_unknown_log_level() {
    let mut config = SwatchConfig::default();
    config.logging.level = "verbose".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("logging.level"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = SwatchConfig::default();
    config.contrast.position = -1.0;
    config.logging.level = "loud".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("contrast.position"));
    assert!(err.contains("logging.level"));
    assert!(err.contains("; "));
}
