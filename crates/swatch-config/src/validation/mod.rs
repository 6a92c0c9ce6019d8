//! Configuration validation.
//!
//! Each check pushes a message; all messages are joined into a single
//! `ConfigError::ValidationError`.

mod helpers;

#[cfg(test)]
mod tests;

use swatch_common::ConfigError;

use crate::schema::SwatchConfig;
use helpers::{validate_non_empty, validate_one_of, validate_range_f64};

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &SwatchConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_range_f64(
        &mut errors,
        "contrast.position",
        config.contrast.position,
        0.0,
        1.0,
    );
    validate_non_empty(
        &mut errors,
        "migration.default_group_name",
        &config.migration.default_group_name,
    );
    validate_non_empty(&mut errors, "export.file_prefix", &config.export.file_prefix);
    if config
        .export
        .file_prefix
        .contains(|c: char| matches!(c, '/' | '\\'))
    {
        errors.push(format!(
            "export.file_prefix = {:?} must not contain path separators",
            config.export.file_prefix
        ));
    }
    validate_one_of(&mut errors, "logging.level", &config.logging.level, LOG_LEVELS);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
