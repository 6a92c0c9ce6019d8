//! Configuration schema.

use serde::{Deserialize, Serialize};
use swatch_common::{ContrastMode, GradientType};

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwatchConfig {
    pub codec: CodecConfig,
    pub contrast: ContrastConfig,
    pub migration: MigrationConfig,
    pub export: ExportConfig,
    pub logging: LoggingConfig,
}

/// Name encoding options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Emit `G`/`GS`/`N`/`C`/`CGT`/`D` instead of the long key names.
    pub abbreviated_keys: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            abbreviated_keys: true,
        }
    }
}

/// Black/white text decision for gradients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContrastConfig {
    pub mode: ContrastMode,
    /// Sample position for `pointwise` mode, 0.0-1.0.
    pub position: f64,
}

impl Default for ContrastConfig {
    fn default() -> Self {
        Self {
            mode: ContrastMode::Pointwise,
            position: 0.5,
        }
    }
}

/// Defaults applied when rewriting legacy `A01號色 ...` names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MigrationConfig {
    pub default_group_name: String,
    pub default_group_sort: i64,
    pub gradient_type: GradientType,
}

impl Default for MigrationConfig {
    fn default() -> Self {
        Self {
            default_group_name: "未分類".into(),
            default_group_sort: 1,
            gradient_type: GradientType::Linear,
        }
    }
}

/// JSON export options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Order exported colors by code (`A2` before `A10`).
    pub sort_natural: bool,
    /// Export file names are `<file_prefix>YYYYMMDD.json`.
    pub file_prefix: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            sort_natural: true,
            file_prefix: "xd_assets_colors_".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// One of `trace`, `debug`, `info`, `warn`, `error`.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
        }
    }
}
