use std::path::PathBuf;

/// Why a color name (or one of its parts) could not be turned into a color.
///
/// These describe bad input data, never programming errors. Callers are
/// expected to collect them for reporting and carry on with the next item.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseFailure {
    #[error("missing required key `{key}` in {input:?}")]
    MissingRequiredKey { key: &'static str, input: String },

    #[error("invalid color value {input:?} (at {offending:?})")]
    InvalidColorValue { input: String, offending: String },

    #[error("gradient {input:?} declares {stops} stop(s), at least 2 are required")]
    DegenerateGradient { input: String, stops: usize },
}

impl ParseFailure {
    /// Stable reason code for reports.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::MissingRequiredKey { .. } => "missing-required-key",
            Self::InvalidColorValue { .. } => "invalid-color-value",
            Self::DegenerateGradient { .. } => "degenerate-gradient",
        }
    }

    /// Degenerate gradients are a flavour of invalid color value.
    pub fn is_invalid_color_value(&self) -> bool {
        matches!(
            self,
            Self::InvalidColorValue { .. } | Self::DegenerateGradient { .. }
        )
    }

    /// The string that failed to parse.
    pub fn input(&self) -> &str {
        match self {
            Self::MissingRequiredKey { input, .. }
            | Self::InvalidColorValue { input, .. }
            | Self::DegenerateGradient { input, .. } => input,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum InterchangeError {
    #[error("interchange json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported interchange document: {0}")]
    Shape(String),
}

#[derive(Debug, thiserror::Error)]
pub enum SwatchError {
    #[error(transparent)]
    Parse(#[from] ParseFailure),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Interchange(#[from] InterchangeError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}
