use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Shape of a multi-stop color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradientType {
    Linear,
    Radial,
}

impl GradientType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Radial => "radial",
        }
    }
}

impl FromStr for GradientType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "linear" => Ok(Self::Linear),
            "radial" => Ok(Self::Radial),
            other => Err(format!("unknown gradient type '{other}'")),
        }
    }
}

impl fmt::Display for GradientType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a gradient is reduced to one color for the text-contrast decision.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContrastMode {
    /// Sample the interpolated color at one position.
    #[default]
    Pointwise,
    /// Trapezoidal average over the whole gradient.
    Average,
}

impl ContrastMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pointwise => "pointwise",
            Self::Average => "average",
        }
    }
}

impl FromStr for ContrastMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pointwise" => Ok(Self::Pointwise),
            "average" => Ok(Self::Average),
            other => Err(format!("unknown contrast mode '{other}'")),
        }
    }
}
