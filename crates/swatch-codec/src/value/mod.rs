//! The color value carried in the `color` key.
//!
//! ```text
//! #2e2e2e                       solid
//! #2e2e2e(20%)                  solid, 20% opacity
//! #2e2e2e 0-#cbff2e(90%) 1      gradient, stops at 0 and 1
//! ```
//!
//! A single stop without a position is a solid color. Two or more stops, each
//! with a position in `0..=1`, form a gradient.

mod parse;

#[cfg(test)]
mod tests;

use std::fmt;

use swatch_common::{Color, Opacity};

pub use parse::{parse_color_value, serialize_color_value};

/// A `#`-prefixed hex color, kept as written.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HexColor {
    text: String,
    color: Color,
}

impl HexColor {
    /// Accepts `#RGB`, `#RGBA`, `#RRGGBB` and `#RRGGBBAA`.
    pub fn parse(text: &str) -> Option<Self> {
        if !text.starts_with('#') {
            return None;
        }
        let color = Color::from_hex(text)?;
        Some(Self {
            text: text.to_string(),
            color,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolidColor {
    pub hex: HexColor,
    /// `None` means fully opaque (or whatever alpha the hex carries).
    pub opacity: Option<Opacity>,
}

impl SolidColor {
    pub fn new(hex: HexColor, opacity: Option<Opacity>) -> Self {
        Self {
            hex,
            opacity: opacity.filter(|o| !o.is_opaque()),
        }
    }

    pub fn color(&self) -> Color {
        apply_opacity(self.hex.color(), self.opacity)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GradientStop {
    pub position: f64,
    pub hex: HexColor,
    pub opacity: Option<Opacity>,
}

impl GradientStop {
    /// `None` when `position` lies outside `0..=1`.
    pub fn new(position: f64, hex: HexColor, opacity: Option<Opacity>) -> Option<Self> {
        (0.0..=1.0).contains(&position).then(|| Self {
            position,
            hex,
            opacity: opacity.filter(|o| !o.is_opaque()),
        })
    }

    pub fn color(&self) -> Color {
        apply_opacity(self.hex.color(), self.opacity)
    }
}

/// Two or more stops in ascending position order.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    stops: Vec<GradientStop>,
}

impl Gradient {
    /// Sort the stops by position (ties keep their input order).
    /// `None` when there are fewer than two.
    pub fn new(mut stops: Vec<GradientStop>) -> Option<Self> {
        if stops.len() < 2 {
            return None;
        }
        stops.sort_by(|a, b| a.position.total_cmp(&b.position));
        Some(Self { stops })
    }

    pub fn stops(&self) -> &[GradientStop] {
        &self.stops
    }
}

/// A fully parsed color value.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorValue {
    Solid(SolidColor),
    Gradient(Gradient),
}

impl ColorValue {
    pub fn is_gradient(&self) -> bool {
        matches!(self, Self::Gradient(_))
    }

    pub fn stop_count(&self) -> usize {
        match self {
            Self::Solid(_) => 1,
            Self::Gradient(gradient) => gradient.stops.len(),
        }
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&serialize_color_value(self))
    }
}

fn apply_opacity(color: Color, opacity: Option<Opacity>) -> Color {
    match opacity {
        Some(opacity) => color.with_opacity(opacity),
        None => color,
    }
}
