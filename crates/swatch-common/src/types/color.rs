use serde::{Deserialize, Serialize};

use super::Opacity;

/// An sRGB color with 8-bit channels and 8-bit alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#RGB`, `#RGBA`, `#RRGGBB` or `#RRGGBBAA` (the `#` is optional).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|n| n * 17);
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        match hex.len() {
            3 => Some(Self::from_rgba(nibble(0)?, nibble(1)?, nibble(2)?, 255)),
            4 => Some(Self::from_rgba(nibble(0)?, nibble(1)?, nibble(2)?, nibble(3)?)),
            6 => Some(Self::from_rgba(byte(0)?, byte(2)?, byte(4)?, 255)),
            8 => Some(Self::from_rgba(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => None,
        }
    }

    /// Replace the alpha channel with the given opacity.
    pub fn with_opacity(self, opacity: Opacity) -> Self {
        Self {
            a: opacity.alpha(),
            ..self
        }
    }

    pub fn alpha_fraction(&self) -> f64 {
        f64::from(self.a) / 255.0
    }

    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            self.to_rgb_hex()
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }

    /// Six-digit hex, alpha dropped.
    pub fn to_rgb_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}
