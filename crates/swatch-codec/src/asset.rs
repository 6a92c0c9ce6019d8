//! A decoded color name together with its parsed color value.

use swatch_common::{ContrastMode, GradientType, ParseFailure};

use crate::contrast::should_use_black_text_for_value;
use crate::name::{decode_name, encode_name, ColorNameRecord};
use crate::value::{parse_color_value, serialize_color_value, ColorValue};

#[derive(Debug, Clone, PartialEq)]
pub struct ColorAsset {
    pub record: ColorNameRecord,
    pub value: ColorValue,
}

impl ColorNameRecord {
    /// Parse this record's color value.
    ///
    /// A `gradientType` on a single-stop color is a degenerate gradient.
    pub fn resolve(self) -> Result<ColorAsset, ParseFailure> {
        let value = parse_color_value(&self.color)?;
        if self.gradient_type.is_some() && !value.is_gradient() {
            return Err(ParseFailure::DegenerateGradient {
                input: self.color,
                stops: value.stop_count(),
            });
        }
        Ok(ColorAsset {
            record: self,
            value,
        })
    }
}

impl ColorAsset {
    /// Build an asset from an already parsed value. The record's `color`
    /// and `gradientType` are derived from `value`.
    pub fn new(
        code: impl Into<String>,
        value: ColorValue,
        gradient_type: Option<GradientType>,
    ) -> Self {
        let mut record = ColorNameRecord::new(code, serialize_color_value(&value));
        if value.is_gradient() {
            record.gradient_type = Some(gradient_type.unwrap_or(GradientType::Linear));
        }
        Self { record, value }
    }

    /// The color code, e.g. `A01`.
    pub fn code(&self) -> &str {
        &self.record.name
    }

    pub fn description(&self) -> Option<&str> {
        self.record.description.as_deref()
    }

    /// Gradient shape; gradients without an explicit type are linear.
    pub fn gradient_type(&self) -> Option<GradientType> {
        self.value
            .is_gradient()
            .then(|| self.record.gradient_type.unwrap_or(GradientType::Linear))
    }

    pub fn prefers_black_text(&self, mode: ContrastMode, position: Option<f64>) -> bool {
        should_use_black_text_for_value(&self.value, mode, position)
    }

    pub fn encoded_name(&self, abbreviated: bool) -> String {
        encode_name(&self.record, abbreviated)
    }
}

/// Decode a name and parse its color value in one step.
pub fn decode_asset(raw: &str) -> Result<ColorAsset, ParseFailure> {
    decode_name(raw)?.resolve()
}
