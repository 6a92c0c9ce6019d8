//! Parser and serializer for color values.

use std::sync::LazyLock;

use regex::Regex;
use swatch_common::{Opacity, ParseFailure};

use super::{ColorValue, Gradient, GradientStop, HexColor, SolidColor};

/// One stop: hex, optional `(NN%)`, optional whitespace-separated position.
static STOP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(#[0-9A-Fa-f]{3,8})(?:\(([0-9]{1,3})%\))?(?:\s+([0-9]+(?:\.[0-9]+)?|\.[0-9]+))?$")
        .unwrap()
});

struct RawStop {
    hex: HexColor,
    opacity: Option<Opacity>,
    position: Option<f64>,
}

fn parse_stop(text: &str) -> Option<RawStop> {
    let caps = STOP_RE.captures(text)?;
    let hex = HexColor::parse(&caps[1])?;
    let opacity = match caps.get(2) {
        Some(m) => Some(Opacity::from_percent(m.as_str().parse().ok()?)?),
        None => None,
    };
    let position = match caps.get(3) {
        Some(m) => Some(m.as_str().parse::<f64>().ok()?),
        None => None,
    };
    Some(RawStop {
        hex,
        opacity,
        position,
    })
}

/// Parse a color value. All or nothing: one bad stop rejects the whole value.
pub fn parse_color_value(raw: &str) -> Result<ColorValue, ParseFailure> {
    let invalid = |offending: &str| ParseFailure::InvalidColorValue {
        input: raw.to_string(),
        offending: offending.to_string(),
    };

    let pieces: Vec<&str> = raw.trim().split('-').map(str::trim).collect();
    let mut stops = Vec::with_capacity(pieces.len());
    for &piece in &pieces {
        stops.push(parse_stop(piece).ok_or_else(|| invalid(piece))?);
    }

    if let [stop] = stops.as_slice() {
        if stop.position.is_some() {
            return Err(ParseFailure::DegenerateGradient {
                input: raw.to_string(),
                stops: 1,
            });
        }
        return Ok(ColorValue::Solid(SolidColor::new(
            stop.hex.clone(),
            stop.opacity,
        )));
    }

    let mut gradient_stops = Vec::with_capacity(stops.len());
    for (stop, &piece) in stops.into_iter().zip(&pieces) {
        let position = stop.position.ok_or_else(|| invalid(piece))?;
        let stop =
            GradientStop::new(position, stop.hex, stop.opacity).ok_or_else(|| invalid(piece))?;
        gradient_stops.push(stop);
    }

    let count = gradient_stops.len();
    Gradient::new(gradient_stops)
        .map(ColorValue::Gradient)
        .ok_or(ParseFailure::DegenerateGradient {
            input: raw.to_string(),
            stops: count,
        })
}

/// Serialize a color value; the inverse of [`parse_color_value`].
pub fn serialize_color_value(value: &ColorValue) -> String {
    match value {
        ColorValue::Solid(solid) => format_stop(&solid.hex, solid.opacity),
        ColorValue::Gradient(gradient) => gradient
            .stops()
            .iter()
            .map(|stop| format!("{} {}", format_stop(&stop.hex, stop.opacity), stop.position))
            .collect::<Vec<_>>()
            .join("-"),
    }
}

fn format_stop(hex: &HexColor, opacity: Option<Opacity>) -> String {
    match opacity.filter(|o| !o.is_opaque()) {
        Some(opacity) => format!("{hex}({opacity})"),
        None => hex.to_string(),
    }
}
