//! Theme snippet for pasting colors into an Uno/Tailwind style `colors` map.

use swatch_common::{Color, Opacity};

use crate::asset::ColorAsset;
use crate::catalog::Catalog;
use crate::sort::sort_natural_codes;
use crate::value::ColorValue;

/// One entry per solid color and one per gradient stop (`CODE_1`, `CODE_2`,
/// ...), naturally ordered and wrapped in braces. `None` for an empty catalog.
///
/// ```text
/// {
///   A01: rgba('#2e2e2e', 0.2), // Card background
///   A02_1: '#2e2e2e', // Accent
///   A02_2: rgba('#cbff2e', 0.9), // Accent
/// }
/// ```
pub fn uno_theme_snippet(catalog: &Catalog) -> Option<String> {
    let mut lines: Vec<String> = catalog.assets().iter().flat_map(snippet_lines).collect();
    if lines.is_empty() {
        return None;
    }
    sort_natural_codes(&mut lines);
    Some(format!("{{\n  {}\n}}", lines.join("\n  ")))
}

fn snippet_lines(asset: &ColorAsset) -> Vec<String> {
    let line = |key: String, color: Color| match asset.description() {
        Some(description) => format!("{key}: {}, // {description}", uno_color(color)),
        None => format!("{key}: {},", uno_color(color)),
    };
    match &asset.value {
        ColorValue::Solid(solid) => vec![line(asset.code().to_string(), solid.color())],
        ColorValue::Gradient(gradient) => gradient
            .stops()
            .iter()
            .enumerate()
            .map(|(i, stop)| line(format!("{}_{}", asset.code(), i + 1), stop.color()))
            .collect(),
    }
}

fn uno_color(color: Color) -> String {
    let hex = color.to_rgb_hex();
    if color.a == 255 {
        format!("'{hex}'")
    } else {
        format!("rgba('{hex}', {})", Opacity::from_alpha(color.a).fraction())
    }
}
