//! JSON interchange for sharing a color library outside the design tool.
//!
//! Two document forms are understood. The object form maps color codes to
//! entries:
//!
//! ```json
//! {
//!   "A01": { "description": "Card background", "hex": "#2e2e2e", "opacity": 0.2 },
//!   "A02": {
//!     "gradientType": "linear",
//!     "colorStops": [
//!       { "stop": 0, "hex": "#2e2e2e" },
//!       { "stop": 1, "hex": "#cbff2e", "opacity": 0.9 }
//!     ]
//!   }
//! }
//! ```
//!
//! The array form is a plain list of encoded color names.

use chrono::NaiveDate;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use swatch_common::{Color, GradientType, InterchangeError, Opacity, ParseFailure};

use crate::asset::ColorAsset;
use crate::catalog::Catalog;
use crate::value::{ColorValue, Gradient, GradientStop, HexColor, SolidColor};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterchangeEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hex: Option<String>,
    /// Fraction in `0..=1`; absent means opaque.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gradient_type: Option<GradientType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_stops: Option<Vec<InterchangeStop>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterchangeStop {
    pub stop: f64,
    pub hex: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
}

impl InterchangeEntry {
    pub fn from_asset(asset: &ColorAsset) -> Self {
        let description = asset.description().map(str::to_string);
        match &asset.value {
            ColorValue::Solid(solid) => {
                let (hex, opacity) = split_color(solid.color());
                Self {
                    description,
                    hex: Some(hex),
                    opacity,
                    gradient_type: None,
                    color_stops: None,
                }
            }
            ColorValue::Gradient(gradient) => Self {
                description,
                hex: None,
                opacity: None,
                gradient_type: asset.gradient_type(),
                color_stops: Some(
                    gradient
                        .stops()
                        .iter()
                        .map(|stop| {
                            let (hex, opacity) = split_color(stop.color());
                            InterchangeStop {
                                stop: stop.position,
                                hex,
                                opacity,
                            }
                        })
                        .collect(),
                ),
            },
        }
    }

    /// Turn the entry back into an asset.
    ///
    /// `hex` takes precedence and yields a solid color. Otherwise a
    /// `gradientType` makes it a gradient whose stops are sorted by position.
    pub fn into_asset(self, code: &str) -> Result<ColorAsset, ParseFailure> {
        if code.is_empty() {
            return Err(ParseFailure::MissingRequiredKey {
                key: "name",
                input: code.to_string(),
            });
        }

        let mut asset = if let Some(hex) = self.hex {
            let hex_color = parse_hex(&hex)?;
            let opacity = parse_opacity(&hex, self.opacity)?;
            ColorAsset::new(
                code,
                ColorValue::Solid(SolidColor::new(hex_color, opacity)),
                None,
            )
        } else if let Some(gradient_type) = self.gradient_type {
            let entries = self.color_stops.unwrap_or_default();
            let count = entries.len();
            let mut stops = Vec::with_capacity(count);
            for entry in entries {
                let hex = parse_hex(&entry.hex)?;
                let opacity = parse_opacity(&entry.hex, entry.opacity)?;
                let stop = GradientStop::new(entry.stop, hex, opacity).ok_or_else(|| {
                    ParseFailure::InvalidColorValue {
                        input: entry.hex.clone(),
                        offending: entry.stop.to_string(),
                    }
                })?;
                stops.push(stop);
            }
            let gradient = Gradient::new(stops).ok_or_else(|| ParseFailure::DegenerateGradient {
                input: code.to_string(),
                stops: count,
            })?;
            ColorAsset::new(code, ColorValue::Gradient(gradient), Some(gradient_type))
        } else {
            return Err(ParseFailure::MissingRequiredKey {
                key: "color",
                input: code.to_string(),
            });
        };

        asset.record.description = self.description.filter(|d| !d.is_empty());
        Ok(asset)
    }
}

fn split_color(color: Color) -> (String, Option<f64>) {
    let opacity = (color.a != 255).then(|| Opacity::from_alpha(color.a).fraction());
    (color.to_rgb_hex(), opacity)
}

fn parse_hex(hex: &str) -> Result<HexColor, ParseFailure> {
    HexColor::parse(hex).ok_or_else(|| ParseFailure::InvalidColorValue {
        input: hex.to_string(),
        offending: hex.to_string(),
    })
}

fn parse_opacity(hex: &str, opacity: Option<f64>) -> Result<Option<Opacity>, ParseFailure> {
    opacity
        .map(|fraction| {
            Opacity::from_fraction(fraction).ok_or_else(|| ParseFailure::InvalidColorValue {
                input: hex.to_string(),
                offending: fraction.to_string(),
            })
        })
        .transpose()
}

/// Code-keyed entries serialized as a JSON object in the given order.
struct ExportDocument<'a>(Vec<(&'a str, InterchangeEntry)>);

impl Serialize for ExportDocument<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (code, entry) in &self.0 {
            map.serialize_entry(code, entry)?;
        }
        map.end()
    }
}

/// Export the catalog as a pretty-printed JSON object keyed by color code.
pub fn export_json(catalog: &Catalog, sort_natural: bool) -> Result<String, InterchangeError> {
    let assets: Vec<&ColorAsset> = if sort_natural {
        catalog.sorted()
    } else {
        catalog.assets().iter().collect()
    };
    let document = ExportDocument(
        assets
            .into_iter()
            .map(|asset| (asset.code(), InterchangeEntry::from_asset(asset)))
            .collect(),
    );
    Ok(serde_json::to_string_pretty(&document)?)
}

/// Export the encoded names as a JSON array in natural code order.
pub fn export_names_json(catalog: &Catalog, abbreviated: bool) -> Result<String, InterchangeError> {
    let names: Vec<String> = catalog
        .sorted()
        .into_iter()
        .map(|asset| asset.encoded_name(abbreviated))
        .collect();
    Ok(serde_json::to_string_pretty(&names)?)
}

/// Import either document form, in document order. Entries that fail are
/// logged and collected in [`Catalog::skipped`]; only malformed JSON or an
/// unexpected top-level shape is an error.
pub fn import_json(text: &str) -> Result<Catalog, InterchangeError> {
    match serde_json::from_str::<serde_json::Value>(text)? {
        serde_json::Value::Object(entries) => {
            let mut catalog = Catalog::new();
            for (index, (code, value)) in entries.into_iter().enumerate() {
                let parsed = serde_json::from_value::<InterchangeEntry>(value)
                    .map_err(|e| ParseFailure::InvalidColorValue {
                        input: code.clone(),
                        offending: e.to_string(),
                    })
                    .and_then(|entry| entry.into_asset(&code));
                match parsed {
                    Ok(asset) => {
                        catalog.insert(asset);
                    }
                    Err(failure) => catalog.skip(index, &code, failure),
                }
            }
            Ok(catalog)
        }
        serde_json::Value::Array(items) => {
            let names = items
                .into_iter()
                .enumerate()
                .map(|(index, item)| match item {
                    serde_json::Value::String(name) => Ok(name),
                    other => Err(InterchangeError::Shape(format!(
                        "item {index} of the names array is not a string: {other}"
                    ))),
                })
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Catalog::decode(names))
        }
        other => Err(InterchangeError::Shape(format!(
            "expected an object of colors or an array of names, found {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

/// `<prefix>YYYYMMDD.json`
pub fn export_file_name(prefix: &str, date: NaiveDate) -> String {
    format!("{prefix}{}.json", date.format("%Y%m%d"))
}
