//! Encoding and decoding of `[@key:value]` color names.
//!
//! A design tool only gives each shared color a display name, so the color
//! metadata is packed into it:
//!
//! ```text
//! [@GS:1][@G:Surface][@N:A01][@D:Card background][@C:#2e2e2e(20%)]
//! ```

mod record;
mod scanner;

#[cfg(test)]
mod tests;

pub use record::ColorNameRecord;
pub use scanner::{escape, escape_key, scan, BracketField};

use swatch_common::{GradientType, ParseFailure};

use crate::keys::NameKey;

/// Decode a color name into its record.
///
/// Later occurrences of a key overwrite earlier ones. Fails with
/// `missing-required-key` when no non-empty `name` or `color` is present, and
/// with `invalid-color-value` when `gradientType` is neither `linear` nor
/// `radial`. The color value itself is not parsed here; see
/// [`ColorNameRecord::resolve`].
pub fn decode_name(raw: &str) -> Result<ColorNameRecord, ParseFailure> {
    let mut record = ColorNameRecord::default();
    let mut name = None;
    let mut color = None;
    let mut gradient_type = None;

    for BracketField { key, value } in scan(raw) {
        match NameKey::lookup(&key) {
            Some(NameKey::Name) => name = Some(value),
            Some(NameKey::Color) => color = Some(value),
            Some(NameKey::GroupName) => record.group_name = Some(value),
            Some(NameKey::Description) => record.description = Some(value),
            Some(NameKey::GradientType) => gradient_type = Some(value),
            Some(NameKey::GroupSort) => match value.parse::<i64>() {
                Ok(sort) => record.group_sort = Some(sort),
                Err(_) => {
                    tracing::debug!(input = raw, value = %value, "ignoring non-integer groupSort");
                }
            },
            None => {
                record.extra.insert(key, value);
            }
        }
    }

    record.name = name
        .filter(|n| !n.is_empty())
        .ok_or_else(|| missing(NameKey::Name, raw))?;
    record.color = color
        .filter(|c| !c.is_empty())
        .ok_or_else(|| missing(NameKey::Color, raw))?;
    record.gradient_type = gradient_type
        .map(|value| {
            value
                .parse::<GradientType>()
                .map_err(|_| ParseFailure::InvalidColorValue {
                    input: raw.to_string(),
                    offending: value,
                })
        })
        .transpose()?;

    Ok(record)
}

/// Encode a record as a color name.
///
/// Keys are written in the fixed order `groupSort`, `groupName`, `name`,
/// `description`, `color`, `gradientType`, followed by any extra keys in
/// lexical order. Absent fields are omitted. Values are escaped so that
/// [`decode_name`] returns them unchanged.
pub fn encode_name(record: &ColorNameRecord, abbreviated: bool) -> String {
    let mut out = String::new();

    for key in NameKey::ALL {
        let value = match key {
            NameKey::GroupSort => record.group_sort.map(|sort| sort.to_string()),
            NameKey::GroupName => record.group_name.clone(),
            NameKey::Name => Some(record.name.clone()),
            NameKey::Description => record.description.clone(),
            NameKey::Color => Some(record.color.clone()),
            NameKey::GradientType => record.gradient_type.map(|t| t.to_string()),
        };
        if let Some(value) = value {
            push_field(&mut out, key.spelling(abbreviated), &value);
        }
    }

    for (key, value) in &record.extra {
        push_field(&mut out, key, value);
    }

    out
}

fn push_field(out: &mut String, key: &str, value: &str) {
    out.push_str("[@");
    out.push_str(&escape_key(key));
    out.push(':');
    out.push_str(&escape(value));
    out.push(']');
}

fn missing(key: NameKey, raw: &str) -> ParseFailure {
    ParseFailure::MissingRequiredKey {
        key: key.long(),
        input: raw.to_string(),
    }
}
