//! Migration of pre-codec asset names.
//!
//! Before the bracket encoding existed, shared colors were named
//! `<code>號色 <colors> - <description>`, e.g. `A01號色 #2e2e2e - 卡片背景`.
//! Gradients listed their stop colors separated by `-` and relied on the host
//! for stop positions.

use std::sync::LazyLock;

use regex::Regex;
use swatch_common::ParseFailure;
use swatch_config::MigrationConfig;

use crate::name::ColorNameRecord;
use crate::value::parse_color_value;

static LEGACY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z]+[0-9]+)號色\s*(.+\S)\s*-\s*(.+)$").unwrap());

static CODE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z]+[0-9]+").unwrap());

/// The leading `<letters><digits>` code of a name, if any.
pub fn legacy_code(name: &str) -> Option<&str> {
    CODE_RE.find(name).map(|m| m.as_str())
}

/// Rewrite a legacy name as a record.
///
/// `stop_positions` are the host gradient's stop positions, needed when the
/// name lists more than one color. The record is placed in the configured
/// default group, and gradients get the configured gradient type.
pub fn migrate_legacy_name(
    name: &str,
    stop_positions: Option<&[f64]>,
    defaults: &MigrationConfig,
) -> Result<ColorNameRecord, ParseFailure> {
    let caps = LEGACY_RE
        .captures(name)
        .ok_or_else(|| ParseFailure::MissingRequiredKey {
            key: "name",
            input: name.to_string(),
        })?;
    let code = &caps[1];
    let colors = caps[2].trim();
    let description = caps[3].trim();

    let pieces: Vec<&str> = colors.split('-').map(str::trim).collect();
    let mut record = ColorNameRecord::new(code, colors)
        .with_group(defaults.default_group_name.as_str(), defaults.default_group_sort)
        .with_description(description);

    if pieces.len() > 1 {
        let positions = stop_positions
            .filter(|positions| positions.len() == pieces.len())
            .ok_or_else(|| ParseFailure::InvalidColorValue {
                input: name.to_string(),
                offending: colors.to_string(),
            })?;
        record.color = pieces
            .iter()
            .zip(positions)
            .map(|(piece, position)| format!("{piece} {position}"))
            .collect::<Vec<_>>()
            .join("-");
        record.gradient_type = Some(defaults.gradient_type);
    }

    parse_color_value(&record.color)?;
    tracing::debug!(code, color = %record.color, "migrated legacy color name");
    Ok(record)
}
