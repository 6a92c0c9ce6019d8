use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use swatch_common::GradientType;

/// The fields carried by an encoded color name.
///
/// `name` (the color code, e.g. `A01`) and `color` (the raw color value, see
/// [`crate::value`]) are required. Keys the codec does not know are kept in
/// `extra` under their literal spelling.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorNameRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_sort: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gradient_type: Option<GradientType>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl ColorNameRecord {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            ..Default::default()
        }
    }

    pub fn with_group(mut self, name: impl Into<String>, sort: i64) -> Self {
        self.group_name = Some(name.into());
        self.group_sort = Some(sort);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_gradient_type(mut self, gradient_type: GradientType) -> Self {
        self.gradient_type = Some(gradient_type);
        self
    }
}
