//! What a color panel renders for each asset: CSS background, text color
//! and grouping.

use serde::Serialize;
use swatch_common::{Color, ContrastMode, GradientType, Opacity};

use crate::asset::ColorAsset;
use crate::catalog::Catalog;
use crate::sort::locale_compare;
use crate::value::ColorValue;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwatchView {
    pub code: String,
    /// CSS `background` value.
    pub css: String,
    pub black_text: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gradient_type: Option<GradientType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl SwatchView {
    pub fn from_asset(asset: &ColorAsset, mode: ContrastMode, position: Option<f64>) -> Self {
        Self {
            code: asset.code().to_string(),
            css: css_background(asset),
            black_text: asset.prefers_black_text(mode, position),
            gradient_type: asset.gradient_type(),
            description: asset.description().map(str::to_string),
        }
    }
}

/// `rgba(...)` for solids, `linear-gradient(to bottom, ...)` or
/// `radial-gradient(circle at center, ...)` for gradients.
pub fn css_background(asset: &ColorAsset) -> String {
    match &asset.value {
        ColorValue::Solid(solid) => css_rgba(solid.color()),
        ColorValue::Gradient(gradient) => {
            let mut css = match asset.gradient_type() {
                Some(GradientType::Radial) => String::from("radial-gradient(circle at center"),
                _ => String::from("linear-gradient(to bottom"),
            };
            for stop in gradient.stops() {
                let percent = (stop.position * 10_000.0).round() / 100.0;
                css.push_str(&format!(", {} {percent}%", css_rgba(stop.color())));
            }
            css.push(')');
            css
        }
    }
}

fn css_rgba(color: Color) -> String {
    let alpha = Opacity::from_alpha(color.a).fraction();
    format!("rgba({}, {}, {}, {alpha})", color.r, color.g, color.b)
}

/// Swatches sharing a `groupName`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SwatchGroup {
    pub name: String,
    /// Smallest `groupSort` among the members, `None` when none carries one.
    pub sort: Option<i64>,
    pub swatches: Vec<SwatchView>,
}

/// Bucket the catalog by `groupName`.
///
/// Assets without a group land in `default_group`. Groups are ordered by sort
/// (unsorted groups last) and then name; swatches within a group by code.
pub fn group_swatches(
    catalog: &Catalog,
    mode: ContrastMode,
    position: Option<f64>,
    default_group: &str,
) -> Vec<SwatchGroup> {
    let mut groups: Vec<SwatchGroup> = Vec::new();

    for asset in catalog.sorted() {
        let name = asset.record.group_name.as_deref().unwrap_or(default_group);
        let slot = match groups.iter().position(|group| group.name == name) {
            Some(slot) => slot,
            None => {
                groups.push(SwatchGroup {
                    name: name.to_string(),
                    sort: None,
                    swatches: Vec::new(),
                });
                groups.len() - 1
            }
        };
        let group = &mut groups[slot];
        if let Some(sort) = asset.record.group_sort {
            group.sort = Some(group.sort.map_or(sort, |current| current.min(sort)));
        }
        group
            .swatches
            .push(SwatchView::from_asset(asset, mode, position));
    }

    groups.sort_by(|a, b| {
        let rank = |group: &SwatchGroup| group.sort.unwrap_or(i64::MAX);
        rank(a)
            .cmp(&rank(b))
            .then_with(|| locale_compare(&a.name, &b.name))
    });
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::decode_asset;
    use crate::catalog::decode_catalog;

    fn css(raw: &str) -> String {
        css_background(&decode_asset(raw).unwrap())
    }

    #[test]
    fn solid_css_uses_fractional_alpha() {
        assert_eq!(css("[@N:A1][@C:#2e2e2e(20%)]"), "rgba(46, 46, 46, 0.2)");
        assert_eq!(css("[@N:A1][@C:#ffffff]"), "rgba(255, 255, 255, 1)");
    }

    #[test]
    fn gradient_css() {
        assert_eq!(
            css("[@N:A1][@C:#000 0-#fff(50%) 0.3]"),
            "linear-gradient(to bottom, rgba(0, 0, 0, 1) 0%, rgba(255, 255, 255, 0.5) 30%)"
        );
        assert_eq!(
            css("[@N:A1][@C:#000 0-#fff 1][@CGT:radial]"),
            "radial-gradient(circle at center, rgba(0, 0, 0, 1) 0%, rgba(255, 255, 255, 1) 100%)"
        );
    }

    #[test]
    fn view_carries_text_decision() {
        let asset = decode_asset("[@N:A1][@C:#2e2e2e][@D:dark]").unwrap();
        let view = SwatchView::from_asset(&asset, ContrastMode::Pointwise, None);
        assert!(!view.black_text);
        assert_eq!(view.description.as_deref(), Some("dark"));

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["blackText"], false);
        assert!(json.get("gradientType").is_none());
    }

    #[test]
    fn groups_by_name_and_sort() {
        let catalog = decode_catalog([
            "[@G:Text][@GS:2][@N:T10][@C:#000]",
            "[@N:X1][@C:#fff]",
            "[@G:Surface][@GS:1][@N:S1][@C:#eee]",
            "[@G:Text][@GS:3][@N:T2][@C:#111]",
        ]);
        let groups = group_swatches(&catalog, ContrastMode::Pointwise, None, "未分類");
        let summary: Vec<(&str, Option<i64>, Vec<&str>)> = groups
            .iter()
            .map(|g| {
                (
                    g.name.as_str(),
                    g.sort,
                    g.swatches.iter().map(|s| s.code.as_str()).collect(),
                )
            })
            .collect();
        assert_eq!(
            summary,
            [
                ("Surface", Some(1), vec!["S1"]),
                ("Text", Some(2), vec!["T2", "T10"]),
                ("未分類", None, vec!["X1"]),
            ]
        );
    }
}
