//! Color name codec.
//!
//! Design tools only let a shared color carry a display name, so the rest of
//! its metadata is packed into that name as bracketed `[@key:value]` fields:
//!
//! ```rust
//! use swatch_codec::{decode_name, encode_name, parse_color_value};
//!
//! let record = decode_name("[@GS:1][@G:Surface][@N:A01][@C:#2e2e2e(20%)]").unwrap();
//! assert_eq!(record.name, "A01");
//! assert!(!parse_color_value(&record.color).unwrap().is_gradient());
//! assert_eq!(encode_name(&record, true), "[@GS:1][@G:Surface][@N:A01][@C:#2e2e2e(20%)]");
//! ```
//!
//! On top of the codec sit the pieces a color panel needs: the black/white
//! text decision, natural ordering of codes, batch decoding into a
//! [`Catalog`], JSON import/export, legacy name migration, CSS swatches and a
//! theme snippet.

pub mod asset;
pub mod catalog;
pub mod contrast;
pub mod interchange;
pub mod keys;
pub mod legacy;
pub mod name;
pub mod snippet;
pub mod sort;
pub mod swatch;
pub mod value;

pub use asset::{decode_asset, ColorAsset};
pub use catalog::{decode_catalog, Catalog, SkippedName};
pub use contrast::{
    should_use_black_text, should_use_black_text_for_color, should_use_black_text_for_gradient,
    should_use_black_text_for_value, ColorStop,
};
pub use interchange::{
    export_file_name, export_json, export_names_json, import_json, InterchangeEntry,
    InterchangeStop,
};
pub use keys::NameKey;
pub use legacy::{legacy_code, migrate_legacy_name};
pub use name::{decode_name, encode_name, ColorNameRecord};
pub use snippet::uno_theme_snippet;
pub use sort::{sort_natural_codes, sort_natural_codes_by, sort_natural_codes_by_key};
pub use swatch::{css_background, group_swatches, SwatchGroup, SwatchView};
pub use value::{
    parse_color_value, serialize_color_value, ColorValue, Gradient, GradientStop, HexColor,
    SolidColor,
};
