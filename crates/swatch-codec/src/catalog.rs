//! Batch decoding of a color library.

use std::collections::HashMap;

use swatch_common::ParseFailure;

use crate::asset::{decode_asset, ColorAsset};
use crate::sort::sort_natural_codes_by;

/// A name that could not be decoded, with its position in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedName {
    pub index: usize,
    pub input: String,
    pub failure: ParseFailure,
}

/// Decoded colors keyed by code, plus everything that was skipped.
///
/// Inserting a code that already exists replaces the earlier asset in place.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    assets: Vec<ColorAsset>,
    by_code: HashMap<String, usize>,
    skipped: Vec<SkippedName>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode every name. Failures are logged and kept in [`Catalog::skipped`].
    pub fn decode<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut catalog = Self::new();
        for (index, name) in names.into_iter().enumerate() {
            let name = name.as_ref();
            match decode_asset(name) {
                Ok(asset) => {
                    catalog.insert(asset);
                }
                Err(failure) => catalog.skip(index, name, failure),
            }
        }
        tracing::debug!(
            decoded = catalog.len(),
            skipped = catalog.skipped.len(),
            "decoded color catalog"
        );
        catalog
    }

    /// Add an asset, returning the one it replaced.
    pub fn insert(&mut self, asset: ColorAsset) -> Option<ColorAsset> {
        match self.by_code.get(asset.code()) {
            Some(&slot) => Some(std::mem::replace(&mut self.assets[slot], asset)),
            None => {
                self.by_code
                    .insert(asset.code().to_string(), self.assets.len());
                self.assets.push(asset);
                None
            }
        }
    }

    /// Record a failed item.
    pub fn skip(&mut self, index: usize, input: &str, failure: ParseFailure) {
        tracing::warn!(
            index,
            input,
            reason = failure.reason(),
            "skipping color: {failure}"
        );
        self.skipped.push(SkippedName {
            index,
            input: input.to_string(),
            failure,
        });
    }

    pub fn get(&self, code: &str) -> Option<&ColorAsset> {
        self.by_code.get(code).map(|&slot| &self.assets[slot])
    }

    /// Assets in insertion order.
    pub fn assets(&self) -> &[ColorAsset] {
        &self.assets
    }

    /// Assets ordered naturally by code.
    pub fn sorted(&self) -> Vec<&ColorAsset> {
        let mut assets: Vec<&ColorAsset> = self.assets.iter().collect();
        sort_natural_codes_by(&mut assets, |asset| asset.code());
        assets
    }

    pub fn skipped(&self) -> &[SkippedName] {
        &self.skipped
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

/// Decode a list of color names into a [`Catalog`].
pub fn decode_catalog<I, S>(names: I) -> Catalog
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Catalog::decode(names)
}
