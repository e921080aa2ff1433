//! Color palette recommendations keyed by undertone and depth

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::catalog::{read_catalog_file, parse_catalog};
use crate::error::Result;
use crate::tone::{depth_to_label, DepthLabel, Undertone};

/// A named color swatch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Swatch {
    pub name: String,
    pub hex: String,
}

/// A recommended clothing/accessory color
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendedColor {
    pub name: String,
    pub hex: String,
    pub category: String,
}

/// Makeup shades grouped by product family
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MakeupFamilies {
    #[serde(default)]
    pub blush: Vec<Swatch>,
    #[serde(default)]
    pub lipstick: Vec<Swatch>,
    #[serde(default)]
    pub eyeshadow: Vec<Swatch>,
    #[serde(default)]
    pub eyeliner: Vec<Swatch>,
}

/// Palette for one undertone / depth bucket combination
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    pub id: String,
    pub undertone: Undertone,
    pub depth_bucket: DepthLabel,
    #[serde(default)]
    pub recommended_colors: Vec<RecommendedColor>,
    #[serde(default)]
    pub makeup_families: MakeupFamilies,
}

/// All known palettes, in file order
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaletteCatalog {
    pub palettes: Vec<Palette>,
}

impl PaletteCatalog {
    /// Load from a JSON array file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = read_catalog_file(path)?;
        Self::from_json_str(&content)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        parse_catalog(json, "palette")
    }

    pub fn len(&self) -> usize {
        self.palettes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.palettes.is_empty()
    }

    /// See [`select_palette`]
    pub fn select(&self, undertone: Undertone, depth: f64) -> Option<&Palette> {
        select_palette(&self.palettes, undertone, depth)
    }
}

/// Pick the palette for a tone.
///
/// Preference order: same undertone and depth bucket, then the first
/// palette with the same undertone, then the first palette overall.
/// Only an empty list yields `None`.
pub fn select_palette(palettes: &[Palette], undertone: Undertone, depth: f64) -> Option<&Palette> {
    let depth_label = depth_to_label(depth);
    let mut matches = palettes.iter().filter(|p| p.undertone == undertone);

    matches
        .clone()
        .find(|p| p.depth_bucket == depth_label)
        .or_else(|| matches.next())
        .or_else(|| palettes.first())
}
