//! Palette and look catalogs
//!
//! Static recommendation data shipped as JSON arrays, matched against a
//! [`ToneResult`](crate::ToneResult) by undertone and depth bucket.

pub mod look;
pub mod palette;

pub use look::{filter_looks, Look, LookCatalog, LookTags};
pub use palette::{select_palette, MakeupFamilies, Palette, PaletteCatalog, RecommendedColor, Swatch};

use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::debug;

use crate::error::{AnalysisError, Result};

fn read_catalog_file(path: &Path) -> Result<String> {
    debug!(path = %path.display(), "reading catalog");
    std::fs::read_to_string(path)
        .map_err(|e| AnalysisError::catalog(format!("Failed to read {}", path.display()), e))
}

fn parse_catalog<T: DeserializeOwned>(json: &str, kind: &str) -> Result<T> {
    serde_json::from_str(json)
        .map_err(|e| AnalysisError::catalog(format!("Invalid {} catalog JSON", kind), e))
}
