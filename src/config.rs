//! Configuration structures for the skin_tone analysis pipeline.
//!
//! This module defines the tunable parameters for tone analysis,
//! organized into groups for sampling, outlier filtering and
//! capture quality checks.
//!
//! # Configuration Loading
//!
//! Configuration can be loaded from JSON files or constructed programmatically:
//!
//! ```no_run
//! use skin_tone::AnalysisConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = AnalysisConfig::from_json_file(Path::new("tone.json"))?;
//!
//! // Or use defaults
//! let config = AnalysisConfig::default();
//! # Ok::<(), skin_tone::AnalysisError>(())
//! ```
//!
//! Missing sections and fields fall back to their defaults, so a config
//! file only needs to name what it changes.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants::{processing, quality, statistics};
use crate::error::{AnalysisError, Result};

/// Complete pipeline configuration for tone analysis.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Downsampling for the analysis pass
    pub sampling: SamplingConfig,

    /// Lightness outlier filter
    pub outliers: OutlierConfig,

    /// Capture quality checks
    pub quality: QualityConfig,
}

/// Downsampling parameters for the analysis pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingConfig {
    /// Longest side of the analysis sample in pixels (never upscaled)
    pub target_size: u32,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            target_size: processing::ANALYSIS_TARGET_SIZE,
        }
    }
}

/// Outlier filter parameters.
///
/// Lightness values outside `[Q1 - k*IQR, Q3 + k*IQR]` are dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutlierConfig {
    /// Samples below this count are not filtered
    pub min_samples: usize,

    /// Fence multiplier `k`
    pub iqr_multiplier: f64,
}

impl Default for OutlierConfig {
    fn default() -> Self {
        Self {
            min_samples: statistics::MIN_OUTLIER_SAMPLES,
            iqr_multiplier: statistics::IQR_MULTIPLIER,
        }
    }
}

/// Capture quality check parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QualityConfig {
    /// Longest side of the quality-check sample in pixels
    pub target_size: u32,

    /// Mean luma below this is reported as too dark
    pub min_luma: f64,

    /// Mean luma above this is reported as too bright
    pub max_luma: f64,

    /// Channel-mean spread above this is reported as a color cast
    pub max_cast: f64,

    /// Laplacian variance above this passes the sharpness check
    pub min_sharpness: f64,
}

impl Default for QualityConfig {
    fn default() -> Self {
        Self {
            target_size: processing::QUALITY_TARGET_SIZE,
            min_luma: quality::MIN_LUMA,
            max_luma: quality::MAX_LUMA,
            max_cast: quality::MAX_CAST,
            min_sharpness: quality::MIN_SHARPNESS,
        }
    }
}

impl AnalysisConfig {
    /// Load configuration from JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            AnalysisError::config(format!("Failed to read {}", path.display()), e)
        })?;
        Self::from_json_str(&content)
    }

    /// Parse and validate configuration from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| AnalysisError::config("Invalid configuration JSON", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| AnalysisError::config("Failed to serialize configuration", e))?;
        std::fs::write(path, json).map_err(|e| {
            AnalysisError::config(format!("Failed to write {}", path.display()), e)
        })?;
        Ok(())
    }

    /// Check parameter ranges
    pub fn validate(&self) -> Result<()> {
        if self.sampling.target_size == 0 {
            return Err(AnalysisError::invalid_parameter(
                "sampling.target_size",
                self.sampling.target_size,
            ));
        }
        if self.quality.target_size == 0 {
            return Err(AnalysisError::invalid_parameter(
                "quality.target_size",
                self.quality.target_size,
            ));
        }
        if !self.outliers.iqr_multiplier.is_finite() || self.outliers.iqr_multiplier < 0.0 {
            return Err(AnalysisError::invalid_parameter(
                "outliers.iqr_multiplier",
                self.outliers.iqr_multiplier,
            ));
        }
        if self.quality.min_luma >= self.quality.max_luma {
            return Err(AnalysisError::invalid_parameter(
                "quality.min_luma",
                format!("{} (max_luma = {})", self.quality.min_luma, self.quality.max_luma),
            ));
        }
        Ok(())
    }
}
