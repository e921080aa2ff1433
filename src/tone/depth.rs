//! Depth scale and depth buckets

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::DEPTH_THRESHOLDS;

/// Seven ordered depth buckets, lightest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DepthLabel {
    #[serde(rename = "Very Fair")]
    VeryFair,
    Fair,
    Light,
    Medium,
    Tan,
    Deep,
    #[serde(rename = "Very Deep")]
    VeryDeep,
}

impl DepthLabel {
    /// Get human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Self::VeryFair => "Very Fair",
            Self::Fair => "Fair",
            Self::Light => "Light",
            Self::Medium => "Medium",
            Self::Tan => "Tan",
            Self::Deep => "Deep",
            Self::VeryDeep => "Very Deep",
        }
    }

    /// All buckets in order
    pub fn all() -> &'static [DepthLabel] {
        &[
            DepthLabel::VeryFair,
            DepthLabel::Fair,
            DepthLabel::Light,
            DepthLabel::Medium,
            DepthLabel::Tan,
            DepthLabel::Deep,
            DepthLabel::VeryDeep,
        ]
    }

    /// Parse a display name such as `"Very Fair"`
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|label| label.name() == name)
    }
}

impl fmt::Display for DepthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Bucket a depth value. Thresholds are strict upper bounds: 15 is
/// already "Fair".
pub fn depth_to_label(depth: f64) -> DepthLabel {
    DEPTH_THRESHOLDS
        .iter()
        .position(|&limit| depth < limit)
        .map_or(DepthLabel::VeryDeep, |idx| DepthLabel::all()[idx])
}

/// `100 - L`, clamped to `[0, 100]`
pub fn depth_from_lightness(l: f64) -> f64 {
    (100.0 - l).clamp(0.0, 100.0)
}
