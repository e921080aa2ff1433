//! Capture quality checks
//!
//! Cheap pre-analysis checks on a small downsample of the photo:
//! exposure, color cast and sharpness. Results are advisory; the tone
//! analysis runs regardless.

pub mod lighting;
pub mod sharpness;

pub use lighting::{evaluate_lighting, ChannelMeans, LightingStats};
pub use sharpness::laplacian_variance;

use image::DynamicImage;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::QualityConfig;
use crate::image_loader::ImageSample;

/// Outcome of a single check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityStatus {
    Pass,
    Warn,
    /// Decided later in the pipeline
    Pending,
}

/// One row of the quality report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityCheck {
    /// Stable identifier: "face", "lighting" or "blur"
    pub key: String,
    pub label: String,
    pub status: QualityStatus,
    pub message: String,
}

impl QualityCheck {
    fn new(key: &str, label: &str, status: QualityStatus, message: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            status,
            message: message.to_string(),
        }
    }
}

/// All checks plus the measurements behind them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityReport {
    pub checks: Vec<QualityCheck>,
    pub lighting: LightingStats,
    pub sharpness: f64,
}

impl QualityReport {
    /// True when no check warned
    pub fn all_passed(&self) -> bool {
        self.checks.iter().all(|c| c.status != QualityStatus::Warn)
    }

    pub fn check(&self, key: &str) -> Option<&QualityCheck> {
        self.checks.iter().find(|c| c.key == key)
    }
}

fn lighting_check(stats: &LightingStats, config: &QualityConfig) -> QualityCheck {
    let status = if stats.avg_luma > config.min_luma && stats.avg_luma < config.max_luma {
        QualityStatus::Pass
    } else {
        QualityStatus::Warn
    };
    let message = if stats.avg_luma < config.min_luma {
        "Image is too dark. Try facing a window."
    } else if stats.avg_luma > config.max_luma {
        "Image is too bright. Avoid harsh light."
    } else if stats.cast > config.max_cast {
        "Strong color cast detected. Use neutral lighting."
    } else {
        "Lighting looks balanced."
    };
    QualityCheck::new("lighting", "Lighting & exposure", status, message)
}

fn sharpness_check(variance: f64, config: &QualityConfig) -> QualityCheck {
    if variance > config.min_sharpness {
        QualityCheck::new("blur", "Sharpness", QualityStatus::Pass, "Looks sharp enough.")
    } else {
        QualityCheck::new("blur", "Sharpness", QualityStatus::Warn, "Image looks blurry. Hold steady.")
    }
}

/// Run the checks on an already downsampled sample
pub fn check_sample(sample: &ImageSample, config: &QualityConfig) -> QualityReport {
    let lighting = evaluate_lighting(sample);
    let sharpness = laplacian_variance(sample);

    let checks = vec![
        QualityCheck::new(
            "face",
            "Face detected & large enough",
            QualityStatus::Pending,
            "Face detection will run during analysis.",
        ),
        lighting_check(&lighting, config),
        sharpness_check(sharpness, config),
    ];

    debug!(
        avg_luma = lighting.avg_luma,
        cast = lighting.cast,
        sharpness,
        "quality checks complete"
    );

    QualityReport {
        checks,
        lighting,
        sharpness,
    }
}

/// Downsample `image` to `config.target_size` and run the checks
pub fn run_quality_checks(image: &DynamicImage, config: &QualityConfig) -> QualityReport {
    let sample = ImageSample::from_image(image, config.target_size);
    check_sample(&sample, config)
}
