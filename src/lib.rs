//! # Skin Tone
//!
//! A Rust crate for estimating skin depth and undertone from face photographs.
//!
//! This library provides:
//! - Downsampling of decoded photos to a small RGBA sample
//! - Sampling of both cheeks and the jaw relative to a face box
//! - sRGB → CIE Lab conversion with IQR outlier filtering on lightness
//! - Depth buckets, undertone classification and a confidence score
//! - Capture quality checks and palette/look matching
//!
//! ## Example
//!
//! ```rust,no_run
//! use skin_tone::{analyze_image, ToneResult};
//! use std::path::Path;
//!
//! let result: ToneResult = analyze_image(Path::new("selfie.jpg"), None)?;
//! println!("{} / {} ({}%)", result.depth_label, result.undertone, result.confidence);
//! # Ok::<(), skin_tone::AnalysisError>(())
//! ```

use std::path::Path;

pub mod error;
pub mod constants;
pub mod config;
pub mod color;
pub mod detection;
pub mod image_loader;
pub mod tone;
pub mod quality;
pub mod catalog;
pub mod analyzer;

pub use analyzer::ToneAnalyzer;
pub use catalog::{filter_looks, select_palette, Look, LookCatalog, Palette, PaletteCatalog};
pub use color::{filter_outliers, rgb_to_lab, LabColor};
pub use config::AnalysisConfig;
pub use detection::{sample_regions, FaceBox, FaceDetection, FaceDetector};
pub use error::{AnalysisError, Result};
pub use image_loader::{load_image, ImageSample};
pub use quality::{run_quality_checks, QualityReport};
pub use tone::{analyze_tone, depth_to_label, estimate_undertone, DepthLabel, ToneResult, Undertone};

/// Load a photo and analyze its skin tone with default settings
///
/// `face_box` is in the photo's own pixel coordinates. When `None`, a
/// centered default region is sampled.
///
/// # Errors
///
/// Returns `AnalysisError::ImageLoadError` if the file cannot be read or
/// decoded. The analysis itself cannot fail.
pub fn analyze_image(image_path: &Path, face_box: Option<FaceBox>) -> Result<ToneResult> {
    let image = load_image(image_path)?;
    Ok(ToneAnalyzer::new().analyze_image_with_box(&image, face_box))
}
