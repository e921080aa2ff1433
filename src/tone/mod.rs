//! Tone analysis: depth and undertone from sampled skin
//!
//! ```text
//! ImageSample + FaceBox?
//!     │
//!     ├──► sample_regions      (cheeks + jaw → Lab)
//!     ├──► OutlierFilter       (IQR fences on L)
//!     ├──► mean_lab            (trimmed mean)
//!     ├──► depth_to_label      (7 buckets)
//!     └──► estimate_undertone  (all samples for variability)
//!
//! Output: ToneResult
//! ```

pub mod depth;
pub mod undertone;

pub use depth::{depth_from_lightness, depth_to_label, DepthLabel};
pub use undertone::{classify_undertone, estimate_undertone, Undertone, UndertoneEstimate};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::color::{mean_lab, LabColor, OutlierFilter};
use crate::detection::{sample_regions, FaceBox};
use crate::image_loader::ImageSample;

/// Outcome of one tone analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToneResult {
    /// 0 (lightest) to 100 (darkest)
    pub depth: u8,
    pub depth_label: DepthLabel,
    pub undertone: Undertone,
    /// Percentage, always within 35-95
    pub confidence: u8,
    /// Trimmed mean the depth and undertone were derived from
    pub lab_mean: LabColor,
    /// Pixels sampled before outlier filtering
    pub sample_count: usize,
    /// Pixels that survived outlier filtering
    pub retained_count: usize,
}

/// Analyze skin tone with the default outlier filter.
///
/// `face_box` is in the pixel coordinates of `sample`; when absent (or
/// unusable) a centered default box is used. Never fails: with no
/// samples the mean falls back to `{0, 0, 0}`.
pub fn analyze_tone(sample: &ImageSample, face_box: Option<FaceBox>) -> ToneResult {
    analyze_tone_with(sample, face_box, &OutlierFilter::new())
}

/// Analyze skin tone with a custom outlier filter
pub fn analyze_tone_with(
    sample: &ImageSample,
    face_box: Option<FaceBox>,
    filter: &OutlierFilter,
) -> ToneResult {
    let samples = sample_regions(sample, face_box);
    let trimmed = filter.retain_by_lightness(&samples);
    if trimmed.is_empty() {
        warn!(
            width = sample.width(),
            height = sample.height(),
            "no skin samples inside the image; tone falls back to a zero mean"
        );
    }

    let lab_mean = mean_lab(&trimmed);
    let depth = depth_from_lightness(lab_mean.l);
    let depth_label = depth_to_label(depth);
    let UndertoneEstimate {
        undertone,
        confidence,
    } = estimate_undertone(lab_mean, &samples);

    let result = ToneResult {
        depth: depth.round() as u8,
        depth_label,
        undertone,
        confidence,
        lab_mean,
        sample_count: samples.len(),
        retained_count: trimmed.len(),
    };

    debug!(
        samples = result.sample_count,
        retained = result.retained_count,
        depth = result.depth,
        depth_label = %result.depth_label,
        undertone = %result.undertone,
        confidence = result.confidence,
        "tone analyzed"
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::rgb_to_lab;

    #[test]
    fn test_uniform_sample_mean_is_exact() {
        let sample = ImageSample::uniform(10, 10, [200, 150, 120]);
        let result = analyze_tone(&sample, None);
        let lab = rgb_to_lab(200, 150, 120);

        assert!((result.lab_mean.l - lab.l).abs() < 1e-9);
        assert!((result.lab_mean.a - lab.a).abs() < 1e-9);
        assert!((result.lab_mean.b - lab.b).abs() < 1e-9);
        assert_eq!(result.sample_count, result.retained_count);
        assert_eq!(result.sample_count, 12);

        let depth = (100.0 - lab.l).clamp(0.0, 100.0);
        assert_eq!(result.depth, depth.round() as u8);
        assert_eq!(result.depth_label, depth_to_label(depth));

        let (undertone, signal) = classify_undertone(lab.a, lab.b);
        assert_eq!(result.undertone, undertone);
        let expected = (100.0 * signal.clamp(0.35, 0.95)).round() as u8;
        assert_eq!(result.confidence, expected);
    }

    #[test]
    fn test_empty_sample_falls_back_to_zero_mean() {
        let sample = ImageSample::uniform(10, 10, [200, 150, 120]);
        let result = analyze_tone(&sample, Some(FaceBox::new(1000.0, 1000.0, 50.0, 50.0)));

        assert_eq!(result.sample_count, 0);
        assert_eq!(result.lab_mean, LabColor::default());
        assert_eq!(result.depth, 100);
        assert_eq!(result.depth_label, DepthLabel::VeryDeep);
        // mean (0, 0) lands in the fallback neutral branch, variability 0.4
        assert_eq!(result.undertone, Undertone::Neutral);
        assert_eq!(result.confidence, 35);
    }

    #[test]
    fn test_outliers_do_not_move_the_mean() {
        // Skin-colored image with a few specular pixels inside the left cheek
        let (w, h) = (100u32, 100u32);
        let mut data = Vec::with_capacity((w * h * 4) as usize);
        for y in 0..h {
            for x in 0..w {
                let px = if y == 50 && (20..23).contains(&x) {
                    [255, 255, 255, 255]
                } else {
                    [180, 130, 100, 255]
                };
                data.extend_from_slice(&px);
            }
        }
        let sample = ImageSample::from_rgba(w, h, data).unwrap();
        let face = Some(FaceBox::new(0.0, 0.0, 100.0, 100.0));
        let result = analyze_tone(&sample, face);

        assert_eq!(result.retained_count, result.sample_count - 3);
        let skin = rgb_to_lab(180, 130, 100);
        assert!((result.lab_mean.l - skin.l).abs() < 1e-9);
        // The highlights still count toward variability
        let clean = analyze_tone(&ImageSample::uniform(w, h, [180, 130, 100]), face);
        assert_eq!(clean.undertone, result.undertone);
        assert!(result.confidence < clean.confidence);
    }

    #[test]
    fn test_result_serializes_camel_case() {
        let sample = ImageSample::uniform(10, 10, [200, 150, 120]);
        let json = serde_json::to_value(analyze_tone(&sample, None)).unwrap();
        assert!(json.get("depthLabel").is_some());
        assert!(json.get("labMean").and_then(|m| m.get("l")).is_some());
        assert!(json.get("sampleCount").is_some());
    }
}
