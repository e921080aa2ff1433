//! Integration tests for the complete tone analysis pipeline
//!
//! These tests validate the end-to-end workflow including:
//! - Image loading and downsampling
//! - Face-relative region sampling
//! - Outlier filtering, depth and undertone classification
//! - Quality checks and palette/look matching
//! - Error handling for edge cases

use image::{DynamicImage, Rgba, RgbaImage};
use skin_tone::{
    analyze_image, analyze_tone, depth_to_label, estimate_undertone, filter_outliers,
    rgb_to_lab, AnalysisError, DepthLabel, FaceBox, ImageSample, LabColor, LookCatalog,
    PaletteCatalog, ToneAnalyzer, Undertone,
};
use std::path::Path;

fn uniform_photo(width: u32, height: u32, rgb: [u8; 3]) -> DynamicImage {
    DynamicImage::ImageRgba8(RgbaImage::from_pixel(
        width,
        height,
        Rgba([rgb[0], rgb[1], rgb[2], 255]),
    ))
}

// ============================================================================
// Error Handling Tests
// ============================================================================

#[test]
fn test_analyze_image_file_not_found() {
    let err = analyze_image(Path::new("nonexistent_file.jpg"), None).unwrap_err();
    match err {
        AnalysisError::ImageLoadError { .. } => {}
        _ => panic!("Expected ImageLoadError, got: {:?}", err),
    }
}

#[test]
fn test_analyze_image_empty_path() {
    assert!(analyze_image(Path::new(""), None).is_err());
}

#[test]
fn test_analyze_image_roundtrip_through_png() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("selfie.png");
    uniform_photo(800, 600, [200, 150, 120]).save(&path).unwrap();

    let result = analyze_image(&path, Some(FaceBox::new(200.0, 100.0, 400.0, 450.0))).unwrap();
    let lab = rgb_to_lab(200, 150, 120);
    assert!((result.lab_mean.l - lab.l).abs() < 1e-6);
    assert_eq!(result.undertone, Undertone::Warm);
}

// ============================================================================
// Documented Properties
// ============================================================================

#[test]
fn test_skin_like_rgb_lab_range() {
    let lab = rgb_to_lab(255, 224, 189);
    assert!(lab.l > 60.0 && lab.l < 100.0);
    assert!(lab.a.is_finite() && lab.b.is_finite());
}

#[test]
fn test_depth_bucket_determinism() {
    assert_eq!(depth_to_label(10.0).name(), "Very Fair");
    assert_eq!(depth_to_label(35.0).name(), "Light");
    assert_eq!(depth_to_label(55.0).name(), "Medium");
    assert_eq!(depth_to_label(80.0).name(), "Deep");
    assert_ne!(depth_to_label(14.999_999_9), depth_to_label(15.0));
}

#[test]
fn test_outlier_filter_noop_below_eight() {
    for len in 0..8 {
        let values: Vec<f64> = (0..len).map(|i| (i * i * 37 % 101) as f64).collect();
        assert_eq!(filter_outliers(&values), values);
    }
}

#[test]
fn test_confidence_always_within_bounds() {
    let mut a = -40.0;
    while a <= 40.0 {
        let mut b = -40.0;
        while b <= 40.0 {
            let mean = LabColor::new(60.0, a, b);
            let spread = vec![mean, LabColor::new(60.0, a + 30.0, b - 30.0)];
            for samples in [&[][..], &[mean][..], &spread[..]] {
                let estimate = estimate_undertone(mean, samples);
                assert!((35..=95).contains(&estimate.confidence));
            }
            b += 2.5;
        }
        a += 2.5;
    }
}

#[test]
fn test_olive_boundary_is_not_olive() {
    let mean = LabColor::new(60.0, 2.0, 14.0);
    let estimate = estimate_undertone(mean, &[mean]);
    assert_ne!(estimate.undertone, Undertone::Olive);
    assert_eq!(estimate.undertone, Undertone::Warm);
}

#[test]
fn test_uniform_ten_by_ten_scenario() {
    let sample = ImageSample::uniform(10, 10, [200, 150, 120]);
    let result = analyze_tone(&sample, None);
    let lab = rgb_to_lab(200, 150, 120);

    assert!((result.lab_mean.a - lab.a).abs() < 1e-9);
    assert!((result.lab_mean.b - lab.b).abs() < 1e-9);
    assert_eq!(result.depth, (100.0 - lab.l).round() as u8);
    assert_eq!(result.depth_label, DepthLabel::Light);
    // a ≈ 14.9, b ≈ 23.1: warm with no variability
    assert_eq!(result.undertone, Undertone::Warm);
    assert_eq!(result.confidence, 70);
}

#[test]
fn test_depth_and_label_stay_consistent() {
    for v in (0..=255).step_by(15) {
        let sample = ImageSample::uniform(40, 40, [v as u8, v as u8, v as u8]);
        let result = analyze_tone(&sample, None);
        assert!(result.depth <= 100);
        let unrounded = (100.0 - result.lab_mean.l).clamp(0.0, 100.0);
        assert_eq!(result.depth_label, depth_to_label(unrounded));
    }
}

// ============================================================================
// Pipeline Scenarios
// ============================================================================

#[test]
fn test_darker_skin_is_deeper() {
    let analyzer = ToneAnalyzer::new();
    let light = analyzer.analyze_image(&uniform_photo(300, 400, [240, 205, 180]));
    let deep = analyzer.analyze_image(&uniform_photo(300, 400, [95, 60, 45]));
    assert!(deep.depth > light.depth);
    assert!(deep.depth_label > light.depth_label);
}

#[test]
fn test_large_photo_is_downsampled_before_sampling() {
    let analyzer = ToneAnalyzer::new();
    let result = analyzer.analyze_image(&uniform_photo(2048, 1536, [200, 150, 120]));
    // 512x384 sample, default box 307.2 x 268.8 → patches of ~59 px
    assert!(result.sample_count < 3 * 61 * 61);
    assert!(result.sample_count > 3 * 57 * 57);
}

#[test]
fn test_face_box_partially_off_image() {
    let sample = ImageSample::uniform(50, 50, [170, 120, 95]);
    let result = analyze_tone(&sample, Some(FaceBox::new(-60.0, -60.0, 100.0, 100.0)));
    assert!(result.sample_count > 0);
    assert!(result.sample_count < 3 * 22 * 22);
}

// ============================================================================
// Quality and Catalog Integration
// ============================================================================

#[test]
fn test_quality_report_for_dark_photo() {
    let report = ToneAnalyzer::new().quality_report(&uniform_photo(640, 480, [15, 12, 10]));
    let lighting = report.check("lighting").unwrap();
    assert_eq!(lighting.message, "Image is too dark. Try facing a window.");
    assert!(!report.all_passed());
}

#[test]
fn test_palette_and_looks_for_result() {
    let palettes = PaletteCatalog::from_json_str(
        r#"[
            {"id": "warm-light", "undertone": "warm", "depthBucket": "Light"},
            {"id": "warm-deep", "undertone": "warm", "depthBucket": "Deep"},
            {"id": "cool-light", "undertone": "cool", "depthBucket": "Light"}
        ]"#,
    )
    .unwrap();
    let looks = LookCatalog::from_json_str(
        r#"[
            {"id": "peach", "tags": {"undertone": ["warm"], "depth": ["Light", "Medium"]}},
            {"id": "plum", "tags": {"undertone": ["cool"], "depth": ["Light"]}}
        ]"#,
    )
    .unwrap();

    let tone = analyze_tone(&ImageSample::uniform(10, 10, [200, 150, 120]), None);
    let palette = palettes.select(tone.undertone, f64::from(tone.depth)).unwrap();
    assert_eq!(palette.id, "warm-light");

    let matching = looks.matching(tone.undertone, tone.depth_label);
    assert_eq!(matching.len(), 1);
    assert_eq!(matching[0].id, "peach");
}
