//! Skin region placement and pixel sampling
//!
//! Three square patches are placed relative to the face box (both
//! cheeks and the jaw) and every in-bounds pixel inside them is
//! converted to Lab.

use serde::{Deserialize, Serialize};

use crate::color::{rgb_to_lab, LabColor};
use crate::constants::sampling;
use crate::detection::FaceBox;
use crate::image_loader::ImageSample;

/// Where on the face a patch sits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionKind {
    LeftCheek,
    RightCheek,
    Jaw,
}

/// A square sampling patch; `x`/`y` is the top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkinRegion {
    pub kind: RegionKind,
    pub x: f64,
    pub y: f64,
    pub size: f64,
}

/// Use `face_box` when it is usable, otherwise the default centered box.
///
/// A box with non-finite coordinates or a non-positive side counts as
/// missing.
pub fn resolve_face_box(sample: &ImageSample, face_box: Option<FaceBox>) -> FaceBox {
    match face_box {
        Some(b)
            if [b.x, b.y, b.width, b.height].iter().all(|v| v.is_finite())
                && b.width > 0.0
                && b.height > 0.0 =>
        {
            b
        }
        _ => FaceBox::default_for(sample.width(), sample.height()),
    }
}

/// Patches for `face_box`, in sampling order
pub fn skin_regions(face_box: &FaceBox) -> [SkinRegion; 3] {
    let size = face_box.width.min(face_box.height) * sampling::REGION_SIZE_FACTOR;
    let place = |kind, [fx, fy]: [f64; 2]| SkinRegion {
        kind,
        x: face_box.x + face_box.width * fx,
        y: face_box.y + face_box.height * fy,
        size,
    };
    [
        place(RegionKind::LeftCheek, sampling::LEFT_CHEEK),
        place(RegionKind::RightCheek, sampling::RIGHT_CHEEK),
        place(RegionKind::Jaw, sampling::JAW),
    ]
}

/// Advance a negative start by whole pixels so the walk begins at the
/// first non-negative coordinate.
fn first_visible(start: f64) -> f64 {
    if start < 0.0 {
        start + (-start).floor()
    } else {
        start
    }
}

/// Lab values of every in-bounds pixel of one patch, row-major.
///
/// Coordinates step by one pixel from the patch corner and are floored
/// when indexing, so fractional corners are honored.
pub fn sample_region(sample: &ImageSample, region: &SkinRegion, out: &mut Vec<LabColor>) {
    let (width, height) = (f64::from(sample.width()), f64::from(sample.height()));
    let y_end = region.y + region.size;
    let x_end = region.x + region.size;

    let mut y = first_visible(region.y);
    while y < y_end {
        if y >= height {
            break;
        }
        if y >= 0.0 {
            let mut x = first_visible(region.x);
            while x < x_end {
                if x >= width {
                    break;
                }
                if x >= 0.0 {
                    if let Some([r, g, b]) = sample.rgb_at(x.floor() as u32, y.floor() as u32) {
                        out.push(rgb_to_lab(r, g, b));
                    }
                }
                x += 1.0;
            }
        }
        y += 1.0;
    }
}

/// Sample both cheeks and the jaw.
///
/// Returns one flat sequence: left cheek, right cheek, then jaw, each
/// row-major. Pixels outside the image are skipped.
pub fn sample_regions(sample: &ImageSample, face_box: Option<FaceBox>) -> Vec<LabColor> {
    let face_box = resolve_face_box(sample, face_box);
    let mut samples = Vec::new();
    for region in skin_regions(&face_box) {
        sample_region(sample, &region, &mut samples);
    }
    samples
}
