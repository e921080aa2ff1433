//! Face bounding boxes and the face detection seam
//!
//! Face detection itself is provided by the host (a platform API, an
//! ONNX model, ...). This module defines the box type the sampler
//! consumes and the trait a detector implements.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::constants::sampling;
use crate::error::AnalysisError;
use crate::image_loader::ImageSample;

/// Axis-aligned face rectangle in pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FaceBox {
    /// X coordinate of the top-left corner
    pub x: f64,
    /// Y coordinate of the top-left corner
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl FaceBox {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Centered box covering 60% of the width and 70% of the height,
    /// used when no face was detected.
    pub fn default_for(width: u32, height: u32) -> Self {
        let [fx, fy, fw, fh] = sampling::DEFAULT_BOX;
        let (w, h) = (f64::from(width), f64::from(height));
        Self::new(w * fx, h * fy, w * fw, h * fh)
    }

    /// Multiply every coordinate by `factor`
    pub fn scaled(&self, factor: f64) -> Self {
        Self::new(
            self.x * factor,
            self.y * factor,
            self.width * factor,
            self.height * factor,
        )
    }
}

/// Parses `"x,y,width,height"`. Every field must be a number.
impl FromStr for FaceBox {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields = s
            .split(',')
            .map(|field| field.trim().parse::<f64>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| AnalysisError::invalid_parameter("face_box", s))?;

        match fields.as_slice() {
            [x, y, width, height] => Ok(Self::new(*x, *y, *width, *height)),
            _ => Err(AnalysisError::invalid_parameter("face_box", s)),
        }
    }
}

/// Whether the detector could run at all
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetectionSupport {
    /// The detector ran; `faces` may still be empty
    Native,
    /// No detector is available on this platform
    Unsupported,
    /// The detector is available but errored
    Failed,
}

/// Faces found in one sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaceDetection {
    pub faces: Vec<FaceBox>,
    pub support: DetectionSupport,
}

impl FaceDetection {
    pub fn unsupported() -> Self {
        Self {
            faces: Vec::new(),
            support: DetectionSupport::Unsupported,
        }
    }

    pub fn failed() -> Self {
        Self {
            faces: Vec::new(),
            support: DetectionSupport::Failed,
        }
    }

    /// The face analysis should use, if any
    pub fn primary(&self) -> Option<FaceBox> {
        self.faces.first().copied()
    }
}

/// Pluggable face detection backend.
///
/// Boxes are returned in the pixel coordinates of the sample passed in.
pub trait FaceDetector: Send + Sync {
    fn detect(&self, sample: &ImageSample) -> FaceDetection;
}
