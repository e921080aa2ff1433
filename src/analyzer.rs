//! Image-level tone analysis
//!
//! [`ToneAnalyzer`] ties the stages together for a decoded photo:
//! downsampling, optional face detection, and tone analysis with the
//! configured outlier filter.

use image::DynamicImage;
use tracing::{debug, info};

use crate::color::OutlierFilter;
use crate::config::AnalysisConfig;
use crate::detection::{DetectionSupport, FaceBox, FaceDetector};
use crate::error::Result;
use crate::image_loader::{downsample_scale, ImageSample};
use crate::quality::{run_quality_checks, QualityReport};
use crate::tone::{analyze_tone_with, ToneResult};

/// Configured analysis pipeline
pub struct ToneAnalyzer {
    config: AnalysisConfig,
    detector: Option<Box<dyn FaceDetector>>,
}

impl Default for ToneAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ToneAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToneAnalyzer")
            .field("config", &self.config)
            .field("detector", &self.detector.is_some())
            .finish()
    }
}

impl ToneAnalyzer {
    /// Create an analyzer with default configuration and no face detector
    pub fn new() -> Self {
        Self {
            config: AnalysisConfig::default(),
            detector: None,
        }
    }

    /// Create an analyzer with a validated custom configuration
    pub fn with_config(config: AnalysisConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            detector: None,
        })
    }

    /// Attach a face detector, run on every analysis sample
    pub fn face_detector(mut self, detector: Box<dyn FaceDetector>) -> Self {
        self.detector = Some(detector);
        self
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Downsample a photo for analysis
    pub fn prepare(&self, image: &DynamicImage) -> ImageSample {
        ImageSample::from_image(image, self.config.sampling.target_size)
    }

    /// Analyze a pre-sampled buffer; `face_box` is in sample coordinates
    pub fn analyze_sample(&self, sample: &ImageSample, face_box: Option<FaceBox>) -> ToneResult {
        let filter = OutlierFilter::from(&self.config.outliers);
        analyze_tone_with(sample, face_box, &filter)
    }

    /// Analyze a photo, locating the face with the attached detector.
    ///
    /// Without a detector, or when it finds nothing, the default centered
    /// box is used.
    pub fn analyze_image(&self, image: &DynamicImage) -> ToneResult {
        let sample = self.prepare(image);
        let face_box = self.detector.as_ref().and_then(|detector| {
            let detection = detector.detect(&sample);
            if detection.support != DetectionSupport::Native {
                info!(support = ?detection.support, "face detection unavailable, using default region");
            }
            detection.primary()
        });
        debug!(detected = face_box.is_some(), "analyzing image");
        self.analyze_sample(&sample, face_box)
    }

    /// Analyze a photo with a face box in original image pixels.
    ///
    /// The box is scaled by the same factor as the image.
    pub fn analyze_image_with_box(&self, image: &DynamicImage, face_box: Option<FaceBox>) -> ToneResult {
        let scale = downsample_scale(image.width(), image.height(), self.config.sampling.target_size);
        let sample = self.prepare(image);
        self.analyze_sample(&sample, face_box.map(|b| b.scaled(scale)))
    }

    /// Run the capture quality checks with this analyzer's thresholds
    pub fn quality_report(&self, image: &DynamicImage) -> QualityReport {
        run_quality_checks(image, &self.config.quality)
    }
}
