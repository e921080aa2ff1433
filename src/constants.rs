//! Reference values and thresholds for tone analysis
//!
//! This module contains compile-time constants for color conversion,
//! region sampling, outlier filtering, undertone classification and
//! capture quality checks.

/// D65 Standard Illuminant Reference
///
/// CIE Standard Illuminant D65 represents average daylight with a correlated
/// color temperature of 6504K. This is the standard reference for digital
/// images and computer displays.
pub mod d65 {
    /// D65 white point in CIE XYZ color space
    /// Source: CIE 15:2004 Colorimetry, 3rd edition
    pub const WHITE_POINT_XYZ: [f64; 3] = [0.95047, 1.00000, 1.08883];
}

/// Re-export D65 white point at top level for convenience
pub const D65_WHITE_POINT_XYZ: [f64; 3] = d65::WHITE_POINT_XYZ;

/// sRGB transfer function and primaries
pub mod srgb {
    /// Encoded values at or below this threshold use the linear segment
    pub const LINEAR_THRESHOLD: f64 = 0.04045;

    /// Slope of the linear segment
    pub const LINEAR_SLOPE: f64 = 12.92;

    /// Linear RGB to XYZ (D65), row-major
    pub const TO_XYZ: [[f64; 3]; 3] = [
        [0.4124, 0.3576, 0.1805],
        [0.2126, 0.7152, 0.0722],
        [0.0193, 0.1192, 0.9505],
    ];

    /// Rec. 709 luma weights, used for exposure and sharpness checks
    pub const LUMA_WEIGHTS: [f64; 3] = [0.2126, 0.7152, 0.0722];
}

/// CIE Lab nonlinearity parameters
pub mod lab {
    /// Cube root is applied above this value
    pub const EPSILON: f64 = 0.008856;

    /// Slope of the linear segment below `EPSILON`
    pub const KAPPA_SLOPE: f64 = 7.787;

    /// Offset of the linear segment below `EPSILON`
    pub const OFFSET: f64 = 16.0 / 116.0;
}

/// Image processing parameters
pub mod processing {
    /// Longest side of the sample used for tone analysis
    pub const ANALYSIS_TARGET_SIZE: u32 = 512;

    /// Longest side of the sample used for quality checks
    pub const QUALITY_TARGET_SIZE: u32 = 320;

    /// Bytes per RGBA pixel
    pub const RGBA_CHANNELS: usize = 4;
}

/// Face-relative sampling geometry
///
/// All offsets are fractions of the face box size.
pub mod sampling {
    /// Default face box when no detection is available: (x, y, width, height)
    /// as fractions of the image size
    pub const DEFAULT_BOX: [f64; 4] = [0.2, 0.1, 0.6, 0.7];

    /// Square region side as a fraction of the shorter box side
    pub const REGION_SIZE_FACTOR: f64 = 0.22;

    /// Left cheek top-left corner
    pub const LEFT_CHEEK: [f64; 2] = [0.18, 0.45];

    /// Right cheek top-left corner
    pub const RIGHT_CHEEK: [f64; 2] = [0.60, 0.45];

    /// Jaw top-left corner
    pub const JAW: [f64; 2] = [0.35, 0.72];
}

/// Statistical analysis parameters
pub mod statistics {
    /// Below this many values the IQR filter is skipped
    pub const MIN_OUTLIER_SAMPLES: usize = 8;

    /// Tukey fence multiplier
    pub const IQR_MULTIPLIER: f64 = 1.5;

    /// Quartile positions in the sorted sample
    pub const Q1_FRACTION: f64 = 0.25;
    pub const Q3_FRACTION: f64 = 0.75;

    /// Chroma spread is divided by this before being used as a penalty
    pub const VARIABILITY_SCALE: f64 = 50.0;

    /// Upper bound of the variability penalty (also used with no samples)
    pub const MAX_VARIABILITY: f64 = 0.4;
}

/// Undertone classification thresholds and confidence bounds
pub mod undertone {
    pub const OLIVE_MAX_A: f64 = 2.0;
    pub const OLIVE_B_RANGE: (f64, f64) = (6.0, 14.0);
    pub const OLIVE_SIGNAL: f64 = 0.65;

    pub const WARM_MIN_B: f64 = 12.0;
    pub const WARM_MIN_B_MINUS_A: f64 = 5.0;
    pub const WARM_SIGNAL: f64 = 0.7;

    pub const COOL_MAX_B: f64 = 7.0;
    pub const COOL_MIN_A: f64 = 6.0;
    pub const COOL_SIGNAL: f64 = 0.7;

    pub const NEUTRAL_B_RANGE: (f64, f64) = (7.0, 12.0);
    pub const NEUTRAL_SIGNAL: f64 = 0.6;
    pub const FALLBACK_SIGNAL: f64 = 0.5;

    pub const MIN_CONFIDENCE: f64 = 0.35;
    pub const MAX_CONFIDENCE: f64 = 0.95;
}

/// Depth bucket upper bounds (exclusive), lightest first
pub const DEPTH_THRESHOLDS: [f64; 6] = [15.0, 30.0, 45.0, 60.0, 75.0, 90.0];

/// Capture quality thresholds
pub mod quality {
    /// Mean luma below this is too dark
    pub const MIN_LUMA: f64 = 70.0;

    /// Mean luma above this is too bright
    pub const MAX_LUMA: f64 = 190.0;

    /// Spread between channel means above this is a color cast
    pub const MAX_CAST: f64 = 25.0;

    /// Laplacian variance above this counts as sharp
    pub const MIN_SHARPNESS: f64 = 70.0;
}
