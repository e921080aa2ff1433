//! Color space conversion utilities
//!
//! Provides the sRGB (0-255) → XYZ → CIE Lab conversion used for skin
//! sampling, plus display conversions (LCh, sRGB, hex) built on `palette`.
//!
//! The analysis conversion is written out rather than delegated to
//! `palette` because its matrix and Lab constants are the rounded
//! four-digit values the tone thresholds were tuned against.

use palette::{white_point::D65, FromColor, Lab, Lch, Srgb};
use serde::{Deserialize, Serialize};

use crate::constants::{lab, srgb, D65_WHITE_POINT_XYZ};
use crate::{AnalysisError, Result};

/// A CIE Lab color with `f64` components.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LabColor {
    /// Lightness, 0 (black) to 100 (white)
    pub l: f64,
    /// Green (negative) to red (positive)
    pub a: f64,
    /// Blue (negative) to yellow (positive)
    pub b: f64,
}

impl LabColor {
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Chroma, the distance from the neutral axis
    pub fn chroma(&self) -> f64 {
        self.a.hypot(self.b)
    }
}

impl From<LabColor> for Lab<D65, f64> {
    fn from(color: LabColor) -> Self {
        Lab::new(color.l, color.a, color.b)
    }
}

impl From<Lab<D65, f64>> for LabColor {
    fn from(color: Lab<D65, f64>) -> Self {
        LabColor::new(color.l, color.a, color.b)
    }
}

/// CIE XYZ tristimulus values relative to a white of Y = 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct XyzColor {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Undo the sRGB transfer curve for one 8-bit channel.
fn linearize(value: u8) -> f64 {
    let channel = f64::from(value) / 255.0;
    if channel <= srgb::LINEAR_THRESHOLD {
        channel / srgb::LINEAR_SLOPE
    } else {
        ((channel + 0.055) / 1.055).powf(2.4)
    }
}

/// Lab companding function.
fn lab_f(t: f64) -> f64 {
    if t > lab::EPSILON {
        t.cbrt()
    } else {
        lab::KAPPA_SLOPE * t + lab::OFFSET
    }
}

/// Convert 8-bit sRGB to XYZ (D65).
pub fn rgb_to_xyz(r: u8, g: u8, b: u8) -> XyzColor {
    let (rl, gl, bl) = (linearize(r), linearize(g), linearize(b));
    let m = &srgb::TO_XYZ;
    XyzColor {
        x: rl * m[0][0] + gl * m[0][1] + bl * m[0][2],
        y: rl * m[1][0] + gl * m[1][1] + bl * m[1][2],
        z: rl * m[2][0] + gl * m[2][1] + bl * m[2][2],
    }
}

/// Convert XYZ to CIE Lab against the D65 reference white.
pub fn xyz_to_lab(xyz: XyzColor) -> LabColor {
    let [ref_x, ref_y, ref_z] = D65_WHITE_POINT_XYZ;
    let fx = lab_f(xyz.x / ref_x);
    let fy = lab_f(xyz.y / ref_y);
    let fz = lab_f(xyz.z / ref_z);

    LabColor {
        l: 116.0 * fy - 16.0,
        a: 500.0 * (fx - fy),
        b: 200.0 * (fy - fz),
    }
}

/// Convert 8-bit sRGB to CIE Lab.
pub fn rgb_to_lab(r: u8, g: u8, b: u8) -> LabColor {
    xyz_to_lab(rgb_to_xyz(r, g, b))
}

/// Display conversions for analysis results
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorConverter;

impl ColorConverter {
    pub fn new() -> Self {
        Self
    }

    /// Convert Lab to LCh (cylindrical representation)
    pub fn lab_to_lch(&self, color: LabColor) -> Lch<D65, f64> {
        Lch::from_color(Lab::<D65, f64>::from(color))
    }

    /// Convert Lab to sRGB, clamped to the displayable gamut
    pub fn lab_to_srgb(&self, color: LabColor) -> Srgb<f64> {
        let srgb = Srgb::from_color(Lab::<D65, f64>::from(color));
        Srgb::new(
            srgb.red.clamp(0.0, 1.0),
            srgb.green.clamp(0.0, 1.0),
            srgb.blue.clamp(0.0, 1.0),
        )
    }

    /// Convert sRGB to hexadecimal color string (e.g. "#FF0000")
    pub fn srgb_to_hex(&self, srgb: Srgb<f64>) -> String {
        let r = (srgb.red * 255.0).round() as u8;
        let g = (srgb.green * 255.0).round() as u8;
        let b = (srgb.blue * 255.0).round() as u8;
        format!("#{:02X}{:02X}{:02X}", r, g, b)
    }

    /// Convert Lab straight to a hex swatch
    pub fn lab_to_hex(&self, color: LabColor) -> String {
        self.srgb_to_hex(self.lab_to_srgb(color))
    }

    /// Parse hexadecimal color string ("#FF0000" or "FF0000") to sRGB
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the string is not six hex digits
    pub fn hex_to_srgb(&self, hex: &str) -> Result<Srgb<f64>> {
        let digits = hex.trim_start_matches('#');
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(AnalysisError::invalid_parameter("hex", hex));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map(|v| f64::from(v) / 255.0)
                .map_err(|_| AnalysisError::invalid_parameter("hex", hex))
        };

        Ok(Srgb::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}
