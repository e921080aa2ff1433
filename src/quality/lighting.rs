//! Exposure and color cast estimation

use serde::{Deserialize, Serialize};

use crate::constants::srgb::LUMA_WEIGHTS;
use crate::image_loader::ImageSample;

/// Mean channel values, 0-255
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ChannelMeans {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// Global lighting statistics of a sample
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LightingStats {
    /// Mean Rec. 709 luma, 0-255
    pub avg_luma: f64,
    /// Spread between the brightest and darkest channel mean
    pub cast: f64,
    pub avg_channels: ChannelMeans,
}

/// Rec. 709 luma of one 8-bit RGB pixel
pub fn luma([r, g, b]: [u8; 3]) -> f64 {
    LUMA_WEIGHTS[0] * f64::from(r) + LUMA_WEIGHTS[1] * f64::from(g) + LUMA_WEIGHTS[2] * f64::from(b)
}

/// Average luma and channel means over every pixel.
///
/// An empty sample yields all zeros.
pub fn evaluate_lighting(sample: &ImageSample) -> LightingStats {
    let (mut total_luma, mut total_r, mut total_g, mut total_b) = (0.0, 0.0, 0.0, 0.0);
    let mut count = 0usize;

    for px in sample.rgb_pixels() {
        total_luma += luma(px);
        total_r += f64::from(px[0]);
        total_g += f64::from(px[1]);
        total_b += f64::from(px[2]);
        count += 1;
    }

    if count == 0 {
        return LightingStats::default();
    }

    let n = count as f64;
    let avg_channels = ChannelMeans {
        r: total_r / n,
        g: total_g / n,
        b: total_b / n,
    };
    let max = avg_channels.r.max(avg_channels.g).max(avg_channels.b);
    let min = avg_channels.r.min(avg_channels.g).min(avg_channels.b);

    LightingStats {
        avg_luma: total_luma / n,
        cast: max - min,
        avg_channels,
    }
}
