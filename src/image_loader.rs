//! Image loading and downsampling
//!
//! Decodes photos with the `image` crate and reduces them to an
//! [`ImageSample`], the small RGBA grid every analysis stage works on.
//!
//! ## Supported Formats
//!
//! JPEG, PNG, GIF (first frame), WebP, TIFF and BMP.

use crate::constants::processing::RGBA_CHANNELS;
use crate::error::{AnalysisError, Result};
use image::{imageops::FilterType, DynamicImage, ImageReader, RgbaImage};
use std::path::Path;
use tracing::debug;

/// Supported image formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Jpeg,
    Png,
    /// GIF image (first frame only)
    Gif,
    WebP,
    Tiff,
    Bmp,
}

impl ImageFormat {
    /// Detect format from file extension
    pub fn from_extension(path: &Path) -> Option<ImageFormat> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "jpg" | "jpeg" => Some(ImageFormat::Jpeg),
            "png" => Some(ImageFormat::Png),
            "gif" => Some(ImageFormat::Gif),
            "webp" => Some(ImageFormat::WebP),
            "tiff" | "tif" => Some(ImageFormat::Tiff),
            "bmp" => Some(ImageFormat::Bmp),
            _ => None,
        }
    }
}

/// Load a photo from disk
///
/// # Errors
///
/// Returns `AnalysisError::ImageLoadError` if the extension is not
/// supported, the file cannot be opened, or decoding fails.
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    if ImageFormat::from_extension(path).is_none() {
        return Err(AnalysisError::ImageLoadError {
            message: format!("Unsupported image format: {}", path.display()),
            source: None,
        });
    }

    let reader = ImageReader::open(path).map_err(|e| {
        AnalysisError::image_load(format!("Failed to open image file: {}", path.display()), e)
    })?;

    let img = reader.decode().map_err(|e| {
        AnalysisError::image_load(format!("Failed to decode image: {}", path.display()), e)
    })?;

    debug!(path = %path.display(), width = img.width(), height = img.height(), "loaded image");
    Ok(img)
}

/// Scale factor that fits `width × height` inside a `target_size` square
/// without ever enlarging.
pub fn downsample_scale(width: u32, height: u32, target_size: u32) -> f64 {
    if width == 0 || height == 0 {
        return 1.0;
    }
    let target = f64::from(target_size);
    (target / f64::from(width))
        .min(target / f64::from(height))
        .min(1.0)
}

/// A row-major RGBA pixel grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSample {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl ImageSample {
    /// Wrap a raw RGBA buffer
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `data.len() != width * height * 4`.
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * RGBA_CHANNELS;
        if data.len() != expected {
            return Err(AnalysisError::invalid_parameter(
                "data.len()",
                format!("{} (expected {} for {}x{})", data.len(), expected, width, height),
            ));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Fill a `width × height` grid with one opaque color
    pub fn uniform(width: u32, height: u32, rgb: [u8; 3]) -> Self {
        let pixels = width as usize * height as usize;
        let data = std::iter::repeat([rgb[0], rgb[1], rgb[2], 255])
            .take(pixels)
            .flatten()
            .collect();
        Self {
            width,
            height,
            data,
        }
    }

    /// Downsample `image` so neither side exceeds `target_size`.
    ///
    /// Output dimensions are `round(w * scale) × round(h * scale)`, at
    /// least 1. Images already small enough are copied unchanged.
    pub fn from_image(image: &DynamicImage, target_size: u32) -> Self {
        let (width, height) = (image.width(), image.height());
        let scale = downsample_scale(width, height, target_size);
        let rgba: RgbaImage = image.to_rgba8();

        let rgba = if scale < 1.0 {
            let new_width = ((f64::from(width) * scale).round() as u32).max(1);
            let new_height = ((f64::from(height) * scale).round() as u32).max(1);
            debug!(width, height, new_width, new_height, "downsampling image");
            image::imageops::resize(&rgba, new_width, new_height, FilterType::Triangle)
        } else {
            rgba
        };

        Self {
            width: rgba.width(),
            height: rgba.height(),
            data: rgba.into_raw(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Raw RGBA bytes
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// RGB of the pixel at `(x, y)`, or `None` outside the grid
    pub fn rgb_at(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * RGBA_CHANNELS;
        Some([self.data[idx], self.data[idx + 1], self.data[idx + 2]])
    }

    /// Iterate over the RGB part of every pixel, row-major
    pub fn rgb_pixels(&self) -> impl Iterator<Item = [u8; 3]> + '_ {
        self.data
            .chunks_exact(RGBA_CHANNELS)
            .map(|px| [px[0], px[1], px[2]])
    }
}
