//! Blur detection via Laplacian variance

use crate::image_loader::ImageSample;
use crate::quality::lighting::luma;

/// 4-neighbour Laplacian, row-major 3x3
const LAPLACIAN_KERNEL: [f64; 9] = [0.0, 1.0, 0.0, 1.0, -4.0, 1.0, 0.0, 1.0, 0.0];

/// Variance of the Laplacian response over interior pixels.
///
/// Sharp images have strong edges and a high variance. Samples smaller
/// than 3x3 have no interior and return 0.
pub fn laplacian_variance(sample: &ImageSample) -> f64 {
    let (width, height) = (sample.width() as usize, sample.height() as usize);
    if width < 3 || height < 3 {
        return 0.0;
    }

    let gray: Vec<f64> = sample.rgb_pixels().map(luma).collect();
    let mut sum = 0.0;
    let mut sum_sq = 0.0;

    for y in 1..height - 1 {
        for x in 1..width - 1 {
            let mut value = 0.0;
            for (k, weight) in LAPLACIAN_KERNEL.iter().enumerate() {
                let (ky, kx) = (k / 3, k % 3);
                value += gray[(y + ky - 1) * width + (x + kx - 1)] * weight;
            }
            sum += value;
            sum_sq += value * value;
        }
    }

    let count = ((width - 2) * (height - 2)) as f64;
    let mean = sum / count;
    sum_sq / count - mean * mean
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checkerboard(size: u32) -> ImageSample {
        let mut data = Vec::new();
        for y in 0..size {
            for x in 0..size {
                let v = if (x + y) % 2 == 0 { 0 } else { 255 };
                data.extend_from_slice(&[v, v, v, 255]);
            }
        }
        ImageSample::from_rgba(size, size, data).unwrap()
    }

    #[test]
    fn test_flat_image_has_zero_variance() {
        let variance = laplacian_variance(&ImageSample::uniform(16, 16, [90, 90, 90]));
        assert!(variance.abs() < 1e-6);
    }

    #[test]
    fn test_checkerboard_is_sharp() {
        assert!(laplacian_variance(&checkerboard(16)) > 70.0);
    }

    #[test]
    fn test_tiny_images() {
        assert_eq!(laplacian_variance(&ImageSample::uniform(2, 10, [1, 2, 3])), 0.0);
        assert_eq!(laplacian_variance(&ImageSample::uniform(0, 0, [0, 0, 0])), 0.0);
    }
}
