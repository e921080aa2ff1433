//! Robust aggregation of sampled skin colors
//!
//! - Tukey (IQR) outlier filtering on lightness
//! - Trimmed Lab mean over the surviving samples
//! - Chroma variability used to discount undertone confidence

use crate::color::LabColor;
use crate::config::OutlierConfig;
use crate::constants::statistics;

/// Lower quartile, upper quartile and their spread
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quartiles {
    pub q1: f64,
    pub q3: f64,
    pub iqr: f64,
}

/// Quartiles by sorted index, `sorted[floor(n * 0.25)]` and
/// `sorted[floor(n * 0.75)]`. Returns `None` for an empty slice.
pub fn compute_iqr(values: &[f64]) -> Option<Quartiles> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let n = sorted.len() as f64;
    let q1 = sorted[(n * statistics::Q1_FRACTION).floor() as usize];
    let q3 = sorted[(n * statistics::Q3_FRACTION).floor() as usize];
    Some(Quartiles { q1, q3, iqr: q3 - q1 })
}

/// Tukey fence filter over scalar samples
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutlierFilter {
    min_samples: usize,
    iqr_multiplier: f64,
}

impl Default for OutlierFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&OutlierConfig> for OutlierFilter {
    fn from(config: &OutlierConfig) -> Self {
        Self::with_params(config.min_samples, config.iqr_multiplier)
    }
}

impl OutlierFilter {
    /// Create a filter with the standard 1.5 × IQR fences
    pub fn new() -> Self {
        Self {
            min_samples: statistics::MIN_OUTLIER_SAMPLES,
            iqr_multiplier: statistics::IQR_MULTIPLIER,
        }
    }

    /// Create a filter with custom parameters
    pub fn with_params(min_samples: usize, iqr_multiplier: f64) -> Self {
        Self {
            min_samples,
            iqr_multiplier,
        }
    }

    /// Inclusive `(lower, upper)` fences, or `None` when there are too
    /// few values to filter.
    pub fn fences(&self, values: &[f64]) -> Option<(f64, f64)> {
        if values.len() < self.min_samples {
            return None;
        }
        let Quartiles { q1, q3, iqr } = compute_iqr(values)?;
        Some((q1 - self.iqr_multiplier * iqr, q3 + self.iqr_multiplier * iqr))
    }

    /// Values inside the fences, in input order
    pub fn filter(&self, values: &[f64]) -> Vec<f64> {
        match self.fences(values) {
            Some((lower, upper)) => values
                .iter()
                .copied()
                .filter(|v| *v >= lower && *v <= upper)
                .collect(),
            None => values.to_vec(),
        }
    }

    /// Samples whose lightness survives the filter, in input order.
    ///
    /// Retention is decided by value, so samples with equal `l` are kept
    /// or dropped together.
    pub fn retain_by_lightness(&self, samples: &[LabColor]) -> Vec<LabColor> {
        let lightness: Vec<f64> = samples.iter().map(|s| s.l).collect();
        match self.fences(&lightness) {
            Some((lower, upper)) => samples
                .iter()
                .copied()
                .filter(|s| s.l >= lower && s.l <= upper)
                .collect(),
            None => samples.to_vec(),
        }
    }
}

/// Drop outliers with the default 1.5 × IQR fences.
///
/// Fewer than 8 values are returned unchanged.
pub fn filter_outliers(values: &[f64]) -> Vec<f64> {
    OutlierFilter::new().filter(values)
}

/// Component-wise mean. An empty slice yields `{0, 0, 0}`.
pub fn mean_lab(samples: &[LabColor]) -> LabColor {
    let sum = samples.iter().fold(LabColor::default(), |acc, s| LabColor {
        l: acc.l + s.l,
        a: acc.a + s.a,
        b: acc.b + s.b,
    });
    let count = samples.len().max(1) as f64;
    LabColor::new(sum.l / count, sum.a / count, sum.b / count)
}

/// Spread of the chroma plane scaled into a confidence penalty.
///
/// `sqrt(mean((a - ā)² + (b - b̄)²)) / 50`, capped at 0.4. No samples
/// means maximum uncertainty.
pub fn compute_variability(samples: &[LabColor]) -> f64 {
    if samples.is_empty() {
        return statistics::MAX_VARIABILITY;
    }
    let n = samples.len() as f64;
    let mean_a = samples.iter().map(|s| s.a).sum::<f64>() / n;
    let mean_b = samples.iter().map(|s| s.b).sum::<f64>() / n;

    let variance = samples
        .iter()
        .map(|s| (s.a - mean_a).powi(2) + (s.b - mean_b).powi(2))
        .sum::<f64>()
        / n;

    (variance.sqrt() / statistics::VARIABILITY_SCALE).min(statistics::MAX_VARIABILITY)
}
