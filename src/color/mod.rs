//! Color conversion and statistics module
//!
//! This module handles the sRGB → Lab conversion of sampled pixels and
//! the robust statistics used to aggregate them.

pub mod conversion;
pub mod analysis;

pub use conversion::{rgb_to_lab, rgb_to_xyz, xyz_to_lab, ColorConverter, LabColor, XyzColor};
pub use analysis::{compute_iqr, compute_variability, filter_outliers, mean_lab, OutlierFilter, Quartiles};
