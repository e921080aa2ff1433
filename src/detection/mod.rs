//! Face location and skin region sampling module
//!
//! Turns an optional face box into the three skin patches the tone
//! analysis samples from.

pub mod face;
pub mod regions;

pub use face::{DetectionSupport, FaceBox, FaceDetection, FaceDetector};
pub use regions::{resolve_face_box, sample_region, sample_regions, skin_regions, RegionKind, SkinRegion};
