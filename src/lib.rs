#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod config;
pub mod detector;
pub mod diagnostics;
pub mod error;
pub mod image;
pub mod types;

// Stage modules – public so each pipeline stage stays independently
// testable, but considered unstable internals.
pub mod classify;
pub mod components;
pub mod features;
pub mod geometry;
pub mod mask;

// --- High-level re-exports -------------------------------------------------

// Main entry points: detector + results.
pub use crate::detector::{DetectorParams, ShapeDetector};
pub use crate::error::DetectError;
pub use crate::types::{BoundingBox, Shape, ShapeCategory};

// High-level diagnostics returned by the detector.
pub use crate::diagnostics::{DetectionReport, PipelineTrace};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use shape_detector::prelude::*;
///
/// # fn main() {
/// let (w, h) = (150usize, 150usize);
/// let pixels = vec![255u8; w * h * 4];
/// let raster = RasterRgba::from_packed(w, h, &pixels);
///
/// let detector = ShapeDetector::new(DetectorParams::default());
/// let shapes = detector.detect(raster).unwrap();
/// println!("found {}", shapes.len());
/// # }
/// ```
pub mod prelude {
    pub use crate::image::RasterRgba;
    pub use crate::{DetectError, DetectorParams, Shape, ShapeCategory, ShapeDetector};
}
