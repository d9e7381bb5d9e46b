//! Shape detector orchestrating the segmentation-to-classification
//! pipeline.
//!
//! Overview
//! - Converts the RGBA raster to luminance and thresholds it into a
//!   foreground mask (dark shapes on light background).
//! - Labels 8-connected components with an explicit-stack flood fill
//!   and drops undersized ones.
//! - Extracts each component's boundary set and ordered outline,
//!   builds the convex hull, and simplifies the outline with a
//!   size-adaptive Douglas–Peucker tolerance.
//! - Derives geometric features (circularity, solidity, concavity,
//!   angle statistics, quad metrics) and classifies them through an
//!   ordered rule table.
//!
//! Modules
//! - [`params`] – configuration exposed to callers and the demo CLI.
//! - `pipeline` – the main [`ShapeDetector`] implementation.

pub mod params;
mod pipeline;

pub use params::DetectorParams;
pub use pipeline::ShapeDetector;
