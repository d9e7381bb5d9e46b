//! Detector pipeline driving shape detection end-to-end.
//!
//! The [`ShapeDetector`] exposes a simple API: feed an RGBA raster and
//! get the list of classified shapes, optionally with a stage-by-stage
//! diagnostic trace. Internally it chains grayscale conversion,
//! binarization, component labeling, boundary/outline extraction,
//! convex hull, outline simplification, feature computation and the
//! rule-table classifier.
//!
//! Typical usage:
//! ```no_run
//! use shape_detector::{DetectorParams, ShapeDetector};
//! use shape_detector::image::RasterRgba;
//!
//! # fn example(raster: RasterRgba) {
//! let detector = ShapeDetector::new(DetectorParams::default());
//! match detector.detect(raster) {
//!     Ok(shapes) => println!("found {} shapes", shapes.len()),
//!     Err(err) => eprintln!("{err}"),
//! }
//! # }
//! ```
use super::params::DetectorParams;
use crate::classify::classify;
use crate::components::label_components;
use crate::diagnostics::{
    ComponentOutcome, ComponentStage, DetectionReport, InputDescriptor, PipelineTrace,
    TimingBreakdown,
};
use crate::error::DetectError;
use crate::features::compute_features;
use crate::geometry::{convex_hull, simplify_ring};
use crate::image::RasterRgba;
use crate::mask::{binarize, to_grayscale};
use crate::types::Shape;
use log::debug;
use std::time::Instant;

/// Shape detector orchestrating the one-shot, synchronous pipeline.
///
/// Detection is a pure function of the raster and the parameters: no
/// state survives a run, and two runs over the same input produce
/// identical shape lists.
#[derive(Clone, Debug, Default)]
pub struct ShapeDetector {
    params: DetectorParams,
}

impl ShapeDetector {
    /// Create a detector with the supplied parameters.
    pub fn new(params: DetectorParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &DetectorParams {
        &self.params
    }

    /// Run the detector on an RGBA raster, returning the shape list.
    pub fn detect(&self, raster: RasterRgba) -> Result<Vec<Shape>, DetectError> {
        self.detect_with_diagnostics(raster).map(|r| r.shapes)
    }

    /// Run the detector and return both the shapes and a detailed trace.
    pub fn detect_with_diagnostics(
        &self,
        raster: RasterRgba,
    ) -> Result<DetectionReport, DetectError> {
        if raster.is_empty() {
            return Err(DetectError::InputNotReady);
        }
        let t_start = Instant::now();
        debug!(
            "ShapeDetector::detect start w={} h={} threshold={}",
            raster.w, raster.h, self.params.luma_threshold
        );
        let mut timings = TimingBreakdown::default();

        let t = Instant::now();
        let gray = to_grayscale(&raster);
        timings.push("grayscale", t.elapsed().as_secs_f64() * 1e3);

        let t = Instant::now();
        let mask = binarize(&gray, self.params.luma_threshold);
        timings.push("binarize", t.elapsed().as_secs_f64() * 1e3);

        let t = Instant::now();
        let labeled = label_components(&mask);
        timings.push("label", t.elapsed().as_secs_f64() * 1e3);

        let mut components = ComponentStage {
            foreground_px: mask.foreground_count(),
            total: labeled.components().len(),
            ..ComponentStage::default()
        };
        let mut shapes = Vec::new();
        let mut outcomes = Vec::new();

        let t = Instant::now();
        for comp in labeled.components() {
            if comp.len() < self.params.min_component_px {
                components.discarded_small += 1;
                continue;
            }

            let boundary = labeled.boundary_points(comp);
            if boundary.len() < self.params.min_boundary_points {
                components.discarded_boundary += 1;
                continue;
            }

            let bbox = comp.bounding_box(labeled.width());
            let hull = convex_hull(&boundary);
            let outline = labeled.trace_outline(comp);
            let eps = self.params.simplify_eps(bbox.width, bbox.height);
            let simplified = simplify_ring(&outline, eps);

            let (features, vertices) = compute_features(comp.len(), bbox, &hull, &simplified);
            let result = classify(&features);
            debug!(
                "component px={} verts={} circularity={:.3} solidity={:.3} -> {} ({:.2})",
                comp.len(),
                features.vertex_count,
                features.circularity,
                features.solidity,
                result.category,
                result.confidence
            );

            components.kept += 1;
            outcomes.push(ComponentOutcome {
                pixels: comp.len(),
                boundary_points: boundary.len(),
                outline_points: outline.len(),
                hull_vertices: hull.len(),
                simplified_vertices: features.vertex_count,
                epsilon: eps,
                category: result.category,
                confidence: result.confidence,
            });
            shapes.push(Shape {
                category: result.category,
                confidence: result.confidence,
                bounding_box: bbox,
                center: features.center,
                area: features.area.round(),
                vertices,
            });
        }
        timings.push("analyze", t.elapsed().as_secs_f64() * 1e3);
        timings.total_ms = t_start.elapsed().as_secs_f64() * 1e3;

        debug!(
            "ShapeDetector::detect done shapes={} total_ms={:.3}",
            shapes.len(),
            timings.total_ms
        );
        Ok(DetectionReport {
            shapes,
            trace: PipelineTrace {
                input: InputDescriptor {
                    width: raster.w,
                    height: raster.h,
                    luma_threshold: self.params.luma_threshold,
                },
                timings,
                components,
                outcomes,
            },
        })
    }
}
