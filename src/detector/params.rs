//! Parameter types configuring the detection pipeline.
//!
//! Defaults reproduce the pipeline's policy constants: threshold 128,
//! minimum component size 50 px, minimum boundary size 6 points, and a
//! simplification tolerance of 3% of the smaller bounding-box side
//! (never below 2 px).

use serde::{Deserialize, Serialize};

/// Detector-wide parameters controlling the pipeline stages.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DetectorParams {
    /// Binarization threshold: foreground iff luminance < threshold.
    pub luma_threshold: u8,
    /// Components with fewer pixels are discarded as noise.
    pub min_component_px: usize,
    /// Components whose boundary has fewer points are discarded.
    pub min_boundary_points: usize,
    /// Simplification tolerance as a fraction of min(bbox w, bbox h).
    pub simplify_scale: f32,
    /// Lower bound on the simplification tolerance in pixels.
    pub min_simplify_eps: f32,
}

impl Default for DetectorParams {
    fn default() -> Self {
        Self {
            luma_threshold: 128,
            min_component_px: 50,
            min_boundary_points: 6,
            simplify_scale: 0.03,
            min_simplify_eps: 2.0,
        }
    }
}

impl DetectorParams {
    /// Douglas–Peucker tolerance for a component of the given bounding
    /// box, scaled so simplification adapts to the shape's size.
    pub fn simplify_eps(&self, bbox_width: usize, bbox_height: usize) -> f32 {
        let side = bbox_width.min(bbox_height) as f32;
        (side * self.simplify_scale).round().max(self.min_simplify_eps)
    }
}
