//! Per-component geometric features feeding the classifier.
//!
//! Perimeter, area and circularity are measured on the convex hull;
//! vertex statistics (count, concavity, angle variance, quad metrics)
//! on the simplified outline polygon. Solidity relates the two: the
//! simplified outline's area over the hull's area, so concave shapes
//! score below 1 while convex ones stay near it.

use crate::geometry::polygon::{self, concave_vertex_count};
use crate::types::BoundingBox;
use nalgebra::Point2;
use serde::Serialize;
use std::f32::consts::PI;

/// Side/angle statistics for four-vertex polygons.
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuadMetrics {
    pub sides: [f32; 4],
    pub angles: [f32; 4],
    /// max(side) / min(side)
    pub side_ratio: f32,
    /// Mean absolute deviation of the four angles from 90°.
    pub angle_deviation: f32,
}

impl QuadMetrics {
    fn from_quad(pts: &[Point2<f32>]) -> Option<Self> {
        if pts.len() != 4 {
            return None;
        }
        let mut sides = [0.0f32; 4];
        let mut angles = [0.0f32; 4];
        for i in 0..4 {
            let p0 = &pts[i];
            let p1 = &pts[(i + 1) % 4];
            let p2 = &pts[(i + 2) % 4];
            let v = p1 - p0;
            let w = p2 - p1;
            sides[i] = v.norm();
            let mut mag = v.norm() * w.norm();
            if mag == 0.0 {
                mag = 1.0;
            }
            angles[i] = (v.dot(&w) / mag).clamp(-1.0, 1.0).acos().to_degrees();
        }
        let max_side = sides.iter().fold(f32::MIN, |a, &b| a.max(b));
        let min_side = sides.iter().fold(f32::MAX, |a, &b| a.min(b));
        let angle_deviation = angles.iter().map(|a| (a - 90.0).abs()).sum::<f32>() / 4.0;
        Some(Self {
            sides,
            angles,
            side_ratio: max_side / min_side.max(f32::MIN_POSITIVE),
            angle_deviation,
        })
    }
}

/// Feature vector of one component, consumed by the rule table.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeFeatures {
    pub bounding_box: BoundingBox,
    pub center: Point2<f32>,
    /// Hull perimeter, closed.
    pub perimeter: f32,
    /// Hull area; falls back to the raw pixel count when the hull
    /// degenerates to zero area.
    pub area: f32,
    /// 4π·area / perimeter²; 1.0 for a perfect circle.
    pub circularity: f32,
    /// area(simplified outline) / area(hull); 1.0 when the hull area is
    /// zero.
    pub solidity: f32,
    pub vertex_count: usize,
    pub concave_count: usize,
    /// concave_count / vertex_count
    pub concave_ratio: f32,
    /// Variance of per-vertex angles around their mean, degrees².
    pub angle_variance: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quad: Option<QuadMetrics>,
}

/// Compute the feature vector from a component's pixel count and
/// bounding box, its convex hull, and its simplified outline polygon.
///
/// The simplified polygon is winding-normalized here so concavity signs
/// do not depend on the trace direction; the normalized copy is
/// returned alongside the features for the output record.
pub fn compute_features(
    pixel_count: usize,
    bounding_box: BoundingBox,
    hull: &[Point2<f32>],
    simplified: &[Point2<f32>],
) -> (ShapeFeatures, Vec<Point2<f32>>) {
    let perimeter = polygon::perimeter(hull);
    let hull_area = polygon::area(hull);
    let area = if hull_area > 0.0 {
        hull_area
    } else {
        pixel_count as f32
    };
    let circularity = if perimeter > 0.0 {
        4.0 * PI * area / (perimeter * perimeter)
    } else {
        0.0
    };

    let vertices = polygon::normalize_winding(simplified);
    let solidity = if hull_area > 0.0 {
        polygon::area(&vertices) / hull_area
    } else {
        1.0
    };

    let vertex_count = vertices.len();
    let concave_count = concave_vertex_count(&vertices);
    let concave_ratio = if vertex_count > 0 {
        concave_count as f32 / vertex_count as f32
    } else {
        0.0
    };

    let angles = polygon::vertex_angles(&vertices);
    let angle_variance = if angles.is_empty() {
        0.0
    } else {
        let mean = angles.iter().sum::<f32>() / angles.len() as f32;
        angles.iter().map(|a| (a - mean) * (a - mean)).sum::<f32>() / angles.len() as f32
    };

    let features = ShapeFeatures {
        bounding_box,
        center: bounding_box.center(),
        perimeter,
        area,
        circularity,
        solidity,
        vertex_count,
        concave_count,
        concave_ratio,
        angle_variance,
        quad: QuadMetrics::from_quad(&vertices),
    };
    (features, vertices)
}
