//! Closed-polygon measures: perimeter, shoelace area, winding
//! normalization, and per-vertex angle statistics.
//!
//! A polygon is an ordered vertex sequence with an implicit closing edge
//! from the last vertex back to the first. Degenerate polygons (fewer
//! than 3 vertices) have zero area and zero perimeter by convention.

use nalgebra::{Point2, Vector2};

/// Sum of consecutive edge lengths around the closed polygon.
pub fn perimeter(points: &[Point2<f32>]) -> f32 {
    if points.len() < 3 {
        return 0.0;
    }
    let n = points.len();
    (0..n)
        .map(|i| (points[(i + 1) % n] - points[i]).norm())
        .sum()
}

/// Shoelace sum divided by two; sign encodes the winding direction.
pub fn signed_area(points: &[Point2<f32>]) -> f32 {
    if points.len() < 3 {
        return 0.0;
    }
    let n = points.len();
    let twice: f32 = (0..n)
        .map(|i| {
            let p = &points[i];
            let q = &points[(i + 1) % n];
            p.x * q.y - q.x * p.y
        })
        .sum();
    twice / 2.0
}

/// Absolute shoelace area.
pub fn area(points: &[Point2<f32>]) -> f32 {
    signed_area(points).abs()
}

/// Reverse the vertex order when the signed area is negative, so all
/// downstream cross-product signs are winding-independent.
pub fn normalize_winding(points: &[Point2<f32>]) -> Vec<Point2<f32>> {
    let mut out = points.to_vec();
    if signed_area(points) < 0.0 {
        out.reverse();
    }
    out
}

/// Angle in degrees between the incoming and outgoing edge vectors at
/// each vertex. A zero-magnitude denominator is substituted by 1,
/// turning degenerate corners into 90°.
pub fn vertex_angles(points: &[Point2<f32>]) -> Vec<f32> {
    let n = points.len();
    if n < 3 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let v: Vector2<f32> = points[i] - points[(i + n - 1) % n];
            let w: Vector2<f32> = points[(i + 1) % n] - points[i];
            let mut mag = v.norm() * w.norm();
            if mag == 0.0 {
                mag = 1.0;
            }
            (v.dot(&w) / mag).clamp(-1.0, 1.0).acos().to_degrees()
        })
        .collect()
}

/// Count vertices where the rim turns inward. Assumes the polygon has
/// been winding-normalized (positive signed area).
pub fn concave_vertex_count(points: &[Point2<f32>]) -> usize {
    let n = points.len();
    if n < 3 {
        return 0;
    }
    (0..n)
        .filter(|&i| {
            let a = &points[(i + n - 1) % n];
            let b = &points[i];
            let c = &points[(i + 1) % n];
            let cross = (b.x - a.x) * (c.y - b.y) - (b.y - a.y) * (c.x - b.x);
            cross < 0.0
        })
        .count()
}
