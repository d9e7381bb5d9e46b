//! Douglas–Peucker polyline simplification.
//!
//! Implemented with an explicit segment stack so very detailed outlines
//! cannot exhaust the call stack.

use nalgebra::Point2;

/// Perpendicular distance from `p` to the line through `a` and `b`.
///
/// Falls back to the point distance when the reference segment is
/// degenerate (zero length).
pub fn perpendicular_distance(a: &Point2<f32>, b: &Point2<f32>, p: &Point2<f32>) -> f32 {
    let num = ((b.y - a.y) * p.x - (b.x - a.x) * p.y + b.x * a.y - b.y * a.x).abs();
    let den = (b.y - a.y).hypot(b.x - a.x);
    if den == 0.0 {
        (p - a).norm()
    } else {
        num / den
    }
}

/// Simplify an open polyline with fixed endpoints, tolerance `eps`.
///
/// Keeps a point iff it is the farthest point of some segment whose
/// deviation exceeds `eps`; everything else collapses onto the segment
/// endpoints. Fewer than 3 points are returned unchanged.
pub fn simplify_polyline(points: &[Point2<f32>], eps: f32) -> Vec<Point2<f32>> {
    let n = points.len();
    if n < 3 {
        return points.to_vec();
    }

    let mut keep = vec![false; n];
    keep[0] = true;
    keep[n - 1] = true;

    let mut stack = vec![(0usize, n - 1)];
    while let Some((first, last)) = stack.pop() {
        let mut dmax = 0.0f32;
        let mut split = first;
        for i in first + 1..last {
            let d = perpendicular_distance(&points[first], &points[last], &points[i]);
            if d > dmax {
                dmax = d;
                split = i;
            }
        }
        if dmax > eps {
            keep[split] = true;
            if split - first > 1 {
                stack.push((first, split));
            }
            if last - split > 1 {
                stack.push((split, last));
            }
        }
    }

    points
        .iter()
        .zip(&keep)
        .filter_map(|(p, &k)| k.then_some(*p))
        .collect()
}

/// Simplify a closed ring (implicit edge from last point back to first).
///
/// A ring has no natural endpoints for Douglas–Peucker, so it is split
/// at the point farthest from its first vertex and the two open halves
/// are simplified independently, dropping the shared endpoints on
/// rejoin. Fewer than 3 points are returned unchanged.
pub fn simplify_ring(ring: &[Point2<f32>], eps: f32) -> Vec<Point2<f32>> {
    if ring.len() < 3 {
        return ring.to_vec();
    }

    let mut split = 0usize;
    let mut dmax = 0.0f32;
    for (i, p) in ring.iter().enumerate().skip(1) {
        let d = (p - ring[0]).norm();
        if d > dmax {
            dmax = d;
            split = i;
        }
    }
    if split == 0 {
        // All points coincide with the start.
        return vec![ring[0]];
    }

    let first_half = simplify_polyline(&ring[..=split], eps);
    let mut second_half: Vec<Point2<f32>> = ring[split..].to_vec();
    second_half.push(ring[0]);
    let second_half = simplify_polyline(&second_half, eps);

    let mut out = first_half;
    // Both halves share ring[split] and the closing ring[0].
    out.extend(second_half[1..second_half.len() - 1].iter().copied());
    out
}
