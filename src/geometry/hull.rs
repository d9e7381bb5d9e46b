//! Monotone-chain convex hull.

use nalgebra::Point2;

#[inline]
fn cross(o: &Point2<f32>, a: &Point2<f32>, b: &Point2<f32>) -> f32 {
    (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
}

/// Convex hull of a point set via Andrew's monotone chain, O(n log n).
///
/// Vertices come back in a single consistent rotational order (lower
/// chain then upper chain, duplicated endpoints dropped). Collinear
/// points are excluded: only strict turns survive, so the hull is
/// minimal. For two or fewer input points the input is returned as-is.
pub fn convex_hull(points: &[Point2<f32>]) -> Vec<Point2<f32>> {
    if points.len() <= 2 {
        return points.to_vec();
    }

    let mut pts = points.to_vec();
    pts.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));

    let mut lower: Vec<Point2<f32>> = Vec::with_capacity(pts.len());
    for p in &pts {
        while lower.len() >= 2 && cross(&lower[lower.len() - 2], &lower[lower.len() - 1], p) <= 0.0
        {
            lower.pop();
        }
        lower.push(*p);
    }

    let mut upper: Vec<Point2<f32>> = Vec::with_capacity(pts.len());
    for p in pts.iter().rev() {
        while upper.len() >= 2 && cross(&upper[upper.len() - 2], &upper[upper.len() - 1], p) <= 0.0
        {
            upper.pop();
        }
        upper.push(*p);
    }

    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f32, y: f32) -> Point2<f32> {
        Point2::new(x, y)
    }

    #[test]
    fn hull_of_square_with_interior_point_is_the_corners() {
        let pts = [p(0.0, 0.0), p(4.0, 0.0), p(4.0, 4.0), p(0.0, 4.0), p(2.0, 2.0)];
        let hull = convex_hull(&pts);
        assert_eq!(hull.len(), 4);
        for corner in &pts[..4] {
            assert!(hull.contains(corner), "missing corner {corner}");
        }
        assert!(!hull.contains(&p(2.0, 2.0)));
    }

    #[test]
    fn collinear_midpoints_are_excluded() {
        let pts = [p(0.0, 0.0), p(2.0, 0.0), p(4.0, 0.0), p(2.0, 3.0)];
        let hull = convex_hull(&pts);
        assert_eq!(hull.len(), 3);
        assert!(!hull.contains(&p(2.0, 0.0)));
    }

    #[test]
    fn tiny_inputs_pass_through() {
        let pts = [p(1.0, 1.0), p(5.0, 2.0)];
        assert_eq!(convex_hull(&pts), pts.to_vec());
        assert!(convex_hull(&[]).is_empty());
    }

    #[test]
    fn hull_turns_consistently() {
        let pts = [
            p(0.0, 0.0),
            p(5.0, 1.0),
            p(6.0, 4.0),
            p(3.0, 6.0),
            p(-1.0, 3.0),
            p(2.0, 2.0),
            p(3.0, 3.0),
        ];
        let hull = convex_hull(&pts);
        assert!(hull.len() >= 3);
        let n = hull.len();
        for i in 0..n {
            let c = cross(&hull[i], &hull[(i + 1) % n], &hull[(i + 2) % n]);
            assert!(c > 0.0, "non-strict turn at vertex {i}: {c}");
        }
    }
}
