//! Geometric primitives of the pipeline: convex hull construction,
//! polyline simplification and polygon measures.

pub mod hull;
pub mod polygon;
pub mod simplify;

pub use self::hull::convex_hull;
pub use self::polygon::{area, normalize_winding, perimeter, signed_area, vertex_angles};
pub use self::simplify::{simplify_polyline, simplify_ring};
