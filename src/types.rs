use nalgebra::Point2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Category assigned to a detected shape by the rule-table classifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShapeCategory {
    Circle,
    Triangle,
    Square,
    Rectangle,
    Pentagon,
    Star,
    CircleIsh,
    Polygon,
}

impl fmt::Display for ShapeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Circle => "circle",
            Self::Triangle => "triangle",
            Self::Square => "square",
            Self::Rectangle => "rectangle",
            Self::Pentagon => "pentagon",
            Self::Star => "star",
            Self::CircleIsh => "circle-ish",
            Self::Polygon => "polygon",
        };
        f.write_str(label)
    }
}

/// Axis-aligned bounding box in pixel coordinates (inclusive extents).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundingBox {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl BoundingBox {
    /// Midpoint of the box in real-valued pixel coordinates.
    pub fn center(&self) -> Point2<f32> {
        Point2::new(
            self.x as f32 + self.width as f32 / 2.0,
            self.y as f32 + self.height as f32 / 2.0,
        )
    }

    /// True when two boxes share at least one pixel.
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        self.x < other.x + other.width
            && other.x < self.x + self.width
            && self.y < other.y + other.height
            && other.y < self.y + self.height
    }
}

/// One detected shape. Immutable after creation; the caller owns it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shape {
    pub category: ShapeCategory,
    /// In [0, 1], rounded to two decimals.
    pub confidence: f32,
    pub bounding_box: BoundingBox,
    pub center: Point2<f32>,
    /// Convex-hull area in square pixels, rounded to the nearest integer.
    pub area: f32,
    /// Simplified outline polygon, closed implicitly (last → first).
    pub vertices: Vec<Point2<f32>>,
}
