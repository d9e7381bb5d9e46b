//! Rule-table shape classification.
//!
//! The classifier is an ordered list of named rules evaluated top to
//! bottom; the first rule that fires decides the category and
//! confidence. The order is part of the contract: the strict star rule
//! sits above the permissive one, and the two default branches close
//! the table so every feature vector classifies.

use crate::features::ShapeFeatures;
use crate::types::ShapeCategory;

/// Outcome of one classification: category plus raw confidence.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Classification {
    pub category: ShapeCategory,
    pub confidence: f32,
}

/// One entry of the ordered rule table.
pub struct Rule {
    pub name: &'static str,
    pub eval: fn(&ShapeFeatures) -> Option<Classification>,
}

fn circle(f: &ShapeFeatures) -> Option<Classification> {
    let w = f.bounding_box.width as f32;
    let h = f.bounding_box.height as f32;
    (f.circularity > 0.90 && (w - h).abs() < 0.08 * w.min(h) && f.solidity > 0.92).then_some(
        Classification {
            category: ShapeCategory::Circle,
            confidence: 0.96,
        },
    )
}

fn triangle(f: &ShapeFeatures) -> Option<Classification> {
    (f.vertex_count == 3).then_some(Classification {
        category: ShapeCategory::Triangle,
        confidence: 0.95,
    })
}

fn quad(f: &ShapeFeatures) -> Option<Classification> {
    let quad = f.quad.as_ref().filter(|_| f.vertex_count == 4)?;
    let result = if quad.angle_deviation < 15.0 && quad.side_ratio < 1.2 {
        Classification {
            category: ShapeCategory::Square,
            confidence: 0.96,
        }
    } else {
        Classification {
            category: ShapeCategory::Rectangle,
            confidence: 0.88,
        }
    };
    Some(result)
}

fn star_strict(f: &ShapeFeatures) -> Option<Classification> {
    (f.vertex_count >= 8
        && f.concave_ratio > 0.15
        && f.solidity < 0.78
        && f.circularity < 0.72
        && f.angle_variance > 400.0)
        .then_some(Classification {
            category: ShapeCategory::Star,
            confidence: 0.85 + 0.1 * (f.concave_ratio * 5.0).min(0.2),
        })
}

fn star_by_concavity(f: &ShapeFeatures) -> Option<Classification> {
    if f.vertex_count < 8 {
        return None;
    }
    let needed = 2usize.max((0.15 * f.vertex_count as f32).round() as usize);
    (f.concave_count >= needed).then_some(Classification {
        category: ShapeCategory::Star,
        confidence: 0.8 + (f.concave_count as f32 / f.vertex_count as f32).min(0.1),
    })
}

fn pentagon(f: &ShapeFeatures) -> Option<Classification> {
    ((5..=7).contains(&f.vertex_count)
        && f.circularity > 0.68
        && f.circularity < 0.90
        && f.solidity > 0.8)
        .then_some(Classification {
            category: ShapeCategory::Pentagon,
            confidence: 0.9 - 0.05 * (f.vertex_count as f32 - 5.0).abs(),
        })
}

fn fallback(f: &ShapeFeatures) -> Option<Classification> {
    let result = if f.circularity > 0.65 && f.vertex_count > 6 {
        Classification {
            category: ShapeCategory::CircleIsh,
            confidence: 0.7,
        }
    } else {
        Classification {
            category: ShapeCategory::Polygon,
            confidence: (0.4 + f.vertex_count as f32 / 12.0).min(0.85),
        }
    };
    Some(result)
}

/// Ordered rule table; evaluation stops at the first match.
pub const RULES: &[Rule] = &[
    Rule {
        name: "circle",
        eval: circle,
    },
    Rule {
        name: "triangle",
        eval: triangle,
    },
    Rule {
        name: "quad",
        eval: quad,
    },
    Rule {
        name: "star-strict",
        eval: star_strict,
    },
    Rule {
        name: "star-by-concavity",
        eval: star_by_concavity,
    },
    Rule {
        name: "pentagon",
        eval: pentagon,
    },
    Rule {
        name: "default",
        eval: fallback,
    },
];

/// Classify a feature vector, first matching rule wins. Confidence is
/// rounded to two decimals.
pub fn classify(features: &ShapeFeatures) -> Classification {
    let mut result = RULES
        .iter()
        .find_map(|rule| (rule.eval)(features))
        .unwrap_or(Classification {
            category: ShapeCategory::Polygon,
            confidence: 0.5,
        });
    result.confidence = (result.confidence * 100.0).round() / 100.0;
    result
}
