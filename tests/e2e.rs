mod common;

use common::synthetic_raster::Canvas;
use shape_detector::image::RasterRgba;
use shape_detector::{DetectError, DetectorParams, ShapeCategory, ShapeDetector};
use std::f32::consts::PI;

fn detector() -> ShapeDetector {
    ShapeDetector::new(DetectorParams::default())
}

#[test]
fn filled_disk_classifies_as_circle() {
    let mut canvas = Canvas::new(150, 150);
    canvas.fill_disk(75, 75, 50);

    let shapes = detector().detect(canvas.view()).unwrap();
    assert_eq!(shapes.len(), 1, "expected exactly one shape");

    let shape = &shapes[0];
    assert_eq!(shape.category, ShapeCategory::Circle);
    assert!(
        shape.confidence >= 0.90,
        "confidence too low: {}",
        shape.confidence
    );

    let expected = PI * 50.0 * 50.0;
    let rel = (shape.area - expected).abs() / expected;
    assert!(rel < 0.05, "area {} deviates {:.3} from π·50²", shape.area, rel);
    assert_eq!(shape.bounding_box.width, 101);
    assert_eq!(shape.bounding_box.height, 101);
}

#[test]
fn filled_square_classifies_as_square() {
    let mut canvas = Canvas::new(200, 200);
    canvas.fill_rect(50, 50, 100, 100);

    let shapes = detector().detect(canvas.view()).unwrap();
    assert_eq!(shapes.len(), 1);

    let shape = &shapes[0];
    assert_eq!(shape.category, ShapeCategory::Square);
    assert!(
        shape.confidence >= 0.90,
        "confidence too low: {}",
        shape.confidence
    );
    assert_eq!(shape.vertices.len(), 4);

    let rel = (shape.area - 10_000.0).abs() / 10_000.0;
    assert!(rel <= 0.02, "area {} deviates {:.3} from 10000", shape.area, rel);
}

#[test]
fn filled_star_classifies_as_star() {
    let mut canvas = Canvas::new(200, 200);
    canvas.fill_star(100.0, 100.0, 60.0, 27.0);

    let report = detector()
        .detect_with_diagnostics(canvas.view())
        .unwrap();
    assert_eq!(report.shapes.len(), 1);

    let shape = &report.shapes[0];
    assert_eq!(shape.category, ShapeCategory::Star);
    assert!(
        shape.vertices.len() >= 8,
        "simplified vertex count {} below 8",
        shape.vertices.len()
    );

    let outcome = &report.trace.outcomes[0];
    assert!(outcome.simplified_vertices >= 8);
}

#[test]
fn zero_sized_raster_signals_input_not_ready() {
    let raster = RasterRgba::from_packed(0, 0, &[]);
    let err = detector().detect(raster).unwrap_err();
    assert_eq!(err, DetectError::InputNotReady);
}

#[test]
fn two_disjoint_shapes_are_classified_independently() {
    let mut canvas = Canvas::new(300, 150);
    canvas.fill_disk(75, 75, 40);
    canvas.fill_rect(180, 35, 80, 80);

    let shapes = detector().detect(canvas.view()).unwrap();
    assert_eq!(shapes.len(), 2, "expected exactly two shapes");

    let categories: Vec<ShapeCategory> = shapes.iter().map(|s| s.category).collect();
    assert!(categories.contains(&ShapeCategory::Circle));
    assert!(categories.contains(&ShapeCategory::Square));
    assert!(
        !shapes[0].bounding_box.intersects(&shapes[1].bounding_box),
        "bounding boxes must not overlap"
    );
}

#[test]
fn detection_is_deterministic() {
    let mut canvas = Canvas::new(220, 160);
    canvas.fill_disk(60, 80, 40);
    canvas.fill_star(160.0, 80.0, 50.0, 22.0);

    let first = detector().detect(canvas.view()).unwrap();
    let second = detector().detect(canvas.view()).unwrap();
    assert_eq!(first, second, "same raster must produce identical shapes");
}

#[test]
fn blank_canvas_produces_no_shapes() {
    let canvas = Canvas::new(100, 100);
    let report = detector().detect_with_diagnostics(canvas.view()).unwrap();
    assert!(report.shapes.is_empty());
    assert_eq!(report.trace.components.total, 0);
    assert_eq!(report.trace.components.foreground_px, 0);
}

#[test]
fn undersized_components_are_filtered_out() {
    let mut canvas = Canvas::new(100, 100);
    canvas.fill_rect(10, 10, 5, 5); // 25 px, below the 50 px floor

    let report = detector().detect_with_diagnostics(canvas.view()).unwrap();
    assert!(report.shapes.is_empty());
    assert_eq!(report.trace.components.discarded_small, 1);
}
