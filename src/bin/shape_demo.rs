use shape_detector::config;
use shape_detector::diagnostics::DetectionReport;
use shape_detector::image::io::{load_rgba_image, write_json_file};
use shape_detector::ShapeDetector;
use std::env;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let program = env::args()
        .next()
        .unwrap_or_else(|| "shape_demo".to_string());
    let config = config::parse_cli(&program)?;

    let buffer = load_rgba_image(&config.input_path)?;
    let raster = buffer.as_view();

    let detector = ShapeDetector::new(config.detector.clone());
    let report = detector
        .detect_with_diagnostics(raster)
        .map_err(|e| e.to_string())?;

    print_text_summary(&report);

    if let Some(path) = &config.output.json_out {
        write_json_file(path, &report)?;
        println!("\nJSON report written to {}", path.display());
    }

    Ok(())
}

fn print_text_summary(report: &DetectionReport) {
    let trace = &report.trace;
    println!("Detection summary");
    println!(
        "  input: {}x{} threshold={}",
        trace.input.width, trace.input.height, trace.input.luma_threshold
    );
    println!(
        "  components: {} total, {} kept, {} too small, {} degenerate",
        trace.components.total,
        trace.components.kept,
        trace.components.discarded_small,
        trace.components.discarded_boundary
    );
    println!("  total_ms: {:.3}", trace.timings.total_ms);
    println!("  shapes: {}", report.shapes.len());
    for shape in &report.shapes {
        let bbox = &shape.bounding_box;
        println!(
            "    {} ({:.0}%) bbox=({}, {}, {}x{}) vertices={} area={:.0}",
            shape.category,
            shape.confidence * 100.0,
            bbox.x,
            bbox.y,
            bbox.width,
            bbox.height,
            shape.vertices.len(),
            shape.area
        );
    }
}
