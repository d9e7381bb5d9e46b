//! Diagnostics data model exposed by the detector.
//!
//! `DetectionReport` bundles the shape list with a `PipelineTrace`
//! describing the run: input descriptor, stage timings, component
//! bookkeeping, and one outcome record per surviving component.

use crate::types::{Shape, ShapeCategory};
use serde::{Deserialize, Serialize};

/// Result produced by [`ShapeDetector::detect_with_diagnostics`](crate::ShapeDetector::detect_with_diagnostics).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionReport {
    pub shapes: Vec<Shape>,
    pub trace: PipelineTrace,
}

/// End-to-end trace describing the internal execution of the detector.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineTrace {
    pub input: InputDescriptor,
    pub timings: TimingBreakdown,
    pub components: ComponentStage,
    pub outcomes: Vec<ComponentOutcome>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
    pub luma_threshold: u8,
}

/// Bookkeeping of the labeling stage and its noise filters.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentStage {
    pub foreground_px: usize,
    pub total: usize,
    pub kept: usize,
    pub discarded_small: usize,
    pub discarded_boundary: usize,
}

/// Per-component record of what each stage produced.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentOutcome {
    pub pixels: usize,
    pub boundary_points: usize,
    pub outline_points: usize,
    pub hull_vertices: usize,
    pub simplified_vertices: usize,
    pub epsilon: f32,
    pub category: ShapeCategory,
    pub confidence: f32,
}

/// Timing entry describing a single stage of the pipeline.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub label: String,
    pub elapsed_ms: f64,
}

impl StageTiming {
    pub fn new(label: impl Into<String>, elapsed_ms: f64) -> Self {
        Self {
            label: label.into(),
            elapsed_ms,
        }
    }
}

/// Aggregated timing trace for the detector run.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

impl TimingBreakdown {
    pub fn push(&mut self, label: impl Into<String>, elapsed_ms: f64) {
        self.stages.push(StageTiming::new(label, elapsed_ms));
    }
}
