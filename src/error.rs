use thiserror::Error;

/// Errors surfaced by the detection pipeline.
///
/// Everything else degrades silently: undersized components are skipped
/// and degenerate geometry falls back to guarded arithmetic.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DetectError {
    /// The raster has zero width or height, i.e. no image is loaded.
    #[error("no image loaded: raster has zero width or height")]
    InputNotReady,
}
