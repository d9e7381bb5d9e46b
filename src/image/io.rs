//! I/O helpers for rasters and JSON reports.
//!
//! - `load_rgba_image`: read a PNG/JPEG/etc. into an owned RGBA buffer.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::RasterRgba;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Owned RGBA buffer with borrowed view conversion.
#[derive(Clone, Debug)]
pub struct RgbaBuffer {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl RgbaBuffer {
    /// Construct an owned RGBA buffer given raw bytes (4 per pixel).
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Self {
        Self {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Borrow as a read-only `RasterRgba` view
    pub fn as_view(&self) -> RasterRgba<'_> {
        RasterRgba {
            w: self.width,
            h: self.height,
            stride: self.width * 4,
            data: &self.data,
        }
    }
}

/// Load an image from disk and convert to 8-bit RGBA.
pub fn load_rgba_image(path: &Path) -> Result<RgbaBuffer, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_rgba8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    Ok(RgbaBuffer::new(width, height, img.into_raw()))
}

/// Serialize `value` as pretty JSON into `path`.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON: {e}"))?;
    fs::write(path, json).map_err(|e| format!("Failed to write {}: {e}", path.display()))
}
