//! Grayscale conversion and fixed-threshold binarization.
//!
//! The detector looks for dark shapes on a light background: a pixel is
//! foreground iff its luminance falls below the threshold.

use crate::image::{GrayBuffer, RasterRgba};

/// Convert an RGBA raster to luminance via `0.299 R + 0.587 G + 0.114 B`.
pub fn to_grayscale(raster: &RasterRgba) -> GrayBuffer {
    let mut gray = Vec::with_capacity(raster.w * raster.h);
    for y in 0..raster.h {
        let row = raster.row(y);
        for px in row.chunks_exact(4) {
            let luma = 0.299 * px[0] as f32 + 0.587 * px[1] as f32 + 0.114 * px[2] as f32;
            gray.push(luma.clamp(0.0, 255.0) as u8);
        }
    }
    GrayBuffer::new(raster.w, raster.h, gray)
}

/// Binary foreground/background mask derived from a luminance buffer.
#[derive(Clone, Debug)]
pub struct BinaryMask {
    pub width: usize,
    pub height: usize,
    data: Vec<u8>,
}

impl BinaryMask {
    #[inline]
    pub fn is_foreground(&self, idx: usize) -> bool {
        self.data[idx] != 0
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn foreground_count(&self) -> usize {
        self.data.iter().filter(|&&v| v != 0).count()
    }

    /// Build a mask directly from raw foreground flags (tests, tools).
    pub fn from_raw(width: usize, height: usize, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), width * height);
        Self {
            width,
            height,
            data,
        }
    }
}

/// Threshold a luminance buffer: foreground iff `luma < threshold`.
pub fn binarize(gray: &GrayBuffer, threshold: u8) -> BinaryMask {
    let data = gray
        .as_slice()
        .iter()
        .map(|&luma| u8::from(luma < threshold))
        .collect();
    BinaryMask {
        width: gray.width(),
        height: gray.height(),
        data,
    }
}
