/// Borrowed view over an RGBA raster, 4 bytes per pixel.
#[derive(Clone, Debug)]
pub struct RasterRgba<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize, // bytes between rows
    pub data: &'a [u8],
}

impl<'a> RasterRgba<'a> {
    /// View over a tightly packed RGBA buffer (stride = 4·width).
    pub fn from_packed(w: usize, h: usize, data: &'a [u8]) -> Self {
        Self {
            w,
            h,
            stride: w * 4,
            data,
        }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> [u8; 4] {
        let off = y * self.stride + x * 4;
        [
            self.data[off],
            self.data[off + 1],
            self.data[off + 2],
            self.data[off + 3],
        ]
    }

    #[inline]
    pub fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.w * 4]
    }

    /// True when the raster carries no pixels at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_reads_rgba_quadruple() {
        let data = [1u8, 2, 3, 4, 5, 6, 7, 8];
        let img = RasterRgba::from_packed(2, 1, &data);
        assert_eq!(img.get(0, 0), [1, 2, 3, 4]);
        assert_eq!(img.get(1, 0), [5, 6, 7, 8]);
    }

    #[test]
    fn zero_sized_raster_is_empty() {
        let img = RasterRgba::from_packed(0, 0, &[]);
        assert!(img.is_empty());
    }
}
