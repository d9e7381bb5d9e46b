use shape_detector::image::RasterRgba;

/// White RGBA canvas with helpers to draw filled black shapes.
pub struct Canvas {
    pub width: usize,
    pub height: usize,
    pub data: Vec<u8>,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "canvas dimensions must be positive");
        Self {
            width,
            height,
            data: vec![255u8; width * height * 4],
        }
    }

    pub fn view(&self) -> RasterRgba<'_> {
        RasterRgba::from_packed(self.width, self.height, &self.data)
    }

    fn set_black(&mut self, x: usize, y: usize) {
        let off = (y * self.width + x) * 4;
        self.data[off] = 0;
        self.data[off + 1] = 0;
        self.data[off + 2] = 0;
    }

    /// Filled black disk: pixels with (x-cx)² + (y-cy)² ≤ r².
    pub fn fill_disk(&mut self, cx: i32, cy: i32, r: i32) {
        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                let dx = x - cx;
                let dy = y - cy;
                if dx * dx + dy * dy <= r * r {
                    self.set_black(x as usize, y as usize);
                }
            }
        }
    }

    /// Filled black axis-aligned rectangle, `w`×`h` pixels.
    pub fn fill_rect(&mut self, x0: usize, y0: usize, w: usize, h: usize) {
        for y in y0..(y0 + h).min(self.height) {
            for x in x0..(x0 + w).min(self.width) {
                self.set_black(x, y);
            }
        }
    }

    /// Filled black polygon via even-odd rasterization of pixel centers.
    pub fn fill_polygon(&mut self, vertices: &[(f32, f32)]) {
        for y in 0..self.height {
            for x in 0..self.width {
                if point_in_polygon(x as f32, y as f32, vertices) {
                    self.set_black(x, y);
                }
            }
        }
    }

    /// Five-pointed star centered at (cx, cy), first tip pointing up.
    pub fn fill_star(&mut self, cx: f32, cy: f32, outer: f32, inner: f32) {
        let vertices: Vec<(f32, f32)> = (0..10)
            .map(|i| {
                let r = if i % 2 == 0 { outer } else { inner };
                let theta = -std::f32::consts::FRAC_PI_2 + i as f32 * std::f32::consts::PI / 5.0;
                (cx + r * theta.cos(), cy + r * theta.sin())
            })
            .collect();
        self.fill_polygon(&vertices);
    }
}

fn point_in_polygon(px: f32, py: f32, vertices: &[(f32, f32)]) -> bool {
    let n = vertices.len();
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (xi, yi) = vertices[i];
        let (xj, yj) = vertices[j];
        if (yi > py) != (yj > py) && px < (xj - xi) * (py - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}
