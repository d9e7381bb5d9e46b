//! Connected-component labeling and boundary extraction.
//!
//! Foreground pixels are grouped into 8-connected components with an
//! explicit-stack flood fill in scan order. Each component then yields
//! two views of its rim: the unordered boundary pixel set (feeds the
//! convex hull) and an ordered outline ring traced by Moore border
//! following (feeds the polyline simplifier, which needs a traversal
//! order to preserve concavities).

use crate::mask::BinaryMask;
use crate::types::BoundingBox;
use nalgebra::Point2;

const NEIGH_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Clockwise Moore neighborhood starting east, for border following.
const TRACE_DIRS: [(isize, isize); 8] = [
    (1, 0),   // E
    (1, 1),   // SE
    (0, 1),   // S
    (-1, 1),  // SW
    (-1, 0),  // W
    (-1, -1), // NW
    (0, -1),  // N
    (1, -1),  // NE
];

/// One connected foreground region: pixel indices plus its label.
#[derive(Clone, Debug)]
pub struct Component {
    label: u32,
    pixels: Vec<usize>,
}

impl Component {
    pub fn pixels(&self) -> &[usize] {
        &self.pixels
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Min/max extents over the raw pixel set, inclusive.
    pub fn bounding_box(&self, width: usize) -> BoundingBox {
        let mut min_x = usize::MAX;
        let mut min_y = usize::MAX;
        let mut max_x = 0usize;
        let mut max_y = 0usize;
        for &idx in &self.pixels {
            let x = idx % width;
            let y = idx / width;
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
        }
        BoundingBox {
            x: min_x,
            y: min_y,
            width: max_x - min_x + 1,
            height: max_y - min_y + 1,
        }
    }
}

/// Label field plus the components it partitions the foreground into.
#[derive(Clone, Debug)]
pub struct ComponentLabels {
    width: usize,
    height: usize,
    labels: Vec<u32>, // 0 = background, 1.. = component label
    components: Vec<Component>,
}

/// Partition the mask's foreground into 8-connected components.
///
/// Every foreground pixel ends up in exactly one component; pixels are
/// visited in index order so the component list is deterministic.
pub fn label_components(mask: &BinaryMask) -> ComponentLabels {
    let n = mask.len();
    let mut labels = vec![0u32; n];
    let mut components = Vec::new();
    let mut stack: Vec<usize> = Vec::with_capacity(64);
    let mut current = 0u32;

    for seed in 0..n {
        if !mask.is_foreground(seed) || labels[seed] != 0 {
            continue;
        }
        current += 1;
        labels[seed] = current;
        stack.push(seed);
        let mut pixels = Vec::new();

        while let Some(idx) = stack.pop() {
            pixels.push(idx);
            let x = (idx % mask.width) as isize;
            let y = (idx / mask.width) as isize;
            for (dx, dy) in NEIGH_OFFSETS {
                let xn = x + dx;
                let yn = y + dy;
                if xn < 0 || yn < 0 || xn >= mask.width as isize || yn >= mask.height as isize {
                    continue;
                }
                let neighbor = yn as usize * mask.width + xn as usize;
                if mask.is_foreground(neighbor) && labels[neighbor] == 0 {
                    labels[neighbor] = current;
                    stack.push(neighbor);
                }
            }
        }

        components.push(Component {
            label: current,
            pixels,
        });
    }

    ComponentLabels {
        width: mask.width,
        height: mask.height,
        labels,
        components,
    }
}

impl ComponentLabels {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    #[inline]
    fn is_member(&self, x: isize, y: isize, label: u32) -> bool {
        x >= 0
            && y >= 0
            && x < self.width as isize
            && y < self.height as isize
            && self.labels[y as usize * self.width + x as usize] == label
    }

    /// Boundary pixel set of a component, in the order the fill
    /// discovered the pixels (deterministic for a given mask).
    ///
    /// A pixel is boundary iff any of its 8 neighbors is out of raster
    /// bounds or not a member of the same component.
    pub fn boundary_points(&self, comp: &Component) -> Vec<Point2<f32>> {
        let mut boundary = Vec::new();
        for &idx in &comp.pixels {
            let x = (idx % self.width) as isize;
            let y = (idx / self.width) as isize;
            let edge = NEIGH_OFFSETS
                .iter()
                .any(|&(dx, dy)| !self.is_member(x + dx, y + dy, comp.label));
            if edge {
                boundary.push(Point2::new(x as f32, y as f32));
            }
        }
        boundary
    }

    /// Ordered outer outline of a component via Moore border following.
    ///
    /// Starts at the component's scan-order-first pixel (topmost, then
    /// leftmost) and walks the rim clockwise. The walk stops once it is
    /// back at the start pixel and about to repeat its first move, so a
    /// rim that passes through the start pixel more than once (two lobes
    /// joined at a single pixel) is still traced in full. A step cap
    /// bounds the walk for pathological rims.
    pub fn trace_outline(&self, comp: &Component) -> Vec<Point2<f32>> {
        let Some(&start_idx) = comp.pixels.iter().min() else {
            return Vec::new();
        };
        let start = (
            (start_idx % self.width) as isize,
            (start_idx / self.width) as isize,
        );

        let mut outline = vec![Point2::new(start.0 as f32, start.1 as f32)];
        let mut current = start;
        // The scan-order-first pixel has no members west or north of it,
        // so start the clockwise search as if we arrived from the west.
        let mut prev_dir = 4usize;
        let mut first_move: Option<(isize, isize)> = None;
        let max_steps = comp.len().saturating_mul(8).max(32);

        for _ in 0..max_steps {
            let mut next = None;
            for step in 1..=8 {
                let k = (prev_dir + step) % 8;
                let xn = current.0 + TRACE_DIRS[k].0;
                let yn = current.1 + TRACE_DIRS[k].1;
                if self.is_member(xn, yn, comp.label) {
                    // Backtrack direction for the next step: the neighbor
                    // just before k in the clockwise search.
                    prev_dir = (k + 6) % 8;
                    next = Some((xn, yn));
                    break;
                }
            }

            let Some(next) = next else { break };
            if current == start {
                match first_move {
                    None => first_move = Some(next),
                    Some(first) if next == first => break,
                    Some(_) => {}
                }
            }
            outline.push(Point2::new(next.0 as f32, next.1 as f32));
            current = next;
        }

        // Termination by the repeat criterion leaves the closing return
        // to the start pixel as the last entry; drop it.
        if outline.len() > 1 && outline.last() == outline.first() {
            outline.pop();
        }

        outline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mask_from_rows(rows: &[&[u8]]) -> BinaryMask {
        let height = rows.len();
        let width = rows[0].len();
        let data: Vec<u8> = rows.iter().flat_map(|r| r.iter().copied()).collect();
        BinaryMask::from_raw(width, height, data)
    }

    #[test]
    fn foreground_is_partitioned_into_disjoint_components() {
        // Four islands: top-left blob, right column pair, the lone (0,3),
        // and the (3,3)-(4,3) pair. (0,3) and (3,3) are not 8-adjacent.
        let mask = mask_from_rows(&[
            &[1, 1, 0, 0, 1],
            &[1, 0, 0, 0, 1],
            &[0, 0, 0, 0, 0],
            &[1, 0, 0, 1, 1],
        ]);
        let labeled = label_components(&mask);
        let comps = labeled.components();
        assert_eq!(comps.len(), 4);

        let mut all: Vec<usize> = comps.iter().flat_map(|c| c.pixels().to_vec()).collect();
        all.sort_unstable();
        let mut expected: Vec<usize> = (0..mask.len()).filter(|&i| mask.is_foreground(i)).collect();
        expected.sort_unstable();
        assert_eq!(all, expected, "components must cover the foreground exactly");
    }

    #[test]
    fn diagonal_pixels_are_one_component() {
        let mask = mask_from_rows(&[&[1, 0, 0], &[0, 1, 0], &[0, 0, 1]]);
        let labeled = label_components(&mask);
        assert_eq!(labeled.components().len(), 1);
        assert_eq!(labeled.components()[0].len(), 3);
    }

    #[test]
    fn interior_pixels_are_not_boundary() {
        // 4x4 block inside a 6x6 mask: the 2x2 interior must be excluded.
        let mut data = vec![0u8; 36];
        for y in 1..5 {
            for x in 1..5 {
                data[y * 6 + x] = 1;
            }
        }
        let mask = BinaryMask::from_raw(6, 6, data);
        let labeled = label_components(&mask);
        let comp = &labeled.components()[0];
        let boundary = labeled.boundary_points(comp);
        assert_eq!(boundary.len(), 12);
        assert!(!boundary.contains(&Point2::new(2.0, 2.0)));
    }

    #[test]
    fn pixels_at_raster_edge_are_boundary() {
        // Fully foreground 3x3 mask: the 8 rim pixels touch out-of-bounds,
        // the center has all neighbors in the component and stays interior.
        let mask = BinaryMask::from_raw(3, 3, vec![1; 9]);
        let labeled = label_components(&mask);
        let comp = &labeled.components()[0];
        let boundary = labeled.boundary_points(comp);
        assert_eq!(boundary.len(), 8);
        assert!(!boundary.contains(&Point2::new(1.0, 1.0)));
    }

    #[test]
    fn outline_of_block_walks_the_rim_in_order() {
        let mut data = vec![0u8; 49];
        for y in 1..6 {
            for x in 1..6 {
                data[y * 7 + x] = 1;
            }
        }
        let mask = BinaryMask::from_raw(7, 7, data);
        let labeled = label_components(&mask);
        let comp = &labeled.components()[0];
        let outline = labeled.trace_outline(comp);
        // 5x5 block rim has 16 pixels, each visited once.
        assert_eq!(outline.len(), 16);
        assert_eq!(outline[0], Point2::new(1.0, 1.0));
        // Consecutive outline points are 8-adjacent.
        for pair in outline.windows(2) {
            let dx = (pair[0].x - pair[1].x).abs();
            let dy = (pair[0].y - pair[1].y).abs();
            assert!(dx <= 1.0 && dy <= 1.0 && (dx + dy) > 0.0);
        }
    }

    #[test]
    fn outline_covers_both_arms_joined_at_the_start_pixel() {
        // Two thin arms meet at (1,0), the trace start: an east arm walked
        // out and back, then the lone south-west pixel. The rim passes
        // through the start twice, so the walk must continue through it
        // and only stop when it is about to repeat its first move.
        let mask = mask_from_rows(&[&[0, 1, 1, 1], &[1, 0, 0, 0]]);
        let labeled = label_components(&mask);
        assert_eq!(labeled.components().len(), 1);
        let comp = &labeled.components()[0];
        let outline = labeled.trace_outline(comp);
        assert_eq!(
            outline,
            vec![
                Point2::new(1.0, 0.0),
                Point2::new(2.0, 0.0),
                Point2::new(3.0, 0.0),
                Point2::new(2.0, 0.0),
                Point2::new(1.0, 0.0),
                Point2::new(0.0, 1.0),
            ]
        );
    }

    #[test]
    fn outline_of_single_pixel_is_that_pixel() {
        let mask = mask_from_rows(&[&[0, 0], &[0, 1]]);
        let labeled = label_components(&mask);
        let comp = &labeled.components()[0];
        let outline = labeled.trace_outline(comp);
        assert_eq!(outline, vec![Point2::new(1.0, 1.0)]);
    }
}
