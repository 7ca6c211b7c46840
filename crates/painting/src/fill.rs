//! 4-connected flood fill over the skin buffer

use tracing::debug;

use crate::canvas::SkinCanvas;
use crate::color::Rgba;
use crate::constants::{CANVAS_SIZE, PIXEL_COUNT};

impl SkinCanvas {
    /// Recolour the 4-connected region of the seed's colour with `new_color`.
    ///
    /// Uses an explicit stack rather than recursion, so a full-canvas region
    /// costs at most one visit per cell. Returns the number of cells painted;
    /// zero if the seed is out of bounds or already `new_color`.
    pub fn flood_fill(&mut self, x: i32, y: i32, new_color: Rgba) -> usize {
        let Some(target) = self.sample_pixel(x, y) else {
            return 0;
        };
        if target == new_color {
            return 0;
        }

        let mut visited = vec![false; PIXEL_COUNT];
        let mut stack: Vec<(i32, i32)> = vec![(x, y)];
        let mut painted = 0;

        while let Some((cx, cy)) = stack.pop() {
            if !SkinCanvas::in_bounds(cx, cy) {
                continue;
            }
            let index = (cy as usize) * (CANVAS_SIZE as usize) + (cx as usize);
            if visited[index] {
                continue;
            }
            if self.sample_pixel(cx, cy) != Some(target) {
                continue;
            }

            visited[index] = true;
            self.set_pixel(cx, cy, new_color);
            painted += 1;

            stack.push((cx + 1, cy));
            stack.push((cx - 1, cy));
            stack.push((cx, cy + 1));
            stack.push((cx, cy - 1));
        }

        debug!(
            "flood_fill({}, {}) {} -> {}: {} cells",
            x, y, target, new_color, painted
        );
        painted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BrushSize;

    const GREEN: Rgba = Rgba::rgb(0, 255, 0);
    const WALL: Rgba = Rgba::rgb(255, 255, 255);

    #[test]
    fn test_fill_fresh_canvas() {
        let mut canvas = SkinCanvas::new();
        let painted = canvas.flood_fill(0, 0, GREEN);

        assert_eq!(painted, 4096);
        assert_eq!(canvas.count_color(GREEN), 4096);
    }

    #[test]
    fn test_fill_solid_canvas_from_any_seed() {
        for (x, y) in [(0, 0), (63, 63), (31, 17), (0, 63)] {
            let mut canvas = SkinCanvas::new();
            canvas.fill_all(WALL);
            assert_eq!(canvas.flood_fill(x, y, GREEN), 4096);
        }
    }

    #[test]
    fn test_fill_is_idempotent() {
        let mut canvas = SkinCanvas::new();
        canvas.paint_pixel(10, 10, WALL, BrushSize::new(4));
        canvas.flood_fill(0, 0, GREEN);
        let snapshot = canvas.clone();

        assert_eq!(canvas.flood_fill(0, 0, GREEN), 0);
        assert_eq!(canvas, snapshot);
    }

    #[test]
    fn test_fill_same_color_is_noop() {
        let mut canvas = SkinCanvas::new();
        assert_eq!(canvas.flood_fill(3, 3, Rgba::BACKGROUND), 0);
    }

    #[test]
    fn test_fill_out_of_bounds_seed() {
        let mut canvas = SkinCanvas::new();
        assert_eq!(canvas.flood_fill(-1, 0, GREEN), 0);
        assert_eq!(canvas.flood_fill(0, 64, GREEN), 0);
        assert_eq!(canvas.count_color(GREEN), 0);
    }

    #[test]
    fn test_orthogonal_moat_stops_fill() {
        let mut canvas = SkinCanvas::new();
        // Closed square ring with corners, interior 3x3 at (11..14, 11..14)
        for i in 10..15 {
            canvas.set_pixel(i, 10, WALL);
            canvas.set_pixel(i, 14, WALL);
            canvas.set_pixel(10, i, WALL);
            canvas.set_pixel(14, i, WALL);
        }

        let painted = canvas.flood_fill(12, 12, GREEN);

        assert_eq!(painted, 9);
        assert_eq!(canvas.sample_pixel(0, 0), Some(Rgba::BACKGROUND));
        assert_eq!(canvas.sample_pixel(12, 12), Some(GREEN));
    }

    #[test]
    fn test_diagonal_moat_leaks() {
        let mut canvas = SkinCanvas::new();
        // Diamond of single cells touching only at corners around (12, 12).
        // The orthogonal neighbours of the centre are background, so the
        // fill escapes through the gaps between diagonal walls.
        for (x, y) in [(11, 11), (13, 11), (11, 13), (13, 13)] {
            canvas.set_pixel(x, y, WALL);
        }

        let painted = canvas.flood_fill(12, 12, GREEN);

        assert_eq!(painted, 4096 - 4);
        assert_eq!(canvas.sample_pixel(0, 0), Some(GREEN));
        assert_eq!(canvas.sample_pixel(11, 11), Some(WALL));
    }

    #[test]
    fn test_fill_does_not_cross_diagonal_only_region() {
        let mut canvas = SkinCanvas::new();
        // Two wall cells touching only diagonally are separate regions
        canvas.set_pixel(5, 5, WALL);
        canvas.set_pixel(6, 6, WALL);

        let painted = canvas.flood_fill(5, 5, GREEN);

        assert_eq!(painted, 1);
        assert_eq!(canvas.sample_pixel(6, 6), Some(WALL));
    }
}
