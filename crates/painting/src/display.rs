//! Zoomed render of the buffer for the 2D editor view
//!
//! The buffer holds logical pixels only. Grid lines exist solely in this
//! render, so sampling and export are never affected by the overlay.

use image::RgbaImage;

use crate::canvas::SkinCanvas;
use crate::color::Rgba;
use crate::constants::CANVAS_SIZE;

/// Grid overlay settings for the display render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridOverlay {
    pub enabled: bool,
    pub color: Rgba,
}

impl Default for GridOverlay {
    fn default() -> Self {
        Self {
            enabled: true,
            color: Rgba::GRID,
        }
    }
}

/// Side length in screen pixels of the display render at `scale`
pub fn display_size(scale: u32) -> u32 {
    CANVAS_SIZE * scale.max(1)
}

/// Map a position in the display render (screen pixels, origin top-left)
/// to the buffer cell under it. Returns None outside the canvas.
pub fn display_to_cell(x: f32, y: f32, scale: u32) -> Option<(i32, i32)> {
    let scale = scale.max(1) as f32;
    let cx = (x / scale).floor();
    let cy = (y / scale).floor();
    let size = CANVAS_SIZE as f32;
    if cx < 0.0 || cy < 0.0 || cx >= size || cy >= size {
        return None;
    }
    Some((cx as i32, cy as i32))
}

/// Render the buffer at `scale` screen pixels per cell.
///
/// With the grid enabled, the first row and column of each cell plus the
/// far right and bottom edges are drawn in the grid colour.
pub fn render_display(canvas: &SkinCanvas, scale: u32, grid: GridOverlay) -> RgbaImage {
    let scale = scale.max(1);
    let size = display_size(scale);
    // A 1-pixel grid would cover every cell entirely
    let draw_grid = grid.enabled && scale > 1;

    RgbaImage::from_fn(size, size, |x, y| {
        let on_line = x % scale == 0 || y % scale == 0 || x == size - 1 || y == size - 1;
        let color = if draw_grid && on_line {
            grid.color
        } else {
            canvas
                .sample_pixel((x / scale) as i32, (y / scale) as i32)
                .unwrap_or(Rgba::TRANSPARENT)
        };
        image::Rgba(color.to_array())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BrushSize;

    #[test]
    fn test_display_size() {
        assert_eq!(display_size(8), 512);
        assert_eq!(display_size(0), 64);
    }

    #[test]
    fn test_display_to_cell() {
        assert_eq!(display_to_cell(0.0, 0.0, 8), Some((0, 0)));
        assert_eq!(display_to_cell(15.9, 8.0, 8), Some((1, 1)));
        assert_eq!(display_to_cell(511.5, 511.5, 8), Some((63, 63)));
        assert_eq!(display_to_cell(512.0, 0.0, 8), None);
        assert_eq!(display_to_cell(-0.5, 3.0, 8), None);
    }

    #[test]
    fn test_render_without_grid() {
        let mut canvas = SkinCanvas::new();
        let red = Rgba::rgb(255, 0, 0);
        canvas.paint_pixel(1, 0, red, BrushSize::new(1));

        let image = render_display(&canvas, 8, GridOverlay { enabled: false, ..Default::default() });

        assert_eq!(image.dimensions(), (512, 512));
        assert_eq!(image.get_pixel(8, 0).0, red.to_array());
        assert_eq!(image.get_pixel(15, 7).0, red.to_array());
        assert_eq!(image.get_pixel(16, 0).0, Rgba::BACKGROUND.to_array());
    }

    #[test]
    fn test_render_with_grid() {
        let mut canvas = SkinCanvas::new();
        let red = Rgba::rgb(255, 0, 0);
        canvas.paint_pixel(1, 0, red, BrushSize::new(1));

        let image = render_display(&canvas, 8, GridOverlay::default());

        assert_eq!(image.get_pixel(8, 3).0, Rgba::GRID.to_array());
        assert_eq!(image.get_pixel(10, 0).0, Rgba::GRID.to_array());
        assert_eq!(image.get_pixel(9, 1).0, red.to_array());
        assert_eq!(image.get_pixel(511, 200).0, Rgba::GRID.to_array());
    }

    #[test]
    fn test_grid_does_not_touch_buffer() {
        let canvas = SkinCanvas::new();
        let _ = render_display(&canvas, 8, GridOverlay::default());
        assert_eq!(canvas.count_color(Rgba::GRID), 0);
    }
}
