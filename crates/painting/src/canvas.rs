//! The 64x64 skin buffer

use tracing::debug;

use crate::color::Rgba;
use crate::constants::{CANVAS_SIZE, PIXEL_COUNT};
use crate::types::BrushSize;

/// The skin texture: a fixed 64x64 grid of RGBA8 pixels in row-major order.
///
/// Every write goes through a method that clips to the grid, so callers may
/// pass any coordinate.
#[derive(Clone, PartialEq, Eq)]
pub struct SkinCanvas {
    pixels: Vec<Rgba>,
    background: Rgba,
}

impl SkinCanvas {
    /// Create a canvas filled with the standard background colour
    pub fn new() -> Self {
        Self::with_background(Rgba::BACKGROUND)
    }

    /// Create a canvas that clears and erases to `background`
    pub fn with_background(background: Rgba) -> Self {
        Self {
            pixels: vec![background; PIXEL_COUNT],
            background,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        CANVAS_SIZE
    }

    #[inline]
    pub fn height(&self) -> u32 {
        CANVAS_SIZE
    }

    /// Colour written by `clear` and by the eraser
    pub fn background(&self) -> Rgba {
        self.background
    }

    #[inline]
    pub fn in_bounds(x: i32, y: i32) -> bool {
        let size = CANVAS_SIZE as i32;
        (0..size).contains(&x) && (0..size).contains(&y)
    }

    #[inline]
    fn index(x: i32, y: i32) -> usize {
        (y as usize) * (CANVAS_SIZE as usize) + (x as usize)
    }

    /// Read one pixel. Returns None outside the grid.
    #[inline]
    pub fn sample_pixel(&self, x: i32, y: i32) -> Option<Rgba> {
        if !Self::in_bounds(x, y) {
            return None;
        }
        Some(self.pixels[Self::index(x, y)])
    }

    /// Write one pixel. Returns false (and does nothing) outside the grid.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Rgba) -> bool {
        if !Self::in_bounds(x, y) {
            return false;
        }
        let index = Self::index(x, y);
        self.pixels[index] = color;
        true
    }

    /// Paint the `brush x brush` block whose top-left cell is (x, y).
    /// Cells that fall outside the grid are skipped. Returns how many cells
    /// were written.
    pub fn paint_pixel(&mut self, x: i32, y: i32, color: Rgba, brush: BrushSize) -> usize {
        let n = brush.get() as i32;
        let mut written = 0;
        for dy in 0..n {
            for dx in 0..n {
                if self.set_pixel(x + dx, y + dy, color) {
                    written += 1;
                }
            }
        }
        written
    }

    /// Reset every pixel to the background colour
    pub fn clear(&mut self) {
        self.pixels.fill(self.background);
        debug!("Canvas cleared to {}", self.background);
    }

    /// Fill every pixel with `color`
    pub fn fill_all(&mut self, color: Rgba) {
        self.pixels.fill(color);
    }

    /// Replace the whole buffer. `pixels` must hold exactly 64*64 entries
    /// in row-major order; anything else is ignored and false is returned.
    pub fn replace_pixels(&mut self, pixels: Vec<Rgba>) -> bool {
        if pixels.len() != PIXEL_COUNT {
            return false;
        }
        self.pixels = pixels;
        true
    }

    /// Raw RGBA8 bytes for texture upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    #[inline]
    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    /// Number of pixels equal to `color`
    pub fn count_color(&self, color: Rgba) -> usize {
        self.pixels.iter().filter(|p| **p == color).count()
    }
}

impl Default for SkinCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SkinCanvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SkinCanvas")
            .field("size", &CANVAS_SIZE)
            .field("background", &self.background)
            .finish_non_exhaustive()
    }
}
