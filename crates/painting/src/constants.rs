/// Side length of the skin texture in pixels. Fixed; the buffer is never resized.
pub const CANVAS_SIZE: u32 = 64;

/// Total number of pixels in the skin texture.
pub const PIXEL_COUNT: usize = (CANVAS_SIZE * CANVAS_SIZE) as usize;

/// On-screen pixels per texture pixel in the 2D editor view.
pub const DEFAULT_PIXEL_SCALE: u32 = 8;

/// Smallest brush side length.
pub const MIN_BRUSH_SIZE: u8 = 1;

/// Largest brush side length.
pub const MAX_BRUSH_SIZE: u8 = 8;
