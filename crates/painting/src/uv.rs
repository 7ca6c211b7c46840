//! Texture coordinate to buffer cell conversion

use glam::Vec2;

use crate::constants::CANVAS_SIZE;

/// Map a surface UV (v pointing up) to the buffer cell it addresses.
///
/// `x = floor(u * 64)`, `y = floor((1 - v) * 64)`, both clamped to 0..=63
/// so hits exactly on the far edge still land on the last cell.
pub fn uv_to_pixel(uv: Vec2) -> (i32, i32) {
    let size = CANVAS_SIZE as f32;
    let max = CANVAS_SIZE as i32 - 1;
    let x = (uv.x * size).floor() as i32;
    let y = ((1.0 - uv.y) * size).floor() as i32;
    (x.clamp(0, max), y.clamp(0, max))
}
