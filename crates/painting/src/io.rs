//! PNG import and export for the skin buffer

use std::io::Cursor;

use image::imageops::FilterType;
use image::{ImageFormat, RgbaImage};
use thiserror::Error;
use tracing::{debug, info};

use crate::canvas::SkinCanvas;
use crate::color::Rgba;
use crate::constants::CANVAS_SIZE;

#[derive(Debug, Error)]
pub enum CanvasError {
    #[error("Failed to decode image: {0}")]
    Decode(#[source] image::ImageError),
    #[error("Failed to encode PNG: {0}")]
    Encode(#[source] image::ImageError),
}

impl SkinCanvas {
    /// Decode an image and overwrite the whole buffer with it.
    ///
    /// Images of any size are scaled to 64x64 with nearest-neighbour
    /// sampling; a 64x64 image is copied untouched. Alpha is kept as is.
    /// On a decode error the buffer is left unchanged.
    pub fn import_image(&mut self, bytes: &[u8]) -> Result<(), CanvasError> {
        let decoded = image::load_from_memory(bytes).map_err(CanvasError::Decode)?;
        let (src_w, src_h) = (decoded.width(), decoded.height());
        let rgba = decoded.to_rgba8();

        let scaled = if src_w == CANVAS_SIZE && src_h == CANVAS_SIZE {
            rgba
        } else {
            debug!("Rescaling imported {}x{} image to {}x{}", src_w, src_h, CANVAS_SIZE, CANVAS_SIZE);
            image::imageops::resize(&rgba, CANVAS_SIZE, CANVAS_SIZE, FilterType::Nearest)
        };

        self.load_rgba_image(&scaled);
        info!("Imported {}x{} image into skin canvas", src_w, src_h);
        Ok(())
    }

    /// Copy a 64x64 RGBA image into the buffer
    fn load_rgba_image(&mut self, image: &RgbaImage) {
        let pixels: Vec<Rgba> = image.pixels().map(|p| Rgba::from_array(p.0)).collect();
        // Dimensions are guaranteed by the caller
        self.replace_pixels(pixels);
    }

    /// The buffer as a 64x64 RGBA image
    pub fn to_rgba_image(&self) -> RgbaImage {
        RgbaImage::from_fn(CANVAS_SIZE, CANVAS_SIZE, |x, y| {
            let c = self
                .sample_pixel(x as i32, y as i32)
                .unwrap_or(Rgba::TRANSPARENT);
            image::Rgba(c.to_array())
        })
    }

    /// Encode the buffer as a PNG of exactly 64x64 pixels
    pub fn export_png(&self) -> Result<Vec<u8>, CanvasError> {
        let mut bytes = Vec::new();
        self.to_rgba_image()
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .map_err(CanvasError::Encode)?;
        debug!("Exported skin canvas as {} PNG bytes", bytes.len());
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BrushSize;

    fn encode(image: &RgbaImage) -> Vec<u8> {
        let mut bytes = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn test_export_dimensions() {
        let canvas = SkinCanvas::new();
        let png = canvas.export_png().unwrap();
        let decoded = image::load_from_memory(&png).unwrap();
        assert_eq!(decoded.width(), 64);
        assert_eq!(decoded.height(), 64);
    }

    #[test]
    fn test_export_import_round_trip() {
        let mut canvas = SkinCanvas::new();
        canvas.paint_pixel(0, 0, Rgba::rgb(255, 0, 0), BrushSize::new(3));
        canvas.paint_pixel(40, 12, Rgba::new(10, 20, 30, 128), BrushSize::new(5));
        canvas.set_pixel(63, 63, Rgba::TRANSPARENT);
        canvas.flood_fill(30, 50, Rgba::rgb(0, 0, 255));

        let png = canvas.export_png().unwrap();
        let mut restored = SkinCanvas::new();
        restored.import_image(&png).unwrap();

        assert_eq!(restored.pixels(), canvas.pixels());
    }

    #[test]
    fn test_import_rescales_larger_image() {
        // 128x128 with a red left half and blue right half
        let source = RgbaImage::from_fn(128, 128, |x, _| {
            if x < 64 {
                image::Rgba([255, 0, 0, 255])
            } else {
                image::Rgba([0, 0, 255, 255])
            }
        });

        let mut canvas = SkinCanvas::new();
        canvas.import_image(&encode(&source)).unwrap();

        assert_eq!(canvas.sample_pixel(0, 0), Some(Rgba::rgb(255, 0, 0)));
        assert_eq!(canvas.sample_pixel(31, 40), Some(Rgba::rgb(255, 0, 0)));
        assert_eq!(canvas.sample_pixel(32, 40), Some(Rgba::rgb(0, 0, 255)));
        assert_eq!(canvas.sample_pixel(63, 63), Some(Rgba::rgb(0, 0, 255)));
    }

    #[test]
    fn test_import_rescales_smaller_image() {
        let source = RgbaImage::from_pixel(8, 8, image::Rgba([1, 2, 3, 4]));

        let mut canvas = SkinCanvas::new();
        canvas.import_image(&encode(&source)).unwrap();

        assert_eq!(canvas.count_color(Rgba::new(1, 2, 3, 4)), 4096);
    }

    #[test]
    fn test_import_garbage_leaves_buffer() {
        let mut canvas = SkinCanvas::new();
        canvas.set_pixel(1, 1, Rgba::rgb(9, 9, 9));
        let before = canvas.clone();

        let result = canvas.import_image(b"definitely not a png");

        assert!(matches!(result, Err(CanvasError::Decode(_))));
        assert_eq!(canvas, before);
    }
}
