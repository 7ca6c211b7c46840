//! Editor controller: single owner of the skin buffer and tool state
//!
//! Both the 2D canvas view and the 3D preview route pointer input through
//! [`EditorController`]. Views never touch the buffer directly; they read it
//! through [`EditorController::canvas`] and watch the dirty flags to decide
//! when to re-upload textures.
//!
//! Pointer handling is a small state machine:
//! - `pointer_down` sets the drawing flag and applies the active tool once
//! - `pointer_move` repeats the tool only while drawing with pencil or eraser
//! - `pointer_up` / `pointer_leave` clear the drawing flag

use image::RgbaImage;
use tracing::{debug, info};

use crate::canvas::SkinCanvas;
use crate::color::{ColorError, Rgba};
use crate::constants::DEFAULT_PIXEL_SCALE;
use crate::display::{GridOverlay, render_display};
use crate::io::CanvasError;
use crate::palette::palette_color;
use crate::types::{BrushSize, EditOutcome, FaceTag, LayerHint, Tool};

pub struct EditorController {
    canvas: SkinCanvas,
    tool: Tool,
    brush: BrushSize,
    color: Rgba,
    layer: LayerHint,
    grid: GridOverlay,
    pixel_scale: u32,
    /// True while a pointer button is held over a view
    drawing: bool,
    /// Buffer changed since the last texture upload
    texture_dirty: bool,
    /// Buffer or grid changed since the last display render
    display_dirty: bool,
}

impl EditorController {
    pub fn new() -> Self {
        Self::with_canvas(SkinCanvas::new())
    }

    /// Wrap an existing canvas with default tool state
    pub fn with_canvas(canvas: SkinCanvas) -> Self {
        Self {
            canvas,
            tool: Tool::default(),
            brush: BrushSize::default(),
            color: Rgba::ACCENT,
            layer: LayerHint::default(),
            grid: GridOverlay::default(),
            pixel_scale: DEFAULT_PIXEL_SCALE,
            drawing: false,
            texture_dirty: true,
            display_dirty: true,
        }
    }

    pub fn canvas(&self) -> &SkinCanvas {
        &self.canvas
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn brush_size(&self) -> BrushSize {
        self.brush
    }

    pub fn color(&self) -> Rgba {
        self.color
    }

    pub fn layer(&self) -> LayerHint {
        self.layer
    }

    pub fn grid(&self) -> GridOverlay {
        self.grid
    }

    pub fn pixel_scale(&self) -> u32 {
        self.pixel_scale
    }

    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    pub fn set_tool(&mut self, tool: Tool) {
        if self.tool != tool {
            debug!("Tool: {:?} -> {:?}", self.tool, tool);
            self.tool = tool;
        }
    }

    /// Set the selected colour. The selection is always opaque; any alpha
    /// is dropped.
    pub fn set_color(&mut self, color: Rgba) {
        self.color = color.opaque();
    }

    /// Set the selected colour from hex entry. The selection is unchanged
    /// when the string does not parse.
    pub fn set_color_hex(&mut self, hex: &str) -> Result<(), ColorError> {
        self.set_color(Rgba::from_hex(hex)?);
        Ok(())
    }

    /// Select palette swatch `index`. Returns false for an unknown index.
    pub fn select_palette(&mut self, index: usize) -> bool {
        match palette_color(index) {
            Some(color) => {
                self.color = color;
                true
            }
            None => false,
        }
    }

    /// Set the brush side length, clamped to 1..=8
    pub fn set_brush_size(&mut self, size: u8) {
        self.brush = BrushSize::new(size);
    }

    pub fn set_layer(&mut self, layer: LayerHint) {
        self.layer = layer;
    }

    pub fn set_grid(&mut self, enabled: bool) {
        if self.grid.enabled != enabled {
            self.grid.enabled = enabled;
            self.display_dirty = true;
        }
    }

    /// Flip the grid overlay, returning the new state
    pub fn toggle_grid(&mut self) -> bool {
        self.set_grid(!self.grid.enabled);
        self.grid.enabled
    }

    pub fn set_pixel_scale(&mut self, scale: u32) {
        let scale = scale.max(1);
        if self.pixel_scale != scale {
            self.pixel_scale = scale;
            self.display_dirty = true;
        }
    }

    /// Press at buffer cell (x, y)
    pub fn pointer_down(&mut self, x: i32, y: i32) -> EditOutcome {
        self.drawing = true;
        self.apply_tool(x, y)
    }

    /// Pointer moved to buffer cell (x, y)
    pub fn pointer_move(&mut self, x: i32, y: i32) -> EditOutcome {
        if !self.drawing || !self.tool.is_continuous() {
            return EditOutcome::Unchanged;
        }
        self.apply_tool(x, y)
    }

    pub fn pointer_up(&mut self) {
        self.drawing = false;
    }

    /// Pointer left the view; ends any stroke in progress
    pub fn pointer_leave(&mut self) {
        self.drawing = false;
    }

    /// Press on a model part. Every part addresses the same shared buffer,
    /// so the tag is only recorded in the log.
    pub fn face_pointer_down(&mut self, face: FaceTag, x: i32, y: i32) -> EditOutcome {
        debug!("Pointer down on {} at ({}, {})", face.name(), x, y);
        self.pointer_down(x, y)
    }

    pub fn face_pointer_move(&mut self, face: FaceTag, x: i32, y: i32) -> EditOutcome {
        if self.drawing {
            debug!("Pointer move on {} at ({}, {})", face.name(), x, y);
        }
        self.pointer_move(x, y)
    }

    /// Apply the active tool once at (x, y)
    fn apply_tool(&mut self, x: i32, y: i32) -> EditOutcome {
        if !SkinCanvas::in_bounds(x, y) {
            return EditOutcome::Unchanged;
        }

        let outcome = match self.tool {
            Tool::Pencil => {
                let cells = self.canvas.paint_pixel(x, y, self.color, self.brush);
                EditOutcome::Painted { cells }
            }
            Tool::Eraser => {
                let background = self.canvas.background();
                let cells = self.canvas.paint_pixel(x, y, background, self.brush);
                EditOutcome::Painted { cells }
            }
            Tool::Fill => {
                let cells = self.canvas.flood_fill(x, y, self.color);
                if cells == 0 {
                    EditOutcome::Unchanged
                } else {
                    EditOutcome::Painted { cells }
                }
            }
            Tool::Picker => match self.canvas.sample_pixel(x, y).map(Rgba::opaque) {
                Some(color) => {
                    self.color = color;
                    self.tool = Tool::Pencil;
                    debug!("Picked {} at ({}, {}), back to pencil", color, x, y);
                    EditOutcome::Picked(color)
                }
                None => EditOutcome::Unchanged,
            },
        };

        if outcome.changed_pixels() {
            self.mark_dirty();
        }
        outcome
    }

    /// Reset the buffer to the background colour
    pub fn clear(&mut self) {
        self.canvas.clear();
        self.mark_dirty();
        info!("Skin canvas cleared");
    }

    /// Replace the buffer with an encoded image, scaled to 64x64
    pub fn import_png(&mut self, bytes: &[u8]) -> Result<(), CanvasError> {
        self.canvas.import_image(bytes)?;
        self.mark_dirty();
        Ok(())
    }

    /// Encode the buffer as a 64x64 PNG
    pub fn export_png(&self) -> Result<Vec<u8>, CanvasError> {
        self.canvas.export_png()
    }

    /// Zoomed display image with the current grid setting
    pub fn render_display(&self) -> RgbaImage {
        render_display(&self.canvas, self.pixel_scale, self.grid)
    }

    fn mark_dirty(&mut self) {
        self.texture_dirty = true;
        self.display_dirty = true;
    }

    /// Take the texture dirty flag, clearing it
    pub fn take_texture_dirty(&mut self) -> bool {
        std::mem::take(&mut self.texture_dirty)
    }

    /// Take the display dirty flag, clearing it
    pub fn take_display_dirty(&mut self) -> bool {
        std::mem::take(&mut self.display_dirty)
    }
}

impl Default for EditorController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgba = Rgba::rgb(255, 0, 0);

    fn fresh() -> EditorController {
        let mut editor = EditorController::new();
        editor.take_texture_dirty();
        editor.take_display_dirty();
        editor
    }

    #[test]
    fn test_defaults() {
        let editor = EditorController::new();
        assert_eq!(editor.tool(), Tool::Pencil);
        assert_eq!(editor.brush_size().get(), 1);
        assert_eq!(editor.color(), Rgba::ACCENT);
        assert_eq!(editor.layer(), LayerHint::All);
        assert!(editor.grid().enabled);
        assert!(!editor.is_drawing());
    }

    #[test]
    fn test_pencil_click() {
        let mut editor = fresh();
        editor.set_color(RED);

        let outcome = editor.pointer_down(5, 5);

        assert_eq!(outcome, EditOutcome::Painted { cells: 1 });
        assert_eq!(editor.canvas().sample_pixel(5, 5), Some(RED));
        assert_eq!(editor.canvas().sample_pixel(6, 5), Some(Rgba::BACKGROUND));
        assert!(editor.take_texture_dirty());
        assert!(!editor.take_texture_dirty());
    }

    #[test]
    fn test_pencil_stroke_requires_drawing_flag() {
        let mut editor = fresh();
        editor.set_color(RED);

        // Moving without a press does nothing
        assert_eq!(editor.pointer_move(1, 1), EditOutcome::Unchanged);

        editor.pointer_down(1, 1);
        editor.pointer_move(2, 1);
        editor.pointer_move(3, 1);
        editor.pointer_up();
        editor.pointer_move(4, 1);

        assert_eq!(editor.canvas().count_color(RED), 3);
        assert_eq!(editor.canvas().sample_pixel(4, 1), Some(Rgba::BACKGROUND));
    }

    #[test]
    fn test_pointer_leave_ends_stroke() {
        let mut editor = fresh();
        editor.pointer_down(0, 0);
        editor.pointer_leave();
        assert!(!editor.is_drawing());
        assert_eq!(editor.pointer_move(1, 0), EditOutcome::Unchanged);
    }

    #[test]
    fn test_eraser_paints_background() {
        let mut editor = fresh();
        editor.set_color(RED);
        editor.set_brush_size(4);
        editor.pointer_down(0, 0);
        editor.pointer_up();

        editor.set_tool(Tool::Eraser);
        editor.set_brush_size(2);
        editor.pointer_down(0, 0);
        editor.pointer_move(2, 2);
        editor.pointer_up();

        assert_eq!(editor.canvas().count_color(RED), 8);
        assert_eq!(editor.canvas().sample_pixel(0, 0), Some(Rgba::BACKGROUND));
        assert_eq!(editor.canvas().sample_pixel(3, 3), Some(Rgba::BACKGROUND));
        assert_eq!(editor.canvas().sample_pixel(3, 0), Some(RED));
    }

    #[test]
    fn test_fill_is_single_shot() {
        let mut editor = fresh();
        editor.set_tool(Tool::Fill);
        editor.set_color(RED);

        assert_eq!(editor.pointer_down(0, 0), EditOutcome::Painted { cells: 4096 });
        editor.set_color(Rgba::rgb(0, 0, 255));
        assert_eq!(editor.pointer_move(1, 1), EditOutcome::Unchanged);
        assert_eq!(editor.canvas().count_color(RED), 4096);
    }

    #[test]
    fn test_fill_with_same_color_is_unchanged() {
        let mut editor = fresh();
        editor.set_tool(Tool::Fill);
        editor.set_color(Rgba::BACKGROUND);

        assert_eq!(editor.pointer_down(9, 9), EditOutcome::Unchanged);
        assert!(!editor.take_texture_dirty());
    }

    #[test]
    fn test_picker_samples_and_reverts() {
        let mut editor = fresh();
        let teal = Rgba::rgb(0, 128, 128);
        editor.set_color(teal);
        editor.pointer_down(20, 20);
        editor.pointer_up();

        editor.set_color(RED);
        editor.set_tool(Tool::Picker);
        let outcome = editor.pointer_down(20, 20);

        assert_eq!(outcome, EditOutcome::Picked(teal));
        assert_eq!(editor.color(), teal);
        assert_eq!(editor.tool(), Tool::Pencil);
        assert!(!editor.take_texture_dirty());
    }

    #[test]
    fn test_picker_on_transparent_pixel_selects_opaque() {
        let mut editor = fresh();
        let source = RgbaImage::from_pixel(64, 64, image::Rgba([12, 34, 56, 0]));
        let mut png = Vec::new();
        source
            .write_to(&mut std::io::Cursor::new(&mut png), image::ImageFormat::Png)
            .unwrap();
        editor.import_png(&png).unwrap();

        editor.set_tool(Tool::Picker);
        let outcome = editor.pointer_down(0, 0);
        editor.pointer_up();

        let picked = Rgba::rgb(12, 34, 56);
        assert_eq!(outcome, EditOutcome::Picked(picked));
        assert!(editor.color().is_opaque());
        assert_eq!(editor.color(), picked);

        editor.pointer_down(10, 10);
        let written = editor.canvas().sample_pixel(10, 10).unwrap();
        assert!(written.is_opaque());
        assert_eq!(written, picked);
    }

    #[test]
    fn test_selection_is_always_opaque() {
        let mut editor = fresh();
        editor.set_color_hex("#11223380").unwrap();
        assert_eq!(editor.color(), Rgba::rgb(0x11, 0x22, 0x33));
        assert_eq!(editor.color().to_hex(), "#112233");
    }

    #[test]
    fn test_out_of_range_pointer_is_ignored() {
        let mut editor = fresh();
        assert_eq!(editor.pointer_down(64, 0), EditOutcome::Unchanged);
        assert_eq!(editor.pointer_down(-1, 10), EditOutcome::Unchanged);
        assert_eq!(editor.canvas().count_color(Rgba::BACKGROUND), 4096);
    }

    #[test]
    fn test_face_tag_does_not_change_target() {
        let mut a = fresh();
        let mut b = fresh();

        a.face_pointer_down(FaceTag::Head, 12, 40);
        b.face_pointer_down(FaceTag::LeftLeg, 12, 40);

        assert_eq!(a.canvas(), b.canvas());
        assert_eq!(a.canvas().sample_pixel(12, 40), Some(Rgba::ACCENT));
    }

    #[test]
    fn test_hex_entry() {
        let mut editor = fresh();
        editor.set_color_hex("#00ff00").unwrap();
        assert_eq!(editor.color(), Rgba::rgb(0, 255, 0));

        assert!(editor.set_color_hex("nope").is_err());
        assert_eq!(editor.color(), Rgba::rgb(0, 255, 0));
    }

    #[test]
    fn test_palette_selection() {
        let mut editor = fresh();
        assert!(editor.select_palette(12));
        assert_eq!(editor.color(), Rgba::rgb(255, 0, 0));
        assert!(!editor.select_palette(99));
        assert_eq!(editor.color(), Rgba::rgb(255, 0, 0));
    }

    #[test]
    fn test_grid_toggle_marks_display_only() {
        let mut editor = fresh();
        assert!(!editor.toggle_grid());
        assert!(editor.take_display_dirty());
        assert!(!editor.take_texture_dirty());
    }

    #[test]
    fn test_clear_and_import() {
        let mut editor = fresh();
        editor.set_tool(Tool::Fill);
        editor.set_color(RED);
        editor.pointer_down(0, 0);
        let png = editor.export_png().unwrap();

        editor.clear();
        assert_eq!(editor.canvas().count_color(Rgba::BACKGROUND), 4096);

        editor.import_png(&png).unwrap();
        assert_eq!(editor.canvas().count_color(RED), 4096);
        assert!(editor.take_texture_dirty());
    }

    #[test]
    fn test_display_render_uses_scale() {
        let mut editor = fresh();
        editor.set_pixel_scale(4);
        assert_eq!(editor.render_display().dimensions(), (256, 256));
    }
}
