//! Editor state resource and the single system that mutates it
//!
//! Front ends never touch the controller directly. They write
//! [`EditorCommand`] messages; `apply_editor_commands` applies them in order
//! and queues [`EditorToUi`] notifications describing what changed.

use std::path::Path;

use bevy::ecs::message::Message;
use bevy::prelude::*;
use painting::{
    CanvasError, EditOutcome, EditorController, FaceTag, LayerHint, MAX_BRUSH_SIZE, MIN_BRUSH_SIZE,
    Tool,
};
use skinloader_config::EditorConfig;
use skinloader_ipc::{
    EditorState, EditorToUi, LayerSelection, PartKind, PointerCommand, PointerTarget, ToolKind,
    UiToEditor,
};
use thiserror::Error;

use crate::OutboundUiMessages;

/// A front-end intent addressed to the editor
#[derive(Message, Debug, Clone)]
pub struct EditorCommand(pub UiToEditor);

/// Errors from file-backed editor operations
#[derive(Debug, Error)]
pub enum EditorError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Canvas(#[from] CanvasError),
}

impl EditorError {
    /// Stable code reported to front ends
    pub fn code(&self) -> &'static str {
        match self {
            EditorError::Read { .. } => "import_read",
            EditorError::Write { .. } => "export_write",
            EditorError::Canvas(CanvasError::Decode(_)) => "import_decode",
            EditorError::Canvas(CanvasError::Encode(_)) => "export_encode",
        }
    }
}

/// The one owned editor, shared by the 2D panel and the 3D preview
#[derive(Resource)]
pub struct EditorResource {
    pub controller: EditorController,
}

impl FromWorld for EditorResource {
    fn from_world(world: &mut World) -> Self {
        let config = world.get_resource::<EditorConfig>().cloned().unwrap_or_default();
        let mut controller = EditorController::new();
        controller.set_pixel_scale(config.pixel_scale);
        controller.set_grid(config.show_grid);
        Self { controller }
    }
}

pub fn tool_from_kind(kind: ToolKind) -> Tool {
    match kind {
        ToolKind::Pencil => Tool::Pencil,
        ToolKind::Eraser => Tool::Eraser,
        ToolKind::Fill => Tool::Fill,
        ToolKind::Picker => Tool::Picker,
    }
}

pub fn kind_from_tool(tool: Tool) -> ToolKind {
    match tool {
        Tool::Pencil => ToolKind::Pencil,
        Tool::Eraser => ToolKind::Eraser,
        Tool::Fill => ToolKind::Fill,
        Tool::Picker => ToolKind::Picker,
    }
}

pub fn face_from_part(part: PartKind) -> FaceTag {
    match part {
        PartKind::Head => FaceTag::Head,
        PartKind::Body => FaceTag::Body,
        PartKind::RightArm => FaceTag::RightArm,
        PartKind::LeftArm => FaceTag::LeftArm,
        PartKind::RightLeg => FaceTag::RightLeg,
        PartKind::LeftLeg => FaceTag::LeftLeg,
    }
}

pub fn part_from_face(face: FaceTag) -> PartKind {
    match face {
        FaceTag::Head => PartKind::Head,
        FaceTag::Body => PartKind::Body,
        FaceTag::RightArm => PartKind::RightArm,
        FaceTag::LeftArm => PartKind::LeftArm,
        FaceTag::RightLeg => PartKind::RightLeg,
        FaceTag::LeftLeg => PartKind::LeftLeg,
    }
}

fn layer_from_selection(selection: LayerSelection) -> LayerHint {
    selection.map_or(LayerHint::All, |part| LayerHint::Part(face_from_part(part)))
}

fn selection_from_layer(layer: LayerHint) -> LayerSelection {
    match layer {
        LayerHint::All => None,
        LayerHint::Part(face) => Some(part_from_face(face)),
    }
}

/// Snapshot for [`EditorToUi::Initialize`]
pub fn editor_state(controller: &EditorController) -> EditorState {
    EditorState {
        tool: kind_from_tool(controller.tool()),
        color: controller.color().to_hex(),
        brush_size: controller.brush_size().get(),
        show_grid: controller.grid().enabled,
        layer: selection_from_layer(controller.layer()),
    }
}

/// Read an image file and replace the buffer with it
pub fn import_file(controller: &mut EditorController, path: &Path) -> Result<(), EditorError> {
    let bytes = std::fs::read(path).map_err(|source| EditorError::Read {
        path: path.display().to_string(),
        source,
    })?;
    controller.import_png(&bytes)?;
    Ok(())
}

/// Encode the buffer and write it as a PNG file
pub fn export_file(controller: &EditorController, path: &Path) -> Result<(), EditorError> {
    let bytes = controller.export_png()?;
    std::fs::write(path, bytes).map_err(|source| EditorError::Write {
        path: path.display().to_string(),
        source,
    })
}

fn outcome_notifications(controller: &EditorController, outcome: EditOutcome) -> Vec<EditorToUi> {
    match outcome {
        EditOutcome::Unchanged => Vec::new(),
        EditOutcome::Painted { .. } if outcome.changed_pixels() => vec![EditorToUi::CanvasChanged],
        EditOutcome::Painted { .. } => Vec::new(),
        EditOutcome::Picked(color) => vec![
            EditorToUi::ColorChanged { color: color.to_hex() },
            EditorToUi::ToolChanged { tool: kind_from_tool(controller.tool()) },
        ],
    }
}

fn apply_pointer(controller: &mut EditorController, pointer: PointerCommand) -> Vec<EditorToUi> {
    let outcome = match pointer {
        PointerCommand::Down { target: PointerTarget::Canvas, x, y } => controller.pointer_down(x, y),
        PointerCommand::Down { target: PointerTarget::Face(part), x, y } => {
            controller.face_pointer_down(face_from_part(part), x, y)
        }
        PointerCommand::Move { target: PointerTarget::Canvas, x, y } => controller.pointer_move(x, y),
        PointerCommand::Move { target: PointerTarget::Face(part), x, y } => {
            controller.face_pointer_move(face_from_part(part), x, y)
        }
        PointerCommand::Up => {
            controller.pointer_up();
            EditOutcome::Unchanged
        }
        PointerCommand::Leave => {
            controller.pointer_leave();
            EditOutcome::Unchanged
        }
    };
    outcome_notifications(controller, outcome)
}

/// Apply one command and return the notifications it produces
pub fn apply_command(controller: &mut EditorController, command: &UiToEditor) -> Vec<EditorToUi> {
    match command {
        UiToEditor::SetTool { tool } => {
            controller.set_tool(tool_from_kind(*tool));
            vec![EditorToUi::ToolChanged { tool: *tool }]
        }
        UiToEditor::SetColor { hex } => match controller.set_color_hex(hex) {
            Ok(()) => vec![EditorToUi::ColorChanged { color: controller.color().to_hex() }],
            Err(e) => {
                warn!("Rejected colour {:?}: {}", hex, e);
                vec![EditorToUi::error("invalid_color", e.to_string())]
            }
        },
        UiToEditor::SelectPalette { index } => {
            if controller.select_palette(*index) {
                vec![EditorToUi::ColorChanged { color: controller.color().to_hex() }]
            } else {
                warn!("No palette entry {}", index);
                vec![EditorToUi::error("invalid_palette_index", format!("no palette entry {}", index))]
            }
        }
        UiToEditor::SetBrushSize { size } => {
            controller.set_brush_size(*size);
            vec![EditorToUi::BrushSizeChanged { size: controller.brush_size().get() }]
        }
        UiToEditor::AdjustBrushSize { delta } => {
            let current = controller.brush_size().get() as i16;
            let next = (current + *delta as i16).clamp(MIN_BRUSH_SIZE as i16, MAX_BRUSH_SIZE as i16);
            controller.set_brush_size(next as u8);
            vec![EditorToUi::BrushSizeChanged { size: controller.brush_size().get() }]
        }
        UiToEditor::SetLayer { layer } => {
            controller.set_layer(layer_from_selection(*layer));
            vec![EditorToUi::LayerChanged { layer: *layer }]
        }
        UiToEditor::CycleLayer => {
            controller.set_layer(controller.layer().cycle());
            vec![EditorToUi::LayerChanged { layer: selection_from_layer(controller.layer()) }]
        }
        UiToEditor::SetGrid { enabled } => {
            controller.set_grid(*enabled);
            vec![EditorToUi::GridChanged { enabled: *enabled }]
        }
        UiToEditor::ToggleGrid => {
            let enabled = controller.toggle_grid();
            vec![EditorToUi::GridChanged { enabled }]
        }
        UiToEditor::Clear => {
            controller.clear();
            vec![EditorToUi::CanvasChanged]
        }
        UiToEditor::Pointer(pointer) => apply_pointer(controller, *pointer),
        UiToEditor::Import { path } => match import_file(controller, Path::new(path)) {
            Ok(()) => {
                info!("Imported skin from {}", path);
                vec![EditorToUi::Imported { path: path.clone() }, EditorToUi::CanvasChanged]
            }
            Err(e) => {
                error!("Import failed: {}", e);
                vec![EditorToUi::error(e.code(), e.to_string())]
            }
        },
        UiToEditor::Export { path } => match export_file(controller, Path::new(path)) {
            Ok(()) => {
                info!("Exported skin to {}", path);
                vec![EditorToUi::Exported { path: path.clone() }]
            }
            Err(e) => {
                error!("Export failed: {}", e);
                vec![EditorToUi::error(e.code(), e.to_string())]
            }
        },
    }
}

/// Plugin owning the editor resource and its command queue
pub struct EditorPlugin;

impl Plugin for EditorPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<EditorResource>()
            .add_message::<EditorCommand>()
            .add_systems(Startup, announce_editor_state)
            .add_systems(Update, apply_editor_commands.in_set(crate::EditorSet::Apply));
    }
}

fn announce_editor_state(editor: Res<EditorResource>, mut outbound: ResMut<OutboundUiMessages>) {
    outbound.send(EditorToUi::Initialize {
        state: editor_state(&editor.controller),
    });
}

fn apply_editor_commands(
    mut commands_in: MessageReader<EditorCommand>,
    mut editor: ResMut<EditorResource>,
    mut outbound: ResMut<OutboundUiMessages>,
) {
    for EditorCommand(command) in commands_in.read() {
        for notification in apply_command(&mut editor.controller, command) {
            outbound.send(notification);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use painting::Rgba;

    fn canvas_down(x: i32, y: i32) -> UiToEditor {
        UiToEditor::Pointer(PointerCommand::Down { target: PointerTarget::Canvas, x, y })
    }

    #[test]
    fn test_tool_round_trip() {
        for tool in Tool::ALL {
            assert_eq!(tool_from_kind(kind_from_tool(tool)), tool);
        }
        for face in FaceTag::ALL {
            assert_eq!(face_from_part(part_from_face(face)), face);
        }
    }

    #[test]
    fn test_paint_reports_canvas_change() {
        let mut editor = EditorController::new();
        let notes = apply_command(&mut editor, &canvas_down(5, 5));
        assert_eq!(notes, vec![EditorToUi::CanvasChanged]);
        assert_eq!(editor.canvas().sample_pixel(5, 5), Some(Rgba::ACCENT));
    }

    #[test]
    fn test_face_pointer_paints_same_buffer() {
        let mut editor = EditorController::new();
        apply_command(&mut editor, &UiToEditor::SetColor { hex: "#ff0000".into() });
        apply_command(
            &mut editor,
            &UiToEditor::Pointer(PointerCommand::Down {
                target: PointerTarget::Face(PartKind::LeftLeg),
                x: 10,
                y: 12,
            }),
        );
        assert_eq!(editor.canvas().sample_pixel(10, 12), Some(Rgba::rgb(255, 0, 0)));
    }

    #[test]
    fn test_picker_reports_color_and_tool() {
        let mut editor = EditorController::new();
        apply_command(&mut editor, &UiToEditor::SetTool { tool: ToolKind::Picker });
        let notes = apply_command(&mut editor, &canvas_down(0, 0));
        assert_eq!(
            notes,
            vec![
                EditorToUi::ColorChanged { color: "#2a2a3a".into() },
                EditorToUi::ToolChanged { tool: ToolKind::Pencil },
            ]
        );
    }

    #[test]
    fn test_bad_color_reports_error() {
        let mut editor = EditorController::new();
        let notes = apply_command(&mut editor, &UiToEditor::SetColor { hex: "#zzz".into() });
        assert!(matches!(&notes[..], [EditorToUi::Error { code, .. }] if code == "invalid_color"));
        assert_eq!(editor.color(), Rgba::ACCENT);
    }

    #[test]
    fn test_adjust_brush_clamps() {
        let mut editor = EditorController::new();
        let notes = apply_command(&mut editor, &UiToEditor::AdjustBrushSize { delta: -3 });
        assert_eq!(notes, vec![EditorToUi::BrushSizeChanged { size: 1 }]);
        apply_command(&mut editor, &UiToEditor::AdjustBrushSize { delta: 20 });
        assert_eq!(editor.brush_size().get(), 8);
    }

    #[test]
    fn test_cycle_layer() {
        let mut editor = EditorController::new();
        let notes = apply_command(&mut editor, &UiToEditor::CycleLayer);
        assert_eq!(notes, vec![EditorToUi::LayerChanged { layer: Some(PartKind::Head) }]);
        assert_eq!(editor.layer(), LayerHint::Part(FaceTag::Head));
    }

    #[test]
    fn test_missing_import_file() {
        let mut editor = EditorController::new();
        let notes = apply_command(
            &mut editor,
            &UiToEditor::Import { path: "/definitely/not/here.png".into() },
        );
        assert!(matches!(&notes[..], [EditorToUi::Error { code, .. }] if code == "import_read"));
    }

    #[test]
    fn test_export_then_import_file() {
        let path = std::env::temp_dir().join(format!("skinloader-test-{}.png", std::process::id()));
        let path_str = path.display().to_string();

        let mut source = EditorController::new();
        apply_command(&mut source, &UiToEditor::SetColor { hex: "#00ff00".into() });
        apply_command(&mut source, &canvas_down(7, 9));
        let notes = apply_command(&mut source, &UiToEditor::Export { path: path_str.clone() });
        assert_eq!(notes, vec![EditorToUi::Exported { path: path_str.clone() }]);

        let mut target = EditorController::new();
        let notes = apply_command(&mut target, &UiToEditor::Import { path: path_str.clone() });
        assert_eq!(notes[0], EditorToUi::Imported { path: path_str });
        assert_eq!(target.canvas(), source.canvas());

        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_initial_state() {
        let editor = EditorController::new();
        let state = editor_state(&editor);
        assert_eq!(state.tool, ToolKind::Pencil);
        assert_eq!(state.color, "#9b87f5");
        assert_eq!(state.brush_size, 1);
        assert_eq!(state.layer, None);
    }
}
