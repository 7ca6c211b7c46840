//! Main IPC message enums for communication between front ends and the editor.

use serde::{Deserialize, Serialize};

use crate::commands::{LayerSelection, PointerCommand, ToolKind};
use crate::error::IpcError;

/// Snapshot of the editor settings a front end needs to render its controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorState {
    pub tool: ToolKind,
    /// Selected colour as `#rrggbb` (or `#rrggbbaa` when translucent)
    pub color: String,
    pub brush_size: u8,
    pub show_grid: bool,
    pub layer: LayerSelection,
}

/// Messages from a front end to the editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum UiToEditor {
    /// Switch the active tool
    SetTool { tool: ToolKind },

    /// Select a colour from hex text
    SetColor { hex: String },

    /// Select a palette entry by index
    SelectPalette { index: usize },

    /// Set the brush size (clamped by the editor)
    SetBrushSize { size: u8 },

    /// Grow or shrink the brush by `delta`
    AdjustBrushSize { delta: i8 },

    /// Set the highlighted part
    SetLayer { layer: LayerSelection },

    /// Advance the highlighted part to the next one
    CycleLayer,

    /// Enable or disable the grid overlay
    SetGrid { enabled: bool },

    ToggleGrid,

    /// Reset every pixel to the background colour
    Clear,

    /// Pointer activity on the canvas or the model
    Pointer(PointerCommand),

    /// Replace the buffer with the image at `path`
    Import { path: String },

    /// Write the buffer as PNG to `path`
    Export { path: String },
}

/// Messages from the editor to front ends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum EditorToUi {
    /// Full state sync when a front end attaches
    Initialize { state: EditorState },

    ToolChanged { tool: ToolKind },

    ColorChanged { color: String },

    BrushSizeChanged { size: u8 },

    LayerChanged { layer: LayerSelection },

    GridChanged { enabled: bool },

    /// Buffer contents changed
    CanvasChanged,

    /// Import finished and replaced the buffer
    Imported { path: String },

    /// Export finished
    Exported { path: String },

    /// Error notification
    Error { code: String, message: String },
}

impl UiToEditor {
    pub fn to_json(&self) -> Result<String, IpcError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, IpcError> {
        parse(json)
    }
}

impl EditorToUi {
    pub fn to_json(&self) -> Result<String, IpcError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, IpcError> {
        parse(json)
    }

    /// Build an error notification
    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Error {
            code: code.into(),
            message: message.into(),
        }
    }
}

fn parse<T: for<'de> Deserialize<'de>>(json: &str) -> Result<T, IpcError> {
    let trimmed = json.trim();
    if trimmed.is_empty() {
        return Err(IpcError::InvalidFormat("empty message".to_string()));
    }
    Ok(serde_json::from_str(trimmed)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{PartKind, PointerTarget};
    use serde_json::json;

    #[test]
    fn test_set_tool_layout() {
        let msg = UiToEditor::SetTool { tool: ToolKind::Fill };
        let value = serde_json::to_value(&msg).unwrap();
        assert_eq!(value, json!({ "type": "SetTool", "data": { "tool": "fill" } }));
    }

    #[test]
    fn test_unit_variant_layout() {
        let value = serde_json::to_value(UiToEditor::Clear).unwrap();
        assert_eq!(value, json!({ "type": "Clear" }));
    }

    #[test]
    fn test_face_pointer_layout() {
        let msg = UiToEditor::Pointer(PointerCommand::Down {
            target: PointerTarget::Face(PartKind::RightArm),
            x: 3,
            y: 60,
        });
        let value = serde_json::to_value(&msg).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "Pointer",
                "data": { "kind": "down", "target": { "face": "rightArm" }, "x": 3, "y": 60 }
            })
        );
    }

    #[test]
    fn test_command_round_trip() {
        let messages = vec![
            UiToEditor::SetColor { hex: "#9b87f5".into() },
            UiToEditor::SetLayer { layer: Some(PartKind::Head) },
            UiToEditor::SetLayer { layer: None },
            UiToEditor::AdjustBrushSize { delta: -1 },
            UiToEditor::Pointer(PointerCommand::Move {
                target: PointerTarget::Canvas,
                x: 10,
                y: 20,
            }),
            UiToEditor::Pointer(PointerCommand::Leave),
            UiToEditor::Export { path: "minecraft-skin.png".into() },
        ];

        for msg in messages {
            let json = msg.to_json().unwrap();
            assert_eq!(UiToEditor::from_json(&json).unwrap(), msg);
        }
    }

    #[test]
    fn test_parse_from_front_end_text() {
        let msg = UiToEditor::from_json(r#"{"type":"SelectPalette","data":{"index":4}}"#).unwrap();
        assert_eq!(msg, UiToEditor::SelectPalette { index: 4 });
    }

    #[test]
    fn test_empty_message_rejected() {
        let err = UiToEditor::from_json("  ").unwrap_err();
        assert!(matches!(err, IpcError::InvalidFormat(_)));
    }

    #[test]
    fn test_malformed_message_rejected() {
        let err = EditorToUi::from_json(r#"{"type":"Nope"}"#).unwrap_err();
        assert!(matches!(err, IpcError::Serialize(_)));
    }

    #[test]
    fn test_initialize_round_trip() {
        let msg = EditorToUi::Initialize {
            state: EditorState {
                tool: ToolKind::Pencil,
                color: "#9b87f5".into(),
                brush_size: 1,
                show_grid: true,
                layer: None,
            },
        };
        let json = msg.to_json().unwrap();
        assert_eq!(EditorToUi::from_json(&json).unwrap(), msg);
    }
}
