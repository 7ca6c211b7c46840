//! Editor hotkeys
//!
//! - B / E / F / I: pencil, eraser, fill, picker
//! - G: toggle grid
//! - Delete: clear the canvas
//! - [ / ]: shrink / grow the brush
//! - 1..9, 0: first ten palette colours
//! - Tab: cycle the highlighted part
//! - T: toggle the preview between skin texture and flat colour
//!
//! None of these fire while a hex colour is being typed (see `HexEntry`).

use bevy::prelude::*;
use skinloader_ipc::{ToolKind, UiToEditor};
use skinloader_scene::{EditorCommand, HexEntry, PreviewTexture};

/// Map a key press (without Ctrl) to an editor command
pub fn hotkey_command(key: KeyCode) -> Option<UiToEditor> {
    let command = match key {
        KeyCode::KeyB => UiToEditor::SetTool { tool: ToolKind::Pencil },
        KeyCode::KeyE => UiToEditor::SetTool { tool: ToolKind::Eraser },
        KeyCode::KeyF => UiToEditor::SetTool { tool: ToolKind::Fill },
        KeyCode::KeyI => UiToEditor::SetTool { tool: ToolKind::Picker },
        KeyCode::KeyG => UiToEditor::ToggleGrid,
        KeyCode::Delete => UiToEditor::Clear,
        KeyCode::BracketLeft => UiToEditor::AdjustBrushSize { delta: -1 },
        KeyCode::BracketRight => UiToEditor::AdjustBrushSize { delta: 1 },
        KeyCode::Tab => UiToEditor::CycleLayer,
        _ => return palette_slot(key).map(|index| UiToEditor::SelectPalette { index }),
    };
    Some(command)
}

/// Number row to palette index: 1 is the first swatch, 0 the tenth
fn palette_slot(key: KeyCode) -> Option<usize> {
    let slot = match key {
        KeyCode::Digit1 => 0,
        KeyCode::Digit2 => 1,
        KeyCode::Digit3 => 2,
        KeyCode::Digit4 => 3,
        KeyCode::Digit5 => 4,
        KeyCode::Digit6 => 5,
        KeyCode::Digit7 => 6,
        KeyCode::Digit8 => 7,
        KeyCode::Digit9 => 8,
        KeyCode::Digit0 => 9,
        _ => return None,
    };
    Some(slot)
}

pub fn ctrl_held(key_input: &ButtonInput<KeyCode>) -> bool {
    key_input.pressed(KeyCode::ControlLeft) || key_input.pressed(KeyCode::ControlRight)
}

/// Forward single-key shortcuts to the editor
pub fn handle_editor_hotkeys(
    key_input: Res<ButtonInput<KeyCode>>,
    hex_entry: Res<HexEntry>,
    mut writer: MessageWriter<EditorCommand>,
) {
    // Ctrl chords belong to the file dialogs
    if ctrl_held(&key_input) || hex_entry.is_active() {
        return;
    }

    for key in key_input.get_just_pressed() {
        if let Some(command) = hotkey_command(*key) {
            writer.write(EditorCommand(command));
        }
    }
}

/// Handle T to switch the preview texture
pub fn handle_preview_hotkey(
    key_input: Res<ButtonInput<KeyCode>>,
    hex_entry: Res<HexEntry>,
    mut preview_texture: ResMut<PreviewTexture>,
) {
    if ctrl_held(&key_input) || hex_entry.is_active() || !key_input.just_pressed(KeyCode::KeyT) {
        return;
    }

    *preview_texture = match *preview_texture {
        PreviewTexture::Canvas => PreviewTexture::Flat,
        PreviewTexture::Flat => PreviewTexture::Canvas,
    };
    info!("Preview texture: {:?}", *preview_texture);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_keys() {
        assert_eq!(
            hotkey_command(KeyCode::KeyF),
            Some(UiToEditor::SetTool { tool: ToolKind::Fill })
        );
        assert_eq!(
            hotkey_command(KeyCode::KeyI),
            Some(UiToEditor::SetTool { tool: ToolKind::Picker })
        );
    }

    #[test]
    fn test_palette_keys() {
        assert_eq!(hotkey_command(KeyCode::Digit1), Some(UiToEditor::SelectPalette { index: 0 }));
        assert_eq!(hotkey_command(KeyCode::Digit0), Some(UiToEditor::SelectPalette { index: 9 }));
    }

    #[test]
    fn test_brush_keys() {
        assert_eq!(
            hotkey_command(KeyCode::BracketRight),
            Some(UiToEditor::AdjustBrushSize { delta: 1 })
        );
        assert_eq!(
            hotkey_command(KeyCode::BracketLeft),
            Some(UiToEditor::AdjustBrushSize { delta: -1 })
        );
    }

    #[test]
    fn test_unbound_key() {
        assert_eq!(hotkey_command(KeyCode::KeyQ), None);
        // Starts hex entry instead
        assert_eq!(hotkey_command(KeyCode::KeyH), None);
    }
}
