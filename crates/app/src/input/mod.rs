//! Input handling - turns keyboard shortcuts into editor commands
//!
//! Pointer input, swatch clicks and hex entry live in the scene crate; this
//! module only covers hotkeys and the file dialogs they open.

use bevy::prelude::*;
use skinloader_scene::{EditorSet, handle_hex_entry};

mod dialogs;
mod hotkeys;

pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                hotkeys::handle_editor_hotkeys,
                hotkeys::handle_preview_hotkey,
                dialogs::handle_file_hotkeys,
            )
                .in_set(EditorSet::Input)
                .after(handle_hex_entry),
        );

        info!("Input plugin initialized");
    }
}
