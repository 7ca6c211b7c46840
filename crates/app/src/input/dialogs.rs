//! Native file dialogs for Ctrl+O (import) and Ctrl+S (export)

use std::path::PathBuf;

use bevy::prelude::*;
use skinloader_config::EditorConfig;
use skinloader_ipc::UiToEditor;
use skinloader_scene::EditorCommand;

use super::hotkeys::ctrl_held;

/// Image types offered by the import dialog
const IMPORT_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "gif", "bmp"];

fn pick_import_path() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Import skin")
        .add_filter("Images", &IMPORT_EXTENSIONS)
        .pick_file()
}

fn pick_export_path(default_name: &str) -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Export skin")
        .add_filter("PNG image", &["png"])
        .set_file_name(default_name)
        .save_file()
}

/// Paths travel to the editor as strings. A path that is not valid UTF-8
/// would arrive altered, so it is refused instead.
fn utf8_path(path: PathBuf) -> Option<String> {
    match path.into_os_string().into_string() {
        Ok(path) => Some(path),
        Err(raw) => {
            warn!("Ignoring file path that is not valid UTF-8: {:?}", raw);
            None
        }
    }
}

/// Handle Ctrl+O / Ctrl+S. The dialog blocks until the user picks or cancels.
pub fn handle_file_hotkeys(
    key_input: Res<ButtonInput<KeyCode>>,
    config: Res<EditorConfig>,
    mut writer: MessageWriter<EditorCommand>,
) {
    if !ctrl_held(&key_input) {
        return;
    }

    if key_input.just_pressed(KeyCode::KeyO) {
        match pick_import_path() {
            Some(path) => {
                if let Some(path) = utf8_path(path) {
                    writer.write(EditorCommand(UiToEditor::Import { path }));
                }
            }
            None => debug!("Import cancelled"),
        }
    }

    if key_input.just_pressed(KeyCode::KeyS) {
        match pick_export_path(&config.export_file_name) {
            Some(path) => {
                if let Some(path) = utf8_path(path) {
                    writer.write(EditorCommand(UiToEditor::Export { path }));
                }
            }
            None => debug!("Export cancelled"),
        }
    }
}
