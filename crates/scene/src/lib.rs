//! Bevy scene for Skinloader
//!
//! This crate wires the engine-independent `painting` editor into Bevy:
//! the 2D canvas panel with its colour strip, the 3D humanoid preview,
//! pointer routing and the orbit camera. The app crate adds the window,
//! hotkeys and file dialogs.

use bevy::prelude::*;
use skinloader_config::EditorConfig;
use skinloader_ipc::EditorToUi;

mod camera;
mod canvas_panel;
mod color_panel;
mod editor;
mod humanoid;
mod picking;
mod preview;
mod textures;

pub use camera::{CameraControllerPlugin, MainCamera, OrbitCamera};
pub use canvas_panel::CanvasPanel;
pub use color_panel::{HexEntry, HexLabel, PaletteSwatch, handle_hex_entry, label_text};
pub use editor::{
    EditorCommand, EditorError, EditorPlugin, EditorResource, apply_command, editor_state,
    export_file, import_file,
};
pub use humanoid::{HUMANOID, PartLayout, PreviewTexture, limb_swing, part_layout};
pub use picking::{PartHit, PointerState, closest_part_hit, panel_cell};
pub use preview::PreviewPart;
pub use textures::SkinTextures;

/// Ordering of the per-frame editor pipeline
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum EditorSet {
    /// Systems translating input into [`EditorCommand`]s
    Input,
    /// The single system applying commands to the editor
    Apply,
    /// Texture upload and view refresh
    Sync,
}

/// Resource for queuing messages to send to the UI
/// The app crate drains this to update its own views
#[derive(Resource, Default)]
pub struct OutboundUiMessages {
    pub messages: Vec<EditorToUi>,
}

impl OutboundUiMessages {
    /// Queue a message to be sent to the UI
    pub fn send(&mut self, msg: EditorToUi) {
        self.messages.push(msg);
    }

    /// Take all queued messages, leaving the queue empty
    pub fn drain(&mut self) -> Vec<EditorToUi> {
        std::mem::take(&mut self.messages)
    }
}

pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        let [r, g, b, _] = painting::Rgba::BACKGROUND.to_array();

        app.init_resource::<EditorConfig>()
            .init_resource::<OutboundUiMessages>()
            .init_resource::<PreviewTexture>()
            .init_resource::<PointerState>()
            .init_resource::<HexEntry>()
            .insert_resource(ClearColor(Color::srgb_u8(r, g, b)))
            .configure_sets(
                Update,
                (EditorSet::Input, EditorSet::Apply, EditorSet::Sync).chain(),
            );

        app.add_plugins(EditorPlugin);
        app.add_plugins(CameraControllerPlugin);

        app.add_systems(
            Startup,
            (
                textures::setup_textures,
                (
                    preview::setup_preview,
                    canvas_panel::spawn_canvas_panel,
                    color_panel::spawn_color_panel,
                ),
            )
                .chain(),
        )
        .add_systems(
            Update,
            (
                picking::handle_pointer_input,
                color_panel::handle_swatch_clicks,
                color_panel::handle_hex_entry,
            )
                .in_set(EditorSet::Input),
        )
        .add_systems(
            Update,
            (
                textures::sync_skin_textures,
                preview::animate_limbs,
                preview::apply_preview_texture,
                preview::highlight_layer,
                color_panel::refresh_color_panel,
            )
                .in_set(EditorSet::Sync),
        );

        info!("Scene plugin initialized");
    }
}
