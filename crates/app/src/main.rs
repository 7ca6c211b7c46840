//! Skinloader - 64x64 skin editor with a live 3D preview

use bevy::prelude::*;
use bevy::window::WindowResolution;
use skinloader_config::{DisplayConfig, EditorConfig};
use skinloader_ipc::UiToEditor;
use skinloader_scene::{EditorCommand, EditorSet, ScenePlugin};

mod input;
mod title;

use title::TitleState;

/// Image named on the command line, imported once at start-up
#[derive(Resource, Default)]
struct StartupImport(Option<String>);

fn main() {
    // Environment overrides for panel zoom and grid
    let editor_config = EditorConfig::from_env();

    // Display configuration - single source of truth for window size
    let display_config = DisplayConfig::default();

    let window_config = Window {
        title: "Skinloader".into(),
        resolution: WindowResolution::new(display_config.width, display_config.height),
        present_mode: bevy::window::PresentMode::AutoVsync,
        ..default()
    };

    let startup_import = StartupImport(std::env::args().nth(1));

    let mut app = App::new();

    app.insert_resource(editor_config)
        .insert_resource(display_config)
        .insert_resource(startup_import)
        .init_resource::<TitleState>();

    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(window_config),
                ..default()
            })
            .set(bevy::log::LogPlugin {
                level: bevy::log::Level::INFO,
                ..default()
            }),
    );

    app.add_plugins(ScenePlugin)
        .add_plugins(input::InputPlugin)
        .add_systems(Startup, queue_startup_import)
        .add_systems(Update, title::update_window_title.after(EditorSet::Apply))
        .run();
}

fn queue_startup_import(startup: Res<StartupImport>, mut writer: MessageWriter<EditorCommand>) {
    if let Some(path) = &startup.0 {
        info!("Importing {} from the command line", path);
        writer.write(EditorCommand(UiToEditor::Import { path: path.clone() }));
    }
}
