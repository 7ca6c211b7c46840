//! The flat 2D editing panel: the display image placed at a fixed origin

use bevy::prelude::*;
use skinloader_config::EditorConfig;

use crate::textures::SkinTextures;

/// Marker for the 2D panel UI node
#[derive(Component)]
pub struct CanvasPanel;

pub(crate) fn spawn_canvas_panel(
    mut commands: Commands,
    textures: Res<SkinTextures>,
    config: Res<EditorConfig>,
) {
    let [left, top] = config.panel_origin;
    let size = config.panel_size();

    commands.spawn((
        ImageNode {
            image: textures.display.clone(),
            ..default()
        },
        Node {
            width: Val::Px(size),
            height: Val::Px(size),
            position_type: PositionType::Absolute,
            left: Val::Px(left),
            top: Val::Px(top),
            ..default()
        },
        CanvasPanel,
        Name::new("Canvas Panel"),
    ));
}
