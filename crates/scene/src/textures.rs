//! GPU images backing the skin: the 64x64 texture sampled by the preview
//! model and the zoomed display shown in the 2D panel.
//!
//! Both are rebuilt from the editor buffer only when the controller reports
//! a change.

use bevy::asset::RenderAssetUsages;
use bevy::image::ImageSampler;
use bevy::prelude::*;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};
use painting::{CANVAS_SIZE, display_size};

use crate::editor::EditorResource;

/// Handles to the skin texture and the panel display image
#[derive(Resource)]
pub struct SkinTextures {
    pub skin: Handle<Image>,
    pub display: Handle<Image>,
}

/// Build an sRGB RGBA8 image with nearest-neighbour sampling, so texels
/// stay crisp at any zoom.
pub fn rgba_image(width: u32, height: u32, bytes: Vec<u8>) -> Image {
    let mut image = Image::new(
        Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        bytes,
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::RENDER_WORLD | RenderAssetUsages::MAIN_WORLD,
    );
    image.sampler = ImageSampler::nearest();
    image
}

pub(crate) fn setup_textures(
    mut commands: Commands,
    mut images: ResMut<Assets<Image>>,
    editor: Res<EditorResource>,
) {
    let controller = &editor.controller;

    let skin = images.add(rgba_image(
        CANVAS_SIZE,
        CANVAS_SIZE,
        controller.canvas().as_bytes().to_vec(),
    ));

    let size = display_size(controller.pixel_scale());
    let display = images.add(rgba_image(size, size, controller.render_display().into_raw()));

    commands.insert_resource(SkinTextures { skin, display });
    info!("Skin textures created ({}x{} display)", size, size);
}

/// Push buffer changes to the GPU images
pub(crate) fn sync_skin_textures(
    mut editor: ResMut<EditorResource>,
    textures: Option<Res<SkinTextures>>,
    mut images: ResMut<Assets<Image>>,
) {
    let Some(textures) = textures else {
        return;
    };
    // Avoid flagging the resource as changed when nothing is dirty
    let editor = editor.bypass_change_detection();

    if editor.controller.take_texture_dirty() {
        if let Some(image) = images.get_mut(&textures.skin) {
            image.data = Some(editor.controller.canvas().as_bytes().to_vec());
        }
    }

    if editor.controller.take_display_dirty() {
        if let Some(image) = images.get_mut(&textures.display) {
            let size = display_size(editor.controller.pixel_scale());
            *image = rgba_image(size, size, editor.controller.render_display().into_raw());
        }
    }
}
