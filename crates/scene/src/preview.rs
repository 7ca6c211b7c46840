//! 3D humanoid preview: six textured boxes, idle swing and layer highlight

use bevy::asset::RenderAssetUsages;
use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::light::GlobalAmbientLight;
use bevy::mesh::{Indices, PrimitiveTopology};
use bevy::prelude::*;
use painting::{FaceTag, LayerHint, MeshRaycastData, box_mesh, uvs_top_left};

use crate::camera::{MainCamera, OrbitCamera};
use crate::editor::EditorResource;
use crate::humanoid::{HUMANOID, PLACEHOLDER_COLOR, PreviewTexture, limb_swing};
use crate::textures::SkinTextures;

/// Emissive tint added to highlighted parts
const HIGHLIGHT_EMISSIVE: LinearRgba = LinearRgba::new(0.12, 0.1, 0.25, 1.0);

/// Directional lights, pointed at the origin
const KEY_LIGHT_POSITIONS: [Vec3; 2] = [Vec3::new(5.0, 5.0, 5.0), Vec3::new(-5.0, 5.0, -5.0)];

const KEY_LIGHT_ILLUMINANCE: f32 = 5000.0;

/// One box of the preview model
#[derive(Component)]
pub struct PreviewPart {
    pub tag: FaceTag,
    /// Local-space geometry for pointer hits
    pub hit_mesh: MeshRaycastData,
}

/// Convert box geometry to a Bevy mesh. UVs are flipped to top-left origin
/// so texture row 0 is the top of each face.
pub fn part_mesh(data: &MeshRaycastData) -> Mesh {
    let positions: Vec<[f32; 3]> = data.positions.iter().map(|p| p.to_array()).collect();
    let normals: Vec<[f32; 3]> = data.normals.iter().map(|n| n.to_array()).collect();

    let mut mesh = Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default());
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
    mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, uvs_top_left(data));
    mesh.insert_indices(Indices::U32(data.indices.clone()));
    mesh
}

fn part_material(texture: PreviewTexture, skin: &Handle<Image>) -> StandardMaterial {
    match texture {
        PreviewTexture::Canvas => StandardMaterial {
            base_color_texture: Some(skin.clone()),
            perceptual_roughness: 0.9,
            ..default()
        },
        PreviewTexture::Flat => {
            let [r, g, b, _] = PLACEHOLDER_COLOR.to_array();
            StandardMaterial {
                base_color: Color::srgb_u8(r, g, b),
                perceptual_roughness: 0.9,
                ..default()
            }
        }
    }
}

pub(crate) fn setup_preview(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    textures: Res<SkinTextures>,
    preview_texture: Res<PreviewTexture>,
) {
    let orbit_camera = OrbitCamera::default();
    let camera_position = orbit_camera.calculate_position();
    commands.spawn((
        Camera3d::default(),
        Transform::from_translation(camera_position).looking_at(orbit_camera.target, Vec3::Y),
        Tonemapping::Reinhard,
        MainCamera,
        orbit_camera,
    ));

    // Key light from the front right and a matching one from the back left
    for position in KEY_LIGHT_POSITIONS {
        commands.spawn((
            DirectionalLight {
                illuminance: KEY_LIGHT_ILLUMINANCE,
                ..default()
            },
            Transform::from_translation(position).looking_at(Vec3::ZERO, Vec3::Y),
        ));
    }
    commands.insert_resource(GlobalAmbientLight {
        color: Color::WHITE,
        brightness: 600.0,
        ..default()
    });

    for layout in HUMANOID.iter() {
        // Geometry is built in painting's math types and mirrored into a Bevy mesh
        let size = painting::glam::Vec3::from_array(layout.size.to_array());
        let hit_mesh = box_mesh(size);

        commands.spawn((
            Mesh3d(meshes.add(part_mesh(&hit_mesh))),
            MeshMaterial3d(materials.add(part_material(*preview_texture, &textures.skin))),
            Transform::from_translation(layout.center),
            PreviewPart {
                tag: layout.tag,
                hit_mesh,
            },
            Name::new(layout.tag.name()),
        ));
    }

    info!("Preview model spawned with {} parts", HUMANOID.len());
}

/// Idle animation: swing limbs from elapsed time
pub(crate) fn animate_limbs(time: Res<Time>, mut parts: Query<(&PreviewPart, &mut Transform)>) {
    let elapsed = time.elapsed_secs();
    for (part, mut transform) in parts.iter_mut() {
        transform.rotation = Quat::from_rotation_x(limb_swing(part.tag, elapsed));
    }
}

/// Swap part materials when the preview texture mode changes
pub(crate) fn apply_preview_texture(
    preview_texture: Res<PreviewTexture>,
    textures: Res<SkinTextures>,
    parts: Query<&MeshMaterial3d<StandardMaterial>, With<PreviewPart>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    if !preview_texture.is_changed() {
        return;
    }
    for material_handle in parts.iter() {
        if let Some(material) = materials.get_mut(&material_handle.0) {
            let emissive = material.emissive;
            *material = part_material(*preview_texture, &textures.skin);
            material.emissive = emissive;
        }
    }
}

/// Tint the parts named by the layer hint
pub(crate) fn highlight_layer(
    editor: Res<EditorResource>,
    mut last_layer: Local<Option<LayerHint>>,
    parts: Query<(&PreviewPart, &MeshMaterial3d<StandardMaterial>)>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let layer = editor.controller.layer();
    if *last_layer == Some(layer) {
        return;
    }
    *last_layer = Some(layer);

    for (part, material_handle) in parts.iter() {
        if let Some(material) = materials.get_mut(&material_handle.0) {
            material.emissive = if layer.highlights(part.tag) {
                HIGHLIGHT_EMISSIVE
            } else {
                LinearRgba::BLACK
            };
        }
    }
}
