//! Primary-button pointer routing
//!
//! Resolves the cursor to a buffer cell, either on the 2D panel or on a face
//! of the preview model, and writes [`EditorCommand`] pointer messages.
//! Leaving the panel while drawing ends the stroke.

use bevy::input::mouse::MouseButton;
use bevy::math::Affine3A;
use bevy::prelude::*;
use bevy::window::{CursorMoved, PrimaryWindow};
use painting::{FaceTag, MeshRaycastData, display_to_cell, raycast_box, uv_to_pixel};
use skinloader_config::EditorConfig;
use skinloader_ipc::{PointerCommand, PointerTarget, UiToEditor};

use crate::camera::MainCamera;
use crate::editor::{EditorCommand, part_from_face};
use crate::preview::PreviewPart;

/// Surface the current press started on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveSurface {
    Panel,
    Model,
}

#[derive(Resource, Default, Debug)]
pub struct PointerState {
    pub active: Option<ActiveSurface>,
}

/// Map a window position to a panel cell, if it lies on the panel
pub fn panel_cell(config: &EditorConfig, position: Vec2) -> Option<(i32, i32)> {
    if !config.panel_contains(position.x, position.y) {
        return None;
    }
    let [left, top] = config.panel_origin;
    display_to_cell(position.x - left, position.y - top, config.pixel_scale)
}

/// A ray hit on one part of the preview model
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PartHit {
    pub tag: FaceTag,
    /// Surface UV, v pointing up
    pub uv: Vec2,
    /// Buffer cell the UV addresses
    pub cell: (i32, i32),
    /// World-space distance from the ray origin
    pub distance: f32,
}

/// Closest part hit by a world-space ray.
///
/// Each part is given by its tag, its world transform (current swing
/// included) and its local-space box geometry.
pub fn closest_part_hit(
    origin: Vec3,
    direction: Vec3,
    parts: &[(FaceTag, Affine3A, &MeshRaycastData)],
) -> Option<PartHit> {
    let mut closest: Option<PartHit> = None;

    for (tag, transform, mesh) in parts {
        // Intersect in the part's local space
        let inv_transform = transform.inverse();
        let local_origin = inv_transform.transform_point3(origin);
        let local_dir = inv_transform.transform_vector3(direction).normalize();

        let Some((hit, _side)) = raycast_box(
            painting::glam::Vec3::from_array(local_origin.to_array()),
            painting::glam::Vec3::from_array(local_dir.to_array()),
            mesh,
        ) else {
            continue;
        };
        let Some(uv) = hit.uv else {
            continue;
        };

        let world_hit = transform.transform_point3(Vec3::from_array(hit.position.to_array()));
        let distance = origin.distance(world_hit);
        if closest.as_ref().is_none_or(|best| distance < best.distance) {
            let uv = Vec2::from_array(uv.to_array());
            closest = Some(PartHit {
                tag: *tag,
                uv,
                cell: uv_to_pixel(painting::glam::Vec2::from_array(uv.to_array())),
                distance,
            });
        }
    }

    closest
}

/// Closest model part under a world-space ray, as a pointer target and cell
fn model_cell(ray: Ray3d, parts: &Query<(&PreviewPart, &GlobalTransform)>) -> Option<(PointerTarget, i32, i32)> {
    let candidates: Vec<_> = parts
        .iter()
        .map(|(part, transform)| (part.tag, transform.affine(), &part.hit_mesh))
        .collect();

    let hit = closest_part_hit(ray.origin, *ray.direction, &candidates)?;
    let (x, y) = hit.cell;
    Some((PointerTarget::Face(part_from_face(hit.tag)), x, y))
}

/// Decide which pointer commands a cursor sample produces
pub fn pointer_commands(
    state: &mut PointerState,
    just_pressed: bool,
    held: bool,
    sample: Option<(PointerTarget, i32, i32)>,
) -> Vec<PointerCommand> {
    let mut out = Vec::new();

    if just_pressed {
        if let Some((target, x, y)) = sample {
            state.active = Some(match target {
                PointerTarget::Canvas => ActiveSurface::Panel,
                PointerTarget::Face(_) => ActiveSurface::Model,
            });
            out.push(PointerCommand::Down { target, x, y });
        }
        return out;
    }

    if !held {
        return out;
    }

    match (state.active, sample) {
        (Some(ActiveSurface::Panel), Some((PointerTarget::Canvas, x, y))) => {
            out.push(PointerCommand::Move { target: PointerTarget::Canvas, x, y });
        }
        (Some(ActiveSurface::Panel), _) => {
            out.push(PointerCommand::Leave);
            state.active = None;
        }
        (Some(ActiveSurface::Model), Some((target @ PointerTarget::Face(_), x, y))) => {
            out.push(PointerCommand::Move { target, x, y });
        }
        _ => {}
    }
    out
}

pub(crate) fn handle_pointer_input(
    mouse_button: Res<ButtonInput<MouseButton>>,
    windows: Query<(Entity, &Window), With<PrimaryWindow>>,
    mut cursor_events: MessageReader<CursorMoved>,
    camera_query: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    parts: Query<(&PreviewPart, &GlobalTransform)>,
    buttons: Query<&Interaction, With<Button>>,
    config: Res<EditorConfig>,
    mut state: ResMut<PointerState>,
    mut writer: MessageWriter<EditorCommand>,
) {
    let Ok((window_entity, window)) = windows.single() else {
        return;
    };
    let Ok((camera, camera_transform)) = camera_query.single() else {
        return;
    };

    let resolve = |position: Vec2| -> Option<(PointerTarget, i32, i32)> {
        if let Some((x, y)) = panel_cell(&config, position) {
            return Some((PointerTarget::Canvas, x, y));
        }
        let ray = camera.viewport_to_world(camera_transform, position).ok()?;
        model_cell(ray, &parts)
    };

    // Collect cursor positions from this frame so fast strokes keep every sample
    let cursor_positions: Vec<Vec2> = cursor_events
        .read()
        .filter(|e| e.window == window_entity)
        .map(|e| e.position)
        .collect();

    let mut send = |commands: Vec<PointerCommand>| {
        for command in commands {
            writer.write(EditorCommand(UiToEditor::Pointer(command)));
        }
    };

    // Presses on UI buttons select colours, they never paint
    let over_button = buttons.iter().any(|interaction| *interaction != Interaction::None);

    if mouse_button.just_pressed(MouseButton::Left) {
        if !over_button {
            let sample = window.cursor_position().and_then(&resolve);
            send(pointer_commands(&mut state, true, true, sample));
        }
    } else if mouse_button.pressed(MouseButton::Left) && state.active.is_some() {
        if window.cursor_position().is_none() {
            // Cursor left the window
            send(pointer_commands(&mut state, false, true, None));
        }
        for position in cursor_positions {
            send(pointer_commands(&mut state, false, true, resolve(position)));
        }
    }

    if mouse_button.just_released(MouseButton::Left) {
        state.active = None;
        send(vec![PointerCommand::Up]);
    }
}
