//! Orbit camera for the preview
//!
//! Controls:
//! - Right mouse drag: Orbit around the model
//! - Scroll wheel: Zoom, limited to 3..10 units
//!
//! There is no panning; the target stays on the model.

use bevy::input::mouse::{MouseButton, MouseMotion, MouseWheel};
use bevy::prelude::*;

/// Marker component for the main camera
#[derive(Component)]
pub struct MainCamera;

/// Camera orbit controller state
#[derive(Component, Debug, Clone)]
pub struct OrbitCamera {
    /// Point the camera orbits around
    pub target: Vec3,
    /// Distance from target
    pub distance: f32,
    /// Horizontal angle (yaw) in radians
    pub yaw: f32,
    /// Vertical angle (pitch) in radians
    pub pitch: f32,
    /// Orbit sensitivity (radians per pixel)
    pub orbit_sensitivity: f32,
    /// Zoom sensitivity (distance units per scroll line)
    pub zoom_sensitivity: f32,
    pub min_distance: f32,
    pub max_distance: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::looking_from(Vec3::new(3.0, 2.0, 5.0), Vec3::new(0.0, 0.5, 0.0))
    }
}

impl OrbitCamera {
    /// Orbit state that places the camera at `position` looking at `target`
    pub fn looking_from(position: Vec3, target: Vec3) -> Self {
        let offset = position - target;
        let distance = offset.length();
        Self {
            target,
            distance,
            yaw: offset.x.atan2(offset.z),
            pitch: (offset.y / distance).asin(),
            orbit_sensitivity: 0.005,
            zoom_sensitivity: 1.0,
            min_distance: 3.0,
            max_distance: 10.0,
        }
    }

    /// Calculate camera position from orbit parameters
    pub fn calculate_position(&self) -> Vec3 {
        // Pitch is the angle from horizontal, yaw the angle around Y
        let horizontal_distance = self.distance * self.pitch.cos();
        let y = self.distance * self.pitch.sin();
        let x = horizontal_distance * self.yaw.sin();
        let z = horizontal_distance * self.yaw.cos();

        self.target + Vec3::new(x, y, z)
    }

    pub fn orbit(&mut self, delta: Vec2) {
        self.yaw -= delta.x * self.orbit_sensitivity;
        // Clamp just below straight up/down to prevent flipping
        self.pitch = (self.pitch - delta.y * self.orbit_sensitivity).clamp(-1.5, 1.5);
    }

    /// Scroll up (positive) moves closer
    pub fn zoom(&mut self, scroll: f32) {
        let zoom_amount = scroll * self.zoom_sensitivity * (self.distance * 0.1);
        self.distance = (self.distance - zoom_amount).clamp(self.min_distance, self.max_distance);
    }
}

/// Plugin for the preview camera controls
pub struct CameraControllerPlugin;

impl Plugin for CameraControllerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                camera_orbit_system,
                camera_zoom_system,
                update_camera_transform
                    .after(camera_orbit_system)
                    .after(camera_zoom_system),
            ),
        );
    }
}

/// Handle orbit (right mouse drag)
fn camera_orbit_system(
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut motion_events: MessageReader<MouseMotion>,
    mut camera_query: Query<&mut OrbitCamera>,
) {
    if !mouse_button.pressed(MouseButton::Right) {
        motion_events.clear();
        return;
    }

    let mut delta = Vec2::ZERO;
    for event in motion_events.read() {
        delta += event.delta;
    }

    if delta == Vec2::ZERO {
        return;
    }

    for mut orbit in camera_query.iter_mut() {
        orbit.orbit(delta);
    }
}

/// Handle zoom (scroll wheel)
fn camera_zoom_system(
    mut scroll_events: MessageReader<MouseWheel>,
    mut camera_query: Query<&mut OrbitCamera>,
) {
    let mut scroll_delta = 0.0;
    for event in scroll_events.read() {
        scroll_delta += event.y;
    }

    if scroll_delta == 0.0 {
        return;
    }

    for mut orbit in camera_query.iter_mut() {
        orbit.zoom(scroll_delta);
    }
}

/// Update camera transform from orbit state
fn update_camera_transform(
    mut camera_query: Query<(&OrbitCamera, &mut Transform), (With<MainCamera>, Changed<OrbitCamera>)>,
) {
    for (orbit, mut transform) in camera_query.iter_mut() {
        let position = orbit.calculate_position();
        *transform = Transform::from_translation(position).looking_at(orbit.target, Vec3::Y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_position() {
        let orbit = OrbitCamera::default();
        let position = orbit.calculate_position();
        assert!((position - Vec3::new(3.0, 2.0, 5.0)).length() < 1e-4);
        assert_eq!(orbit.target, Vec3::new(0.0, 0.5, 0.0));
    }

    #[test]
    fn test_zoom_limits() {
        let mut orbit = OrbitCamera::default();
        for _ in 0..100 {
            orbit.zoom(5.0);
        }
        assert_eq!(orbit.distance, 3.0);
        for _ in 0..100 {
            orbit.zoom(-5.0);
        }
        assert_eq!(orbit.distance, 10.0);
    }

    #[test]
    fn test_orbit_keeps_target_and_distance() {
        let mut orbit = OrbitCamera::default();
        let distance = orbit.distance;
        orbit.orbit(Vec2::new(120.0, -40.0));
        let position = orbit.calculate_position();
        assert!((position.distance(orbit.target) - distance).abs() < 1e-4);
        assert_eq!(orbit.target, Vec3::new(0.0, 0.5, 0.0));
    }

    #[test]
    fn test_pitch_clamped() {
        let mut orbit = OrbitCamera::default();
        orbit.orbit(Vec2::new(0.0, -10_000.0));
        assert_eq!(orbit.pitch, 1.5);
    }
}
