//! Humanoid preview model layout and idle animation
//!
//! Six boxes share one texture. Arms and legs swing about the X axis in
//! antiphase; head and body stay still.

use std::f32::consts::PI;

use bevy::prelude::*;
use painting::{FaceTag, Rgba};

/// Peak limb rotation in radians
pub const SWING_AMPLITUDE: f32 = 0.3;

/// Colour used when the preview is not showing the canvas texture
pub const PLACEHOLDER_COLOR: Rgba = Rgba::ACCENT;

/// Placement of one model part, in world units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PartLayout {
    pub tag: FaceTag,
    pub center: Vec3,
    pub size: Vec3,
    /// Swing phase offset; `None` for parts that never rotate
    pub swing_phase: Option<f32>,
}

pub const HUMANOID: [PartLayout; 6] = [
    PartLayout {
        tag: FaceTag::Head,
        center: Vec3::new(0.0, 2.0, 0.0),
        size: Vec3::new(1.0, 1.0, 1.0),
        swing_phase: None,
    },
    PartLayout {
        tag: FaceTag::Body,
        center: Vec3::new(0.0, 0.75, 0.0),
        size: Vec3::new(1.0, 1.5, 0.5),
        swing_phase: None,
    },
    PartLayout {
        tag: FaceTag::RightArm,
        center: Vec3::new(0.75, 0.75, 0.0),
        size: Vec3::new(0.5, 1.5, 0.5),
        swing_phase: Some(0.0),
    },
    PartLayout {
        tag: FaceTag::LeftArm,
        center: Vec3::new(-0.75, 0.75, 0.0),
        size: Vec3::new(0.5, 1.5, 0.5),
        swing_phase: Some(PI),
    },
    PartLayout {
        tag: FaceTag::RightLeg,
        center: Vec3::new(0.25, -0.75, 0.0),
        size: Vec3::new(0.5, 1.5, 0.5),
        swing_phase: Some(PI),
    },
    PartLayout {
        tag: FaceTag::LeftLeg,
        center: Vec3::new(-0.25, -0.75, 0.0),
        size: Vec3::new(0.5, 1.5, 0.5),
        swing_phase: Some(0.0),
    },
];

/// Layout entry for a part
pub fn part_layout(tag: FaceTag) -> &'static PartLayout {
    // HUMANOID holds every FaceTag, in FaceTag::ALL order
    let index = FaceTag::ALL.iter().position(|t| *t == tag).unwrap_or(0);
    &HUMANOID[index]
}

/// X-axis rotation of a part after `elapsed` seconds
pub fn limb_swing(tag: FaceTag, elapsed: f32) -> f32 {
    match part_layout(tag).swing_phase {
        Some(phase) => (elapsed + phase).sin() * SWING_AMPLITUDE,
        None => 0.0,
    }
}

/// What the preview model is textured with
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PreviewTexture {
    /// The shared 64x64 skin texture
    #[default]
    Canvas,
    /// Flat placeholder colour
    Flat,
}
