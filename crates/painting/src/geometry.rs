//! Box geometry for the preview model parts
//!
//! Each of the six sides carries texture coordinates spanning the full
//! [0, 1] square with v pointing up, so every side shows (and paints into)
//! the whole 64x64 texture.

use glam::{Vec2, Vec3};

use crate::raycast::{MeshRaycastData, SurfaceHit, raycast_mesh};

/// One side of an axis-aligned box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoxSide {
    /// +X
    Right,
    /// -X
    Left,
    /// +Y
    Top,
    /// -Y
    Bottom,
    /// +Z
    Front,
    /// -Z
    Back,
}

impl BoxSide {
    /// Vertex and triangle order follows this list
    pub const ALL: [BoxSide; 6] = [
        BoxSide::Right,
        BoxSide::Left,
        BoxSide::Top,
        BoxSide::Bottom,
        BoxSide::Front,
        BoxSide::Back,
    ];

    /// Outward normal, the texture's u direction and its v direction,
    /// as seen from outside the box. `u x v == normal` keeps winding CCW.
    fn frame(&self) -> (Vec3, Vec3, Vec3) {
        match self {
            BoxSide::Right => (Vec3::X, Vec3::NEG_Z, Vec3::Y),
            BoxSide::Left => (Vec3::NEG_X, Vec3::Z, Vec3::Y),
            BoxSide::Top => (Vec3::Y, Vec3::X, Vec3::NEG_Z),
            BoxSide::Bottom => (Vec3::NEG_Y, Vec3::X, Vec3::Z),
            BoxSide::Front => (Vec3::Z, Vec3::X, Vec3::Y),
            BoxSide::Back => (Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y),
        }
    }

    /// Side a triangle index of [`box_mesh`] belongs to
    pub fn of_triangle(triangle: u32) -> Option<BoxSide> {
        BoxSide::ALL.get((triangle / 2) as usize).copied()
    }
}

/// Build a box of the given full extents centred on the origin.
///
/// 24 vertices (4 per side) and 12 triangles (2 per side).
pub fn box_mesh(size: Vec3) -> MeshRaycastData {
    let half = size * 0.5;
    let mut mesh = MeshRaycastData::default();

    for side in BoxSide::ALL {
        let (normal, u_dir, v_dir) = side.frame();
        let base = mesh.positions.len() as u32;
        let center = normal * half;

        // Corners in (u, v) order: (0,0) (1,0) (1,1) (0,1)
        for (u, v) in [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)] {
            let su: f32 = u * 2.0 - 1.0;
            let sv: f32 = v * 2.0 - 1.0;
            let position = center + u_dir * half * su + v_dir * half * sv;
            mesh.positions.push(position);
            mesh.normals.push(normal);
            mesh.uvs.push(Vec2::new(u, v));
        }

        mesh.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    mesh
}

/// UVs in top-left origin convention (v pointing down), as GPU samplers
/// expect when row 0 of the texture is the top of the skin.
pub fn uvs_top_left(mesh: &MeshRaycastData) -> Vec<[f32; 2]> {
    mesh.uvs.iter().map(|uv| [uv.x, 1.0 - uv.y]).collect()
}

/// Raycast a box mesh, also reporting which side was hit
pub fn raycast_box(ray_origin: Vec3, ray_dir: Vec3, mesh: &MeshRaycastData) -> Option<(SurfaceHit, BoxSide)> {
    let hit = raycast_mesh(ray_origin, ray_dir, mesh)?;
    let side = BoxSide::of_triangle(hit.triangle)?;
    Some((hit, side))
}
