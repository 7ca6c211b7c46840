//! Ray casts against the preview model parts
//!
//! Moller-Trumbore triangle tests over a small indexed mesh, with UVs and
//! normals interpolated at the closest hit so a click can be turned into a
//! buffer cell.

use glam::{Vec2, Vec3};

/// Epsilon for floating point comparisons in ray intersection
const EPSILON: f32 = 1e-6;

/// Result of a ray-triangle intersection test
#[derive(Debug, Clone, Copy)]
pub struct TriangleHit {
    /// Distance along the ray to the intersection point
    pub t: f32,
    /// Barycentric coordinate u (weight for vertex 1)
    pub u: f32,
    /// Barycentric coordinate v (weight for vertex 2)
    pub v: f32,
}

/// Closest hit of a ray against a mesh, in the mesh's local space
#[derive(Debug, Clone, Copy)]
pub struct SurfaceHit {
    /// Distance along the ray
    pub t: f32,
    /// Hit position
    pub position: Vec3,
    /// Interpolated surface normal
    pub normal: Vec3,
    /// Interpolated texture coordinate (v up), if the mesh has UVs
    pub uv: Option<Vec2>,
    /// Index of the triangle that was hit
    pub triangle: u32,
}

/// Moller-Trumbore ray-triangle intersection algorithm.
///
/// Returns the hit distance and barycentric coordinates if the ray intersects
/// the triangle.
///
/// # Arguments
/// * `ray_origin` - Origin point of the ray
/// * `ray_dir` - Direction of the ray (should be normalized for consistent t values)
/// * `v0`, `v1`, `v2` - Triangle vertices in counter-clockwise order
pub fn ray_triangle_intersection(
    ray_origin: Vec3,
    ray_dir: Vec3,
    v0: Vec3,
    v1: Vec3,
    v2: Vec3,
) -> Option<TriangleHit> {
    let edge1 = v1 - v0;
    let edge2 = v2 - v0;

    let pvec = ray_dir.cross(edge2);
    let det = edge1.dot(pvec);

    // Ray lies in the triangle's plane or misses it
    if det.abs() < EPSILON {
        return None;
    }

    let inv_det = 1.0 / det;
    let tvec = ray_origin - v0;

    let u = tvec.dot(pvec) * inv_det;
    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let qvec = tvec.cross(edge1);

    let v = ray_dir.dot(qvec) * inv_det;
    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = edge2.dot(qvec) * inv_det;

    // Only accept hits in front of the ray
    if t < EPSILON {
        return None;
    }

    Some(TriangleHit { t, u, v })
}

/// Interpolate a Vec3 attribute using barycentric coordinates.
pub fn interpolate_vec3(v0: Vec3, v1: Vec3, v2: Vec3, u: f32, v: f32) -> Vec3 {
    let w = 1.0 - u - v;
    v0 * w + v1 * u + v2 * v
}

/// Interpolate a Vec2 attribute (like UVs) using barycentric coordinates.
pub fn interpolate_vec2(v0: Vec2, v1: Vec2, v2: Vec2, u: f32, v: f32) -> Vec2 {
    let w = 1.0 - u - v;
    v0 * w + v1 * u + v2 * v
}

/// Mesh data extracted for raycasting.
#[derive(Debug, Clone, Default)]
pub struct MeshRaycastData {
    /// Vertex positions
    pub positions: Vec<Vec3>,
    /// Triangle indices (3 per triangle)
    pub indices: Vec<u32>,
    /// Vertex normals (same length as positions)
    pub normals: Vec<Vec3>,
    /// Vertex UVs with v pointing up (same length as positions, or empty)
    pub uvs: Vec<Vec2>,
}

impl MeshRaycastData {
    /// Get the number of triangles in the mesh
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Get the vertex indices for a triangle
    pub fn triangle_indices(&self, tri_index: usize) -> (u32, u32, u32) {
        let base = tri_index * 3;
        (
            self.indices[base],
            self.indices[base + 1],
            self.indices[base + 2],
        )
    }

    /// Get the vertex positions for a triangle
    pub fn triangle_positions(&self, tri_index: usize) -> (Vec3, Vec3, Vec3) {
        let (i0, i1, i2) = self.triangle_indices(tri_index);
        (
            self.positions[i0 as usize],
            self.positions[i1 as usize],
            self.positions[i2 as usize],
        )
    }
}

/// Cast a ray against mesh data and return the closest hit.
///
/// `ray_origin` and `ray_dir` must be in the mesh's local space.
pub fn raycast_mesh(ray_origin: Vec3, ray_dir: Vec3, mesh_data: &MeshRaycastData) -> Option<SurfaceHit> {
    let mut closest_hit: Option<(TriangleHit, u32)> = None;

    // Brute force is fine for a dozen triangles per part
    for tri_idx in 0..mesh_data.triangle_count() {
        let (v0, v1, v2) = mesh_data.triangle_positions(tri_idx);

        if let Some(hit) = ray_triangle_intersection(ray_origin, ray_dir, v0, v1, v2) {
            let dominated = match &closest_hit {
                Some((prev, _)) => hit.t >= prev.t,
                None => false,
            };
            if !dominated {
                closest_hit = Some((hit, tri_idx as u32));
            }
        }
    }

    closest_hit.map(|(hit, triangle)| {
        let (i0, i1, i2) = mesh_data.triangle_indices(triangle as usize);

        let n0 = mesh_data.normals[i0 as usize];
        let n1 = mesh_data.normals[i1 as usize];
        let n2 = mesh_data.normals[i2 as usize];
        let normal = interpolate_vec3(n0, n1, n2, hit.u, hit.v).normalize_or_zero();

        let uv = if !mesh_data.uvs.is_empty() {
            let uv0 = mesh_data.uvs[i0 as usize];
            let uv1 = mesh_data.uvs[i1 as usize];
            let uv2 = mesh_data.uvs[i2 as usize];
            Some(interpolate_vec2(uv0, uv1, uv2, hit.u, hit.v))
        } else {
            None
        };

        SurfaceHit {
            t: hit.t,
            position: ray_origin + ray_dir * hit.t,
            normal,
            uv,
            triangle,
        }
    })
}
