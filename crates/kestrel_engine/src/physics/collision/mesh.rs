//! Coarse mesh collision data
//!
//! Meshes participate in collision only through their bounds: the
//! template keeps model-space vertices and a precomputed local AABB, and
//! the world-space AABB is derived by transforming every vertex. There is
//! no triangle-accurate testing; mesh pairs resolve at AABB precision.

use crate::foundation::math::{Point3, Transform, Vec3};
use super::primitives::Aabb;

/// Half-extent of the fallback box used when a mesh has no vertices
const EMPTY_MESH_EXTENT: f32 = 0.5;

/// A collision mesh template stored in model space
///
/// Vertices are local coordinates relative to the owning component's
/// origin and are never modified after construction.
#[derive(Debug, Clone)]
pub struct CollisionMeshTemplate {
    vertices: Vec<Vec3>,
    indices: Vec<u32>,
    local_bounds: Aabb,
}

impl CollisionMeshTemplate {
    /// Creates a template from model-space vertices and triangle indices
    ///
    /// The local AABB is precomputed here; an empty vertex list yields a
    /// unit-box fallback centered on the origin.
    pub fn from_vertices(vertices: &[Vec3], indices: &[u32]) -> Self {
        let local_bounds = if vertices.is_empty() {
            Aabb::from_center_extents(Vec3::zeros(), Vec3::repeat(EMPTY_MESH_EXTENT))
        } else {
            let mut min = vertices[0];
            let mut max = vertices[0];
            for vertex in &vertices[1..] {
                min = min.inf(vertex);
                max = max.sup(vertex);
            }
            Aabb::new(min, max)
        };

        Self {
            vertices: vertices.to_vec(),
            indices: indices.to_vec(),
            local_bounds,
        }
    }

    /// Model-space vertices
    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    /// Triangle indices
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Number of triangles described by the index buffer
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Precomputed model-space AABB
    pub fn local_bounds(&self) -> Aabb {
        self.local_bounds
    }

    /// World-space AABB under the given transform
    ///
    /// Min/max over all transformed vertices. An empty mesh falls back to
    /// a unit box around the transform's position.
    pub fn world_bounds(&self, transform: &Transform) -> Aabb {
        if self.vertices.is_empty() {
            return Aabb::from_center_extents(
                transform.position,
                Vec3::repeat(EMPTY_MESH_EXTENT),
            );
        }

        let matrix = transform.to_matrix();
        let mut min = Vec3::repeat(f32::MAX);
        let mut max = Vec3::repeat(f32::MIN);
        for vertex in &self.vertices {
            let world = matrix.transform_point(&Point3::new(vertex.x, vertex.y, vertex.z));
            let world = Vec3::new(world.x, world.y, world.z);
            min = min.inf(&world);
            max = max.sup(&world);
        }
        Aabb::new(min, max)
    }
}
