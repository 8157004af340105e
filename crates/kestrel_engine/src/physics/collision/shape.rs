//! Collision shape definitions
//!
//! Shapes are a closed tagged union so that narrow-phase dispatch is an
//! exhaustive match: adding a shape kind forces every pair branch to be
//! revisited at compile time rather than falling through a cast.

use crate::foundation::math::{Transform, Vec3};
use super::mesh::CollisionMeshTemplate;
use super::primitives::Aabb;

/// Discriminant of a [`CollisionShape`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// Oriented box
    Box,
    /// Sphere
    Sphere,
    /// Capsule aligned to the component's local Y axis
    Capsule,
    /// Coarse mesh (bounds-only precision)
    Mesh,
}

/// Collision shape parameters, in world-space units
///
/// Positions come from the owning component's transform; the shape only
/// carries its own extents. The kind of a shape is fixed for the lifetime
/// of the component that owns it - swapping kinds means replacing the
/// component.
#[derive(Debug, Clone)]
pub enum CollisionShape {
    /// Box with half-extents along each local axis
    Box {
        /// Half-extent along each local axis
        half_extents: Vec3,
    },
    /// Sphere with the given radius
    Sphere {
        /// Sphere radius
        radius: f32,
    },
    /// Capsule: a Y-aligned core segment with hemispherical caps
    ///
    /// `half_height` is half the total height including caps, and is
    /// never less than `radius` so the cylindrical section cannot have
    /// negative length.
    Capsule {
        /// Cap radius
        radius: f32,
        /// Half of the total height, caps included
        half_height: f32,
    },
    /// Coarse mesh bounds
    Mesh(CollisionMeshTemplate),
}

impl CollisionShape {
    /// Create a box shape, clamping half-extents to be non-negative
    pub fn cuboid(half_extents: Vec3) -> Self {
        Self::Box {
            half_extents: half_extents.sup(&Vec3::zeros()),
        }
    }

    /// Create a sphere shape, clamping the radius to be non-negative
    pub fn sphere(radius: f32) -> Self {
        Self::Sphere {
            radius: radius.max(0.0),
        }
    }

    /// Create a capsule shape from radius and total height
    ///
    /// Height is clamped to at least `2 * radius`.
    pub fn capsule(radius: f32, height: f32) -> Self {
        let radius = radius.max(0.0);
        Self::Capsule {
            radius,
            half_height: height.max(2.0 * radius) * 0.5,
        }
    }

    /// Create a mesh shape from a prebuilt template
    pub fn mesh(template: CollisionMeshTemplate) -> Self {
        Self::Mesh(template)
    }

    /// The shape's discriminant
    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Box { .. } => ShapeKind::Box,
            Self::Sphere { .. } => ShapeKind::Sphere,
            Self::Capsule { .. } => ShapeKind::Capsule,
            Self::Mesh(_) => ShapeKind::Mesh,
        }
    }

    /// Set box half-extents, clamped to be non-negative
    ///
    /// No-op for non-box shapes.
    pub fn set_half_extents(&mut self, new_half_extents: Vec3) {
        if let Self::Box { half_extents } = self {
            *half_extents = new_half_extents.sup(&Vec3::zeros());
        }
    }

    /// Set the radius of a sphere or capsule, clamped to be non-negative
    ///
    /// For capsules the half-height is re-clamped so the core segment
    /// stays valid. No-op for other shapes.
    pub fn set_radius(&mut self, new_radius: f32) {
        match self {
            Self::Sphere { radius } => *radius = new_radius.max(0.0),
            Self::Capsule {
                radius,
                half_height,
            } => {
                *radius = new_radius.max(0.0);
                *half_height = half_height.max(*radius);
            }
            _ => {}
        }
    }

    /// Set the total height of a capsule, clamped to at least `2 * radius`
    ///
    /// No-op for non-capsule shapes.
    pub fn set_height(&mut self, new_height: f32) {
        if let Self::Capsule {
            radius,
            half_height,
        } = self
        {
            *half_height = new_height.max(2.0 * *radius) * 0.5;
        }
    }

    /// World-space AABB under the given transform
    ///
    /// The coarse box deliberately ignores rotation for boxes and
    /// capsules; orientation only matters in the exact tests. Mesh bounds
    /// are recomputed here from all vertices - callers that need caching
    /// (the collision component) cache the result keyed on the transform.
    pub fn world_aabb(&self, transform: &Transform) -> Aabb {
        let position = transform.position;
        match self {
            Self::Box { half_extents } => Aabb::from_center_extents(position, *half_extents),
            Self::Sphere { radius } => {
                Aabb::from_center_extents(position, Vec3::repeat(*radius))
            }
            Self::Capsule {
                radius,
                half_height,
            } => Aabb::from_center_extents(
                position,
                Vec3::new(*radius, *half_height, *radius),
            ),
            Self::Mesh(template) => template.world_bounds(transform),
        }
    }
}
