//! Collision component
//!
//! Wraps a shape with the state the registry needs: enable flag, overlap
//! eventing flag, channel and response table, and the world transform
//! pushed in by the scene layer each frame. The component never writes
//! transforms; it only reads the last one it was given.

use crate::foundation::math::{Transform, Vec3};
use super::channels::{CollisionChannel, CollisionResponse, ResponseTable};
use super::primitives::Aabb;
use super::shape::{CollisionShape, ShapeKind};

/// A shaped volume participating in collision detection
#[derive(Debug, Clone)]
pub struct CollisionComponent {
    shape: CollisionShape,

    /// Disabled components are invisible to every query, as source or target
    pub enabled: bool,

    /// Whether the per-frame update pass evaluates this component
    ///
    /// Gates only the periodic overlap-event pass; direct queries ignore it.
    pub generate_overlap_events: bool,

    /// The component's own collision category
    pub channel: CollisionChannel,

    /// Default response toward each channel this component can meet
    pub responses: ResponseTable,

    transform: Transform,

    /// Cached world AABB, mesh shapes only. Rebuilt whenever the world
    /// transform actually changes; other shapes derive their AABB on the
    /// fly and need no cache.
    mesh_bounds: Option<Aabb>,
}

impl CollisionComponent {
    /// Create a component with default settings
    ///
    /// Enabled, generating overlap events, on `WORLD_DYNAMIC`, blocking
    /// everything, at the identity transform.
    pub fn new(shape: CollisionShape) -> Self {
        let transform = Transform::identity();
        let mesh_bounds = match &shape {
            CollisionShape::Mesh(template) => Some(template.world_bounds(&transform)),
            _ => None,
        };

        Self {
            shape,
            enabled: true,
            generate_overlap_events: true,
            channel: CollisionChannel::WORLD_DYNAMIC,
            responses: ResponseTable::default(),
            transform,
            mesh_bounds,
        }
    }

    /// Set the collision channel (builder style)
    pub fn with_channel(mut self, channel: CollisionChannel) -> Self {
        self.channel = channel;
        self
    }

    /// Replace the full response table (builder style)
    pub fn with_responses(mut self, responses: ResponseTable) -> Self {
        self.responses = responses;
        self
    }

    /// Set the response toward one channel (builder style)
    pub fn with_response(
        mut self,
        channel: CollisionChannel,
        response: CollisionResponse,
    ) -> Self {
        self.responses.set_response(channel, response);
        self
    }

    /// Enable or disable overlap-event generation (builder style)
    pub fn with_overlap_events(mut self, generate: bool) -> Self {
        self.generate_overlap_events = generate;
        self
    }

    /// Set the initial world transform (builder style)
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.set_world_transform(transform);
        self
    }

    /// The wrapped shape
    pub fn shape(&self) -> &CollisionShape {
        &self.shape
    }

    /// The shape's discriminant
    pub fn shape_kind(&self) -> ShapeKind {
        self.shape.kind()
    }

    /// Set box half-extents; see [`CollisionShape::set_half_extents`]
    pub fn set_half_extents(&mut self, half_extents: Vec3) {
        self.shape.set_half_extents(half_extents);
    }

    /// Set sphere/capsule radius; see [`CollisionShape::set_radius`]
    pub fn set_radius(&mut self, radius: f32) {
        self.shape.set_radius(radius);
    }

    /// Set capsule height; see [`CollisionShape::set_height`]
    pub fn set_height(&mut self, height: f32) {
        self.shape.set_height(height);
    }

    /// The component's current world transform
    pub fn world_transform(&self) -> &Transform {
        &self.transform
    }

    /// The component's world position
    pub fn world_position(&self) -> Vec3 {
        self.transform.position
    }

    /// Update the world transform from the scene layer
    ///
    /// Compares against the previous transform and rebuilds the cached
    /// mesh bounds only when something actually changed, so stationary
    /// meshes never re-transform their vertices.
    pub fn set_world_transform(&mut self, transform: Transform) {
        if self.transform == transform {
            return;
        }
        self.transform = transform;
        if let CollisionShape::Mesh(template) = &self.shape {
            self.mesh_bounds = Some(template.world_bounds(&self.transform));
        }
    }

    /// World-space AABB of this component
    ///
    /// Derived from the current transform and shape parameters; for mesh
    /// shapes this is the cached bounds maintained by
    /// [`Self::set_world_transform`].
    pub fn world_aabb(&self) -> Aabb {
        match &self.shape {
            CollisionShape::Mesh(template) => self
                .mesh_bounds
                .unwrap_or_else(|| template.world_bounds(&self.transform)),
            shape => shape.world_aabb(&self.transform),
        }
    }

    /// Endpoints of a capsule's core segment in world space
    ///
    /// The segment spans the cylindrical section, rotated by the world
    /// transform. Returns `None` for non-capsule shapes.
    pub fn core_segment(&self) -> Option<(Vec3, Vec3)> {
        if let CollisionShape::Capsule {
            radius,
            half_height,
        } = self.shape
        {
            let half_core = (half_height - radius).max(0.0);
            let axis = self.transform.rotation * (Vec3::y() * half_core);
            let center = self.transform.position;
            Some((center - axis, center + axis))
        } else {
            None
        }
    }

    /// This component's response toward another component's channel
    pub fn response_to(&self, channel: CollisionChannel) -> CollisionResponse {
        self.responses.response_to(channel)
    }

    /// Exact pairwise test against another component
    ///
    /// Convenience wrapper over the narrow-phase dispatcher: coarse AABB
    /// reject first, then the shape-pair test. Always false against a
    /// disabled component or against itself.
    pub fn check_collision(&self, other: &Self) -> bool {
        super::narrow::test_pair(self, other)
    }
}
