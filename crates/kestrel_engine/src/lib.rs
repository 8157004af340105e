//! # Kestrel Engine
//!
//! A small real-time 3D game engine core. The centerpiece is the
//! narrow-phase collision subsystem: shaped volumes (box, sphere,
//! capsule, coarse mesh) register into a world-owned registry that
//! answers pairwise overlap queries, line traces, and sphere casts.
//!
//! ## Architecture
//!
//! - **Foundation**: math types (nalgebra), logging, collections
//! - **Scene**: transform hierarchy; the only writer of world transforms
//! - **Actors**: gameplay ownership; spawning registers collision,
//!   despawning unregisters it
//! - **Collision**: AABB broad phase over a flat registration-ordered
//!   candidate list, exact shape-pair narrow phase, trace queries
//! - **Events**: queued overlap begin/end delivery to gameplay
//! - **Input**: action bindings and mouse picking
//! - **Debug**: wireframe shape lists for a renderer to consume
//!
//! Rendering, windowing, and GPU resources are deliberately absent: the
//! engine core only produces data (hit results, debug shapes) for a
//! renderer to pick up.
//!
//! ## Quick Start
//!
//! ```rust
//! use kestrel_engine::prelude::*;
//!
//! let mut scene = SceneGraph::new();
//! let mut actors = ActorWorld::new();
//! let mut registry = CollisionRegistry::new();
//!
//! let player = actors.spawn(
//!     "player",
//!     &mut scene,
//!     None,
//!     Transform::from_position(Vec3::new(0.0, 1.0, 0.0)),
//! );
//! actors.attach_collider(
//!     player,
//!     CollisionComponent::new(CollisionShape::capsule(0.5, 2.0))
//!         .with_channel(CollisionChannel::PAWN),
//!     &mut scene,
//!     &mut registry,
//! );
//!
//! scene.propagate_transforms();
//! scene.sync_colliders(&mut registry);
//!
//! let mut events = EventQueue::new();
//! registry.update(0.016, &mut events);
//! for event in events.drain() {
//!     // React to overlap begin/end
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod actor;
pub mod core;
pub mod debug;
pub mod events;
pub mod foundation;
pub mod input;
pub mod physics;
pub mod scene;

/// Common imports for engine users
pub mod prelude {
    pub use crate::actor::{Actor, ActorHandle, ActorWorld};
    pub use crate::core::config::{CollisionConfig, ConfigError, EngineConfig};
    pub use crate::debug::{CollisionDebugVisualizer, DebugDrawSystem, DebugShape};
    pub use crate::events::{EventQueue, OverlapEvent};
    pub use crate::foundation::math::{Mat4, Quat, Transform, Vec2, Vec3, Vec4};
    pub use crate::input::{ActionEvent, InputManager, KeyCode, MouseButton};
    pub use crate::physics::collision::{
        Aabb, ColliderHandle, CollisionChannel, CollisionComponent, CollisionRegistry,
        CollisionResponse, CollisionShape, HitResult, Ray, ResponseTable, ShapeKind,
    };
    pub use crate::scene::{NodeHandle, SceneGraph, SceneNode};
}
