//! Collision detection
//!
//! A two-phase design: every registered component exposes a world-space
//! AABB used as a coarse pre-filter, and surviving pairs go through a
//! shape-specific exact test (see [`narrow`]). The registry is the public
//! entry point for overlap queries, line traces, and sphere casts.

pub mod channels;
pub mod component;
pub mod mesh;
pub mod narrow;
pub mod primitives;
pub mod registry;
pub mod shape;

pub use channels::{CollisionChannel, CollisionResponse, PairInteraction, ResponseTable};
pub use component::CollisionComponent;
pub use mesh::CollisionMeshTemplate;
pub use primitives::{Aabb, Ray};
pub use registry::{ColliderHandle, CollisionRegistry, HitResult, OverlapFilter};
pub use shape::{CollisionShape, ShapeKind};
