//! Debug visualization
//!
//! Produces lists of simple wireframe shapes for a renderer to consume.
//! The collision core itself never references rendering data; this is
//! the one-way boundary between the two.

pub mod collision_debug;
pub mod draw;

pub use collision_debug::{CollisionDebugColors, CollisionDebugVisualizer};
pub use draw::{DebugDrawSystem, DebugShape};
