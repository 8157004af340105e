//! Scene management
//!
//! The scene graph owns the spatial hierarchy and is the only writer of
//! world transforms. Collision components never compute transforms
//! themselves; [`SceneGraph::sync_colliders`] pushes the propagated
//! world transforms into the collision registry each frame.

mod scene_graph;

pub use scene_graph::{NodeHandle, SceneGraph, SceneNode};
