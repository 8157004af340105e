//! Physics subsystems
//!
//! Currently limited to narrow-phase collision detection. There is no
//! physical response layer; the collision module reports overlaps and
//! trace hits, and gameplay decides what to do with them.

pub mod collision;
