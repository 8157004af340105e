//! Debug drawing primitives and system
//!
//! Shapes come in two flavors: temporary ones that expire after a
//! duration (zero-duration shapes live for exactly one frame) and
//! persistent ones that stay until explicitly removed by key.

use std::collections::HashMap;

use crate::foundation::math::{Vec3, Vec4};

/// Debug shape primitives that can be rendered for visualization
#[derive(Clone, Debug)]
pub enum DebugShape {
    /// Line segment from start to end
    Line {
        /// Segment start
        start: Vec3,
        /// Segment end
        end: Vec3,
        /// RGBA color
        color: Vec4,
        /// Remaining lifetime in seconds
        duration: f32,
    },

    /// Wireframe box at center with half-extents
    WireBox {
        /// Box center
        center: Vec3,
        /// Half-extent along each axis
        extents: Vec3,
        /// RGBA color
        color: Vec4,
        /// Remaining lifetime in seconds
        duration: f32,
    },

    /// Wireframe sphere at center with radius
    WireSphere {
        /// Sphere center
        center: Vec3,
        /// Sphere radius
        radius: f32,
        /// RGBA color
        color: Vec4,
        /// Remaining lifetime in seconds
        duration: f32,
    },
}

impl DebugShape {
    /// Remaining lifetime in seconds
    pub fn duration(&self) -> f32 {
        match self {
            Self::Line { duration, .. }
            | Self::WireBox { duration, .. }
            | Self::WireSphere { duration, .. } => *duration,
        }
    }

    /// Decrease the lifetime by `delta_time`; returns `true` once expired
    fn tick(&mut self, delta_time: f32) -> bool {
        let duration = match self {
            Self::Line { duration, .. }
            | Self::WireBox { duration, .. }
            | Self::WireSphere { duration, .. } => duration,
        };
        *duration -= delta_time;
        *duration <= 0.0
    }
}

/// Debug drawing system
///
/// Collects shapes over a frame; the renderer pulls them with
/// [`Self::shapes`] and draws them however it likes.
pub struct DebugDrawSystem {
    temporary: Vec<DebugShape>,
    persistent: HashMap<String, DebugShape>,

    /// Master switch; when false all draw calls are dropped
    pub enabled: bool,
}

impl Default for DebugDrawSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl DebugDrawSystem {
    /// Create an empty, enabled debug draw system
    pub fn new() -> Self {
        Self {
            temporary: Vec::new(),
            persistent: HashMap::new(),
            enabled: true,
        }
    }

    /// Queue a temporary shape
    pub fn draw(&mut self, shape: DebugShape) {
        if self.enabled {
            self.temporary.push(shape);
        }
    }

    /// Queue a one-frame line
    pub fn draw_line(&mut self, start: Vec3, end: Vec3, color: Vec4) {
        self.draw(DebugShape::Line {
            start,
            end,
            color,
            duration: 0.0,
        });
    }

    /// Queue a one-frame wireframe box
    pub fn draw_wire_box(&mut self, center: Vec3, extents: Vec3, color: Vec4) {
        self.draw(DebugShape::WireBox {
            center,
            extents,
            color,
            duration: 0.0,
        });
    }

    /// Queue a one-frame wireframe sphere
    pub fn draw_wire_sphere(&mut self, center: Vec3, radius: f32, color: Vec4) {
        self.draw(DebugShape::WireSphere {
            center,
            radius,
            color,
            duration: 0.0,
        });
    }

    /// Insert or replace a persistent shape under a key
    pub fn draw_persistent(&mut self, key: impl Into<String>, shape: DebugShape) {
        if self.enabled {
            self.persistent.insert(key.into(), shape);
        }
    }

    /// Remove a persistent shape
    pub fn clear_persistent(&mut self, key: &str) {
        self.persistent.remove(key);
    }

    /// Remove every shape, temporary and persistent
    pub fn clear(&mut self) {
        self.temporary.clear();
        self.persistent.clear();
    }

    /// Expire temporary shapes
    pub fn update(&mut self, delta_time: f32) {
        self.temporary.retain_mut(|shape| !shape.tick(delta_time));
    }

    /// All live shapes, temporary first then persistent
    pub fn shapes(&self) -> impl Iterator<Item = &DebugShape> {
        self.temporary.iter().chain(self.persistent.values())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_frame_shapes_expire_on_update() {
        let mut draw = DebugDrawSystem::new();
        draw.draw_line(Vec3::zeros(), Vec3::new(1.0, 0.0, 0.0), Vec4::zeros());
        assert_eq!(draw.shapes().count(), 1);

        draw.update(0.016);
        assert_eq!(draw.shapes().count(), 0);
    }

    #[test]
    fn test_timed_shape_survives_until_duration_runs_out() {
        let mut draw = DebugDrawSystem::new();
        draw.draw(DebugShape::WireSphere {
            center: Vec3::zeros(),
            radius: 1.0,
            color: Vec4::zeros(),
            duration: 0.5,
        });

        draw.update(0.3);
        assert_eq!(draw.shapes().count(), 1);
        draw.update(0.3);
        assert_eq!(draw.shapes().count(), 0);
    }

    #[test]
    fn test_persistent_shape_stays_until_cleared() {
        let mut draw = DebugDrawSystem::new();
        draw.draw_persistent(
            "marker",
            DebugShape::WireSphere {
                center: Vec3::zeros(),
                radius: 1.0,
                color: Vec4::zeros(),
                duration: f32::INFINITY,
            },
        );

        draw.update(100.0);
        assert_eq!(draw.shapes().count(), 1);

        draw.clear_persistent("marker");
        assert_eq!(draw.shapes().count(), 0);
    }

    #[test]
    fn test_disabled_system_drops_draw_calls() {
        let mut draw = DebugDrawSystem::new();
        draw.enabled = false;
        draw.draw_line(Vec3::zeros(), Vec3::new(1.0, 0.0, 0.0), Vec4::zeros());
        assert_eq!(draw.shapes().count(), 0);
    }
}
