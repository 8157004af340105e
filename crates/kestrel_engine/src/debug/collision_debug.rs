//! Collision-specific debug visualization
//!
//! Walks the collision registry and emits wireframe bounds for every
//! registered component, colored by whether the component overlapped
//! anything in the last update pass, plus markers for trace hits.

use crate::foundation::math::{Vec3, Vec4};
use crate::physics::collision::{CollisionRegistry, HitResult};
use super::draw::{DebugDrawSystem, DebugShape};

/// Radius of the sphere drawn at trace impact points
const HIT_MARKER_RADIUS: f32 = 0.1;

/// Length of the line drawn along the impact normal
const NORMAL_MARKER_LENGTH: f32 = 0.5;

/// Color scheme for collision visualization
#[derive(Clone, Debug)]
pub struct CollisionDebugColors {
    /// Bounds of components that overlapped nothing last frame
    pub shape_default: Vec4,

    /// Bounds of components that overlapped something last frame
    pub shape_colliding: Vec4,

    /// Trace hit markers
    pub hit_marker: Vec4,
}

impl Default for CollisionDebugColors {
    fn default() -> Self {
        Self {
            shape_default: Vec4::new(0.0, 1.0, 0.0, 0.3),   // Green, semi-transparent
            shape_colliding: Vec4::new(1.0, 0.0, 0.0, 0.5), // Red, semi-transparent
            hit_marker: Vec4::new(1.0, 1.0, 0.0, 1.0),      // Yellow, opaque
        }
    }
}

/// Collision debug visualizer
pub struct CollisionDebugVisualizer {
    debug_draw: DebugDrawSystem,
    colors: CollisionDebugColors,

    /// Show component bounds
    pub show_bounds: bool,

    /// Show trace hit markers
    pub show_hits: bool,
}

impl Default for CollisionDebugVisualizer {
    fn default() -> Self {
        Self::new()
    }
}

impl CollisionDebugVisualizer {
    /// Create a visualizer with the default color scheme
    pub fn new() -> Self {
        Self {
            debug_draw: DebugDrawSystem::new(),
            colors: CollisionDebugColors::default(),
            show_bounds: true,
            show_hits: true,
        }
    }

    /// Set a custom color scheme
    pub fn with_colors(mut self, colors: CollisionDebugColors) -> Self {
        self.colors = colors;
        self
    }

    /// Emit one wireframe box per registered, enabled component
    pub fn draw_registry(&mut self, registry: &CollisionRegistry) {
        if !self.show_bounds {
            return;
        }

        for (handle, component) in registry.iter_registered() {
            if !component.enabled {
                continue;
            }
            let aabb = component.world_aabb();
            let color = if registry.was_overlapping(handle) {
                self.colors.shape_colliding
            } else {
                self.colors.shape_default
            };
            self.debug_draw
                .draw_wire_box(aabb.center(), aabb.extents(), color);
        }
    }

    /// Emit markers for a trace hit: the traced segment up to the
    /// impact, a small sphere at the impact point, and the normal
    pub fn draw_hit(&mut self, hit: &HitResult) {
        if !self.show_hits {
            return;
        }

        self.debug_draw
            .draw_line(hit.trace_start, hit.impact_point, self.colors.hit_marker);
        self.debug_draw
            .draw_wire_sphere(hit.impact_point, HIT_MARKER_RADIUS, self.colors.hit_marker);
        self.debug_draw.draw_line(
            hit.impact_point,
            hit.impact_point + hit.impact_normal * NORMAL_MARKER_LENGTH,
            self.colors.hit_marker,
        );
    }

    /// Expire one-frame shapes
    pub fn update(&mut self, delta_time: f32) {
        self.debug_draw.update(delta_time);
    }

    /// Remove all shapes
    pub fn clear(&mut self) {
        self.debug_draw.clear();
    }

    /// All live shapes for the renderer
    pub fn shapes(&self) -> impl Iterator<Item = &DebugShape> {
        self.debug_draw.shapes()
    }

    /// Enable or disable all visualization output
    pub fn set_enabled(&mut self, enabled: bool) {
        self.debug_draw.enabled = enabled;
    }
}
