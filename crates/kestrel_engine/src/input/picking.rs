//! Mouse picking
//!
//! Converts screen-space mouse coordinates to Normalized Device
//! Coordinates, unprojects them into a world-space ray, and resolves the
//! pick with a line trace against the collision registry.

use crate::foundation::math::{Mat4, Point3, Vec3};
use crate::physics::collision::{CollisionRegistry, HitResult, Ray};

/// Mouse state for picking operations
#[derive(Debug, Clone)]
pub struct MouseState {
    /// Current screen-space X position (pixels from the left)
    pub screen_x: f64,
    /// Current screen-space Y position (pixels from the top)
    pub screen_y: f64,
    /// Window width in pixels
    pub window_width: u32,
    /// Window height in pixels
    pub window_height: u32,
}

impl MouseState {
    /// Create a mouse state for a window of the given size
    pub fn new(window_width: u32, window_height: u32) -> Self {
        Self {
            screen_x: 0.0,
            screen_y: 0.0,
            window_width,
            window_height,
        }
    }

    /// Update mouse position from window events
    pub fn update_position(&mut self, x: f64, y: f64) {
        self.screen_x = x;
        self.screen_y = y;
    }

    /// Update window size (call on resize so NDC conversion stays accurate)
    pub fn update_window_size(&mut self, width: u32, height: u32) {
        self.window_width = width;
        self.window_height = height;
    }

    /// Convert screen coordinates to Normalized Device Coordinates
    ///
    /// NDC range is [-1, 1] on both axes with Y growing downward,
    /// matching the viewport convention of the render backend.
    pub fn screen_to_ndc(&self) -> (f32, f32) {
        let ndc_x = (self.screen_x / f64::from(self.window_width)) as f32 * 2.0 - 1.0;
        let ndc_y = (self.screen_y / f64::from(self.window_height)) as f32 * 2.0 - 1.0;
        (ndc_x, ndc_y)
    }
}

impl Default for MouseState {
    fn default() -> Self {
        Self::new(1920, 1080)
    }
}

/// Build a world-space pick ray from NDC coordinates
///
/// Unprojects the near-plane and far-plane points (depth 0 and 1) with
/// the inverse view-projection matrix. Returns `None` when the matrix is
/// degenerate and the two points collapse.
pub fn pick_ray(ndc_x: f32, ndc_y: f32, inverse_view_projection: &Mat4) -> Option<Ray> {
    let near = inverse_view_projection.transform_point(&Point3::new(ndc_x, ndc_y, 0.0));
    let far = inverse_view_projection.transform_point(&Point3::new(ndc_x, ndc_y, 1.0));

    let origin = Vec3::new(near.x, near.y, near.z);
    let direction = Vec3::new(far.x - near.x, far.y - near.y, far.z - near.z)
        .try_normalize(1e-6)?;
    Some(Ray {
        origin,
        direction,
    })
}

/// Resolve a pick ray against the collision registry
///
/// A thin wrapper over `line_trace` with an explicit reach.
pub fn pick(
    registry: &CollisionRegistry,
    ray: &Ray,
    max_distance: f32,
) -> Option<HitResult> {
    registry.line_trace(ray.origin, ray.origin + ray.direction * max_distance)
}
