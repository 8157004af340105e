//! Geometric primitives and intersection algorithms
//!
//! The building blocks the narrow phase and the trace queries share:
//! axis-aligned bounding boxes with slab-method ray intersection, rays,
//! and the segment distance routines used by capsule tests.

use crate::foundation::math::Vec3;

/// Axis with near-zero direction component; treated as parallel to the slab
const PARALLEL_EPSILON: f32 = 1e-8;

/// Axis-Aligned Bounding Box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner of the bounding box
    pub min: Vec3,
    /// Maximum corner of the bounding box
    pub max: Vec3,
}

impl Aabb {
    /// Create a new AABB from min and max points
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Create an AABB centered at a point with given half-extents
    pub fn from_center_extents(center: Vec3, extents: Vec3) -> Self {
        Self {
            min: center - extents,
            max: center + extents,
        }
    }

    /// Get the center of the AABB
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Get the half-extents of the AABB
    pub fn extents(&self) -> Vec3 {
        (self.max - self.min) * 0.5
    }

    /// Return a copy grown by `amount` on all six faces
    pub fn expanded(&self, amount: f32) -> Self {
        let growth = Vec3::new(amount, amount, amount);
        Self {
            min: self.min - growth,
            max: self.max + growth,
        }
    }

    /// Check if this AABB contains a point (boundary inclusive)
    pub fn contains_point(&self, point: Vec3) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
            && point.z >= self.min.z
            && point.z <= self.max.z
    }

    /// Check if this AABB intersects another AABB (boundary inclusive)
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
            && self.min.z <= other.max.z
            && self.max.z >= other.min.z
    }

    /// Clamp a point into the box, yielding the closest point inside it
    pub fn clamp_point(&self, point: Vec3) -> Vec3 {
        Vec3::new(
            point.x.clamp(self.min.x, self.max.x),
            point.y.clamp(self.min.y, self.max.y),
            point.z.clamp(self.min.z, self.max.z),
        )
    }

    /// Whether both corners hold only finite values
    pub fn is_finite(&self) -> bool {
        self.min.iter().all(|c| c.is_finite()) && self.max.iter().all(|c| c.is_finite())
    }

    /// Slab-method intersection of a directed segment with this AABB
    ///
    /// `direction` must be normalized; `max_distance` is the segment
    /// length. Per axis the parameter interval between the two bounding
    /// planes is computed (swapping when the direction is negative) and
    /// intersected across the three axes; an empty intersection means a
    /// miss. The hit distance is the entry point, or the exit point when
    /// the segment starts inside the box. Returns `None` for hits behind
    /// the origin or beyond `max_distance`.
    pub fn intersect_segment(
        &self,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
    ) -> Option<f32> {
        let mut t_min = f32::NEG_INFINITY;
        let mut t_max = f32::INFINITY;

        for axis in 0..3 {
            let o = origin[axis];
            let d = direction[axis];

            if d.abs() < PARALLEL_EPSILON {
                // Segment runs parallel to this slab: it can only pass
                // if the origin already lies between the two planes
                if o < self.min[axis] || o > self.max[axis] {
                    return None;
                }
                continue;
            }

            let mut t0 = (self.min[axis] - o) / d;
            let mut t1 = (self.max[axis] - o) / d;
            if t0 > t1 {
                std::mem::swap(&mut t0, &mut t1);
            }

            t_min = t_min.max(t0);
            t_max = t_max.min(t1);
            if t_min > t_max {
                return None;
            }
        }

        // Entry distance, or exit distance when the origin is inside the box
        let t = if t_min >= 0.0 { t_min } else { t_max };
        if t < 0.0 || t > max_distance {
            return None;
        }
        Some(t)
    }

    /// Recover the face normal for a point on (or near) the box surface
    ///
    /// Finds the axis along which the point, in center-relative
    /// coordinates scaled by the extents, sits deepest, and returns the
    /// unit vector of that axis signed by the point's side.
    pub fn face_normal_at(&self, point: Vec3) -> Vec3 {
        let extents = self.extents();
        let local = point - self.center();

        let mut best_axis = 0;
        let mut best_depth = f32::NEG_INFINITY;
        for axis in 0..3 {
            let extent = extents[axis].max(PARALLEL_EPSILON);
            let depth = local[axis].abs() / extent;
            if depth > best_depth {
                best_depth = depth;
                best_axis = axis;
            }
        }

        let mut normal = Vec3::zeros();
        normal[best_axis] = local[best_axis].signum();
        normal
    }
}

/// A ray for trace queries and picking
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// The origin point of the ray in world space
    pub origin: Vec3,
    /// The direction of the ray (normalized on construction)
    pub direction: Vec3,
}

impl Ray {
    /// Creates a new ray with the given origin and direction
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Get a point along the ray at distance t
    pub fn point_at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Closest point to `point` on the segment from `start` to `end`
///
/// Standard projection: `t = clamp(dot(p - a, ab) / dot(ab, ab), 0, 1)`.
/// A degenerate segment collapses to `start`.
pub fn closest_point_on_segment(point: Vec3, start: Vec3, end: Vec3) -> Vec3 {
    let ab = end - start;
    let denom = ab.magnitude_squared();
    if denom <= f32::EPSILON {
        return start;
    }
    let t = ((point - start).dot(&ab) / denom).clamp(0.0, 1.0);
    start + ab * t
}

/// Shortest distance between two segments
///
/// Clamped closest-point algorithm over the segments `p1..q1` and
/// `p2..q2`. Near-parallel segments are detected via the determinant of
/// the 2x2 system (threshold 1e-4) and handled by pinning one endpoint.
pub fn segment_segment_distance(p1: Vec3, q1: Vec3, p2: Vec3, q2: Vec3) -> f32 {
    const DEGENERATE_EPSILON: f32 = 1e-4;

    let d1 = q1 - p1;
    let d2 = q2 - p2;
    let r = p1 - p2;

    let a = d1.magnitude_squared();
    let e = d2.magnitude_squared();
    let f = d2.dot(&r);

    // Either segment may collapse to a point
    if a <= DEGENERATE_EPSILON && e <= DEGENERATE_EPSILON {
        return r.magnitude();
    }
    if a <= DEGENERATE_EPSILON {
        let t = (f / e).clamp(0.0, 1.0);
        return (p1 - (p2 + d2 * t)).magnitude();
    }

    let c = d1.dot(&r);
    if e <= DEGENERATE_EPSILON {
        let s = (-c / a).clamp(0.0, 1.0);
        return ((p1 + d1 * s) - p2).magnitude();
    }

    let b = d1.dot(&d2);
    let denom = a * e - b * b;

    // Near-parallel segments make the system singular; pick s = 0 and
    // let the t clamp below find the closest configuration
    let mut s = if denom > DEGENERATE_EPSILON {
        ((b * f - c * e) / denom).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let mut t = (b * s + f) / e;

    if t < 0.0 {
        t = 0.0;
        s = (-c / a).clamp(0.0, 1.0);
    } else if t > 1.0 {
        t = 1.0;
        s = ((b - c) / a).clamp(0.0, 1.0);
    }

    let closest1 = p1 + d1 * s;
    let closest2 = p2 + d2 * t;
    (closest1 - closest2).magnitude()
}
