//! Narrow-phase shape-pair dispatch
//!
//! The exact tests run only after the coarse AABB pre-filter has passed;
//! several of them lean on that precondition for cheap early exits.
//! Precision is fixed per pair and applied uniformly:
//!
//! - box-box: separating axis test over the 15 candidate axes
//! - sphere-sphere, sphere-capsule, capsule-capsule: closed-form
//!   center/segment distance (exact)
//! - box-sphere, sphere-mesh: sphere center clamped into the other AABB
//!   (conservative for rotated boxes)
//! - capsule-box, capsule-mesh: core segment clamped against the AABB
//!   (conservative)
//! - box-mesh, mesh-mesh: AABB overlap only

use log::error;

use crate::foundation::math::Vec3;
use super::component::CollisionComponent;
use super::primitives::{closest_point_on_segment, segment_segment_distance, Aabb};
use super::shape::CollisionShape;

/// Candidate SAT axes below this squared length are skipped as degenerate
const AXIS_EPSILON: f32 = 1e-6;

/// Exact pairwise test between two components
///
/// Re-checks the enable flags, rejects self-comparison, and runs the
/// coarse AABB pre-filter before dispatching on the shape pair. A
/// component whose bounds have gone non-finite (NaN transform, malformed
/// shape) is logged and treated as a miss so one bad volume cannot poison
/// a whole query sweep.
pub fn test_pair(a: &CollisionComponent, b: &CollisionComponent) -> bool {
    if std::ptr::eq(a, b) {
        return false;
    }
    if !a.enabled || !b.enabled {
        return false;
    }

    let aabb_a = a.world_aabb();
    let aabb_b = b.world_aabb();
    if !aabb_a.is_finite() || !aabb_b.is_finite() {
        error!(
            "non-finite collision bounds ({:?} vs {:?}); treating pair as no hit",
            a.shape_kind(),
            b.shape_kind()
        );
        return false;
    }

    // Coarse reject first; the exact tests assume overlapping bounds
    if !aabb_a.intersects(&aabb_b) {
        return false;
    }

    match (a.shape(), b.shape()) {
        (CollisionShape::Box { .. }, CollisionShape::Box { .. }) => boxes_intersect_sat(a, b),

        (CollisionShape::Sphere { radius: ra }, CollisionShape::Sphere { radius: rb }) => {
            let distance = (a.world_position() - b.world_position()).magnitude();
            distance <= ra + rb
        }

        (CollisionShape::Sphere { radius }, CollisionShape::Box { .. }) => {
            sphere_touches_aabb(a.world_position(), *radius, &aabb_b)
        }
        (CollisionShape::Box { .. }, CollisionShape::Sphere { radius }) => {
            sphere_touches_aabb(b.world_position(), *radius, &aabb_a)
        }

        (CollisionShape::Sphere { radius }, CollisionShape::Capsule { .. }) => {
            sphere_touches_capsule(a.world_position(), *radius, b)
        }
        (CollisionShape::Capsule { .. }, CollisionShape::Sphere { radius }) => {
            sphere_touches_capsule(b.world_position(), *radius, a)
        }

        (CollisionShape::Sphere { radius }, CollisionShape::Mesh(_)) => {
            sphere_touches_aabb(a.world_position(), *radius, &aabb_b)
        }
        (CollisionShape::Mesh(_), CollisionShape::Sphere { radius }) => {
            sphere_touches_aabb(b.world_position(), *radius, &aabb_a)
        }

        (CollisionShape::Capsule { .. }, CollisionShape::Capsule { .. }) => {
            capsules_intersect(a, b)
        }

        (CollisionShape::Capsule { .. }, CollisionShape::Box { .. })
        | (CollisionShape::Capsule { .. }, CollisionShape::Mesh(_)) => {
            capsule_touches_aabb(a, &aabb_b)
        }
        (CollisionShape::Box { .. }, CollisionShape::Capsule { .. })
        | (CollisionShape::Mesh(_), CollisionShape::Capsule { .. }) => {
            capsule_touches_aabb(b, &aabb_a)
        }

        // Bounds-only precision tier; the coarse test above already passed
        (CollisionShape::Box { .. }, CollisionShape::Mesh(_))
        | (CollisionShape::Mesh(_), CollisionShape::Box { .. })
        | (CollisionShape::Mesh(_), CollisionShape::Mesh(_)) => true,
    }
}

/// Clamp the sphere center into the box and compare against the radius
fn sphere_touches_aabb(center: Vec3, radius: f32, aabb: &Aabb) -> bool {
    let closest = aabb.clamp_point(center);
    (closest - center).magnitude() <= radius
}

/// Distance from the sphere center to the capsule's core segment
fn sphere_touches_capsule(center: Vec3, radius: f32, capsule: &CollisionComponent) -> bool {
    let CollisionShape::Capsule {
        radius: capsule_radius,
        ..
    } = capsule.shape()
    else {
        return false;
    };
    let Some((start, end)) = capsule.core_segment() else {
        return false;
    };
    let closest = closest_point_on_segment(center, start, end);
    (closest - center).magnitude() <= radius + capsule_radius
}

/// Segment-segment distance against the summed radii
fn capsules_intersect(a: &CollisionComponent, b: &CollisionComponent) -> bool {
    let (CollisionShape::Capsule { radius: ra, .. }, CollisionShape::Capsule { radius: rb, .. }) =
        (a.shape(), b.shape())
    else {
        return false;
    };
    let (Some((a0, a1)), Some((b0, b1))) = (a.core_segment(), b.core_segment()) else {
        return false;
    };
    segment_segment_distance(a0, a1, b0, b1) <= ra + rb
}

/// Conservative capsule-versus-bounds test
///
/// Takes the core-segment point nearest the box center, clamps it into
/// the box, and compares the remaining distance against the cap radius.
fn capsule_touches_aabb(capsule: &CollisionComponent, aabb: &Aabb) -> bool {
    let CollisionShape::Capsule { radius, .. } = capsule.shape() else {
        return false;
    };
    let Some((start, end)) = capsule.core_segment() else {
        return false;
    };
    let on_segment = closest_point_on_segment(aabb.center(), start, end);
    let in_box = aabb.clamp_point(on_segment);
    (in_box - on_segment).magnitude() <= *radius
}

/// Separating Axis Theorem for two oriented boxes
///
/// Tests the 3 face normals of each box plus the 9 pairwise edge cross
/// products. Near-zero cross products (parallel edges) are skipped. Any
/// axis whose projected intervals do not overlap proves separation; if
/// all 15 candidates survive, the boxes intersect.
fn boxes_intersect_sat(a: &CollisionComponent, b: &CollisionComponent) -> bool {
    let corners_a = box_corners(a);
    let corners_b = box_corners(b);
    let axes_a = box_axes(a);
    let axes_b = box_axes(b);

    fn project(corners: &[Vec3; 8], axis: &Vec3) -> (f32, f32) {
        let mut min = f32::MAX;
        let mut max = f32::MIN;
        for corner in corners {
            let p = corner.dot(axis);
            min = min.min(p);
            max = max.max(p);
        }
        (min, max)
    }

    let separated_on = |axis: Vec3| -> bool {
        let len_sq = axis.magnitude_squared();
        if len_sq < AXIS_EPSILON {
            return false; // Degenerate axis proves nothing
        }
        let axis = axis / len_sq.sqrt();
        let (min_a, max_a) = project(&corners_a, &axis);
        let (min_b, max_b) = project(&corners_b, &axis);
        max_a < min_b || max_b < min_a
    };

    for axis in axes_a {
        if separated_on(axis) {
            return false;
        }
    }
    for axis in axes_b {
        if separated_on(axis) {
            return false;
        }
    }
    for edge_a in axes_a {
        for edge_b in axes_b {
            if separated_on(edge_a.cross(&edge_b)) {
                return false;
            }
        }
    }

    true
}

/// The box's local axes rotated into world space
fn box_axes(component: &CollisionComponent) -> [Vec3; 3] {
    let rotation = component.world_transform().rotation;
    [
        rotation * Vec3::x(),
        rotation * Vec3::y(),
        rotation * Vec3::z(),
    ]
}

/// The 8 oriented corners of a box component in world space
fn box_corners(component: &CollisionComponent) -> [Vec3; 8] {
    let CollisionShape::Box { half_extents } = component.shape() else {
        unreachable!("box_corners called on a non-box shape");
    };
    let center = component.world_position();
    let [x, y, z] = box_axes(component);
    let ex = x * half_extents.x;
    let ey = y * half_extents.y;
    let ez = z * half_extents.z;

    [
        center - ex - ey - ez,
        center + ex - ey - ez,
        center - ex + ey - ez,
        center + ex + ey - ez,
        center - ex - ey + ez,
        center + ex - ey + ez,
        center - ex + ey + ez,
        center + ex + ey + ez,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::{Quat, Transform, Vector3};
    use crate::physics::collision::mesh::CollisionMeshTemplate;

    fn box_at(position: Vec3, half_extents: Vec3) -> CollisionComponent {
        CollisionComponent::new(CollisionShape::cuboid(half_extents))
            .with_transform(Transform::from_position(position))
    }

    fn sphere_at(position: Vec3, radius: f32) -> CollisionComponent {
        CollisionComponent::new(CollisionShape::sphere(radius))
            .with_transform(Transform::from_position(position))
    }

    fn capsule_at(position: Vec3, radius: f32, height: f32) -> CollisionComponent {
        CollisionComponent::new(CollisionShape::capsule(radius, height))
            .with_transform(Transform::from_position(position))
    }

    #[test]
    fn test_disjoint_bounds_always_miss() {
        let a = box_at(Vec3::zeros(), Vec3::new(1.0, 1.0, 1.0));
        let far = Vec3::new(100.0, 0.0, 0.0);

        assert!(!test_pair(&a, &box_at(far, Vec3::new(1.0, 1.0, 1.0))));
        assert!(!test_pair(&a, &sphere_at(far, 1.0)));
        assert!(!test_pair(&a, &capsule_at(far, 0.5, 2.0)));
    }

    #[test]
    fn test_disabled_component_never_hits() {
        let a = box_at(Vec3::zeros(), Vec3::new(1.0, 1.0, 1.0));
        let mut b = box_at(Vec3::new(0.5, 0.0, 0.0), Vec3::new(1.0, 1.0, 1.0));
        assert!(test_pair(&a, &b));

        b.enabled = false;
        assert!(!test_pair(&a, &b));
    }

    #[test]
    fn test_component_never_hits_itself() {
        let a = box_at(Vec3::zeros(), Vec3::new(1.0, 1.0, 1.0));
        assert!(!test_pair(&a, &a));
    }

    #[test]
    fn test_axis_aligned_boxes_overlap() {
        let a = box_at(Vec3::zeros(), Vec3::new(1.0, 1.0, 1.0));
        let b = box_at(Vec3::new(1.5, 0.0, 0.0), Vec3::new(1.0, 1.0, 1.0));
        assert!(test_pair(&a, &b));
        assert!(test_pair(&b, &a));
    }

    #[test]
    fn test_sat_separates_rotated_boxes_with_overlapping_bounds() {
        // B is rotated 45 degrees around Z and placed diagonally so its
        // world AABB still clips A's, but its face normal separates them.
        let a = box_at(Vec3::zeros(), Vec3::new(1.0, 1.0, 1.0));
        let rotation = Quat::from_axis_angle(&Vector3::z_axis(), std::f32::consts::FRAC_PI_4);
        let b = CollisionComponent::new(CollisionShape::cuboid(Vec3::new(1.0, 1.0, 1.0)))
            .with_transform(Transform::from_position_rotation(
                Vec3::new(2.4, 2.4, 0.0),
                rotation,
            ));

        assert!(a.world_aabb().intersects(&b.world_aabb()));
        assert!(!test_pair(&a, &b));
        assert!(!test_pair(&b, &a));
    }

    #[test]
    fn test_sphere_sphere_boundary_is_inclusive() {
        let a = sphere_at(Vec3::zeros(), 1.0);
        let b = sphere_at(Vec3::new(3.0, 0.0, 0.0), 2.0);
        assert!(test_pair(&a, &b));

        let c = sphere_at(Vec3::new(3.01, 0.0, 0.0), 2.0);
        assert!(!test_pair(&a, &c));
    }

    #[test]
    fn test_box_sphere_clamp() {
        // Closest point on the box is (1, 0, 0), 0.5 away from the
        // sphere center, inside its 0.6 radius.
        let a = box_at(Vec3::zeros(), Vec3::new(1.0, 1.0, 1.0));
        let b = sphere_at(Vec3::new(1.5, 0.0, 0.0), 0.6);
        assert!(test_pair(&a, &b));

        let c = sphere_at(Vec3::new(1.5, 0.0, 0.0), 0.4);
        assert!(!test_pair(&a, &c));
    }

    #[test]
    fn test_sphere_capsule_uses_core_segment() {
        // Capsule from y in [-2, 2]; sphere sits beside the shaft.
        let capsule = capsule_at(Vec3::zeros(), 0.5, 4.0);
        let near = sphere_at(Vec3::new(0.9, 1.0, 0.0), 0.5);
        assert!(test_pair(&capsule, &near));

        let far = sphere_at(Vec3::new(1.2, 1.0, 0.0), 0.5);
        assert!(!test_pair(&capsule, &far));
    }

    #[test]
    fn test_parallel_capsules_reject_by_bounds_alone() {
        // Vertical gap exceeds radius + radius + height, so even the
        // coarse AABBs are disjoint.
        let a = capsule_at(Vec3::zeros(), 0.5, 4.0);
        let b = capsule_at(Vec3::new(0.0, 5.1, 0.0), 0.5, 4.0);
        assert!(!a.world_aabb().intersects(&b.world_aabb()));
        assert!(!test_pair(&a, &b));
    }

    #[test]
    fn test_crossed_capsules_use_segment_distance() {
        // Horizontal capsule crossing above a vertical one; the core
        // segments pass within the summed radii.
        let vertical = capsule_at(Vec3::zeros(), 0.5, 4.0);
        let rotation = Quat::from_axis_angle(&Vector3::z_axis(), std::f32::consts::FRAC_PI_2);
        let horizontal = CollisionComponent::new(CollisionShape::capsule(0.5, 4.0))
            .with_transform(Transform::from_position_rotation(
                Vec3::new(0.0, 2.2, 0.0),
                rotation,
            ));

        assert!(test_pair(&vertical, &horizontal));

        let too_high = CollisionComponent::new(CollisionShape::capsule(0.5, 4.0))
            .with_transform(Transform::from_position_rotation(
                Vec3::new(0.0, 3.2, 0.0),
                rotation,
            ));
        assert!(!test_pair(&vertical, &too_high));
    }

    #[test]
    fn test_mesh_pairs_resolve_at_bounds_precision() {
        let vertices = [
            Vec3::new(-1.0, -1.0, -1.0),
            Vec3::new(1.0, 1.0, 1.0),
        ];
        let mesh = CollisionComponent::new(CollisionShape::mesh(
            CollisionMeshTemplate::from_vertices(&vertices, &[]),
        ));
        let other = CollisionComponent::new(CollisionShape::mesh(
            CollisionMeshTemplate::from_vertices(&vertices, &[]),
        ))
        .with_transform(Transform::from_position(Vec3::new(1.5, 0.0, 0.0)));

        assert!(test_pair(&mesh, &other));
    }

    #[test]
    fn test_non_finite_transform_is_isolated() {
        let a = box_at(Vec3::zeros(), Vec3::new(1.0, 1.0, 1.0));
        let b = box_at(Vec3::new(f32::NAN, 0.0, 0.0), Vec3::new(1.0, 1.0, 1.0));
        assert!(!test_pair(&a, &b));
    }
}
