use crate::components::{CollisionLayers, KinematicBody, StaticCollider, Velocity};
use bevy::prelude::*;

/// Push kinematic bodies out of the static colliders they overlap.
pub fn resolve_collisions_system(
    mut bodies: Query<(&KinematicBody, &mut Velocity, &mut Transform), Without<StaticCollider>>,
    colliders: Query<(&StaticCollider, &Transform), Without<KinematicBody>>,
) {
    for (body, mut velocity, mut transform) in bodies.iter_mut() {
        let mut center = transform.translation.truncate();
        for (collider, collider_transform) in colliders.iter() {
            resolve_overlap(
                &mut center,
                body.half_extents,
                &mut velocity.0,
                collider_transform.translation.truncate(),
                collider.half_extents,
            );
        }
        transform.translation.x = center.x;
        transform.translation.y = center.y;
    }
}

/// Separate one box from another along the axis of least penetration.
///
/// Velocity into the surface is cancelled, velocity away from it is kept.
/// Returns the push applied to `center`.
pub fn resolve_overlap(
    center: &mut Vec2,
    half_extents: Vec2,
    velocity: &mut Vec2,
    other_center: Vec2,
    other_half_extents: Vec2,
) -> Vec2 {
    let delta = *center - other_center;
    let overlap = half_extents + other_half_extents - delta.abs();
    if overlap.x <= 0.0 || overlap.y <= 0.0 {
        return Vec2::ZERO;
    }

    let push = if overlap.x < overlap.y {
        let direction = delta.x.signum();
        if velocity.x * direction < 0.0 {
            velocity.x = 0.0;
        }
        Vec2::new(overlap.x * direction, 0.0)
    } else {
        let direction = delta.y.signum();
        if velocity.y * direction < 0.0 {
            velocity.y = 0.0;
        }
        Vec2::new(0.0, overlap.y * direction)
    };

    *center += push;
    push
}

/// Circle against axis-aligned box overlap.
pub fn circle_overlaps_box(
    center: Vec2,
    radius: f32,
    box_center: Vec2,
    half_extents: Vec2,
) -> bool {
    let min = box_center - half_extents;
    let max = box_center + half_extents;
    let closest = center.max(min).min(max);
    closest.distance_squared(center) <= radius * radius
}

/// Whether a circle overlaps any collider on a layer in `mask`.
pub fn overlap_circle<'a>(
    center: Vec2,
    radius: f32,
    mask: CollisionLayers,
    colliders: impl IntoIterator<Item = (Vec2, &'a StaticCollider)>,
) -> bool {
    colliders.into_iter().any(|(position, collider)| {
        collider.layers.intersects(mask)
            && circle_overlaps_box(center, radius, position, collider.half_extents)
    })
}
