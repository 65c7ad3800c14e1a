use crate::components::{KinematicBody, Velocity};
use crate::resources::PhysicsConfig;
use bevy::prelude::*;

/// System to integrate gravity and velocity for every kinematic body.
///
/// Runs on the fixed schedule, so `Time` is the fixed timestep.
pub fn integrate_bodies_system(
    mut query: Query<(&KinematicBody, &mut Velocity, &mut Transform)>,
    config: Res<PhysicsConfig>,
    time: Res<Time>,
) {
    let dt = time.delta_secs();
    if dt <= 0.0 {
        return;
    }

    for (body, mut velocity, mut transform) in query.iter_mut() {
        integrate_body(body, &mut velocity.0, &mut transform.translation, config.gravity, dt);
    }
}

/// Semi-implicit Euler step: velocity first, then position from the new velocity.
pub fn integrate_body(
    body: &KinematicBody,
    velocity: &mut Vec2,
    translation: &mut Vec3,
    gravity: Vec2,
    dt: f32,
) {
    *velocity += body.effective_gravity(gravity) * dt;
    translation.x += velocity.x * dt;
    translation.y += velocity.y * dt;
}
