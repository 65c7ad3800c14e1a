use bevy::math::{Vec2, Vec3};

/// Interpolation factor for a per-frame lerp running at `rate` per second.
///
/// This is the frame-rate dependent `rate * dt` factor, clamped to `[0, 1]`.
#[inline]
pub fn lerp_factor(rate: f32, dt: f32) -> f32 {
    (rate * dt).clamp(0.0, 1.0)
}

/// Linear interpolation between two values
#[inline]
pub fn lerp(start: f32, end: f32, factor: f32) -> f32 {
    start + (end - start) * factor.clamp(0.0, 1.0)
}

#[inline]
pub fn lerp_vec3(start: Vec3, end: Vec3, factor: f32) -> Vec3 {
    start + (end - start) * factor.clamp(0.0, 1.0)
}

/// Decrement a countdown timer, never going below zero.
#[inline]
pub fn count_down(timer: f32, dt: f32) -> f32 {
    (timer - dt).max(0.0)
}

/// Unit direction of `velocity`, or zero when it is too small to have one.
pub fn direction_of(velocity: Vec2) -> Vec2 {
    if velocity.length_squared() <= f32::EPSILON {
        Vec2::ZERO
    } else {
        velocity.normalize()
    }
}
