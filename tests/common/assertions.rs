use approx::assert_relative_eq;
use bevy::prelude::*;
use platformer::components::{PlatformerController, PlayerMovementConfig};

#[track_caller]
pub fn assert_vec2_eq(actual: Vec2, expected: Vec2, epsilon: f32) {
    assert_relative_eq!(actual.x, expected.x, epsilon = epsilon);
    assert_relative_eq!(actual.y, expected.y, epsilon = epsilon);
}

#[track_caller]
pub fn assert_vec3_eq(actual: Vec3, expected: Vec3, epsilon: f32) {
    assert_relative_eq!(actual.x, expected.x, epsilon = epsilon);
    assert_relative_eq!(actual.y, expected.y, epsilon = epsilon);
    assert_relative_eq!(actual.z, expected.z, epsilon = epsilon);
}

/// Assert the controller's counters lie within what its config allows
#[track_caller]
pub fn assert_controller_valid(controller: &PlatformerController, config: &PlayerMovementConfig) {
    assert!(
        controller.jumps_remaining() <= config.max_jumps,
        "jumps_remaining {} exceeds max_jumps {}",
        controller.jumps_remaining(),
        config.max_jumps
    );
    assert!(
        (0.0..=config.coyote_time).contains(&controller.coyote_timer()),
        "coyote timer {} outside [0, {}]",
        controller.coyote_timer(),
        config.coyote_time
    );
}
