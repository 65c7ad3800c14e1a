use bevy::prelude::*;
use platformer::{
    components::{CameraBounds, CameraFollowConfig, PlayerMovementConfig},
    resources::PhysicsConfig,
    systems::PlatformSpec,
};

/// A 20 unit wide floor whose top surface sits at y = 0
pub fn create_test_ground() -> PlatformSpec {
    PlatformSpec {
        center: Vec2::new(0.0, -0.25),
        half_extents: Vec2::new(10.0, 0.25),
    }
}

/// Fixed step matched to the test frame rate, so every update runs one
/// physics step
pub fn create_test_physics_config() -> PhysicsConfig {
    PhysicsConfig {
        gravity: Vec2::new(0.0, -9.81),
        timestep: 1.0 / 50.0,
    }
}

pub fn create_test_player_config() -> PlayerMovementConfig {
    PlayerMovementConfig::default()
}

pub fn create_test_camera_config() -> CameraFollowConfig {
    CameraFollowConfig {
        offset: Vec3::new(0.0, 2.0, 10.0),
        smooth_speed: 5.0,
        bounds: Some(CameraBounds::default()),
        ..Default::default()
    }
}
