use bevy::prelude::*;
use bevy::transform::TransformSystem;

use crate::components::{CameraFollow, CameraFollowConfig};
use crate::plugins::StartupStage;
use crate::systems::{bind_camera_target_system, camera_follow_system};

/// Binds following cameras at startup and moves them after gameplay each frame.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<CameraFollow>()
            .add_systems(
                Startup,
                bind_camera_target_system.in_set(StartupStage::BindCamera),
            )
            .add_systems(
                PostUpdate,
                camera_follow_system.before(TransformSystem::TransformPropagate),
            );
    }
}

/// A 2D camera that follows the player once bound.
pub fn follow_camera_bundle(config: CameraFollowConfig) -> impl Bundle {
    let offset = config.offset;
    (
        Camera2d,
        CameraFollow::new(config),
        Transform::from_translation(offset),
    )
}
