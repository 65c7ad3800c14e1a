use bevy::prelude::*;

use crate::plugins::{
    CameraPlugin, KinematicPhysicsPlugin, LevelPlugin, PlayerPlugin, StartupSequencePlugin,
};
use crate::resources::PlatformerConfig;

/// Everything for a playable scene: physics, a spawned player, a generated
/// level and camera binding. Spawn a camera with `follow_camera_bundle` to
/// have it track the player.
pub struct PlatformerPlugin {
    config: PlatformerConfig,
    spawn_at: Vec2,
}

impl PlatformerPlugin {
    pub fn new(config: PlatformerConfig) -> Self {
        Self {
            config,
            spawn_at: Vec2::new(0.0, 1.0),
        }
    }

    pub fn with_spawn(mut self, position: Vec2) -> Self {
        self.spawn_at = position;
        self
    }
}

impl Plugin for PlatformerPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(StartupSequencePlugin)
            .add_plugins(KinematicPhysicsPlugin::with_config(
                self.config.physics.clone(),
            ))
            .add_plugins(PlayerPlugin::new(self.config.player.clone()).with_spawn(self.spawn_at))
            .add_plugins(CameraPlugin)
            .add_plugins(LevelPlugin::with_config(self.config.level.clone()));
    }
}
