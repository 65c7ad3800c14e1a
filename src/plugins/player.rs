use bevy::prelude::*;

use crate::components::{
    GroundCheck, KinematicBody, PlatformerController, Player, PlayerDebugInfo,
    PlayerMovementConfig,
};
use crate::plugins::{PhysicsSet, StartupStage};
use crate::systems::{
    player_frame_system, player_physics_system, read_player_input_system,
    sync_debug_info_system, validate_player_setup_system,
};

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum PlayerSet {
    Input,
    Frame,
    Debug,
}

pub struct PlayerPlugin {
    config: PlayerMovementConfig,
    spawn_at: Option<Vec2>,
}

impl PlayerPlugin {
    /// Controller systems only; players are spawned elsewhere.
    pub fn new(config: PlayerMovementConfig) -> Self {
        PlayerPlugin {
            config,
            spawn_at: None,
        }
    }

    /// Also spawn a player at `position` during startup.
    pub fn with_spawn(mut self, position: Vec2) -> Self {
        self.spawn_at = Some(position);
        self
    }

    fn setup_player(mut commands: Commands, config: PlayerMovementConfig, position: Vec2) {
        let player = commands.spawn(player_bundle(config, position)).id();
        info!("Spawned player {} at {}", player, position);
    }
}

/// Components for a controllable player with a unit-sized body whose ground
/// probe sits at its feet.
pub fn player_bundle(config: PlayerMovementConfig, position: Vec2) -> impl Bundle {
    (
        Player,
        Name::new("Player"),
        PlatformerController::new(&config),
        config,
        KinematicBody::new(Vec2::splat(0.5)),
        GroundCheck::below(0.5),
        Transform::from_translation(position.extend(1.0)),
    )
}

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ButtonInput<KeyCode>>()
            .register_type::<PlatformerController>()
            .register_type::<PlayerDebugInfo>();

        app.configure_sets(
            Update,
            (PlayerSet::Input, PlayerSet::Frame, PlayerSet::Debug).chain(),
        )
        .add_systems(
            Update,
            (
                read_player_input_system.in_set(PlayerSet::Input),
                player_frame_system.in_set(PlayerSet::Frame),
                sync_debug_info_system.in_set(PlayerSet::Debug),
            ),
        )
        .add_systems(
            FixedUpdate,
            player_physics_system.in_set(PhysicsSet::Control),
        )
        .add_systems(
            Startup,
            validate_player_setup_system.in_set(StartupStage::Validate),
        );

        if let Some(position) = self.spawn_at {
            let config = self.config.clone();
            app.add_systems(
                Startup,
                (move |commands: Commands| Self::setup_player(commands, config.clone(), position))
                    .in_set(StartupStage::SpawnPlayer),
            );
        }
    }
}
