use bevy::prelude::*;

use crate::components::{
    GroundCheck, JumpKind, KinematicBody, PlatformerController, Player, PlayerDebugInfo,
    PlayerInput, PlayerMovementConfig, StaticCollider, Velocity,
};
use crate::resources::PhysicsConfig;
use crate::systems::controller::{EntityHost, FrameOutcome};
use crate::systems::physics::overlap_circle;
use crate::utils::{PlatformerError, Result};

/// Sample the keyboard into each player's `PlayerInput`.
pub fn read_player_input_system(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut query: Query<(&PlayerMovementConfig, &mut PlayerInput)>,
) {
    for (config, mut input) in query.iter_mut() {
        input.0 = config.key_bindings.snapshot(&keyboard);
    }
}

/// Per-frame controller update: jump and dash edges, timers, fall shaping and
/// facing.
pub fn player_frame_system(
    mut query: Query<(
        Entity,
        &mut PlatformerController,
        &PlayerMovementConfig,
        &PlayerInput,
        &mut KinematicBody,
        &mut Velocity,
        &mut Transform,
    )>,
    physics: Res<PhysicsConfig>,
    time: Res<Time>,
) {
    let dt = time.delta_secs();

    for (entity, mut controller, config, input, mut body, mut velocity, mut transform) in
        query.iter_mut()
    {
        let grounded = controller.is_grounded();
        let mut host = EntityHost {
            velocity: &mut velocity.0,
            transform: &mut transform,
            body: &mut body,
            input: input.0,
            grounded,
            dt,
            gravity: physics.gravity,
        };
        let outcome = controller.frame_update(config, &mut host);
        log_outcome(entity, &outcome);
    }
}

/// Fixed-step controller update: horizontal velocity and the ground probe.
///
/// Runs before integration so the probe sees the positions the previous
/// step resolved.
pub fn player_physics_system(
    mut players: Query<
        (
            &mut PlatformerController,
            &PlayerMovementConfig,
            &PlayerInput,
            &GroundCheck,
            &mut KinematicBody,
            &mut Velocity,
            &mut Transform,
        ),
        Without<StaticCollider>,
    >,
    colliders: Query<(&StaticCollider, &Transform), Without<PlatformerController>>,
    physics: Res<PhysicsConfig>,
    time: Res<Time>,
) {
    let dt = time.delta_secs();

    for (mut controller, config, input, ground_check, mut body, mut velocity, mut transform) in
        players.iter_mut()
    {
        let probe = ground_check.world_position(transform.translation.truncate());
        let grounded = overlap_circle(
            probe,
            config.ground_check_radius,
            config.ground_layer,
            colliders
                .iter()
                .map(|(collider, collider_transform)| {
                    (collider_transform.translation.truncate(), collider)
                }),
        );

        let mut host = EntityHost {
            velocity: &mut velocity.0,
            transform: &mut transform,
            body: &mut body,
            input: input.0,
            grounded,
            dt,
            gravity: physics.gravity,
        };
        controller.physics_step(config, &mut host);
    }
}

pub fn sync_debug_info_system(mut query: Query<(&PlatformerController, &mut PlayerDebugInfo)>) {
    for (controller, mut info) in query.iter_mut() {
        info.jumps_remaining = controller.jumps_remaining();
        info.grounded = controller.is_grounded();
    }
}

/// Refuse to run a scene whose players cannot probe the ground or move.
///
/// Any entity driven by a `PlatformerController` counts as a player, marker or
/// not.
pub fn validate_player_setup_system(
    players: Query<
        (Entity, Has<GroundCheck>, Has<KinematicBody>),
        Or<(With<Player>, With<PlatformerController>)>,
    >,
    mut exit: EventWriter<AppExit>,
) {
    match validate_players(players.iter()) {
        Ok(count) => info!("Validated {} player(s)", count),
        Err(err) => {
            error!("Player setup failed: {}", err);
            exit.send(AppExit::error());
        }
    }
}

/// Check each `(entity, has_ground_check, has_body)` triple, returning how many
/// players passed.
pub fn validate_players(
    players: impl IntoIterator<Item = (Entity, bool, bool)>,
) -> Result<usize> {
    let mut count = 0;
    for (entity, has_ground_check, has_body) in players {
        if !has_body {
            return Err(PlatformerError::MissingBody(entity));
        }
        if !has_ground_check {
            return Err(PlatformerError::MissingGroundCheck(entity));
        }
        count += 1;
    }
    Ok(count)
}

fn log_outcome(entity: Entity, outcome: &FrameOutcome) {
    match outcome.jump {
        Some(JumpKind::Grounded) => debug!("{}: ground jump", entity),
        Some(JumpKind::Coyote) => debug!("{}: coyote jump", entity),
        Some(JumpKind::Air) => debug!("{}: air jump", entity),
        None => {}
    }
    if outcome.dash_started {
        debug!("{}: dash started", entity);
    }
    if outcome.dash_ended {
        debug!("{}: dash ended", entity);
    }
}
