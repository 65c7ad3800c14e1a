use bevy::prelude::*;

use crate::components::{CameraFollow, CameraTracker, Player, TargetSample, Velocity};
use crate::utils::{direction_of, lerp_factor, lerp_vec3};

impl CameraTracker {
    /// Where the camera wants to be this frame, before smoothing.
    ///
    /// Advances the look-ahead offset, so call it once per frame.
    pub fn desired_position(&mut self, camera: Vec3, target: &TargetSample, dt: f32) -> Vec3 {
        let mut desired = target.position + self.config.offset;

        if let Some(look_ahead) = self.config.look_ahead {
            let direction = target.velocity.map_or(Vec2::ZERO, direction_of);
            let goal = direction.extend(0.0) * look_ahead.distance;
            self.look_ahead_offset = lerp_vec3(
                self.look_ahead_offset,
                goal,
                lerp_factor(look_ahead.smooth_speed, dt),
            );
            desired += self.look_ahead_offset;
        }

        if !self.config.follow_x {
            desired.x = camera.x;
        }
        if !self.config.follow_y {
            desired.y = camera.y;
        }

        if let Some(bounds) = self.config.bounds {
            desired = bounds.clamp(desired);
        }

        desired
    }

    /// Next camera position: a per-frame lerp of `smooth_speed * dt` toward the
    /// desired position. Without a target the camera stays where it is.
    pub fn step(&mut self, camera: Vec3, target: Option<&TargetSample>, dt: f32) -> Vec3 {
        let Some(target) = target else {
            return camera;
        };
        let desired = self.desired_position(camera, target, dt);
        lerp_vec3(camera, desired, lerp_factor(self.config.smooth_speed, dt))
    }

    /// Immediate placement used when a target is first bound.
    pub fn snap_position(&self, target_position: Vec3) -> Vec3 {
        let position = target_position + self.config.offset;
        match self.config.bounds {
            Some(bounds) => bounds.clamp(position),
            None => position,
        }
    }
}

/// Move every following camera toward its target.
///
/// Runs after gameplay has moved targets for the frame.
pub fn camera_follow_system(
    mut cameras: Query<(&mut CameraFollow, &mut Transform)>,
    targets: Query<(&Transform, Option<&Velocity>), Without<CameraFollow>>,
    time: Res<Time>,
) {
    let dt = time.delta_secs();

    for (mut follow, mut transform) in cameras.iter_mut() {
        let sample = follow.target.and_then(|entity| match targets.get(entity) {
            Ok((target_transform, velocity)) => Some(TargetSample {
                position: target_transform.translation,
                velocity: velocity.map(|v| v.0),
            }),
            Err(_) => {
                warn_once!("Camera target {} no longer exists, camera is idle", entity);
                None
            }
        });

        let next = follow
            .tracker
            .step(transform.translation, sample.as_ref(), dt);
        if next != transform.translation {
            transform.translation = next;
        }
    }
}

/// Give cameras without a target the scene's player, then snap them into place.
pub fn bind_camera_target_system(
    mut cameras: Query<(&mut CameraFollow, &mut Transform)>,
    players: Query<(Entity, Option<&Name>), With<Player>>,
    targets: Query<&Transform, Without<CameraFollow>>,
) {
    for (mut follow, mut transform) in cameras.iter_mut() {
        if follow.target.is_none() {
            match players.get_single() {
                Ok((player, name)) => {
                    follow.set_target(Some(player));
                    match name {
                        Some(name) => info!("Camera bound to player: {}", name),
                        None => info!("Camera bound to player {}", player),
                    }
                }
                Err(_) => {
                    warn!("CameraFollow: no target assigned and no single Player entity found");
                    continue;
                }
            }
        }

        let Some(target) = follow.target else {
            continue;
        };
        match targets.get(target) {
            Ok(target_transform) => {
                transform.translation = follow.tracker.snap_position(target_transform.translation);
            }
            Err(_) => {
                warn!("CameraFollow: target {} does not exist, camera not snapped", target);
            }
        }
    }
}
