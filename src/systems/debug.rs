use bevy::color::palettes::css::{AQUA, YELLOW};
use bevy::math::Isometry2d;
use bevy::prelude::*;

use crate::components::{CameraFollow, GroundCheck, PlayerMovementConfig};

/// Camera bounds in yellow; target offset marker and line in aqua.
pub fn draw_camera_gizmos_system(
    mut gizmos: Gizmos,
    cameras: Query<&CameraFollow>,
    targets: Query<&Transform, Without<CameraFollow>>,
) {
    for follow in cameras.iter() {
        if let Some(bounds) = follow.config().bounds {
            gizmos.rect_2d(
                Isometry2d::from_translation(bounds.center()),
                bounds.size(),
                YELLOW,
            );
        }

        if let Some(target) = follow.target.and_then(|entity| targets.get(entity).ok()) {
            let anchor = target.translation.truncate();
            let goal = (target.translation + follow.config().offset).truncate();
            gizmos.circle_2d(Isometry2d::from_translation(goal), 0.5, AQUA);
            gizmos.line_2d(anchor, goal, AQUA);
        }
    }
}

pub fn draw_ground_check_gizmos_system(
    mut gizmos: Gizmos,
    players: Query<(&GroundCheck, &PlayerMovementConfig, &Transform)>,
) {
    for (ground_check, config, transform) in players.iter() {
        let probe = ground_check.world_position(transform.translation.truncate());
        gizmos.circle_2d(
            Isometry2d::from_translation(probe),
            config.ground_check_radius,
            YELLOW,
        );
    }
}
