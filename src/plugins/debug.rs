use bevy::prelude::*;

use crate::systems::{draw_camera_gizmos_system, draw_ground_check_gizmos_system};

/// Gizmo overlay for camera bounds, camera offset and ground probes.
/// Needs Bevy's gizmo plugin, which `DefaultPlugins` provides.
pub struct DebugGizmosPlugin;

impl Plugin for DebugGizmosPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (draw_camera_gizmos_system, draw_ground_check_gizmos_system),
        );
    }
}
