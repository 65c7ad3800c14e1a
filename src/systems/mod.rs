pub mod camera;
pub mod controller;
pub mod debug;
pub mod level;
pub mod physics;

pub use camera::{bind_camera_target_system, camera_follow_system};
pub use controller::{
    player_frame_system, player_physics_system, read_player_input_system,
    sync_debug_info_system, validate_player_setup_system, validate_players, EntityHost,
    FrameOutcome, MovementHost,
};
pub use debug::{draw_camera_gizmos_system, draw_ground_check_gizmos_system};
pub use level::{generate_level, spawn_level_system, PlatformSpec};
pub use physics::{
    circle_overlaps_box, integrate_bodies_system, integrate_body, overlap_circle,
    resolve_collisions_system, resolve_overlap,
};
