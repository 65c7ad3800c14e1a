pub mod host;
mod movement;
mod platformer;

pub use host::{EntityHost, MovementHost};
pub use movement::FrameOutcome;
pub use platformer::{
    player_frame_system, player_physics_system, read_player_input_system,
    sync_debug_info_system, validate_player_setup_system, validate_players,
};
