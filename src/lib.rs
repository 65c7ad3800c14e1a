//! Camera follow and platformer movement for 2D Bevy games.
//!
//! The movement state machine and the camera tracker are plain structs that
//! talk to the engine through [`systems::MovementHost`] and
//! [`components::TargetSample`]; the plugins wire them into Bevy schedules.

pub mod components;
pub mod plugins;
pub mod resources;
pub mod systems;
pub mod utils;
