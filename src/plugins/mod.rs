pub mod camera;
mod debug;
mod level;
mod physics;
mod platformer;
pub mod player;
mod staging;

pub use camera::{follow_camera_bundle, CameraPlugin};
pub use debug::DebugGizmosPlugin;
pub use level::LevelPlugin;
pub use physics::{KinematicPhysicsPlugin, PhysicsSet};
pub use platformer::PlatformerPlugin;
pub use player::{player_bundle, PlayerPlugin, PlayerSet};
pub use staging::{StartupSequencePlugin, StartupStage};
