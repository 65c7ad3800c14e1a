pub mod camera;
pub mod input;
pub mod physics;
pub mod player;

pub use camera::{
    CameraBounds, CameraFollow, CameraFollowConfig, CameraTracker, LookAheadConfig, TargetSample,
};
pub use input::{InputSnapshot, KeyBindings, PlayerInput};
pub use physics::{CollisionLayers, GroundCheck, KinematicBody, StaticCollider, Velocity};
pub use player::{
    DashState, JumpKind, PlatformerController, Player, PlayerDebugInfo, PlayerMovementConfig,
};
