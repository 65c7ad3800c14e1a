pub mod level;
pub mod physics;
pub mod platformer;

pub use level::LevelConfig;
pub use physics::PhysicsConfig;
pub use platformer::PlatformerConfig;
