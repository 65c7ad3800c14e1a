pub mod config;

pub use config::{LevelConfig, PhysicsConfig, PlatformerConfig};
