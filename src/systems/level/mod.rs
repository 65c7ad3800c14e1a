mod generator;

pub use generator::{generate_level, spawn_level_system, PlatformSpec};
