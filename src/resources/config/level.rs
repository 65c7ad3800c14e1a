use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Parameters for the procedurally laid out demo level.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelConfig {
    pub seed: u64,
    pub platform_count: usize,
    /// Platform width range (min, max)
    pub platform_width: (f32, f32),
    /// Horizontal gap between consecutive platforms (min, max)
    pub gap: (f32, f32),
    /// Largest height change between consecutive platforms
    pub height_step: f32,
    pub platform_thickness: f32,
    /// Width of the floor the player spawns on
    pub ground_width: f32,
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            platform_count: 12,
            platform_width: (2.0, 5.0),
            gap: (1.0, 3.0),
            height_step: 1.5,
            platform_thickness: 0.5,
            ground_width: 20.0,
        }
    }
}
