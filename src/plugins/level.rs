use bevy::prelude::*;

use crate::plugins::StartupStage;
use crate::resources::LevelConfig;
use crate::systems::spawn_level_system;

#[derive(Default)]
pub struct LevelPlugin {
    pub config: LevelConfig,
}

impl LevelPlugin {
    pub fn with_config(config: LevelConfig) -> Self {
        Self { config }
    }
}

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.config.clone()).add_systems(
            Startup,
            spawn_level_system.in_set(StartupStage::SpawnLevel),
        );
    }
}
