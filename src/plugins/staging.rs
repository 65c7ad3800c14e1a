use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum StartupStage {
    SpawnLevel,
    SpawnPlayer,
    SpawnCamera,
    BindCamera,
    Validate,
}

pub struct StartupSequencePlugin;

impl Plugin for StartupSequencePlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Startup,
            (
                StartupStage::SpawnLevel,
                StartupStage::SpawnPlayer,
                StartupStage::SpawnCamera,
                StartupStage::BindCamera,
                StartupStage::Validate,
            )
                .chain(),
        );
    }
}
