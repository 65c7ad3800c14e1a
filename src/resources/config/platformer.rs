use super::{level::LevelConfig, physics::PhysicsConfig};
use crate::components::{CameraFollowConfig, PlayerMovementConfig};
use crate::utils::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Yaml,
    Json,
}

impl ConfigFormat {
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Ok(Self::Yaml),
            Some("json") => Ok(Self::Json),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Everything needed to set up a platformer scene.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformerConfig {
    pub physics: PhysicsConfig,
    pub player: PlayerMovementConfig,
    pub camera: CameraFollowConfig,
    pub level: LevelConfig,
}

impl PlatformerConfig {
    /// Load from a `.yaml`/`.yml` or `.json` file and validate it.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)?;
        let file = File::open(path)?;
        let config: Self = match format {
            ConfigFormat::Yaml => serde_yaml::from_reader(file)?,
            ConfigFormat::Json => serde_json::from_reader(file)?,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)?;
        let file = File::create(path)?;
        match format {
            ConfigFormat::Yaml => serde_yaml::to_writer(file, self)?,
            ConfigFormat::Json => serde_json::to_writer_pretty(file, self)?,
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.physics.timestep.is_finite() && self.physics.timestep > 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "physics.timestep must be positive, got {}",
                self.physics.timestep
            )));
        }
        let (min_width, max_width) = self.level.platform_width;
        let (min_gap, max_gap) = self.level.gap;
        if min_width > max_width || min_gap > max_gap {
            return Err(ConfigError::ValidationError(
                "level ranges must be ordered (min, max)".to_string(),
            ));
        }
        self.player.validate()
    }
}
