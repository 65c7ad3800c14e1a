use bevy::prelude::Entity;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] io::Error),

    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Errors that stop a player or scene from being set up.
///
/// Gameplay no-ops (a jump with nothing left, a dash on cooldown, a camera
/// without a target) are not represented here; they are ordinary transitions.
#[derive(Error, Debug)]
pub enum PlatformerError {
    #[error("Player {0:?} has no GroundCheck, ground probing is impossible")]
    MissingGroundCheck(Entity),

    #[error("Player {0:?} has no kinematic body or velocity")]
    MissingBody(Entity),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, PlatformerError>;
