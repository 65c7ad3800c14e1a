use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::{CollisionLayers, KeyBindings, PlayerInput};
use crate::utils::ConfigError;

/// Marks the entity a camera binds to when none was given explicitly.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct Player;

/// Tunables for a platformer character. Every field may be changed at runtime;
/// nothing is validated on assignment.
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerMovementConfig {
    pub move_speed: f32,
    pub jump_force: f32,
    pub dash_force: f32,
    /// [s]
    pub dash_duration: f32,
    /// [s]
    pub dash_cooldown: f32,

    /// Extra gravity applied while falling
    pub fall_multiplier: f32,
    /// Extra gravity applied while rising with jump released
    pub low_jump_multiplier: f32,
    /// Grace window after leaving the ground [s]
    pub coyote_time: f32,
    pub max_jumps: u32,
    pub max_fall_speed: f32,

    pub ground_check_radius: f32,
    pub ground_layer: CollisionLayers,
    /// Per-physics-step lerp factor toward zero horizontal speed with no input
    pub ground_damping: f32,

    pub key_bindings: KeyBindings,
}

impl Default for PlayerMovementConfig {
    fn default() -> Self {
        Self {
            move_speed: 5.0,
            jump_force: 10.0,
            dash_force: 20.0,
            dash_duration: 0.2,
            dash_cooldown: 0.5,
            fall_multiplier: 2.5,
            low_jump_multiplier: 2.0,
            coyote_time: 0.1,
            max_jumps: 2,
            max_fall_speed: 15.0,
            ground_check_radius: 0.2,
            ground_layer: CollisionLayers::GROUND,
            ground_damping: 0.1,
            key_bindings: KeyBindings::default(),
        }
    }
}

impl PlayerMovementConfig {
    /// Check a loaded configuration for values the controller cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let non_negative = [
            ("move_speed", self.move_speed),
            ("jump_force", self.jump_force),
            ("dash_force", self.dash_force),
            ("dash_duration", self.dash_duration),
            ("dash_cooldown", self.dash_cooldown),
            ("coyote_time", self.coyote_time),
            ("max_fall_speed", self.max_fall_speed),
            ("ground_check_radius", self.ground_check_radius),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::ValidationError(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }

        for (name, value) in [
            ("fall_multiplier", self.fall_multiplier),
            ("low_jump_multiplier", self.low_jump_multiplier),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::ValidationError(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }

        if !(0.0..=1.0).contains(&self.ground_damping) {
            return Err(ConfigError::ValidationError(format!(
                "ground_damping must lie in [0, 1], got {}",
                self.ground_damping
            )));
        }

        Ok(())
    }
}

/// How a successful jump was granted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpKind {
    Grounded,
    Coyote,
    Air,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DashState {
    Ready,
    Dashing { remaining: f32 },
    CoolingDown { remaining: f32 },
}

/// Jump, dash and grounding state of a platformer character.
#[derive(Component, Debug, Clone, PartialEq, Reflect)]
#[require(PlayerDebugInfo, PlayerInput)]
pub struct PlatformerController {
    pub(crate) grounded: bool,
    pub(crate) coyote_timer: f32,
    pub(crate) jumps_remaining: u32,
    pub(crate) dashing: bool,
    pub(crate) can_dash: bool,
    pub(crate) dash_time_left: f32,
    pub(crate) dash_cooldown_timer: f32,
    pub(crate) facing_right: bool,
    pub(crate) move_input: f32,
}

impl Default for PlatformerController {
    fn default() -> Self {
        Self::new(&PlayerMovementConfig::default())
    }
}

impl PlatformerController {
    pub fn new(config: &PlayerMovementConfig) -> Self {
        Self {
            grounded: false,
            coyote_timer: 0.0,
            jumps_remaining: config.max_jumps,
            dashing: false,
            can_dash: true,
            dash_time_left: 0.0,
            dash_cooldown_timer: 0.0,
            facing_right: true,
            move_input: 0.0,
        }
    }

    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    pub fn jumps_remaining(&self) -> u32 {
        self.jumps_remaining
    }

    pub fn coyote_timer(&self) -> f32 {
        self.coyote_timer
    }

    pub fn is_dashing(&self) -> bool {
        self.dashing
    }

    pub fn can_dash(&self) -> bool {
        self.can_dash && !self.dashing && self.dash_cooldown_timer <= 0.0
    }

    pub fn facing_right(&self) -> bool {
        self.facing_right
    }

    pub fn dash_state(&self) -> DashState {
        if self.dashing {
            DashState::Dashing {
                remaining: self.dash_time_left,
            }
        } else if self.dash_cooldown_timer > 0.0 {
            DashState::CoolingDown {
                remaining: self.dash_cooldown_timer,
            }
        } else {
            DashState::Ready
        }
    }
}

/// Read-only mirror of controller state, refreshed every frame for inspection.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
pub struct PlayerDebugInfo {
    pub jumps_remaining: u32,
    pub grounded: bool,
}
