use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Rectangle the camera position is confined to.
///
/// The bounds are taken as given: `min_x <= max_x` and `min_y <= max_y` are the
/// caller's responsibility.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Reflect)]
pub struct CameraBounds {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
}

impl Default for CameraBounds {
    fn default() -> Self {
        Self {
            min_x: -10.0,
            max_x: 10.0,
            min_y: -5.0,
            max_y: 5.0,
        }
    }
}

impl CameraBounds {
    pub fn new(min_x: f32, max_x: f32, min_y: f32, max_y: f32) -> Self {
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    /// Clamp x and y into the rectangle; depth passes through untouched.
    pub fn clamp(&self, position: Vec3) -> Vec3 {
        // f32::clamp panics on min > max, bounds are never validated
        Vec3::new(
            position.x.max(self.min_x).min(self.max_x),
            position.y.max(self.min_y).min(self.max_y),
            position.z,
        )
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.max_x - self.min_x, self.max_y - self.min_y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Reflect)]
pub struct LookAheadConfig {
    /// How far ahead of the target to look [world units]
    pub distance: f32,
    /// Rate at which the look-ahead offset chases its goal [1/s]
    pub smooth_speed: f32,
}

impl Default for LookAheadConfig {
    fn default() -> Self {
        Self {
            distance: 2.0,
            smooth_speed: 3.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Reflect)]
#[serde(default)]
pub struct CameraFollowConfig {
    pub offset: Vec3,
    pub smooth_speed: f32,
    pub follow_x: bool,
    pub follow_y: bool,
    pub bounds: Option<CameraBounds>,
    pub look_ahead: Option<LookAheadConfig>,
}

impl Default for CameraFollowConfig {
    fn default() -> Self {
        Self {
            offset: Vec3::new(0.0, 2.0, 10.0),
            smooth_speed: 5.0,
            follow_x: true,
            follow_y: true,
            bounds: None,
            look_ahead: None,
        }
    }
}

/// Per-camera tracking state: the configuration plus the running look-ahead.
#[derive(Debug, Clone, Default, PartialEq, Reflect)]
pub struct CameraTracker {
    pub config: CameraFollowConfig,
    pub(crate) look_ahead_offset: Vec3,
}

impl CameraTracker {
    pub fn new(config: CameraFollowConfig) -> Self {
        Self {
            config,
            look_ahead_offset: Vec3::ZERO,
        }
    }

    pub fn look_ahead_offset(&self) -> Vec3 {
        self.look_ahead_offset
    }
}

/// What the tracker can see of its target on a given frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetSample {
    pub position: Vec3,
    /// `None` when the target has no velocity to read
    pub velocity: Option<Vec2>,
}

impl TargetSample {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            velocity: None,
        }
    }

    pub fn moving(position: Vec3, velocity: Vec2) -> Self {
        Self {
            position,
            velocity: Some(velocity),
        }
    }
}

/// Camera component that smoothly follows a target entity.
#[derive(Component, Debug, Clone, Default, Reflect)]
pub struct CameraFollow {
    pub target: Option<Entity>,
    pub tracker: CameraTracker,
}

impl CameraFollow {
    pub fn new(config: CameraFollowConfig) -> Self {
        Self {
            target: None,
            tracker: CameraTracker::new(config),
        }
    }

    pub fn with_target(mut self, target: Entity) -> Self {
        self.target = Some(target);
        self
    }

    pub fn set_target(&mut self, target: Option<Entity>) {
        self.target = target;
    }

    pub fn set_offset(&mut self, offset: Vec3) {
        self.tracker.config.offset = offset;
    }

    /// Enable or disable the bounds. Enabling installs `bounds`; disabling
    /// drops the rectangle, so re-enabling must pass one again.
    pub fn set_bounds(&mut self, enabled: bool, bounds: CameraBounds) {
        self.tracker.config.bounds = enabled.then_some(bounds);
    }

    pub fn set_look_ahead(&mut self, look_ahead: Option<LookAheadConfig>) {
        self.tracker.config.look_ahead = look_ahead;
    }

    pub fn config(&self) -> &CameraFollowConfig {
        &self.tracker.config
    }
}
