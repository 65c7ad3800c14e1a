use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Input sampled for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Reflect)]
pub struct InputSnapshot {
    /// Raw horizontal axis: -1, 0 or 1
    pub horizontal: f32,
    /// Jump went down this frame
    pub jump_pressed: bool,
    /// Jump is currently held
    pub jump_held: bool,
    /// Dash went down this frame
    pub dash_pressed: bool,
}

/// Latest input sampled for a player.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Deref, DerefMut, Reflect)]
pub struct PlayerInput(pub InputSnapshot);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub jump: KeyCode,
    pub dash: KeyCode,
    pub left: Vec<KeyCode>,
    pub right: Vec<KeyCode>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            jump: KeyCode::Space,
            dash: KeyCode::ShiftLeft,
            left: vec![KeyCode::ArrowLeft, KeyCode::KeyA],
            right: vec![KeyCode::ArrowRight, KeyCode::KeyD],
        }
    }
}

impl KeyBindings {
    /// Raw horizontal axis. Opposite keys held together cancel out.
    pub fn horizontal_axis(&self, keyboard: &ButtonInput<KeyCode>) -> f32 {
        let mut axis = 0.0;
        if keyboard.any_pressed(self.left.iter().copied()) {
            axis -= 1.0;
        }
        if keyboard.any_pressed(self.right.iter().copied()) {
            axis += 1.0;
        }
        axis
    }

    pub fn snapshot(&self, keyboard: &ButtonInput<KeyCode>) -> InputSnapshot {
        InputSnapshot {
            horizontal: self.horizontal_axis(keyboard),
            jump_pressed: keyboard.just_pressed(self.jump),
            jump_held: keyboard.pressed(self.jump),
            dash_pressed: keyboard.just_pressed(self.dash),
        }
    }
}
