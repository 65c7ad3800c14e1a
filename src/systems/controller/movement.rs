use bevy::prelude::*;

use crate::components::{JumpKind, PlatformerController, PlayerMovementConfig};
use crate::systems::controller::MovementHost;
use crate::utils::{count_down, lerp};

/// What happened during one frame update, for logging and inspection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameOutcome {
    pub jump: Option<JumpKind>,
    pub dash_started: bool,
    pub dash_ended: bool,
    pub flipped: bool,
}

impl PlatformerController {
    /// Variable-rate tick: input edges, timers and fall shaping.
    pub fn frame_update(
        &mut self,
        config: &PlayerMovementConfig,
        host: &mut impl MovementHost,
    ) -> FrameOutcome {
        let input = host.input();
        self.move_input = input.horizontal;

        let jump = self.handle_jump(config, host);
        let (dash_started, dash_ended) = self.handle_dash(config, host);
        self.apply_better_jump(config, host);
        self.update_coyote_time(config, host.elapsed_time());
        let flipped = self.handle_flip(host);

        FrameOutcome {
            jump,
            dash_started,
            dash_ended,
            flipped,
        }
    }

    /// Fixed-rate tick: horizontal velocity, then the ground probe.
    pub fn physics_step(&mut self, config: &PlayerMovementConfig, host: &mut impl MovementHost) {
        if !self.dashing {
            let velocity = host.velocity();
            let target_x = if self.move_input == 0.0 {
                lerp(velocity.x, 0.0, config.ground_damping)
            } else {
                self.move_input * config.move_speed
            };
            host.set_velocity(Vec2::new(target_x, velocity.y));
        }

        self.grounded = host.probe_ground();
    }

    fn handle_jump(
        &mut self,
        config: &PlayerMovementConfig,
        host: &mut impl MovementHost,
    ) -> Option<JumpKind> {
        if self.grounded {
            self.jumps_remaining = config.max_jumps;
            self.coyote_timer = config.coyote_time;
        }
        // max_jumps may have been lowered at runtime
        self.jumps_remaining = self.jumps_remaining.min(config.max_jumps);

        // A dash owns the vertical velocity until it ends
        if !host.input().jump_pressed || self.dashing {
            return None;
        }

        let kind = if self.grounded {
            JumpKind::Grounded
        } else if self.coyote_timer > 0.0 {
            JumpKind::Coyote
        } else if self.jumps_remaining > 0 {
            JumpKind::Air
        } else {
            return None;
        };

        let velocity = host.velocity();
        host.set_velocity(Vec2::new(velocity.x, config.jump_force));

        match kind {
            JumpKind::Grounded | JumpKind::Coyote => {
                self.coyote_timer = 0.0;
                // One jump spent, the rest stay for the air
                self.jumps_remaining = config.max_jumps.saturating_sub(1);
            }
            JumpKind::Air => self.jumps_remaining -= 1,
        }

        Some(kind)
    }

    fn handle_dash(
        &mut self,
        config: &PlayerMovementConfig,
        host: &mut impl MovementHost,
    ) -> (bool, bool) {
        let dt = host.elapsed_time();
        if self.dash_cooldown_timer > 0.0 {
            self.dash_cooldown_timer = count_down(self.dash_cooldown_timer, dt);
        }

        let mut started = false;
        if host.input().dash_pressed && self.can_dash() {
            self.start_dash(config, host);
            started = true;
        }

        let mut ended = false;
        if self.dashing {
            self.dash_time_left = count_down(self.dash_time_left, dt);
            if self.dash_time_left <= 0.0 {
                self.end_dash(host);
                ended = true;
            } else {
                let velocity = host.velocity();
                if velocity.y != 0.0 {
                    host.set_velocity(Vec2::new(velocity.x, 0.0));
                }
            }
        }

        (started, ended)
    }

    fn start_dash(&mut self, config: &PlayerMovementConfig, host: &mut impl MovementHost) {
        self.dashing = true;
        self.can_dash = false;
        self.dash_time_left = config.dash_duration;
        self.dash_cooldown_timer = config.dash_cooldown;

        let direction = if self.facing_right { 1.0 } else { -1.0 };
        host.set_velocity(Vec2::new(direction * config.dash_force, 0.0));
        host.suspend_gravity(true);
    }

    /// Velocity is left as is; horizontal control takes over on the next
    /// physics step.
    fn end_dash(&mut self, host: &mut impl MovementHost) {
        self.dashing = false;
        self.can_dash = true;
        host.suspend_gravity(false);
    }

    fn apply_better_jump(&mut self, config: &PlayerMovementConfig, host: &mut impl MovementHost) {
        if self.dashing {
            return;
        }

        let dt = host.elapsed_time();
        let gravity_y = host.gravity().y;
        let mut velocity = host.velocity();

        if velocity.y < 0.0 {
            velocity.y += gravity_y * (config.fall_multiplier - 1.0) * dt;
            velocity.y = velocity.y.max(-config.max_fall_speed);
            host.set_velocity(velocity);
        } else if velocity.y > 0.0 && !host.input().jump_held {
            velocity.y += gravity_y * (config.low_jump_multiplier - 1.0) * dt;
            host.set_velocity(velocity);
        }
    }

    fn update_coyote_time(&mut self, config: &PlayerMovementConfig, dt: f32) {
        if self.grounded {
            self.coyote_timer = config.coyote_time;
        } else {
            self.coyote_timer = count_down(self.coyote_timer, dt);
        }
    }

    fn handle_flip(&mut self, host: &mut impl MovementHost) -> bool {
        let wants_right = self.move_input > 0.0;
        let wants_left = self.move_input < 0.0;
        if (wants_right && !self.facing_right) || (wants_left && self.facing_right) {
            self.facing_right = !self.facing_right;
            host.set_facing(self.facing_right);
            true
        } else {
            false
        }
    }
}
