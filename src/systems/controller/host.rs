use bevy::prelude::*;

use crate::components::{InputSnapshot, KinematicBody};

/// Everything the movement state machine needs from the engine.
///
/// The controller only ever talks to the world through this trait, so it can
/// be driven by Bevy systems or by a plain test double.
pub trait MovementHost {
    fn velocity(&self) -> Vec2;

    fn set_velocity(&mut self, velocity: Vec2);

    /// Whether the ground probe currently overlaps the ground layer.
    fn probe_ground(&mut self) -> bool;

    fn input(&self) -> InputSnapshot;

    /// Seconds elapsed since the previous tick of the calling schedule.
    fn elapsed_time(&self) -> f32;

    fn gravity(&self) -> Vec2;

    /// Mirror the character's visuals to face right (`true`) or left.
    fn set_facing(&mut self, facing_right: bool);

    /// Stop (or resume) gravity acting on the body.
    fn suspend_gravity(&mut self, suspended: bool);
}

/// [`MovementHost`] over the components of a single Bevy entity.
///
/// The ground probe is resolved by the calling system before the host is built
/// since it needs a query over every static collider.
pub struct EntityHost<'a> {
    pub velocity: &'a mut Vec2,
    pub transform: &'a mut Transform,
    pub body: &'a mut KinematicBody,
    pub input: InputSnapshot,
    pub grounded: bool,
    pub dt: f32,
    pub gravity: Vec2,
}

impl MovementHost for EntityHost<'_> {
    fn velocity(&self) -> Vec2 {
        *self.velocity
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        *self.velocity = velocity;
    }

    fn probe_ground(&mut self) -> bool {
        self.grounded
    }

    fn input(&self) -> InputSnapshot {
        self.input
    }

    fn elapsed_time(&self) -> f32 {
        self.dt
    }

    fn gravity(&self) -> Vec2 {
        self.gravity
    }

    fn set_facing(&mut self, facing_right: bool) {
        let magnitude = self.transform.scale.x.abs();
        self.transform.scale.x = if facing_right { magnitude } else { -magnitude };
    }

    fn suspend_gravity(&mut self, suspended: bool) {
        self.body.gravity_suspended = suspended;
    }
}
