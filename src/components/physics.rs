use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Bitmask of collision layers a collider belongs to, or a query filters on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Reflect)]
pub struct CollisionLayers(pub u32);

impl CollisionLayers {
    pub const NONE: Self = Self(0);
    pub const DEFAULT: Self = Self(1);
    pub const GROUND: Self = Self(1 << 1);
    pub const ALL: Self = Self(u32::MAX);

    pub fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    pub fn with(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

impl Default for CollisionLayers {
    fn default() -> Self {
        Self::GROUND
    }
}

/// Linear velocity of a kinematic body [units/s]
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Deref, DerefMut, Reflect)]
pub struct Velocity(pub Vec2);

/// An axis-aligned box moved by gravity and its `Velocity`, pushed out of
/// static colliders.
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[require(Velocity)]
pub struct KinematicBody {
    pub half_extents: Vec2,
    pub gravity_scale: f32,
    /// Set while a controller needs the body to ignore gravity, e.g. mid-dash
    pub gravity_suspended: bool,
}

impl Default for KinematicBody {
    fn default() -> Self {
        Self {
            half_extents: Vec2::splat(0.5),
            gravity_scale: 1.0,
            gravity_suspended: false,
        }
    }
}

impl KinematicBody {
    pub fn new(half_extents: Vec2) -> Self {
        Self {
            half_extents,
            ..Default::default()
        }
    }

    /// Gravity actually applied this step.
    pub fn effective_gravity(&self, gravity: Vec2) -> Vec2 {
        if self.gravity_suspended {
            Vec2::ZERO
        } else {
            gravity * self.gravity_scale
        }
    }
}

/// Immovable axis-aligned box, e.g. a platform.
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
pub struct StaticCollider {
    pub half_extents: Vec2,
    pub layers: CollisionLayers,
}

impl StaticCollider {
    pub fn ground(half_extents: Vec2) -> Self {
        Self {
            half_extents,
            layers: CollisionLayers::GROUND,
        }
    }

    /// Minimum and maximum corners when centred on `center`.
    pub fn aabb(&self, center: Vec2) -> (Vec2, Vec2) {
        (center - self.half_extents, center + self.half_extents)
    }
}

/// Point, relative to the owning body, where the ground probe is taken.
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
pub struct GroundCheck {
    pub offset: Vec2,
}

impl Default for GroundCheck {
    fn default() -> Self {
        Self {
            offset: Vec2::new(0.0, -0.5),
        }
    }
}

impl GroundCheck {
    pub fn below(distance: f32) -> Self {
        Self {
            offset: Vec2::new(0.0, -distance),
        }
    }

    pub fn world_position(&self, body_position: Vec2) -> Vec2 {
        body_position + self.offset
    }
}
