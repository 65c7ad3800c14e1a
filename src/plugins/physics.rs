use crate::components::{KinematicBody, StaticCollider, Velocity};
use crate::resources::PhysicsConfig;
use crate::systems::{integrate_bodies_system, resolve_collisions_system};
use bevy::prelude::*;

/// Fixed-step stages. Controllers write velocities in `Control`.
#[derive(Debug, Hash, PartialEq, Eq, Clone, SystemSet)]
pub enum PhysicsSet {
    Control,
    Integrate,
    Resolve,
}

#[derive(Default)]
pub struct KinematicPhysicsPlugin {
    pub config: PhysicsConfig,
}

impl KinematicPhysicsPlugin {
    pub fn with_config(config: PhysicsConfig) -> Self {
        Self { config }
    }
}

impl Plugin for KinematicPhysicsPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<KinematicBody>()
            .register_type::<StaticCollider>()
            .register_type::<Velocity>();

        app.insert_resource(self.config.clone())
            .insert_resource(Time::<Fixed>::from_seconds(self.config.timestep));

        app.configure_sets(
            FixedUpdate,
            (PhysicsSet::Control, PhysicsSet::Integrate, PhysicsSet::Resolve).chain(),
        );

        app.add_systems(
            FixedUpdate,
            (
                integrate_bodies_system.in_set(PhysicsSet::Integrate),
                resolve_collisions_system.in_set(PhysicsSet::Resolve),
            ),
        );
    }
}
