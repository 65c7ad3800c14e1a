use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use platformer::{
    components::{
        CameraFollow, CameraFollowConfig, PlatformerController, PlayerMovementConfig,
        StaticCollider,
    },
    plugins::{
        CameraPlugin, KinematicPhysicsPlugin, PlayerPlugin, StartupSequencePlugin, StartupStage,
    },
    resources::PhysicsConfig,
    systems::PlatformSpec,
};
use std::time::Duration;

// Builder for creating a test application with customizable configuration
pub struct TestAppBuilder {
    player: Option<(PlayerMovementConfig, Vec2)>,
    physics_config: Option<PhysicsConfig>,
    camera_config: Option<CameraFollowConfig>,
    platforms: Vec<PlatformSpec>,
    time_step: f64,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self {
            player: None,
            physics_config: None,
            camera_config: None,
            platforms: Vec::new(),
            time_step: 1.0 / 50.0,
        }
    }
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_player(mut self, config: PlayerMovementConfig, position: Vec2) -> Self {
        self.player = Some((config, position));
        self
    }

    pub fn with_physics(mut self, config: PhysicsConfig) -> Self {
        self.physics_config = Some(config);
        self
    }

    pub fn with_camera(mut self, config: CameraFollowConfig) -> Self {
        self.camera_config = Some(config);
        self
    }

    pub fn with_platform(mut self, platform: PlatformSpec) -> Self {
        self.platforms.push(platform);
        self
    }

    pub fn with_time_step(mut self, time_step: f64) -> Self {
        self.time_step = time_step;
        self
    }

    /// Build without running any frame, for tests that need to add entities
    /// before startup.
    pub fn build_paused(self) -> TestApp {
        let mut app = App::new();

        app.add_plugins(MinimalPlugins)
            .insert_resource(TimeUpdateStrategy::ManualDuration(
                Duration::from_secs_f64(self.time_step),
            ))
            .add_plugins(StartupSequencePlugin)
            .add_plugins(KinematicPhysicsPlugin::with_config(
                self.physics_config.unwrap_or_default(),
            ))
            .add_plugins(CameraPlugin);

        let player_plugin = match self.player {
            Some((config, position)) => PlayerPlugin::new(config).with_spawn(position),
            None => PlayerPlugin::new(PlayerMovementConfig::default()),
        };
        app.add_plugins(player_plugin);

        for platform in self.platforms {
            app.world_mut().spawn((
                StaticCollider::ground(platform.half_extents),
                Transform::from_translation(platform.center.extend(0.0)),
            ));
        }

        if let Some(config) = self.camera_config {
            app.add_systems(
                Startup,
                (move |mut commands: Commands| {
                    let offset = config.offset;
                    commands.spawn((
                        CameraFollow::new(config.clone()),
                        Transform::from_translation(offset),
                    ));
                })
                .in_set(StartupStage::SpawnCamera),
            );
        }

        TestApp { app }
    }

    pub fn build(self) -> TestApp {
        let mut test_app = self.build_paused();
        // Run an initial update to initialize everything
        test_app.app.update();
        test_app
    }
}

/// Main test application wrapper
pub struct TestApp {
    pub app: App,
}

impl TestApp {
    pub fn run_steps(&mut self, steps: usize) {
        for _ in 0..steps {
            self.app.update();
        }
    }

    pub fn run_frame(&mut self) {
        self.app.update();
    }

    /// Hold `key` down for one frame as a fresh press, leaving it held.
    pub fn press(&mut self, key: KeyCode) {
        self.keyboard().press(key);
        self.app.update();
        self.keyboard().clear();
    }

    /// Press and release `key` within a single frame.
    pub fn tap(&mut self, key: KeyCode) {
        self.keyboard().press(key);
        self.app.update();
        let mut keyboard = self.keyboard();
        keyboard.release(key);
        keyboard.clear();
    }

    pub fn release(&mut self, key: KeyCode) {
        self.keyboard().release(key);
        self.app.update();
        self.keyboard().clear();
    }

    fn keyboard(&mut self) -> Mut<ButtonInput<KeyCode>> {
        self.app
            .world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
    }

    pub fn query_single<T: Component>(&mut self) -> Option<&T> {
        let world = self.app.world_mut();
        let mut query = world.query::<&T>();
        query.get_single(world).ok()
    }

    pub fn query_single_mut<T: Component>(&mut self) -> Option<Mut<T>> {
        let world = self.app.world_mut();
        let mut query = world.query::<&mut T>();
        query.get_single_mut(world).ok()
    }

    pub fn player_entity(&mut self) -> Option<Entity> {
        let world = self.app.world_mut();
        let mut query = world.query_filtered::<Entity, With<PlatformerController>>();
        query.get_single(world).ok()
    }

    pub fn player_translation(&mut self) -> Vec3 {
        let world = self.app.world_mut();
        let mut query = world.query_filtered::<&Transform, With<PlatformerController>>();
        query
            .get_single(world)
            .expect("Player not found")
            .translation
    }

    pub fn set_player_translation(&mut self, translation: Vec3) {
        let world = self.app.world_mut();
        let mut query = world.query_filtered::<&mut Transform, With<PlatformerController>>();
        query
            .get_single_mut(world)
            .expect("Player not found")
            .translation = translation;
    }

    pub fn camera_translation(&mut self) -> Vec3 {
        let world = self.app.world_mut();
        let mut query = world.query_filtered::<&Transform, With<CameraFollow>>();
        query
            .get_single(world)
            .expect("Camera not found")
            .translation
    }
}
