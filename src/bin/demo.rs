use bevy::color::palettes::css::{CORNFLOWER_BLUE, DARK_OLIVEGREEN};
use bevy::prelude::*;
use std::env;

use platformer::{
    components::{PlatformerController, StaticCollider},
    plugins::{follow_camera_bundle, DebugGizmosPlugin, PlatformerPlugin, StartupStage},
    resources::PlatformerConfig,
};

/// World units per screen pixel.
const PROJECTION_SCALE: f32 = 1.0 / 48.0;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = match config_path(env::args().skip(1)) {
        Some(path) => {
            println!("Loading config from {}", path);
            PlatformerConfig::load(&path)?
        }
        None => PlatformerConfig::default(),
    };

    let camera_config = config.camera.clone();
    let show_gizmos = env::args().skip(1).any(|arg| arg == "--debug");

    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Platformer".into(),
            ..default()
        }),
        ..default()
    }))
    .add_plugins(PlatformerPlugin::new(config))
    .add_systems(
        Startup,
        (move |mut commands: Commands| {
            commands.spawn((
                follow_camera_bundle(camera_config.clone()),
                OrthographicProjection {
                    scale: PROJECTION_SCALE,
                    ..OrthographicProjection::default_2d()
                },
            ));
        })
        .in_set(StartupStage::SpawnCamera),
    )
    .add_systems(Update, (decorate_players, decorate_platforms));

    if show_gizmos {
        app.add_plugins(DebugGizmosPlugin);
    }

    app.run();
    Ok(())
}

fn decorate_players(
    mut commands: Commands,
    players: Query<Entity, Added<PlatformerController>>,
) {
    for entity in players.iter() {
        commands.entity(entity).insert(Sprite::from_color(
            CORNFLOWER_BLUE,
            Vec2::ONE,
        ));
    }
}

fn decorate_platforms(
    mut commands: Commands,
    platforms: Query<(Entity, &StaticCollider), Added<StaticCollider>>,
) {
    for (entity, collider) in platforms.iter() {
        commands.entity(entity).insert(Sprite::from_color(
            DARK_OLIVEGREEN,
            collider.half_extents * 2.0,
        ));
    }
}

/// First positional argument; flags such as `--debug` are skipped.
fn config_path(args: impl IntoIterator<Item = String>) -> Option<String> {
    args.into_iter().find(|arg| !arg.starts_with("--"))
}
