mod common;

use approx::assert_relative_eq;
use bevy::prelude::*;
use platformer::components::{
    KinematicBody, PlatformerController, Player, PlayerDebugInfo, PlayerMovementConfig, Velocity,
};

use common::{
    assert_controller_valid, create_test_ground, create_test_physics_config,
    create_test_player_config, TestApp, TestAppBuilder,
};

fn grounded_player_app(config: PlayerMovementConfig) -> TestApp {
    let mut app = TestAppBuilder::new()
        .with_physics(create_test_physics_config())
        .with_platform(create_test_ground())
        .with_player(config, Vec2::new(0.0, 3.0))
        .build();
    // Drop onto the floor
    app.run_steps(150);
    app
}

#[test]
fn test_player_lands_on_ground() {
    let config = create_test_player_config();
    let mut app = grounded_player_app(config.clone());

    let translation = app.player_translation();
    assert_relative_eq!(translation.y, 0.5, epsilon = 1e-3);
    assert_relative_eq!(translation.x, 0.0, epsilon = 1e-3);

    let controller = app.query_single::<PlatformerController>().unwrap().clone();
    assert!(controller.is_grounded());
    assert_eq!(controller.jumps_remaining(), config.max_jumps);
    assert_controller_valid(&controller, &config);

    let info = *app.query_single::<PlayerDebugInfo>().unwrap();
    assert!(info.grounded);
    assert_eq!(info.jumps_remaining, config.max_jumps);
}

#[test]
fn test_jump_leaves_ground_and_lands_again() {
    let config = create_test_player_config();
    let mut app = grounded_player_app(config.clone());

    app.tap(KeyCode::Space);
    assert_eq!(app.query_single::<Velocity>().unwrap().y, config.jump_force);

    app.run_steps(10);
    assert!(app.player_translation().y > 1.0);
    assert!(!app.query_single::<PlatformerController>().unwrap().is_grounded());

    app.run_steps(150);
    let controller = app.query_single::<PlatformerController>().unwrap().clone();
    assert!(controller.is_grounded());
    assert_eq!(controller.jumps_remaining(), config.max_jumps);
    assert_relative_eq!(app.player_translation().y, 0.5, epsilon = 1e-3);
}

#[test]
fn test_air_jumps_run_out() {
    let config = PlayerMovementConfig {
        max_jumps: 3,
        ..create_test_player_config()
    };
    let mut app = grounded_player_app(config.clone());

    app.tap(KeyCode::Space);
    // Past the coyote window
    app.run_steps(15);

    // Still touching the floor on the frame after take-off, so the full
    // allowance is back before the first air jump
    for expected_remaining in [2, 1, 0] {
        app.tap(KeyCode::Space);
        assert_eq!(app.query_single::<Velocity>().unwrap().y, config.jump_force);
        let controller = app.query_single::<PlatformerController>().unwrap().clone();
        assert_eq!(controller.jumps_remaining(), expected_remaining);
        assert_controller_valid(&controller, &config);
        app.run_steps(5);
    }

    app.tap(KeyCode::Space);
    assert!(app.query_single::<Velocity>().unwrap().y < config.jump_force);
    assert_eq!(
        app.query_single::<PlatformerController>()
            .unwrap()
            .jumps_remaining(),
        0
    );
}

#[test]
fn test_walking_left_flips_player() {
    let config = create_test_player_config();
    let mut app = grounded_player_app(config.clone());

    app.press(KeyCode::ArrowLeft);
    app.run_steps(20);

    let velocity = *app.query_single::<Velocity>().unwrap();
    assert_relative_eq!(velocity.x, -config.move_speed);
    assert!(app.player_translation().x < -1.0);
    assert!(!app.query_single::<PlatformerController>().unwrap().facing_right());

    let world = app.app.world_mut();
    let mut query = world.query_filtered::<&Transform, With<Player>>();
    assert!(query.single(world).scale.x < 0.0);

    // Damping brings the player to rest once the key is let go
    app.release(KeyCode::ArrowLeft);
    app.run_steps(200);
    assert!(app.query_single::<Velocity>().unwrap().x.abs() < 1e-3);
}

#[test]
fn test_dash_moves_horizontally_then_ends() {
    let config = create_test_player_config();
    let mut app = grounded_player_app(config.clone());
    let start_x = app.player_translation().x;

    app.tap(KeyCode::ShiftLeft);
    let velocity = *app.query_single::<Velocity>().unwrap();
    assert_eq!(velocity.0, Vec2::new(config.dash_force, 0.0));
    assert!(app.query_single::<PlatformerController>().unwrap().is_dashing());
    assert!(app.query_single::<KinematicBody>().unwrap().gravity_suspended);

    app.run_steps(15);
    assert!(!app.query_single::<PlatformerController>().unwrap().is_dashing());
    assert!(!app.query_single::<KinematicBody>().unwrap().gravity_suspended);
    assert!(app.player_translation().x - start_x > 3.0);
}

#[test]
fn test_valid_setup_keeps_running() {
    let mut app = TestAppBuilder::new()
        .with_platform(create_test_ground())
        .with_player(create_test_player_config(), Vec2::new(0.0, 0.5))
        .build();
    app.run_steps(2);

    assert!(app.app.should_exit().is_none());
}

#[test]
fn test_player_without_ground_check_exits() {
    let mut app = TestAppBuilder::new()
        .with_platform(create_test_ground())
        .build_paused();
    app.app.world_mut().spawn((
        Player,
        PlatformerController::default(),
        PlayerMovementConfig::default(),
        KinematicBody::default(),
        Transform::from_xyz(0.0, 0.5, 0.0),
    ));

    app.run_frame();

    let exit = app.app.should_exit().expect("App should have been asked to exit");
    assert!(exit.is_error());
}

#[test]
fn test_unmarked_controller_without_ground_check_exits() {
    let mut app = TestAppBuilder::new()
        .with_platform(create_test_ground())
        .build_paused();
    app.app.world_mut().spawn((
        PlatformerController::default(),
        PlayerMovementConfig::default(),
        KinematicBody::default(),
        Transform::from_xyz(0.0, 0.5, 0.0),
    ));

    app.run_frame();

    let exit = app.app.should_exit().expect("App should have been asked to exit");
    assert!(exit.is_error());
}
