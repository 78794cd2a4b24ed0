//! Core domain: tests for the player controller and look handling.

use bevy::prelude::*;
use std::f32::consts::{FRAC_PI_2, TAU};

use super::PlayerController;
use super::controller::handle_look_input;
use crate::camera::CameraTuning;
use crate::combat::ComboState;
use crate::input::{ActionMessage, InputAction, PlayerInput, TriggerPhase};

#[test]
fn test_yaw_wraps_into_full_turn() {
    let mut controller = PlayerController::default();
    controller.add_yaw_input(TAU + 0.5);
    assert!((controller.yaw - 0.5).abs() < 1e-5);

    controller.add_yaw_input(-1.0);
    assert!((controller.yaw - (TAU - 0.5)).abs() < 1e-5);
}

#[test]
fn test_pitch_is_clamped_to_limits() {
    let limits = CameraTuning::default().pitch_limits;
    let mut controller = PlayerController::default();

    controller.add_pitch_input(10.0, limits);
    assert_eq!(controller.pitch, limits.1);
    controller.add_pitch_input(-20.0, limits);
    assert_eq!(controller.pitch, limits.0);
}

#[test]
fn test_yaw_rotation_drops_pitch() {
    let controller = PlayerController {
        yaw: FRAC_PI_2,
        pitch: 0.7,
    };
    let forward = controller.yaw_rotation() * Vec3::NEG_Z;
    assert!(forward.abs_diff_eq(Vec3::NEG_X, 1e-5));

    let looking = controller.control_rotation() * Vec3::NEG_Z;
    assert!(looking.y > 0.0);
}

#[test]
fn test_look_input_applies_even_while_attacking() {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_message::<ActionMessage>()
        .init_resource::<CameraTuning>()
        .insert_resource(PlayerInput {
            move_axis: Vec2::ZERO,
            look_delta: Vec2::new(100.0, 50.0),
        })
        .add_systems(Update, handle_look_input);

    let character = app
        .world_mut()
        .spawn((
            PlayerController::default(),
            ComboState {
                locked: true,
                ..default()
            },
        ))
        .id();

    app.world_mut()
        .write_message(ActionMessage::new(InputAction::Look, TriggerPhase::Triggered));
    app.update();

    let sensitivity = CameraTuning::default().look_sensitivity;
    let controller = app.world().get::<PlayerController>(character).unwrap();
    assert!((controller.yaw - 100.0 * sensitivity).abs() < 1e-5);
    assert!((controller.pitch - 50.0 * sensitivity).abs() < 1e-5);
}

#[test]
fn test_no_look_message_leaves_controller() {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_message::<ActionMessage>()
        .init_resource::<CameraTuning>()
        .insert_resource(PlayerInput {
            move_axis: Vec2::ZERO,
            look_delta: Vec2::new(100.0, 50.0),
        })
        .add_systems(Update, handle_look_input);

    let character = app.world_mut().spawn(PlayerController::default()).id();
    app.update();

    assert_eq!(
        *app.world().get::<PlayerController>(character).unwrap(),
        PlayerController::default()
    );
}
