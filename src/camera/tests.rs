//! Camera domain: boom geometry tests.

use bevy::prelude::*;

use super::{CameraBoom, CameraTuning, boom_endpoints};
use crate::content::CameraDef;
use crate::core::PlayerController;

#[test]
fn test_boom_sits_behind_character_at_rest() {
    let tuning = CameraTuning::default();
    let (pivot, camera) =
        boom_endpoints(Vec3::ZERO, &PlayerController::default(), &tuning, 400.0);

    assert!(pivot.abs_diff_eq(Vec3::new(0.0, 60.0, 0.0), 1e-4));
    // Character faces -Z, so the camera trails on +Z
    assert!(camera.abs_diff_eq(Vec3::new(0.0, 60.0, 400.0), 1e-3));
}

#[test]
fn test_boom_follows_control_rotation() {
    let tuning = CameraTuning::default();
    let controller = PlayerController {
        yaw: std::f32::consts::FRAC_PI_2,
        pitch: 0.0,
    };
    let (_, camera) = boom_endpoints(Vec3::ZERO, &controller, &tuning, 400.0);
    // Facing -X, camera trails on +X
    assert!(camera.abs_diff_eq(Vec3::new(400.0, 60.0, 0.0), 1e-3));

    let looking_up = PlayerController {
        yaw: 0.0,
        pitch: 0.5,
    };
    let (pivot, camera) = boom_endpoints(Vec3::ZERO, &looking_up, &tuning, 400.0);
    assert!(camera.y < pivot.y);
    assert!((camera.distance(pivot) - 400.0).abs() < 1e-3);
}

#[test]
fn test_shortened_arm_keeps_direction() {
    let tuning = CameraTuning::default();
    let controller = PlayerController {
        yaw: 1.0,
        pitch: -0.3,
    };
    let (pivot, full) = boom_endpoints(Vec3::ZERO, &controller, &tuning, 400.0);
    let (_, short) = boom_endpoints(Vec3::ZERO, &controller, &tuning, 100.0);

    let full_dir = (full - pivot).normalize();
    let short_dir = (short - pivot).normalize();
    assert!(full_dir.abs_diff_eq(short_dir, 1e-4));
    assert!((short.distance(pivot) - 100.0).abs() < 1e-3);
}

#[test]
fn test_tuning_converts_pitch_limits_to_radians() {
    let tuning = CameraTuning::from_def(&CameraDef {
        pitch_limits: (-45.0, 30.0),
        ..default()
    });
    assert!((tuning.pitch_limits.0 + 45f32.to_radians()).abs() < 1e-6);
    assert!((tuning.pitch_limits.1 - 30f32.to_radians()).abs() < 1e-6);
}

#[test]
fn test_new_boom_starts_fully_extended() {
    let boom = CameraBoom::new(400.0);
    assert_eq!(boom.current_arm_length, boom.target_arm_length);
}
