//! Input domain: tests for binding resolution and phase detection.

use bevy::prelude::*;

use super::{InputAction, InputBindings, PhysicalInput, TriggerPhase, parse_key_code};
use crate::content::{BindingDef, CharacterDef, InputSource};

fn devices() -> (ButtonInput<KeyCode>, ButtonInput<MouseButton>) {
    (ButtonInput::default(), ButtonInput::default())
}

#[test]
fn test_default_bindings_all_resolve() {
    let defs = CharacterDef::default().bindings;
    let bindings = InputBindings::from_defs(&defs);
    assert_eq!(bindings.bindings.len(), defs.len());
}

#[test]
fn test_unknown_input_is_dropped() {
    let defs = vec![
        BindingDef {
            action: InputAction::Attack,
            source: InputSource::Key("NotAKey".to_string()),
            phases: vec![TriggerPhase::Started],
        },
        BindingDef {
            action: InputAction::Jump,
            source: InputSource::Key("Space".to_string()),
            phases: vec![TriggerPhase::Started],
        },
    ];

    let bindings = InputBindings::from_defs(&defs);
    assert_eq!(bindings.bindings.len(), 1);
    assert_eq!(bindings.bindings[0].action, InputAction::Jump);
    assert_eq!(
        bindings.bindings[0].input,
        PhysicalInput::Key(KeyCode::Space)
    );
}

#[test]
fn test_attack_fires_on_press_only() {
    let bindings = InputBindings::default();
    let (keys, mut mouse) = devices();

    mouse.press(MouseButton::Left);
    let fired = bindings.fired(&keys, &mouse);
    assert!(fired.contains(&(InputAction::Attack, TriggerPhase::Started)));

    // Still held next frame: no new Started edge
    mouse.clear();
    let fired = bindings.fired(&keys, &mouse);
    assert!(!fired.contains(&(InputAction::Attack, TriggerPhase::Started)));
}

#[test]
fn test_sprint_press_and_release_phases() {
    let bindings = InputBindings::default();
    let (mut keys, mouse) = devices();

    keys.press(KeyCode::ShiftLeft);
    let fired = bindings.fired(&keys, &mouse);
    assert_eq!(fired, vec![(InputAction::Sprint, TriggerPhase::Started)]);

    keys.clear();
    keys.release(KeyCode::ShiftLeft);
    let fired = bindings.fired(&keys, &mouse);
    assert_eq!(fired, vec![(InputAction::Sprint, TriggerPhase::Completed)]);
}

#[test]
fn test_action_with_two_inputs_fires_once() {
    let bindings = InputBindings::default();
    let (mut keys, mut mouse) = devices();

    keys.press(KeyCode::Tab);
    mouse.press(MouseButton::Middle);
    let fired = bindings.fired(&keys, &mouse);

    let target_toggles = fired
        .iter()
        .filter(|(action, _)| *action == InputAction::SetTarget)
        .count();
    assert_eq!(target_toggles, 1);
}

#[test]
fn test_defend_fires_while_held() {
    let bindings = InputBindings::default();
    let (keys, mut mouse) = devices();

    mouse.press(MouseButton::Right);
    mouse.clear();
    let fired = bindings.fired(&keys, &mouse);
    assert_eq!(fired, vec![(InputAction::Defend, TriggerPhase::Triggered)]);
}

#[test]
fn test_parse_key_code() {
    assert_eq!(parse_key_code("KeyE"), Some(KeyCode::KeyE));
    assert_eq!(parse_key_code("ShiftLeft"), Some(KeyCode::ShiftLeft));
    assert_eq!(parse_key_code("e"), None);
}

#[test]
fn test_default_move_axis_from_wasd() {
    let bindings = InputBindings::default();
    let (mut keys, _) = devices();

    keys.press(KeyCode::KeyW);
    keys.press(KeyCode::KeyD);
    assert_eq!(
        bindings.axis(InputAction::Move, &keys, Vec2::ZERO),
        Vec2::new(1.0, 1.0)
    );

    // Opposing keys cancel
    keys.press(KeyCode::KeyS);
    assert_eq!(
        bindings.axis(InputAction::Move, &keys, Vec2::ZERO),
        Vec2::new(1.0, 0.0)
    );
}

#[test]
fn test_remapped_move_drives_axis() {
    let defs = vec![
        BindingDef {
            action: InputAction::Move,
            source: InputSource::KeyAxis("KeyI".to_string(), (0.0, 1.0)),
            phases: vec![TriggerPhase::Triggered],
        },
        BindingDef {
            action: InputAction::Move,
            source: InputSource::KeyAxis("KeyJ".to_string(), (-1.0, 0.0)),
            phases: vec![TriggerPhase::Triggered],
        },
    ];
    let bindings = InputBindings::from_defs(&defs);
    let (mut keys, mouse) = devices();

    // WASD is no longer bound
    keys.press(KeyCode::KeyW);
    assert_eq!(bindings.axis(InputAction::Move, &keys, Vec2::ZERO), Vec2::ZERO);

    keys.press(KeyCode::KeyI);
    keys.press(KeyCode::KeyJ);
    assert_eq!(
        bindings.axis(InputAction::Move, &keys, Vec2::ZERO),
        Vec2::new(-1.0, 1.0)
    );
    // Axis bindings never fire phased actions
    assert!(bindings.fired(&keys, &mouse).is_empty());
}

#[test]
fn test_look_axis_scales_mouse_motion() {
    let bindings = InputBindings::default();
    let (keys, _) = devices();

    let look = bindings.axis(InputAction::Look, &keys, Vec2::new(4.0, -2.0));
    assert_eq!(look, Vec2::new(-4.0, 2.0));
    assert_eq!(bindings.axis(InputAction::Move, &keys, Vec2::new(4.0, -2.0)), Vec2::ZERO);
}
