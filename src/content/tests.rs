//! Content domain: loading and validation tests for the character file.

use std::path::Path;

use super::{
    AttackStageDef, BindingDef, CharacterDef, InputSource, load_character_def,
    parse_character_def, validate_character,
};
use crate::input::{InputAction, TriggerPhase};

const SHIPPED: &str = include_str!("../../assets/data/character.ron");

fn has_error(def: &CharacterDef, field: &str) -> bool {
    validate_character(def).iter().any(|e| e.field == field)
}

#[test]
fn test_shipped_file_parses_and_validates() {
    let def = parse_character_def("character.ron", SHIPPED).expect("shipped file parses");
    let errors = validate_character(&def);
    assert!(errors.is_empty(), "validation errors: {:?}", errors);
}

#[test]
fn test_shipped_file_matches_builtin_defaults() {
    let shipped = parse_character_def("character.ron", SHIPPED).unwrap();
    let builtin = CharacterDef::default();

    assert_eq!(shipped.id, builtin.id);
    assert_eq!(shipped.combo.stages, builtin.combo.stages);
    assert_eq!(shipped.combo.unlock_timeout, builtin.combo.unlock_timeout);
    assert_eq!(shipped.montages, builtin.montages);
    assert_eq!(shipped.bindings, builtin.bindings);
    assert_eq!(shipped.movement.max_walk_speed, builtin.movement.max_walk_speed);
    assert_eq!(shipped.movement.sprint_speed, builtin.movement.sprint_speed);
    assert_eq!(shipped.camera.target_arm_length, builtin.camera.target_arm_length);
}

#[test]
fn test_builtin_defaults_validate() {
    assert!(validate_character(&CharacterDef::default()).is_empty());
}

#[test]
fn test_malformed_ron_reports_file() {
    let err = parse_character_def("broken.ron", "(schema_version: 1,").unwrap_err();
    assert_eq!(err.file, "broken.ron");
    assert!(err.to_string().contains("broken.ron"));
}

#[test]
fn test_missing_file_is_an_error() {
    let result = load_character_def(Path::new("does/not/exist"));
    assert!(result.is_err());
}

#[test]
fn test_wrong_stage_count_is_rejected() {
    let mut def = CharacterDef::default();
    def.combo.stages.push(AttackStageDef::new("attack_1", 100.0));
    assert!(has_error(&def, "combo.stages"));
}

#[test]
fn test_stage_without_montage_is_rejected() {
    let mut def = CharacterDef::default();
    def.combo.stages[2] = AttackStageDef::new("spin", 750.0);
    assert!(has_error(&def, "combo.stages[2]"));
}

#[test]
fn test_notify_after_clip_end_is_rejected() {
    let mut def = CharacterDef::default();
    def.montages[0].notify_at = def.montages[0].duration + 0.1;
    assert!(has_error(&def, "montages.attack_1"));
}

#[test]
fn test_sprint_slower_than_walk_is_rejected() {
    let mut def = CharacterDef::default();
    def.movement.sprint_speed = 100.0;
    assert!(has_error(&def, "movement.sprint_speed"));
}

#[test]
fn test_negative_timeout_is_rejected() {
    let mut def = CharacterDef::default();
    def.combo.unlock_timeout = -1.0;
    assert!(has_error(&def, "combo.unlock_timeout"));

    def.combo.unlock_timeout = 0.0;
    assert!(!has_error(&def, "combo.unlock_timeout"));
}

#[test]
fn test_unknown_binding_input_is_rejected() {
    let mut def = CharacterDef::default();
    def.bindings.push(BindingDef {
        action: InputAction::Interact,
        source: InputSource::Mouse("Thumb".to_string()),
        phases: vec![TriggerPhase::Started],
    });
    assert!(has_error(&def, "bindings.Interact"));
}

#[test]
fn test_inverted_pitch_limits_are_rejected() {
    let mut def = CharacterDef::default();
    def.camera.pitch_limits = (30.0, -30.0);
    assert!(has_error(&def, "camera.pitch_limits"));
}

#[test]
fn test_button_source_cannot_drive_move() {
    let mut def = CharacterDef::default();
    def.bindings.push(BindingDef {
        action: InputAction::Move,
        source: InputSource::Key("KeyI".to_string()),
        phases: vec![TriggerPhase::Triggered],
    });
    assert!(has_error(&def, "bindings.Move"));
}

#[test]
fn test_axis_source_cannot_drive_button_action() {
    let mut def = CharacterDef::default();
    def.bindings.push(BindingDef {
        action: InputAction::Jump,
        source: InputSource::KeyAxis("KeyJ".to_string(), (0.0, 1.0)),
        phases: vec![TriggerPhase::Triggered],
    });
    assert!(has_error(&def, "bindings.Jump"));
}

#[test]
fn test_remapped_move_axis_validates() {
    let mut def = CharacterDef::default();
    def.bindings.retain(|b| b.action != InputAction::Move);
    def.bindings.push(BindingDef {
        action: InputAction::Move,
        source: InputSource::KeyAxis("KeyO".to_string(), (0.0, 1.0)),
        phases: vec![TriggerPhase::Triggered],
    });
    assert!(validate_character(&def).is_empty());
}
