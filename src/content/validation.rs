//! Semantic checks on a loaded character definition.

use super::data::*;
use crate::input::{InputAction, TriggerPhase, parse_key_code, parse_mouse_button};

/// Number of stages the combo controller cycles through.
pub const COMBO_STAGE_COUNT: usize = 4;

/// A validation error with context about what failed.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}': {}", self.field, self.message)
    }
}

/// Helper macro for recording a failed check
macro_rules! check {
    ($errors:expr, $cond:expr, $field:expr, $($msg:tt)+) => {
        if !$cond {
            $errors.push(ValidationError {
                field: $field.to_string(),
                message: format!($($msg)+),
            });
        }
    };
}

/// Validate a character definition.
/// Returns a list of validation errors, empty if the definition is usable.
pub fn validate_character(def: &CharacterDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    check!(
        errors,
        def.schema_version == CURRENT_SCHEMA_VERSION,
        "schema_version",
        "expected {}, found {}",
        CURRENT_SCHEMA_VERSION,
        def.schema_version
    );

    check!(
        errors,
        def.capsule.radius > 0.0 && def.capsule.half_height >= def.capsule.radius,
        "capsule",
        "radius must be positive and not exceed half_height"
    );

    // Movement
    let movement = &def.movement;
    check!(
        errors,
        movement.max_walk_speed > 0.0,
        "movement.max_walk_speed",
        "must be positive"
    );
    check!(
        errors,
        movement.sprint_speed >= movement.max_walk_speed,
        "movement.sprint_speed",
        "{} is below max_walk_speed {}",
        movement.sprint_speed,
        movement.max_walk_speed
    );
    check!(
        errors,
        (0.0..=1.0).contains(&movement.air_control),
        "movement.air_control",
        "must be within 0..=1"
    );
    check!(
        errors,
        movement.max_acceleration > 0.0 && movement.braking_deceleration_walking >= 0.0,
        "movement.max_acceleration",
        "acceleration must be positive and braking non-negative"
    );

    // Camera
    let camera = &def.camera;
    check!(
        errors,
        camera.target_arm_length > 0.0,
        "camera.target_arm_length",
        "must be positive"
    );
    check!(
        errors,
        camera.pitch_limits.0 < camera.pitch_limits.1,
        "camera.pitch_limits",
        "min {} is not below max {}",
        camera.pitch_limits.0,
        camera.pitch_limits.1
    );

    // Combo
    check!(
        errors,
        def.combo.stages.len() == COMBO_STAGE_COUNT,
        "combo.stages",
        "expected {} stages, found {}",
        COMBO_STAGE_COUNT,
        def.combo.stages.len()
    );
    check!(
        errors,
        def.combo.unlock_timeout >= 0.0,
        "combo.unlock_timeout",
        "must not be negative"
    );
    for (index, stage) in def.combo.stages.iter().enumerate() {
        check!(
            errors,
            stage.launch_impulse_magnitude >= 0.0,
            format!("combo.stages[{}]", index),
            "negative launch impulse {}",
            stage.launch_impulse_magnitude
        );
        check!(
            errors,
            def.montages
                .iter()
                .any(|m| m.cue_id == stage.animation_cue_id),
            format!("combo.stages[{}]", index),
            "no montage for cue '{}'",
            stage.animation_cue_id
        );
    }

    // Montages
    for montage in &def.montages {
        check!(
            errors,
            montage.notify_at > 0.0 && montage.notify_at <= montage.duration,
            format!("montages.{}", montage.cue_id),
            "notify_at {} outside (0, {}]",
            montage.notify_at,
            montage.duration
        );
    }

    // Bindings
    for binding in &def.bindings {
        let known = match &binding.source {
            InputSource::Key(name) | InputSource::KeyAxis(name, _) => parse_key_code(name).is_some(),
            InputSource::Mouse(name) => parse_mouse_button(name).is_some(),
            InputSource::MouseMotion(_) => true,
        };
        check!(
            errors,
            known,
            format!("bindings.{:?}", binding.action),
            "unknown input {:?}",
            binding.source
        );
        check!(
            errors,
            !binding.phases.is_empty(),
            format!("bindings.{:?}", binding.action),
            "no trigger phases"
        );

        // Move and Look carry a vector; every other action is a button
        let wants_axis = matches!(binding.action, InputAction::Move | InputAction::Look);
        check!(
            errors,
            wants_axis == binding.source.is_axis(),
            format!("bindings.{:?}", binding.action),
            "{:?} cannot drive {:?}",
            binding.source,
            binding.action
        );
        check!(
            errors,
            !binding.source.is_axis() || binding.phases == [TriggerPhase::Triggered],
            format!("bindings.{:?}", binding.action),
            "axis bindings only fire while Triggered"
        );
    }

    errors
}
