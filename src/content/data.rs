//! Content definitions deserialized from `assets/data/character.ron`.
//!
//! Every struct carries a `Default` that mirrors the shipped data file so the
//! game stays playable when the file is missing or fails validation.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::input::{InputAction, TriggerPhase};

pub const CURRENT_SCHEMA_VERSION: u32 = 1;

// ============================================================================
// Character (character.ron) - Single struct, the root of the file
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize, Reflect, Resource)]
pub struct CharacterDef {
    pub schema_version: u32,
    pub id: String,
    pub capsule: CapsuleDef,
    pub movement: MovementDef,
    pub camera: CameraDef,
    pub combo: ComboDef,
    pub montages: Vec<MontageDef>,
    pub bindings: Vec<BindingDef>,
}

impl Default for CharacterDef {
    fn default() -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            id: "character_katana".to_string(),
            capsule: CapsuleDef::default(),
            movement: MovementDef::default(),
            camera: CameraDef::default(),
            combo: ComboDef::default(),
            montages: default_montages(),
            bindings: default_bindings(),
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, Reflect)]
pub struct CapsuleDef {
    pub radius: f32,
    pub half_height: f32,
}

impl Default for CapsuleDef {
    fn default() -> Self {
        Self {
            radius: 42.0,
            half_height: 96.0,
        }
    }
}

// ============================================================================
// Movement
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize, Reflect)]
pub struct MovementDef {
    pub max_walk_speed: f32,
    pub sprint_speed: f32,
    pub min_analog_walk_speed: f32,
    pub max_acceleration: f32,
    pub braking_deceleration_walking: f32,
    pub air_control: f32,
    pub jump_z_velocity: f32,
    /// Yaw rotation rate in degrees per second.
    pub rotation_rate: f32,
    pub gravity: f32,
}

impl Default for MovementDef {
    fn default() -> Self {
        Self {
            max_walk_speed: 230.0,
            sprint_speed: 500.0,
            min_analog_walk_speed: 20.0,
            max_acceleration: 2048.0,
            braking_deceleration_walking: 2000.0,
            air_control: 0.35,
            jump_z_velocity: 700.0,
            rotation_rate: 500.0,
            gravity: 980.0,
        }
    }
}

// ============================================================================
// Camera
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize, Reflect)]
pub struct CameraDef {
    pub target_arm_length: f32,
    pub socket_height: f32,
    pub sweep_radius: f32,
    /// Pitch limits in degrees (min, max).
    pub pitch_limits: (f32, f32),
    /// Radians of control rotation per unit of look input.
    pub look_sensitivity: f32,
}

impl Default for CameraDef {
    fn default() -> Self {
        Self {
            target_arm_length: 400.0,
            socket_height: 60.0,
            sweep_radius: 12.0,
            pitch_limits: (-80.0, 80.0),
            look_sensitivity: 0.003,
        }
    }
}

// ============================================================================
// Combo
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize, Reflect)]
pub struct ComboDef {
    pub stages: Vec<AttackStageDef>,
    /// Seconds a lock may last without an unlock notify. Zero disables it.
    pub unlock_timeout: f32,
}

impl Default for ComboDef {
    fn default() -> Self {
        Self {
            stages: vec![
                AttackStageDef::new("attack_1", 500.0),
                AttackStageDef::new("attack_2", 500.0),
                AttackStageDef::new("attack_3", 750.0),
                AttackStageDef::new("attack_4", 1000.0),
            ],
            unlock_timeout: 2.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Reflect)]
pub struct AttackStageDef {
    pub animation_cue_id: String,
    pub launch_impulse_magnitude: f32,
}

impl AttackStageDef {
    pub fn new(cue: impl Into<String>, impulse: f32) -> Self {
        Self {
            animation_cue_id: cue.into(),
            launch_impulse_magnitude: impulse,
        }
    }
}

// ============================================================================
// Montages
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Reflect)]
pub struct MontageDef {
    pub cue_id: String,
    /// Clip length in seconds.
    pub duration: f32,
    /// Seconds into the clip at which the end-of-montage notify fires.
    pub notify_at: f32,
}

fn default_montages() -> Vec<MontageDef> {
    vec![
        MontageDef {
            cue_id: "attack_1".to_string(),
            duration: 0.9,
            notify_at: 0.55,
        },
        MontageDef {
            cue_id: "attack_2".to_string(),
            duration: 0.9,
            notify_at: 0.55,
        },
        MontageDef {
            cue_id: "attack_3".to_string(),
            duration: 1.1,
            notify_at: 0.7,
        },
        MontageDef {
            cue_id: "attack_4".to_string(),
            duration: 1.4,
            notify_at: 0.95,
        },
    ]
}

// ============================================================================
// Input bindings
// ============================================================================

/// Physical input, named the way Bevy names its `KeyCode`/`MouseButton` variants.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Reflect)]
pub enum InputSource {
    Key(String),
    Mouse(String),
    /// Held key adding `(x, y)` to the action's axis (x = right, y = forward)
    KeyAxis(String, (f32, f32)),
    /// Accumulated mouse motion scaled per axis
    MouseMotion((f32, f32)),
}

impl InputSource {
    /// Axis sources feed `Move`/`Look`; button sources fire phased actions.
    pub fn is_axis(&self) -> bool {
        matches!(self, Self::KeyAxis(..) | Self::MouseMotion(..))
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Reflect)]
pub struct BindingDef {
    pub action: InputAction,
    pub source: InputSource,
    /// Phases that produce an action message for this binding.
    pub phases: Vec<TriggerPhase>,
}

fn key(action: InputAction, name: &str, phases: &[TriggerPhase]) -> BindingDef {
    BindingDef {
        action,
        source: InputSource::Key(name.to_string()),
        phases: phases.to_vec(),
    }
}

fn mouse(action: InputAction, name: &str, phases: &[TriggerPhase]) -> BindingDef {
    BindingDef {
        action,
        source: InputSource::Mouse(name.to_string()),
        phases: phases.to_vec(),
    }
}

fn key_axis(action: InputAction, name: &str, axis: (f32, f32)) -> BindingDef {
    BindingDef {
        action,
        source: InputSource::KeyAxis(name.to_string(), axis),
        phases: vec![TriggerPhase::Triggered],
    }
}

fn default_bindings() -> Vec<BindingDef> {
    use InputAction::*;
    use TriggerPhase::*;

    vec![
        key_axis(Move, "KeyW", (0.0, 1.0)),
        key_axis(Move, "KeyS", (0.0, -1.0)),
        key_axis(Move, "KeyA", (-1.0, 0.0)),
        key_axis(Move, "KeyD", (1.0, 0.0)),
        key_axis(Move, "ArrowUp", (0.0, 1.0)),
        key_axis(Move, "ArrowDown", (0.0, -1.0)),
        key_axis(Move, "ArrowLeft", (-1.0, 0.0)),
        key_axis(Move, "ArrowRight", (1.0, 0.0)),
        // Mouse right and down are positive; yaw and pitch turn the other way
        BindingDef {
            action: Look,
            source: InputSource::MouseMotion((-1.0, -1.0)),
            phases: vec![Triggered],
        },
        key(Jump, "Space", &[Started, Completed]),
        key(EquipKatana, "KeyE", &[Started]),
        key(Interact, "KeyF", &[Started]),
        key(SetTarget, "Tab", &[Started]),
        mouse(SetTarget, "Middle", &[Started]),
        key(AccessInventory, "KeyI", &[Started]),
        key(Sprint, "ShiftLeft", &[Started, Completed]),
        mouse(Attack, "Left", &[Started]),
        mouse(Defend, "Right", &[Triggered]),
    ]
}
