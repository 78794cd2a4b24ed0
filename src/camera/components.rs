//! Camera domain: rig components and tuning.

use bevy::prelude::*;

use crate::content::CameraDef;

#[derive(Resource, Debug, Clone)]
pub struct CameraTuning {
    pub target_arm_length: f32,
    pub socket_height: f32,
    pub sweep_radius: f32,
    /// Radians (min, max)
    pub pitch_limits: (f32, f32),
    pub look_sensitivity: f32,
}

impl Default for CameraTuning {
    fn default() -> Self {
        Self::from_def(&CameraDef::default())
    }
}

impl CameraTuning {
    pub fn from_def(def: &CameraDef) -> Self {
        Self {
            target_arm_length: def.target_arm_length,
            socket_height: def.socket_height,
            sweep_radius: def.sweep_radius,
            pitch_limits: (def.pitch_limits.0.to_radians(), def.pitch_limits.1.to_radians()),
            look_sensitivity: def.look_sensitivity,
        }
    }
}

/// Spring arm that positions the follow camera behind its character.
/// Rotates with the controller, pulls in when something blocks it.
#[derive(Component, Debug, Clone)]
pub struct CameraBoom {
    pub target_arm_length: f32,
    /// Arm length after collision this frame
    pub current_arm_length: f32,
}

impl CameraBoom {
    pub fn new(target_arm_length: f32) -> Self {
        Self {
            target_arm_length,
            current_arm_length: target_arm_length,
        }
    }
}

/// Camera attached to the end of a character's boom.
#[derive(Component, Debug)]
pub struct FollowCamera {
    pub target: Entity,
}
