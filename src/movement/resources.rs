//! Movement domain: tuning resource.

use bevy::prelude::*;

use crate::content::{CapsuleDef, MovementDef};

#[derive(Resource, Debug, Clone)]
pub struct MovementTuning {
    pub max_walk_speed: f32,
    pub sprint_speed: f32,
    pub min_analog_walk_speed: f32,
    pub max_acceleration: f32,
    pub braking_deceleration_walking: f32,
    pub air_control: f32,
    pub jump_z_velocity: f32,
    /// Radians per second
    pub rotation_rate: f32,
    pub gravity: f32,
    pub capsule_radius: f32,
    pub capsule_half_height: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self::from_defs(&MovementDef::default(), &CapsuleDef::default())
    }
}

impl MovementTuning {
    pub fn from_defs(movement: &MovementDef, capsule: &CapsuleDef) -> Self {
        Self {
            max_walk_speed: movement.max_walk_speed,
            sprint_speed: movement.sprint_speed,
            min_analog_walk_speed: movement.min_analog_walk_speed,
            max_acceleration: movement.max_acceleration,
            braking_deceleration_walking: movement.braking_deceleration_walking,
            air_control: movement.air_control,
            jump_z_velocity: movement.jump_z_velocity,
            rotation_rate: movement.rotation_rate.to_radians(),
            gravity: movement.gravity,
            capsule_radius: capsule.radius,
            capsule_half_height: capsule.half_height,
        }
    }

    /// Length of the capsule's cylindrical section.
    pub fn capsule_segment_length(&self) -> f32 {
        (self.capsule_half_height - self.capsule_radius).max(0.0) * 2.0
    }
}
