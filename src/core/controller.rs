//! Core domain: the player controller and its control rotation.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::camera::CameraTuning;
use crate::input::{ActionMessage, InputAction, PlayerInput, TriggerPhase};

/// Control rotation of the local player. Lives on the possessed pawn;
/// a pawn without one ignores move and look input.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct PlayerController {
    /// Radians around +Y. Zero faces -Z.
    pub yaw: f32,
    /// Radians, positive looks up.
    pub pitch: f32,
}

impl PlayerController {
    pub fn add_yaw_input(&mut self, value: f32) {
        self.yaw = (self.yaw + value).rem_euclid(std::f32::consts::TAU);
    }

    pub fn add_pitch_input(&mut self, value: f32, limits: (f32, f32)) {
        self.pitch = (self.pitch + value).clamp(limits.0, limits.1);
    }

    /// Rotation with only the yaw component, used to resolve locomotion.
    pub fn yaw_rotation(&self) -> Quat {
        Quat::from_rotation_y(self.yaw)
    }

    pub fn control_rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0)
    }
}

/// Look input goes straight to the control rotation; it is never gated by combat state.
pub(crate) fn handle_look_input(
    mut actions: MessageReader<ActionMessage>,
    input: Res<PlayerInput>,
    tuning: Res<CameraTuning>,
    mut controllers: Query<&mut PlayerController>,
) {
    let looked = actions
        .read()
        .any(|a| a.is(InputAction::Look, TriggerPhase::Triggered));
    if !looked {
        return;
    }

    for mut controller in &mut controllers {
        controller.add_yaw_input(input.look_delta.x * tuning.look_sensitivity);
        controller.add_pitch_input(
            input.look_delta.y * tuning.look_sensitivity,
            tuning.pitch_limits,
        );
    }
}
