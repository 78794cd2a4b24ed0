//! Movement domain: locomotion input resolved against the controller.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::combat::ComboState;
use crate::core::PlayerController;
use crate::input::{ActionMessage, InputAction, PlayerInput, TriggerPhase};
use crate::movement::{CharacterMovement, Player};

/// Split a 2D locomotion vector (x = right, y = forward) into world-space
/// forward and right contributions using only the controller yaw.
pub fn resolve_move_input(controller: &PlayerController, axis: Vec2) -> [(Vec3, f32); 2] {
    let yaw = controller.yaw_rotation();
    let forward = yaw * Vec3::NEG_Z;
    let right = yaw * Vec3::X;
    [(forward, axis.y), (right, axis.x)]
}

pub(crate) fn handle_move_input(
    mut actions: MessageReader<ActionMessage>,
    input: Res<PlayerInput>,
    mut query: Query<
        (
            Option<&PlayerController>,
            Option<&ComboState>,
            &mut CharacterMovement,
        ),
        With<Player>,
    >,
) {
    let moved = actions
        .read()
        .any(|a| a.is(InputAction::Move, TriggerPhase::Triggered));
    if !moved {
        return;
    }

    for (controller, combo, mut movement) in &mut query {
        // Dropped before it reaches the integrator while an attack owns the character
        if combo.is_some_and(|c| c.locked) {
            continue;
        }
        let Some(controller) = controller else {
            continue;
        };

        for (direction, scale) in resolve_move_input(controller, input.move_axis) {
            movement.add_input(direction, scale);
        }
    }
}
