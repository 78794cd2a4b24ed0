//! Input domain: sampling devices into action messages.

use bevy::ecs::message::{Message, MessageWriter};
use bevy::input::mouse::AccumulatedMouseMotion;
use bevy::prelude::*;

use crate::input::{InputAction, InputBindings, TriggerPhase};

/// An edge-triggered (or held) action signal for the possessed character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionMessage {
    pub action: InputAction,
    pub phase: TriggerPhase,
}

impl Message for ActionMessage {}

impl ActionMessage {
    pub fn new(action: InputAction, phase: TriggerPhase) -> Self {
        Self { action, phase }
    }

    pub fn is(&self, action: InputAction, phase: TriggerPhase) -> bool {
        self.action == action && self.phase == phase
    }
}

/// Continuous vector inputs for this frame.
#[derive(Resource, Debug, Default)]
pub struct PlayerInput {
    /// x = right, y = forward
    pub move_axis: Vec2,
    /// x = yaw, y = pitch
    pub look_delta: Vec2,
}

pub(crate) fn read_player_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mouse_motion: Res<AccumulatedMouseMotion>,
    bindings: Res<InputBindings>,
    mut input: ResMut<PlayerInput>,
    mut actions: MessageWriter<ActionMessage>,
) {
    input.move_axis = bindings.axis(InputAction::Move, &keyboard, mouse_motion.delta);
    input.look_delta = bindings.axis(InputAction::Look, &keyboard, mouse_motion.delta);

    if input.move_axis != Vec2::ZERO {
        actions.write(ActionMessage::new(InputAction::Move, TriggerPhase::Triggered));
    }
    if input.look_delta != Vec2::ZERO {
        actions.write(ActionMessage::new(InputAction::Look, TriggerPhase::Triggered));
    }

    for (action, phase) in bindings.fired(&keyboard, &mouse_buttons) {
        actions.write(ActionMessage::new(action, phase));
    }
}
