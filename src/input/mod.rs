//! Input domain: binding table and action dispatch.

mod bindings;
mod systems;

#[cfg(test)]
mod tests;

pub use bindings::{
    Binding, InputAction, InputBindings, PhysicalInput, TriggerPhase, parse_key_code,
    parse_mouse_button,
};
pub use systems::{ActionMessage, PlayerInput};

use bevy::prelude::*;

use crate::core::GameSet;
use crate::input::systems::read_player_input;

pub struct PlayerInputPlugin;

impl Plugin for PlayerInputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InputBindings>()
            .init_resource::<PlayerInput>()
            .add_message::<ActionMessage>()
            .add_systems(Update, read_player_input.in_set(GameSet::Input));
    }
}
