//! Core domain: game mode wiring, states and the player controller.

mod controller;
mod state;
mod systems;

#[cfg(test)]
mod tests;

pub use controller::PlayerController;
pub use state::{GameSet, GameState};

use bevy::prelude::*;

use crate::core::controller::handle_look_input;
use crate::core::systems::spawn_arena;

/// Game mode: owns the state machine, frame ordering and the arena.
/// The default pawn is spawned by `MovementPlugin` and the camera by `CameraRigPlugin`.
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>();
        configure_game_sets(app);
        app.add_systems(OnEnter(GameState::Playing), spawn_arena)
            .add_systems(Update, handle_look_input.in_set(GameSet::Handlers));
    }
}

/// Chain the per-frame character sets, all gated on `GameState::Playing`.
pub(crate) fn configure_game_sets(app: &mut App) {
    app.configure_sets(
        Update,
        (
            GameSet::Input,
            GameSet::Handlers,
            GameSet::Animation,
            GameSet::Notify,
            GameSet::Movement,
            GameSet::Camera,
        )
            .chain()
            .run_if(in_state(GameState::Playing)),
    );
}
