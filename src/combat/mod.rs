//! Combat domain: combo attacks and the movement lock they hold.

mod combo;
mod systems;


pub use combo::{AttackIssued, AttackRejected, ComboState, ComboTable};

use bevy::prelude::*;

use crate::core::GameSet;
use crate::combat::systems::{handle_attack_input, handle_montage_notify, tick_combo_lock};

pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ComboTable>()
            .add_systems(Update, handle_attack_input.in_set(GameSet::Handlers))
            .add_systems(
                Update,
                (handle_montage_notify, tick_combo_lock)
                    .chain()
                    .in_set(GameSet::Notify),
            );
    }
}
