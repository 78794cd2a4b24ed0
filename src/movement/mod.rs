//! Movement domain: character locomotion, toggles and the default pawn.

mod bootstrap;
mod components;
mod resources;
mod systems;


pub(crate) use bootstrap::spawn_player;
pub(crate) use systems::handle_move_input;
pub use components::{
    CharacterMovement, GameLayer, KatanaMesh, LaunchRequest, Loadout, OrientationMode, Player,
    TargetLock,
};
pub use resources::MovementTuning;
pub use systems::input::resolve_move_input;
pub use systems::movement::{rotate_yaw_towards, step_horizontal_velocity, yaw_of};

use bevy::prelude::*;

use crate::core::{GameSet, GameState};
use crate::movement::systems::{
    apply_launch_requests, detect_ground, handle_equip_katana, handle_jump, handle_sprint,
    handle_target_toggle, integrate_movement, sync_katana_visibility, update_orientation,
};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .add_message::<LaunchRequest>()
            .add_systems(OnEnter(GameState::Playing), spawn_player)
            .add_systems(
                Update,
                (
                    handle_move_input,
                    handle_jump,
                    handle_sprint,
                    handle_target_toggle,
                    handle_equip_katana,
                )
                    .in_set(GameSet::Handlers),
            )
            .add_systems(
                Update,
                (
                    apply_launch_requests,
                    detect_ground,
                    integrate_movement,
                    update_orientation,
                    sync_katana_visibility,
                )
                    .chain()
                    .in_set(GameSet::Movement),
            );
    }
}
