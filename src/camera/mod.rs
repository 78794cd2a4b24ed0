//! Camera domain: spring-arm follow camera driven by the player controller.

mod components;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{CameraBoom, CameraTuning, FollowCamera};
pub use systems::boom_endpoints;

use bevy::prelude::*;

use crate::camera::systems::{follow_character, spawn_follow_camera, update_camera_boom};
use crate::core::{GameSet, GameState};
use crate::movement::spawn_player;

pub struct CameraRigPlugin;

impl Plugin for CameraRigPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraTuning>()
            .add_systems(
                OnEnter(GameState::Playing),
                spawn_follow_camera.after(spawn_player),
            )
            .add_systems(
                Update,
                (update_camera_boom, follow_character)
                    .chain()
                    .in_set(GameSet::Camera),
            );
    }
}
