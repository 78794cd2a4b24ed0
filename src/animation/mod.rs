//! Animation domain: attack montage playback and the end-of-montage notify.
//!
//! This module handles:
//! - Resolving animation cues to montage definitions
//! - Advancing the active montage per character
//! - Broadcasting the notify that releases the combo lock

mod montage;
mod notify;
mod systems;

#[cfg(test)]
mod tests;

pub use montage::{ActiveMontage, MontageLibrary, MontagePlayer, MontageProgress};
pub use notify::{MontageEnded, MontageNotify, PlayCue};

use bevy::prelude::*;

use crate::animation::systems::{advance_montages, start_requested_montages};
use crate::core::GameSet;

pub struct MontagePlugin;

impl Plugin for MontagePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MontageLibrary>()
            .add_message::<PlayCue>()
            .add_message::<MontageNotify>()
            .add_message::<MontageEnded>()
            // Advance first: a clip started this frame takes its first step next frame
            .add_systems(
                Update,
                (advance_montages, start_requested_montages)
                    .chain()
                    .in_set(GameSet::Animation),
            );
    }
}
