//! Debug overlay for fast tuning iteration (dev-tools feature).
//!
//! Features:
//! - F1 or ` toggles an info overlay with combo, lock and locomotion state
//! - Ctrl+R reloads the character file without restarting
//! - Short status messages for reloads and finished montages

mod systems;


use bevy::prelude::*;

use crate::core::GameSet;
use crate::debug::systems::{
    handle_debug_hotkeys, record_finished_montages, update_debug_info_overlay,
    update_status_message,
};

/// Resource tracking debug overlay state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Whether the info overlay is visible
    pub show_info: bool,
    /// Message to display temporarily, with seconds remaining
    pub status_message: Option<(String, f32)>,
    /// Cue of the most recently finished montage
    pub last_montage: Option<String>,
}

impl DebugState {
    /// Set a status message that will fade after a duration
    pub fn set_message(&mut self, message: impl Into<String>, duration: f32) {
        self.status_message = Some((message.into(), duration));
    }

    /// Count down the status message, clearing it once expired.
    pub fn tick_message(&mut self, dt: f32) {
        if let Some((_, ref mut remaining)) = self.status_message {
            *remaining -= dt;
            if *remaining <= 0.0 {
                self.status_message = None;
            }
        }
    }
}

/// Marker for the info overlay text
#[derive(Component, Debug)]
pub struct DebugInfoOverlay;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(
                Update,
                (handle_debug_hotkeys, update_status_message).chain(),
            )
            .add_systems(
                Update,
                (record_finished_montages, update_debug_info_overlay)
                    .chain()
                    .after(GameSet::Camera),
            );
    }
}
