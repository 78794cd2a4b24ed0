//! Core domain: game state and frame ordering.

use bevy::prelude::*;

#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Default)]
pub enum GameState {
    /// Loading content
    #[default]
    Boot,
    Playing,
}

/// Per-frame ordering of character logic. Configured as a chain in `CorePlugin`.
#[derive(SystemSet, Debug, Hash, Eq, PartialEq, Clone, Copy)]
pub enum GameSet {
    /// Device sampling into action messages
    Input,
    /// Action handlers: attack, move, look, toggles
    Handlers,
    /// Montage playback and notifies
    Animation,
    /// Reactions to animation notifies
    Notify,
    /// Movement integration
    Movement,
    /// Camera rig follow
    Camera,
}
