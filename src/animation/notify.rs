//! Messages exchanged with the animation layer.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Request to play an animation cue. Fire-and-forget: failures are only logged.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayCue {
    pub entity: Entity,
    pub cue: String,
}

impl Message for PlayCue {}

/// Broadcast from inside a montage at its authored notify time.
#[derive(Debug, Clone, PartialEq)]
pub struct MontageNotify {
    pub entity: Entity,
    pub cue: String,
}

impl Message for MontageNotify {}

/// Message fired when a montage plays to its end.
#[derive(Debug, Clone, PartialEq)]
pub struct MontageEnded {
    pub entity: Entity,
    pub cue: String,
}

impl Message for MontageEnded {}
