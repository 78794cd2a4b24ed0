//! Montage playback: one active clip per character, advanced by frame time.

use bevy::prelude::*;
use std::collections::HashMap;

use crate::content::{CharacterDef, MontageDef};

/// Montage definitions keyed by animation cue id.
#[derive(Resource, Debug, Clone)]
pub struct MontageLibrary {
    pub montages: HashMap<String, MontageDef>,
}

impl Default for MontageLibrary {
    fn default() -> Self {
        Self::from_defs(&CharacterDef::default().montages)
    }
}

impl MontageLibrary {
    pub fn from_defs(defs: &[MontageDef]) -> Self {
        Self {
            montages: defs
                .iter()
                .map(|def| (def.cue_id.clone(), def.clone()))
                .collect(),
        }
    }

    pub fn get(&self, cue: &str) -> Option<&MontageDef> {
        self.montages.get(cue)
    }
}

/// A clip in progress.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveMontage {
    pub cue: String,
    pub elapsed: f32,
    pub duration: f32,
    pub notify_at: f32,
    /// Whether the notify already fired for this playback
    pub notified: bool,
}

/// What happened during one advance step.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MontageProgress {
    /// Cue whose notify point was crossed this step
    pub notified: Option<String>,
    /// Cue that finished this step
    pub ended: Option<String>,
}

/// Animation-playback collaborator for a character.
#[derive(Component, Debug, Default)]
pub struct MontagePlayer {
    pub active: Option<ActiveMontage>,
}

impl MontagePlayer {
    /// Start `def`, replacing whatever was playing. A replaced clip's pending notify is dropped.
    pub fn play(&mut self, def: &MontageDef) {
        if let Some(previous) = &self.active {
            if !previous.notified {
                debug!("Montage '{}' interrupted before its notify", previous.cue);
            }
        }
        self.active = Some(ActiveMontage {
            cue: def.cue_id.clone(),
            elapsed: 0.0,
            duration: def.duration,
            notify_at: def.notify_at,
            notified: false,
        });
    }

    pub fn is_playing(&self, cue: &str) -> bool {
        self.active.as_ref().is_some_and(|m| m.cue == cue)
    }

    pub fn advance(&mut self, dt: f32) -> MontageProgress {
        let mut progress = MontageProgress::default();
        let Some(montage) = self.active.as_mut() else {
            return progress;
        };

        montage.elapsed += dt;

        if !montage.notified && montage.elapsed >= montage.notify_at {
            montage.notified = true;
            progress.notified = Some(montage.cue.clone());
        }

        if montage.elapsed >= montage.duration {
            progress.ended = Some(montage.cue.clone());
            self.active = None;
        }

        progress
    }
}
