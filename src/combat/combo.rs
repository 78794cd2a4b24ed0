//! Combat domain: the attack combo state machine.
//!
//! States are `stage` (0..stage count) crossed with `locked`. An attack fires
//! only while unlocked, locks the character, and advances the stage cyclically.
//! The lock is released by the attack montage's notify, or by the safety
//! timeout when that notify never arrives.

use bevy::prelude::*;

use crate::content::{AttackStageDef, ComboDef};

/// Read-only stage table built from content.
#[derive(Resource, Debug, Clone)]
pub struct ComboTable {
    pub stages: Vec<AttackStageDef>,
    /// Seconds before a stuck lock is released. Zero or less disables the timeout.
    pub unlock_timeout: f32,
}

impl Default for ComboTable {
    fn default() -> Self {
        Self::from_def(&ComboDef::default())
    }
}

impl ComboTable {
    pub fn from_def(def: &ComboDef) -> Self {
        Self {
            stages: def.stages.clone(),
            unlock_timeout: def.unlock_timeout,
        }
    }
}

/// Side effects requested by a successful attack trigger.
#[derive(Debug, Clone, PartialEq)]
pub struct AttackIssued {
    /// Stage that fired
    pub stage: usize,
    pub animation_cue_id: String,
    pub launch_impulse_magnitude: f32,
}

/// Why an attack trigger produced nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackRejected {
    /// An attack is already in progress
    Locked,
    /// Stage index was outside the table; the stage has been reset
    StageOutOfRange { stage: usize, stage_count: usize },
}

#[derive(Component, Debug, Clone, Default, PartialEq)]
pub struct ComboState {
    pub stage: usize,
    pub locked: bool,
    /// Seconds spent in the current lock
    pub lock_elapsed: f32,
    /// False on the frame the lock was taken; that frame's delta predates the attack
    pub lock_counting: bool,
}

impl ComboState {
    pub fn on_attack_triggered(&mut self, table: &ComboTable) -> Result<AttackIssued, AttackRejected> {
        if self.locked {
            return Err(AttackRejected::Locked);
        }

        debug_assert!(
            self.stage < table.stages.len(),
            "combo stage {} out of range for {} stages",
            self.stage,
            table.stages.len()
        );
        let Some(def) = table.stages.get(self.stage) else {
            let rejected = AttackRejected::StageOutOfRange {
                stage: self.stage,
                stage_count: table.stages.len(),
            };
            self.stage = 0;
            return Err(rejected);
        };

        let issued = AttackIssued {
            stage: self.stage,
            animation_cue_id: def.animation_cue_id.clone(),
            launch_impulse_magnitude: def.launch_impulse_magnitude,
        };

        self.locked = true;
        self.lock_elapsed = 0.0;
        self.lock_counting = false;
        self.stage = (self.stage + 1) % table.stages.len();

        Ok(issued)
    }

    pub fn on_animation_complete(&mut self) {
        self.locked = false;
        self.lock_elapsed = 0.0;
        self.lock_counting = false;
    }

    /// Advance the lock timer. Returns true when the safety timeout released the lock.
    pub fn tick_lock(&mut self, dt: f32, timeout: f32) -> bool {
        if !self.locked || timeout <= 0.0 {
            return false;
        }
        if !self.lock_counting {
            self.lock_counting = true;
            return false;
        }
        self.lock_elapsed += dt;
        if self.lock_elapsed >= timeout {
            self.on_animation_complete();
            return true;
        }
        false
    }
}
