//! Combat domain: attack input, notify handling and lock timeout.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::animation::{MontageNotify, PlayCue};
use crate::combat::{AttackRejected, ComboState, ComboTable};
use crate::input::{ActionMessage, InputAction, TriggerPhase};
use crate::movement::{LaunchRequest, Player};

pub(crate) fn handle_attack_input(
    mut actions: MessageReader<ActionMessage>,
    table: Res<ComboTable>,
    mut query: Query<(Entity, &Transform, &mut ComboState), With<Player>>,
    mut cues: MessageWriter<PlayCue>,
    mut launches: MessageWriter<LaunchRequest>,
) {
    let attacks = actions
        .read()
        .filter(|a| a.is(InputAction::Attack, TriggerPhase::Started))
        .count();

    for _ in 0..attacks {
        for (entity, transform, mut combo) in &mut query {
            match combo.on_attack_triggered(&table) {
                Ok(issued) => {
                    debug!(
                        "Attack stage {} on {:?}: cue={}, impulse={}",
                        issued.stage, entity, issued.animation_cue_id, issued.launch_impulse_magnitude
                    );
                    cues.write(PlayCue {
                        entity,
                        cue: issued.animation_cue_id,
                    });
                    launches.write(LaunchRequest {
                        entity,
                        velocity: transform.forward().as_vec3() * issued.launch_impulse_magnitude,
                    });
                }
                Err(AttackRejected::Locked) => {}
                Err(AttackRejected::StageOutOfRange { stage, stage_count }) => {
                    error!(
                        "Combo stage {} out of range for {} stages on {:?}; reset to 0",
                        stage, stage_count, entity
                    );
                }
            }
        }
    }
}

/// The single subscriber to the end-of-montage notify.
pub(crate) fn handle_montage_notify(
    mut notifies: MessageReader<MontageNotify>,
    mut query: Query<&mut ComboState>,
) {
    for notify in notifies.read() {
        if let Ok(mut combo) = query.get_mut(notify.entity) {
            combo.on_animation_complete();
        }
    }
}

pub(crate) fn tick_combo_lock(
    time: Res<Time>,
    table: Res<ComboTable>,
    mut query: Query<(Entity, &mut ComboState)>,
) {
    let dt = time.delta_secs();

    for (entity, mut combo) in &mut query {
        if combo.tick_lock(dt, table.unlock_timeout) {
            warn!(
                "No unlock notify for {:?} within {}s; releasing movement lock",
                entity, table.unlock_timeout
            );
        }
    }
}
