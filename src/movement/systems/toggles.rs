//! Movement domain: jump, sprint, target-lock and katana toggles.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::input::{ActionMessage, InputAction, TriggerPhase};
use crate::movement::{CharacterMovement, KatanaMesh, Loadout, MovementTuning, Player, TargetLock};

pub(crate) fn handle_jump(
    mut actions: MessageReader<ActionMessage>,
    mut query: Query<&mut CharacterMovement, With<Player>>,
) {
    for action in actions.read() {
        if action.action != InputAction::Jump {
            continue;
        }
        for mut movement in &mut query {
            match action.phase {
                TriggerPhase::Started | TriggerPhase::Triggered => movement.jump_requested = true,
                TriggerPhase::Completed => movement.jump_requested = false,
            }
        }
    }
}

pub(crate) fn handle_sprint(
    mut actions: MessageReader<ActionMessage>,
    tuning: Res<MovementTuning>,
    mut query: Query<&mut CharacterMovement, With<Player>>,
) {
    for action in actions.read() {
        if action.action != InputAction::Sprint {
            continue;
        }
        for mut movement in &mut query {
            match action.phase {
                TriggerPhase::Started => movement.start_sprint(&tuning),
                TriggerPhase::Completed => movement.stop_sprint(&tuning),
                TriggerPhase::Triggered => {}
            }
            debug!("Max walk speed now {}", movement.max_walk_speed);
        }
    }
}

pub(crate) fn handle_target_toggle(
    mut actions: MessageReader<ActionMessage>,
    mut query: Query<(&mut TargetLock, &mut CharacterMovement), With<Player>>,
) {
    for action in actions.read() {
        if !action.is(InputAction::SetTarget, TriggerPhase::Started) {
            continue;
        }
        for (mut target, mut movement) in &mut query {
            target.toggle(&mut movement);
            info!(
                "Target lock {}: orientation {:?}",
                if target.target_set { "on" } else { "off" },
                movement.orientation
            );
        }
    }
}

pub(crate) fn handle_equip_katana(
    mut actions: MessageReader<ActionMessage>,
    mut players: Query<&mut Loadout, With<Player>>,
) {
    for action in actions.read() {
        if !action.is(InputAction::EquipKatana, TriggerPhase::Started) {
            continue;
        }
        for mut loadout in &mut players {
            loadout.katana_equipped = !loadout.katana_equipped;
            info!("Katana equipped: {}", loadout.katana_equipped);
        }
    }
}

pub(crate) fn sync_katana_visibility(
    players: Query<&Loadout, (With<Player>, Changed<Loadout>)>,
    mut katanas: Query<(&ChildOf, &mut Visibility), With<KatanaMesh>>,
) {
    for (child_of, mut visibility) in &mut katanas {
        let Ok(loadout) = players.get(child_of.parent()) else {
            continue;
        };
        *visibility = if loadout.katana_equipped {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
    }
}
