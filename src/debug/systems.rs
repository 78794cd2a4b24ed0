//! Debug domain: hotkeys and the info overlay.

use avian3d::prelude::LinearVelocity;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;
use std::path::Path;

use crate::animation::{MontageEnded, MontagePlayer};
use crate::camera::CameraBoom;
use crate::combat::ComboState;
use crate::content::{CONTENT_PATH, CharacterDef, insert_character_resources, read_character_def};
use crate::debug::{DebugInfoOverlay, DebugState};
use crate::movement::{CharacterMovement, Loadout, Player, TargetLock};

pub(crate) fn handle_debug_hotkeys(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    mut players: Query<(&mut CharacterMovement, Option<&mut CameraBoom>), With<Player>>,
) {
    if keyboard.just_pressed(KeyCode::F1) || keyboard.just_pressed(KeyCode::Backquote) {
        debug_state.show_info = !debug_state.show_info;
    }

    let ctrl = keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::ControlRight);

    // Ctrl+R: reload character content
    if ctrl && keyboard.just_pressed(KeyCode::KeyR) {
        match read_character_def(Path::new(CONTENT_PATH)) {
            Ok(def) => {
                for (mut movement, boom) in &mut players {
                    refresh_player_tuning(&def, &mut movement, boom.map(Mut::into_inner));
                }
                info!("[DEBUG] Reloaded character '{}'", def.id);
                debug_state.set_message(format!("Reloaded '{}'", def.id), 2.0);
                insert_character_resources(&mut commands, def);
            }
            Err(errors) => {
                for error in &errors {
                    warn!("[DEBUG] Reload rejected: {}", error);
                }
                debug_state.set_message(format!("Reload failed ({} errors)", errors.len()), 3.0);
            }
        }
    }
}

/// Push reloaded tuning into the live pawn. Values read from resources each
/// frame pick up the reload on their own; these are copied at spawn.
pub(crate) fn refresh_player_tuning(
    def: &CharacterDef,
    movement: &mut CharacterMovement,
    boom: Option<&mut CameraBoom>,
) {
    // Sprint state does not survive a reload
    movement.max_walk_speed = def.movement.max_walk_speed;

    if let Some(boom) = boom {
        boom.target_arm_length = def.camera.target_arm_length;
        boom.current_arm_length = boom.current_arm_length.min(boom.target_arm_length);
    }
}

pub(crate) fn update_status_message(time: Res<Time>, mut debug_state: ResMut<DebugState>) {
    debug_state.tick_message(time.delta_secs());
}

pub(crate) fn record_finished_montages(
    mut ended: MessageReader<MontageEnded>,
    mut debug_state: ResMut<DebugState>,
) {
    if let Some(last) = ended.read().last() {
        debug_state.last_montage = Some(last.cue.clone());
    }
}

pub(crate) fn update_debug_info_overlay(
    mut commands: Commands,
    debug_state: Res<DebugState>,
    player_query: Query<
        (
            &Transform,
            &LinearVelocity,
            &CharacterMovement,
            &ComboState,
            &TargetLock,
            &Loadout,
            &MontagePlayer,
        ),
        With<Player>,
    >,
    mut overlay_query: Query<&mut Text, With<DebugInfoOverlay>>,
    existing_overlay: Query<Entity, With<DebugInfoOverlay>>,
) {
    if !debug_state.show_info {
        // Cleanup overlay if it exists
        for entity in &existing_overlay {
            commands.entity(entity).despawn();
        }
        return;
    }

    if existing_overlay.is_empty() {
        spawn_debug_info_overlay(&mut commands);
        return;
    }

    let (Ok((transform, velocity, movement, combo, target, loadout, montage)), Ok(mut text)) =
        (player_query.single(), overlay_query.single_mut())
    else {
        return;
    };

    let pos = transform.translation;
    let speed = Vec2::new(velocity.x, velocity.z).length();
    let playing = montage
        .active
        .as_ref()
        .map(|m| format!("{} {:.2}/{:.2}", m.cue, m.elapsed, m.duration))
        .unwrap_or_else(|| "-".to_string());

    let mut info = format!(
        "Pos: ({:.0}, {:.0}, {:.0})\nSpeed: {:.0}/{:.0}\nGrounded: {}\nCombo stage: {}  Locked: {} ({:.2}s)\nMontage: {}\nLast montage: {}\nTarget: {}  Orientation: {:?}\nKatana: {}",
        pos.x,
        pos.y,
        pos.z,
        speed,
        movement.max_walk_speed,
        movement.on_ground,
        combo.stage,
        combo.locked,
        combo.lock_elapsed,
        playing,
        debug_state.last_montage.as_deref().unwrap_or("-"),
        target.target_set,
        movement.orientation,
        loadout.katana_equipped,
    );
    if let Some((message, _)) = &debug_state.status_message {
        info.push_str("\n> ");
        info.push_str(message);
    }
    **text = info;
}

fn spawn_debug_info_overlay(commands: &mut Commands) {
    commands.spawn((
        DebugInfoOverlay,
        Text::new("Loading..."),
        TextFont {
            font_size: 12.0,
            ..default()
        },
        TextColor(Color::srgb(0.8, 0.9, 0.8)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(20.0),
            bottom: Val::Px(20.0),
            padding: UiRect::all(Val::Px(8.0)),
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
        ZIndex(500),
    ));
}
