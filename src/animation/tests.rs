//! Animation domain: tests for montage playback and notify timing.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use std::time::Duration;

use super::systems::{advance_montages, start_requested_montages};
use super::{MontageEnded, MontageLibrary, MontageNotify, MontagePlayer, PlayCue};
use crate::content::MontageDef;

fn clip(cue: &str, duration: f32, notify_at: f32) -> MontageDef {
    MontageDef {
        cue_id: cue.to_string(),
        duration,
        notify_at,
    }
}

#[test]
fn test_default_library_has_every_attack_cue() {
    let library = MontageLibrary::default();
    for cue in ["attack_1", "attack_2", "attack_3", "attack_4"] {
        assert!(library.get(cue).is_some(), "missing {}", cue);
    }
    assert!(library.get("dodge").is_none());
}

#[test]
fn test_notify_fires_once_then_clip_ends() {
    let mut player = MontagePlayer::default();
    player.play(&clip("attack_1", 0.9, 0.55));
    assert!(player.is_playing("attack_1"));

    let progress = player.advance(0.5);
    assert_eq!(progress.notified, None);
    assert_eq!(progress.ended, None);

    let progress = player.advance(0.1);
    assert_eq!(progress.notified.as_deref(), Some("attack_1"));
    assert_eq!(progress.ended, None);

    let progress = player.advance(0.1);
    assert_eq!(progress.notified, None);

    let progress = player.advance(0.3);
    assert_eq!(progress.ended.as_deref(), Some("attack_1"));
    assert!(player.active.is_none());
}

#[test]
fn test_large_step_notifies_and_ends_together() {
    let mut player = MontagePlayer::default();
    player.play(&clip("attack_4", 1.4, 0.95));

    let progress = player.advance(2.0);
    assert_eq!(progress.notified.as_deref(), Some("attack_4"));
    assert_eq!(progress.ended.as_deref(), Some("attack_4"));
}

#[test]
fn test_replacing_clip_drops_pending_notify() {
    let mut player = MontagePlayer::default();
    player.play(&clip("attack_1", 0.9, 0.55));
    player.advance(0.3);

    player.play(&clip("attack_2", 0.9, 0.55));
    assert!(player.is_playing("attack_2"));

    let progress = player.advance(0.3);
    assert_eq!(progress.notified, None);
    let progress = player.advance(0.3);
    assert_eq!(progress.notified.as_deref(), Some("attack_2"));
}

#[test]
fn test_idle_player_reports_nothing() {
    let mut player = MontagePlayer::default();
    assert_eq!(player.advance(1.0), Default::default());
}

// ============================================================================
// System tests
// ============================================================================

#[derive(Resource, Default)]
struct Collected {
    notifies: Vec<MontageNotify>,
    ended: Vec<MontageEnded>,
}

fn collect(
    mut notifies: MessageReader<MontageNotify>,
    mut ended: MessageReader<MontageEnded>,
    mut collected: ResMut<Collected>,
) {
    collected.notifies.extend(notifies.read().cloned());
    collected.ended.extend(ended.read().cloned());
}

fn animation_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_message::<PlayCue>()
        .add_message::<MontageNotify>()
        .add_message::<MontageEnded>()
        .insert_resource(MontageLibrary::from_defs(&[clip("attack_1", 0.9, 0.55)]))
        .init_resource::<Collected>()
        .add_systems(
            Update,
            (advance_montages, start_requested_montages, collect).chain(),
        );
    app
}

#[test]
fn test_play_cue_starts_montage_without_same_frame_notify() {
    let mut app = animation_app();
    let character = app.world_mut().spawn(MontagePlayer::default()).id();

    app.world_mut().write_message(PlayCue {
        entity: character,
        cue: "attack_1".to_string(),
    });
    app.update();

    let player = app.world().get::<MontagePlayer>(character).unwrap();
    assert!(player.is_playing("attack_1"));
    assert_eq!(player.active.as_ref().unwrap().elapsed, 0.0);
    assert!(app.world().resource::<Collected>().notifies.is_empty());
}

#[test]
fn test_unknown_cue_is_ignored() {
    let mut app = animation_app();
    let character = app.world_mut().spawn(MontagePlayer::default()).id();

    app.world_mut().write_message(PlayCue {
        entity: character,
        cue: "attack_9".to_string(),
    });
    app.update();

    assert!(
        app.world()
            .get::<MontagePlayer>(character)
            .unwrap()
            .active
            .is_none()
    );
}

#[test]
fn test_advance_broadcasts_notify_for_entity() {
    let mut app = animation_app();
    let mut player = MontagePlayer::default();
    player.play(&clip("attack_1", 0.9, 0.55));
    player.active.as_mut().unwrap().elapsed = 0.6;
    let character = app.world_mut().spawn(player).id();

    // First frame has a zero delta; later steps clamp to the 0.25s virtual max delta
    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(250)));
    app.update();
    app.update();
    assert_eq!(app.world().resource::<Collected>().notifies.len(), 1);
    assert!(app.world().resource::<Collected>().ended.is_empty());

    app.update();

    let collected = app.world().resource::<Collected>();
    assert_eq!(
        collected.notifies,
        vec![MontageNotify {
            entity: character,
            cue: "attack_1".to_string(),
        }]
    );
    assert_eq!(collected.ended.len(), 1);
}
