//! Animation systems: starting requested cues and advancing playback.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use super::{MontageEnded, MontageLibrary, MontageNotify, MontagePlayer, PlayCue};

pub(crate) fn start_requested_montages(
    mut requests: MessageReader<PlayCue>,
    library: Res<MontageLibrary>,
    mut players: Query<&mut MontagePlayer>,
) {
    for request in requests.read() {
        let Some(def) = library.get(&request.cue) else {
            warn!("Unknown animation cue '{}' for {:?}", request.cue, request.entity);
            continue;
        };
        let Ok(mut player) = players.get_mut(request.entity) else {
            warn!("{:?} has no montage player for cue '{}'", request.entity, request.cue);
            continue;
        };
        player.play(def);
    }
}

/// System that advances active montages and broadcasts their notifies.
pub(crate) fn advance_montages(
    time: Res<Time>,
    mut players: Query<(Entity, &mut MontagePlayer)>,
    mut notifies: MessageWriter<MontageNotify>,
    mut ended: MessageWriter<MontageEnded>,
) {
    let dt = time.delta_secs();

    for (entity, mut player) in &mut players {
        if player.active.is_none() {
            continue;
        }

        let progress = player.advance(dt);
        if let Some(cue) = progress.notified {
            notifies.write(MontageNotify { entity, cue });
        }
        if let Some(cue) = progress.ended {
            ended.write(MontageEnded { entity, cue });
        }
    }
}
