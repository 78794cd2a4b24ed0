//! Camera domain: spawning and following.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::camera::{CameraBoom, CameraTuning, FollowCamera};
use crate::core::PlayerController;
use crate::movement::{GameLayer, Player};

/// World-space pivot and desired camera position for a boom.
pub fn boom_endpoints(
    character_position: Vec3,
    controller: &PlayerController,
    tuning: &CameraTuning,
    arm_length: f32,
) -> (Vec3, Vec3) {
    let pivot = character_position + Vec3::Y * tuning.socket_height;
    // The arm extends backwards along the control rotation
    let back = controller.control_rotation() * Vec3::Z;
    (pivot, pivot + back * arm_length)
}

pub(crate) fn spawn_follow_camera(
    mut commands: Commands,
    players: Query<Entity, (With<Player>, With<CameraBoom>)>,
    existing: Query<(), With<FollowCamera>>,
) {
    if !existing.is_empty() {
        return;
    }
    let Ok(target) = players.single() else {
        warn!("No character with a camera boom; follow camera not spawned");
        return;
    };

    commands.spawn((
        FollowCamera { target },
        Camera3d::default(),
        Transform::from_xyz(0.0, 300.0, 400.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
    info!("Follow camera attached to {:?}", target);
}

/// Pull the boom in to the first blocking hit between pivot and desired position.
pub(crate) fn update_camera_boom(
    spatial_query: SpatialQuery,
    tuning: Res<CameraTuning>,
    mut booms: Query<(&Transform, &PlayerController, &mut CameraBoom)>,
) {
    let filter = SpatialQueryFilter::from_mask(GameLayer::Ground);
    let sphere = Collider::sphere(tuning.sweep_radius);

    for (transform, controller, mut boom) in &mut booms {
        let (pivot, desired) =
            boom_endpoints(transform.translation, controller, &tuning, boom.target_arm_length);
        let Ok(direction) = Dir3::new(desired - pivot) else {
            boom.current_arm_length = boom.target_arm_length;
            continue;
        };

        let hit = spatial_query.cast_shape(
            &sphere,
            pivot,
            Quat::IDENTITY,
            direction,
            &ShapeCastConfig::from_max_distance(boom.target_arm_length),
            &filter,
        );

        boom.current_arm_length = match hit {
            Some(hit) => hit.distance.min(boom.target_arm_length),
            None => boom.target_arm_length,
        };
    }
}

pub(crate) fn follow_character(
    tuning: Res<CameraTuning>,
    booms: Query<(&Transform, &PlayerController, &CameraBoom), Without<FollowCamera>>,
    mut cameras: Query<(&FollowCamera, &mut Transform)>,
) {
    for (camera, mut camera_transform) in &mut cameras {
        let Ok((transform, controller, boom)) = booms.get(camera.target) else {
            continue;
        };
        let (pivot, position) =
            boom_endpoints(transform.translation, controller, &tuning, boom.current_arm_length);
        *camera_transform = Transform::from_translation(position).looking_at(pivot, Vec3::Y);
    }
}
