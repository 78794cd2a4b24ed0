//! Movement domain: default pawn bootstrap from the loaded character tuning.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::animation::MontagePlayer;
use crate::camera::{CameraBoom, CameraTuning};
use crate::combat::ComboState;
use crate::core::PlayerController;
use crate::movement::{
    CharacterMovement, GameLayer, KatanaMesh, Loadout, MovementTuning, Player, TargetLock,
};

/// Spawn the possessed character. Runs on entering `GameState::Playing`.
pub(crate) fn spawn_player(
    mut commands: Commands,
    tuning: Res<MovementTuning>,
    camera_tuning: Res<CameraTuning>,
    existing_player: Query<Entity, With<Player>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    // Don't spawn if player already exists
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    commands.insert_resource(Gravity(Vec3::NEG_Y * tuning.gravity));

    let segment = tuning.capsule_segment_length();
    let radius = tuning.capsule_radius;

    info!(
        "Spawning player: capsule r={} h={}, walk={}, sprint={}",
        radius,
        tuning.capsule_half_height,
        tuning.max_walk_speed,
        tuning.sprint_speed
    );

    commands
        .spawn((
            // Identity & control
            (
                Player,
                PlayerController::default(),
                CharacterMovement::new(&tuning),
                TargetLock::default(),
                Loadout::default(),
            ),
            // Combat & animation
            (
                ComboState::default(),
                MontagePlayer::default(),
                CameraBoom::new(camera_tuning.target_arm_length),
            ),
            // Rendering
            (
                Mesh3d(meshes.add(Capsule3d::new(radius, segment))),
                MeshMaterial3d(materials.add(Color::srgb(0.85, 0.82, 0.78))),
                Transform::from_xyz(0.0, tuning.capsule_half_height + 10.0, 0.0),
            ),
            // Physics
            (
                RigidBody::Dynamic,
                Collider::capsule(radius, segment),
                LockedAxes::ROTATION_LOCKED,
                LinearVelocity::default(),
                Friction::new(0.0),
                CollisionLayers::new(GameLayer::Player, [GameLayer::Ground]),
            ),
        ))
        .with_children(|parent| {
            // Katana held at the right hand, hidden until equipped
            parent.spawn((
                KatanaMesh,
                Mesh3d(meshes.add(Cuboid::new(4.0, 4.0, 100.0))),
                MeshMaterial3d(materials.add(Color::srgb(0.75, 0.77, 0.8))),
                Transform::from_xyz(radius + 6.0, 0.0, -40.0),
                Visibility::Hidden,
            ));
        });
}
