//! Core domain: arena setup for the playing state.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::movement::GameLayer;

const ARENA_SIZE: f32 = 6000.0;
const GROUND_THICKNESS: f32 = 100.0;

/// Marker for static arena geometry and lighting.
#[derive(Component, Debug)]
pub struct ArenaEntity;

pub(crate) fn spawn_arena(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);

    // Ground slab, top face at y = 0
    commands.spawn((
        ArenaEntity,
        Mesh3d(meshes.add(Cuboid::new(ARENA_SIZE, GROUND_THICKNESS, ARENA_SIZE))),
        MeshMaterial3d(materials.add(Color::srgb(0.35, 0.42, 0.33))),
        Transform::from_xyz(0.0, -GROUND_THICKNESS / 2.0, 0.0),
        RigidBody::Static,
        Collider::cuboid(ARENA_SIZE, GROUND_THICKNESS, ARENA_SIZE),
        ground_layers,
    ));

    // Pillars for the camera boom to collide with
    let pillar = meshes.add(Cuboid::new(150.0, 600.0, 150.0));
    let stone = materials.add(Color::srgb(0.5, 0.48, 0.45));
    for (x, z) in [(-600.0, -400.0), (500.0, -700.0), (0.0, 900.0), (-900.0, 600.0)] {
        commands.spawn((
            ArenaEntity,
            Mesh3d(pillar.clone()),
            MeshMaterial3d(stone.clone()),
            Transform::from_xyz(x, 300.0, z),
            RigidBody::Static,
            Collider::cuboid(150.0, 600.0, 150.0),
            ground_layers,
        ));
    }

    commands.spawn((
        ArenaEntity,
        DirectionalLight {
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(400.0, 1000.0, 300.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    info!("Arena spawned");
}
