//! Movement domain: ground detection.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::movement::{CharacterMovement, GameLayer, MovementTuning, Player};

/// How far below the capsule base still counts as standing.
const GROUND_RAY_DISTANCE: f32 = 4.0;

pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    tuning: Res<MovementTuning>,
    mut query: Query<(&Transform, &LinearVelocity, &mut CharacterMovement), With<Player>>,
) {
    // Filter to only hit Ground layer entities
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);

    for (transform, velocity, mut movement) in &mut query {
        let was_on_ground = movement.on_ground;

        // Ray from just inside the capsule base so it starts clear of the ground
        let ray_origin = transform.translation - Vec3::Y * (tuning.capsule_half_height - 1.0);
        let hit = spatial_query.cast_ray(
            ray_origin,
            Dir3::NEG_Y,
            GROUND_RAY_DISTANCE + 1.0,
            true,
            &ground_filter,
        );

        // Rising after a jump is never grounded
        movement.on_ground = hit.is_some() && velocity.y <= 1.0;

        if movement.on_ground && !was_on_ground {
            debug!("Landed at {:?}", transform.translation);
        } else if !movement.on_ground && was_on_ground {
            debug!("Left ground");
        }
    }
}
