//! Movement domain: velocity integration, launches and facing.

use avian3d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::core::PlayerController;
use crate::movement::{
    CharacterMovement, LaunchRequest, MovementTuning, OrientationMode, Player,
};

/// Below this horizontal speed the character keeps its facing.
const FACING_SPEED_THRESHOLD: f32 = 1.0;

/// Advance horizontal velocity one step toward the input-driven target.
/// `input` is already clamped to unit length; `current` has no vertical part.
pub fn step_horizontal_velocity(
    current: Vec3,
    input: Vec3,
    max_speed: f32,
    tuning: &MovementTuning,
    on_ground: bool,
    dt: f32,
) -> Vec3 {
    let magnitude = input.length();

    if magnitude > f32::EPSILON {
        let target_speed = (max_speed * magnitude).max(tuning.min_analog_walk_speed);
        let target = input / magnitude * target_speed;
        let control = if on_ground { 1.0 } else { tuning.air_control };
        let max_delta = tuning.max_acceleration * control * dt;

        let delta = target - current;
        if delta.length() <= max_delta {
            target
        } else {
            current + delta.normalize() * max_delta
        }
    } else if on_ground {
        let speed = current.length();
        if speed <= f32::EPSILON {
            return Vec3::ZERO;
        }
        let braked = (speed - tuning.braking_deceleration_walking * dt).max(0.0);
        current * (braked / speed)
    } else {
        current
    }
}

/// Rotate `current` toward `target` (radians) by at most `max_step`, taking the short way round.
pub fn rotate_yaw_towards(current: f32, target: f32, max_step: f32) -> f32 {
    let mut diff = (target - current).rem_euclid(std::f32::consts::TAU);
    if diff > std::f32::consts::PI {
        diff -= std::f32::consts::TAU;
    }
    current + diff.clamp(-max_step, max_step)
}

/// Yaw that makes -Z face along `direction`.
pub fn yaw_of(direction: Vec3) -> f32 {
    (-direction.x).atan2(-direction.z)
}

pub(crate) fn apply_launch_requests(
    mut launches: MessageReader<LaunchRequest>,
    mut query: Query<&mut LinearVelocity>,
) {
    for launch in launches.read() {
        let Ok(mut velocity) = query.get_mut(launch.entity) else {
            continue;
        };
        // Horizontal is overridden, vertical is additive
        velocity.x = launch.velocity.x;
        velocity.z = launch.velocity.z;
        velocity.y += launch.velocity.y;
    }
}

pub(crate) fn integrate_movement(
    time: Res<Time>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&mut CharacterMovement, &mut LinearVelocity), With<Player>>,
) {
    let dt = time.delta_secs();

    for (mut movement, mut velocity) in &mut query {
        let input = movement.consume_input();
        let horizontal = Vec3::new(velocity.x, 0.0, velocity.z);
        let next = step_horizontal_velocity(
            horizontal,
            input,
            movement.max_walk_speed,
            &tuning,
            movement.on_ground,
            dt,
        );
        velocity.x = next.x;
        velocity.z = next.z;

        if movement.jump_requested {
            if movement.on_ground {
                velocity.y = tuning.jump_z_velocity;
                movement.on_ground = false;
                debug!("Jump: vy={}", velocity.y);
            }
            movement.jump_requested = false;
        }
    }
}

pub(crate) fn update_orientation(
    time: Res<Time>,
    tuning: Res<MovementTuning>,
    mut query: Query<
        (
            &CharacterMovement,
            &LinearVelocity,
            Option<&PlayerController>,
            &mut Transform,
        ),
        With<Player>,
    >,
) {
    let max_step = tuning.rotation_rate * time.delta_secs();

    for (movement, velocity, controller, mut transform) in &mut query {
        let target = match movement.orientation {
            OrientationMode::VelocityAligned => {
                let horizontal = Vec3::new(velocity.x, 0.0, velocity.z);
                if horizontal.length() < FACING_SPEED_THRESHOLD {
                    continue;
                }
                yaw_of(horizontal)
            }
            OrientationMode::ControllerAligned => match controller {
                Some(controller) => controller.yaw,
                None => continue,
            },
        };

        let (current, _, _) = transform.rotation.to_euler(EulerRot::YXZ);
        let yaw = rotate_yaw_towards(current, target, max_step);
        transform.rotation = Quat::from_rotation_y(yaw);
    }
}
