//! Movement domain: components and physics layers for locomotion.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::movement::MovementTuning;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground, walls and props; also blocks the camera boom
    Ground,
    /// Player character
    Player,
}

#[derive(Component, Debug)]
pub struct Player;

/// Which way the character turns while moving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrientationMode {
    /// Face the direction of horizontal velocity
    #[default]
    VelocityAligned,
    /// Face the controller yaw (used while a target is set)
    ControllerAligned,
}

/// Movement collaborator for a character: receives directional contributions
/// and the settable parameters (max speed, orientation mode).
#[derive(Component, Debug, Clone)]
pub struct CharacterMovement {
    pub max_walk_speed: f32,
    pub orientation: OrientationMode,
    /// Sum of contributions since the last integration step.
    pub pending_input: Vec3,
    pub jump_requested: bool,
    pub on_ground: bool,
}

impl CharacterMovement {
    pub fn new(tuning: &MovementTuning) -> Self {
        Self {
            max_walk_speed: tuning.max_walk_speed,
            orientation: OrientationMode::default(),
            pending_input: Vec3::ZERO,
            jump_requested: false,
            on_ground: false,
        }
    }

    /// Add a directional contribution for this frame.
    pub fn add_input(&mut self, direction: Vec3, scale: f32) {
        self.pending_input += direction * scale;
    }

    /// Take the pending horizontal input, clamped to unit length.
    pub fn consume_input(&mut self) -> Vec3 {
        let input = Vec3::new(self.pending_input.x, 0.0, self.pending_input.z);
        self.pending_input = Vec3::ZERO;
        input.clamp_length_max(1.0)
    }

    pub fn start_sprint(&mut self, tuning: &MovementTuning) {
        self.max_walk_speed = tuning.sprint_speed;
    }

    /// Restores the configured base speed, never a remembered one.
    pub fn stop_sprint(&mut self, tuning: &MovementTuning) {
        self.max_walk_speed = tuning.max_walk_speed;
    }
}

/// Target lock toggle state
#[derive(Component, Debug, Default)]
pub struct TargetLock {
    pub target_set: bool,
}

impl TargetLock {
    pub fn toggle(&mut self, movement: &mut CharacterMovement) {
        self.target_set = !self.target_set;
        movement.orientation = if self.target_set {
            OrientationMode::ControllerAligned
        } else {
            OrientationMode::VelocityAligned
        };
    }
}

/// Weapon loadout; the katana mesh is only visible while equipped.
#[derive(Component, Debug, Default)]
pub struct Loadout {
    pub katana_equipped: bool,
}

/// Marker for the katana mesh attached to the character's right hand
#[derive(Component, Debug)]
pub struct KatanaMesh;

/// Horizontal velocity override queued by the combo controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaunchRequest {
    pub entity: Entity,
    pub velocity: Vec3,
}

impl bevy::ecs::message::Message for LaunchRequest {}
