//! Movement domain: system modules for locomotion updates.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;
pub(crate) mod toggles;

pub(crate) use collisions::detect_ground;
pub(crate) use input::handle_move_input;
pub(crate) use movement::{apply_launch_requests, integrate_movement, update_orientation};
pub(crate) use toggles::{
    handle_equip_katana, handle_jump, handle_sprint, handle_target_toggle, sync_katana_visibility,
};
