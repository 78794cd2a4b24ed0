mod animation;
mod camera;
mod combat;
mod content;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod input;
mod movement;

use avian3d::prelude::*;
use bevy::prelude::*;

fn main() {
    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Codex".to_string(),
            resolution: (1280, 720).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(PhysicsPlugins::default())
    .add_plugins((
        core::CorePlugin,
        content::ContentPlugin,
        input::PlayerInputPlugin,
        movement::MovementPlugin,
        combat::CombatPlugin,
        animation::MontagePlugin,
        camera::CameraRigPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
