//! Content domain: data-driven character configuration.

mod data;
mod loader;
mod validation;

#[cfg(test)]
mod tests;

pub use data::*;
pub use loader::{ContentLoadError, load_character_def, parse_character_def};
pub use validation::{COMBO_STAGE_COUNT, ValidationError, validate_character};

use bevy::prelude::*;
use std::path::Path;

use crate::animation::MontageLibrary;
use crate::camera::CameraTuning;
use crate::combat::ComboTable;
use crate::core::GameState;
use crate::input::InputBindings;
use crate::movement::MovementTuning;

pub const CONTENT_PATH: &str = "assets/data";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<CharacterDef>()
            .add_systems(OnEnter(GameState::Boot), load_content);
    }
}

/// Load the character file and validate it.
/// Returns the definition, or every problem found as log-ready strings.
pub fn read_character_def(base_path: &Path) -> Result<CharacterDef, Vec<String>> {
    let def = load_character_def(base_path).map_err(|e| vec![e.to_string()])?;
    let errors = validate_character(&def);
    if errors.is_empty() {
        Ok(def)
    } else {
        Err(errors.iter().map(ToString::to_string).collect())
    }
}

/// Insert the definition and every tuning resource derived from it.
pub fn insert_character_resources(commands: &mut Commands, def: CharacterDef) {
    commands.insert_resource(MovementTuning::from_defs(&def.movement, &def.capsule));
    commands.insert_resource(CameraTuning::from_def(&def.camera));
    commands.insert_resource(ComboTable::from_def(&def.combo));
    commands.insert_resource(MontageLibrary::from_defs(&def.montages));
    commands.insert_resource(InputBindings::from_defs(&def.bindings));
    commands.insert_resource(def);
}

/// Load and validate the character file, falling back to built-in defaults on any error.
fn load_content(mut commands: Commands, mut next_state: ResMut<NextState<GameState>>) {
    let def = match read_character_def(Path::new(CONTENT_PATH)) {
        Ok(def) => {
            info!("Loaded character '{}' from {}", def.id, CONTENT_PATH);
            def
        }
        Err(errors) => {
            for error in &errors {
                error!("Character content rejected: {}", error);
            }
            warn!("Using built-in character defaults");
            CharacterDef::default()
        }
    };

    insert_character_resources(&mut commands, def);
    next_state.set(GameState::Playing);
}
