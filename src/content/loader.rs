//! Loader for the RON character file at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::CharacterDef;

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse a character definition from RON text. `file` is only used for error context.
pub fn parse_character_def(file: &str, contents: &str) -> Result<CharacterDef, ContentLoadError> {
    ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file.to_string(),
            message: format!("Parse error: {}", e),
        })
}

/// Load the character definition from `base_path/character.ron`.
pub fn load_character_def(base_path: &Path) -> Result<CharacterDef, ContentLoadError> {
    let path = base_path.join("character.ron");
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(&path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_character_def(&file_name, &contents)
}
