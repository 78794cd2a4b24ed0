//! Input domain: action vocabulary and the binding table built at startup.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::content::{BindingDef, CharacterDef, InputSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, Reflect)]
pub enum InputAction {
    Jump,
    Move,
    Look,
    EquipKatana,
    Interact,
    SetTarget,
    AccessInventory,
    Sprint,
    Attack,
    Defend,
}

/// When a bound input produces its action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, Reflect)]
pub enum TriggerPhase {
    /// Pressed this frame
    Started,
    /// Held (fires every frame while down)
    Triggered,
    /// Released this frame
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PhysicalInput {
    Key(KeyCode),
    Mouse(MouseButton),
    /// Held key contributing a fixed vector to an axis action
    KeyAxis(KeyCode, Vec2),
    /// Mouse motion scaled per axis
    MouseMotion(Vec2),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    pub action: InputAction,
    pub input: PhysicalInput,
    pub phases: Vec<TriggerPhase>,
}

/// Table mapping physical inputs to actions. Built once from content.
#[derive(Resource, Debug, Clone)]
pub struct InputBindings {
    pub bindings: Vec<Binding>,
}

impl Default for InputBindings {
    fn default() -> Self {
        Self::from_defs(&CharacterDef::default().bindings)
    }
}

impl InputBindings {
    /// Resolve binding definitions, dropping entries whose input name is unknown.
    pub fn from_defs(defs: &[BindingDef]) -> Self {
        let bindings = defs
            .iter()
            .filter_map(|def| {
                let input = match &def.source {
                    InputSource::Key(name) => parse_key_code(name).map(PhysicalInput::Key),
                    InputSource::Mouse(name) => parse_mouse_button(name).map(PhysicalInput::Mouse),
                    InputSource::KeyAxis(name, (x, y)) => {
                        parse_key_code(name).map(|key| PhysicalInput::KeyAxis(key, Vec2::new(*x, *y)))
                    }
                    InputSource::MouseMotion((x, y)) => {
                        Some(PhysicalInput::MouseMotion(Vec2::new(*x, *y)))
                    }
                };
                if input.is_none() {
                    warn!("Dropping binding {:?}: unknown input {:?}", def.action, def.source);
                }
                input.map(|input| Binding {
                    action: def.action,
                    input,
                    phases: def.phases.clone(),
                })
            })
            .collect();

        Self { bindings }
    }

    /// Collect the `(action, phase)` pairs that fire this frame.
    /// An action bound to several inputs fires at most once per phase.
    pub fn fired(
        &self,
        keys: &ButtonInput<KeyCode>,
        mouse: &ButtonInput<MouseButton>,
    ) -> Vec<(InputAction, TriggerPhase)> {
        let mut fired: Vec<(InputAction, TriggerPhase)> = Vec::new();

        for binding in &self.bindings {
            for &phase in &binding.phases {
                let active = match (binding.input, phase) {
                    // Axis inputs are sampled through `axis`
                    (PhysicalInput::KeyAxis(..) | PhysicalInput::MouseMotion(_), _) => false,
                    (PhysicalInput::Key(k), TriggerPhase::Started) => keys.just_pressed(k),
                    (PhysicalInput::Key(k), TriggerPhase::Triggered) => keys.pressed(k),
                    (PhysicalInput::Key(k), TriggerPhase::Completed) => keys.just_released(k),
                    (PhysicalInput::Mouse(b), TriggerPhase::Started) => mouse.just_pressed(b),
                    (PhysicalInput::Mouse(b), TriggerPhase::Triggered) => mouse.pressed(b),
                    (PhysicalInput::Mouse(b), TriggerPhase::Completed) => mouse.just_released(b),
                };
                if active && !fired.contains(&(binding.action, phase)) {
                    fired.push((binding.action, phase));
                }
            }
        }

        fired
    }

    /// Sum this frame's axis contributions bound to `action`.
    pub fn axis(&self, action: InputAction, keys: &ButtonInput<KeyCode>, mouse_delta: Vec2) -> Vec2 {
        self.bindings
            .iter()
            .filter(|binding| binding.action == action)
            .map(|binding| match binding.input {
                PhysicalInput::KeyAxis(key, value) if keys.pressed(key) => value,
                PhysicalInput::MouseMotion(scale) => mouse_delta * scale,
                _ => Vec2::ZERO,
            })
            .sum()
    }
}

pub fn parse_key_code(name: &str) -> Option<KeyCode> {
    let code = match name {
        "Space" => KeyCode::Space,
        "Tab" => KeyCode::Tab,
        "Enter" => KeyCode::Enter,
        "Escape" => KeyCode::Escape,
        "ShiftLeft" => KeyCode::ShiftLeft,
        "ShiftRight" => KeyCode::ShiftRight,
        "ControlLeft" => KeyCode::ControlLeft,
        "ControlRight" => KeyCode::ControlRight,
        "AltLeft" => KeyCode::AltLeft,
        "ArrowUp" => KeyCode::ArrowUp,
        "ArrowDown" => KeyCode::ArrowDown,
        "ArrowLeft" => KeyCode::ArrowLeft,
        "ArrowRight" => KeyCode::ArrowRight,
        "KeyA" => KeyCode::KeyA,
        "KeyB" => KeyCode::KeyB,
        "KeyC" => KeyCode::KeyC,
        "KeyD" => KeyCode::KeyD,
        "KeyE" => KeyCode::KeyE,
        "KeyF" => KeyCode::KeyF,
        "KeyG" => KeyCode::KeyG,
        "KeyH" => KeyCode::KeyH,
        "KeyI" => KeyCode::KeyI,
        "KeyJ" => KeyCode::KeyJ,
        "KeyK" => KeyCode::KeyK,
        "KeyL" => KeyCode::KeyL,
        "KeyM" => KeyCode::KeyM,
        "KeyN" => KeyCode::KeyN,
        "KeyO" => KeyCode::KeyO,
        "KeyP" => KeyCode::KeyP,
        "KeyQ" => KeyCode::KeyQ,
        "KeyR" => KeyCode::KeyR,
        "KeyS" => KeyCode::KeyS,
        "KeyT" => KeyCode::KeyT,
        "KeyU" => KeyCode::KeyU,
        "KeyV" => KeyCode::KeyV,
        "KeyW" => KeyCode::KeyW,
        "KeyX" => KeyCode::KeyX,
        "KeyY" => KeyCode::KeyY,
        "KeyZ" => KeyCode::KeyZ,
        "Digit1" => KeyCode::Digit1,
        "Digit2" => KeyCode::Digit2,
        "Digit3" => KeyCode::Digit3,
        "Digit4" => KeyCode::Digit4,
        _ => return None,
    };
    Some(code)
}

pub fn parse_mouse_button(name: &str) -> Option<MouseButton> {
    match name {
        "Left" => Some(MouseButton::Left),
        "Right" => Some(MouseButton::Right),
        "Middle" => Some(MouseButton::Middle),
        "Back" => Some(MouseButton::Back),
        "Forward" => Some(MouseButton::Forward),
        _ => None,
    }
}
