//! Keyboard state tracking
//!
//! Keys arrive as DOM `KeyboardEvent.key` names. Arrow keys are stored
//! without their `Arrow` prefix, lower-cased (`ArrowLeft` -> `left`).

use std::collections::HashMap;

use crate::sim::TickInput;

/// Currently held keys
#[derive(Debug, Clone, Default)]
pub struct KeyState {
    held: HashMap<String, bool>,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key going down (`pressed`) or up
    pub fn key_changed(&mut self, key: &str, pressed: bool) {
        self.held.insert(normalize_key(key), pressed);
    }

    pub fn is_held(&self, name: &str) -> bool {
        self.held.get(name).copied().unwrap_or(false)
    }

    /// Intent snapshot for the next tick
    pub fn snapshot(&self) -> TickInput {
        TickInput {
            turn_left: self.is_held("left"),
            turn_right: self.is_held("right"),
            thrust: self.is_held("up"),
        }
    }

    /// Release everything (e.g. on window blur)
    pub fn clear(&mut self) {
        self.held.clear();
    }
}

fn normalize_key(key: &str) -> String {
    key.strip_prefix("Arrow").unwrap_or(key).to_lowercase()
}
