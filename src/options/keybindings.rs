use serde::{Deserialize, Serialize};

use crate::input::KeyAction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Keyboard bindings, one key string per action.
///
/// Key strings use the `winit::keyboard::KeyCode` debug format
/// (`"KeyR"`, `"Home"`, ...).
pub struct KeybindingOptions {
    /// Key that restores the initial view.
    pub reset_view: String,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        Self {
            reset_view: "KeyR".into(),
        }
    }
}

impl KeybindingOptions {
    /// Look up the action for a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyAction> {
        (key == self.reset_view).then_some(KeyAction::ResetView)
    }
}
