use serde::{Deserialize, Serialize};

/// Controller actions that can be bound to keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Restore the initial orientation and zoom.
    ResetView,
}

impl KeyAction {
    /// The command this action triggers.
    #[must_use]
    pub fn to_command(self) -> super::ArcballCommand {
        match self {
            Self::ResetView => super::ArcballCommand::ResetView,
        }
    }
}
