use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::input::MouseButton;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Input", inline)]
#[serde(default)]
/// Pointer and wheel mapping.
pub struct InputOptions {
    /// Button that drives arcball rotation.
    #[schemars(skip)]
    pub rotate_button: MouseButton,
    /// Zoom per wheel step; one step scales distance by `exp(-speed)`.
    #[schemars(title = "Scroll Zoom Speed", range(min = 0.01, max = 0.5), extend("step" = 0.01))]
    pub scroll_zoom_speed: f32,
    /// Reverse the wheel direction.
    #[schemars(title = "Invert Scroll")]
    pub invert_scroll: bool,
}

impl Default for InputOptions {
    fn default() -> Self {
        Self {
            rotate_button: MouseButton::Left,
            scroll_zoom_speed: 0.1,
            invert_scroll: false,
        }
    }
}
