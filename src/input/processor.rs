//! Converts raw platform events into controller commands.
//!
//! The `InputProcessor` owns all transient input state (cursor tracking,
//! rotate-button state) plus the pointer mapping and key bindings. It is
//! the only thing that sits between raw window events and
//! [`ArcballController::execute`](crate::camera::ArcballController::execute).

use glam::Vec2;

use super::command::ArcballCommand;
use super::event::{InputEvent, MouseButton};
use crate::options::{InputOptions, KeybindingOptions, Options};

/// Where the rotate button is in its press/move/release cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DragPhase {
    /// Button up.
    Released,
    /// Button down before any cursor position was known.
    Armed,
    /// Button down and a drag session has been opened.
    Active,
}

/// Converts raw window events into [`ArcballCommand`]s.
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// if let Some(cmd) = input_processor.handle_event(event) {
///     controller.execute(cmd);
/// }
///
/// if let Some(cmd) = input_processor.handle_key_press("KeyR") {
///     controller.execute(cmd);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct InputProcessor {
    /// Last known cursor position in physical pixels.
    cursor: Option<Vec2>,
    phase: DragPhase,
    options: InputOptions,
    key_bindings: KeybindingOptions,
}

impl InputProcessor {
    /// Create a processor with default mapping and key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(InputOptions::default(), KeybindingOptions::default())
    }

    /// Create a processor with custom mapping and key bindings.
    #[must_use]
    pub fn with_options(
        options: InputOptions,
        key_bindings: KeybindingOptions,
    ) -> Self {
        Self {
            cursor: None,
            phase: DragPhase::Released,
            options,
            key_bindings,
        }
    }

    /// Create a processor from the input sections of a full option set.
    #[must_use]
    pub fn from_options(options: &Options) -> Self {
        Self::with_options(options.input.clone(), options.keybindings.clone())
    }

    /// Current cursor position in physical pixels, once one is known.
    #[must_use]
    pub fn cursor(&self) -> Option<(f32, f32)> {
        self.cursor.map(|c| (c.x, c.y))
    }

    /// Whether the rotate button is held.
    #[must_use]
    pub fn rotate_pressed(&self) -> bool {
        self.phase != DragPhase::Released
    }

    /// Read-only access to the pointer mapping.
    #[must_use]
    pub fn options(&self) -> &InputOptions {
        &self.options
    }

    /// Look up a key press and return the corresponding command, if bound.
    #[must_use]
    pub fn handle_key_press(&self, key: &str) -> Option<ArcballCommand> {
        self.key_bindings.lookup(key).map(super::KeyAction::to_command)
    }

    /// Process a raw input event and return zero or one commands.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<ArcballCommand> {
        match event {
            InputEvent::CursorMoved { x, y } => self.handle_cursor_moved(x, y),
            InputEvent::MouseButton { button, pressed } => {
                self.handle_mouse_button(button, pressed)
            }
            InputEvent::Scroll { delta } => self.scroll_to_zoom(delta),
            InputEvent::Resized { width, height } => {
                Some(ArcballCommand::Resize { width, height })
            }
        }
    }

    fn handle_cursor_moved(&mut self, x: f32, y: f32) -> Option<ArcballCommand> {
        self.cursor = Some(Vec2::new(x, y));
        match self.phase {
            DragPhase::Released => None,
            DragPhase::Armed => {
                self.phase = DragPhase::Active;
                Some(ArcballCommand::BeginDrag { x, y })
            }
            DragPhase::Active => Some(ArcballCommand::Drag { x, y }),
        }
    }

    fn handle_mouse_button(
        &mut self,
        button: MouseButton,
        pressed: bool,
    ) -> Option<ArcballCommand> {
        if button != self.options.rotate_button {
            return None;
        }

        if pressed {
            if let Some(cursor) = self.cursor {
                self.phase = DragPhase::Active;
                return Some(ArcballCommand::BeginDrag {
                    x: cursor.x,
                    y: cursor.y,
                });
            }
            self.phase = DragPhase::Armed;
            return None;
        }

        // Release
        let was_active = self.phase == DragPhase::Active;
        self.phase = DragPhase::Released;
        was_active.then_some(ArcballCommand::EndDrag)
    }

    /// Wheel delta to a multiplicative zoom factor; always positive.
    fn scroll_to_zoom(&self, delta: f32) -> Option<ArcballCommand> {
        if !delta.is_finite() || delta == 0.0 {
            return None;
        }
        let direction = if self.options.invert_scroll { -1.0 } else { 1.0 };
        let factor = (-delta * direction * self.options.scroll_zoom_speed).exp();
        (factor.is_finite() && factor > 0.0)
            .then_some(ArcballCommand::Zoom { factor })
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new()
    }
}
