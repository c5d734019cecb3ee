//! Input handling: event types, the command vocabulary, and the input
//! processor that converts raw window events into controller commands.

/// Controller command vocabulary.
pub mod command;
/// Platform-agnostic input events.
pub mod event;
/// Bindable keyboard actions.
pub mod keyboard;
/// Converts raw events into controller commands.
pub mod processor;

pub use command::ArcballCommand;
pub use event::{InputEvent, MouseButton};
pub use keyboard::KeyAction;
pub use processor::InputProcessor;
