//! The controller's complete interactive vocabulary.
//!
//! Every operation, whether triggered by a pointer gesture, a key press or
//! a programmatic call, is an `ArcballCommand` passed to
//! [`ArcballController::execute`](crate::camera::ArcballController::execute).

/// A single controller operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ArcballCommand {
    /// Open a drag session at a pixel position.
    BeginDrag {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// Continue the open drag session to a pixel position.
    Drag {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// Close the drag session.
    EndDrag,
    /// Multiply the orbit distance (`> 1` zooms out).
    Zoom {
        /// Multiplicative distance factor.
        factor: f32,
    },
    /// Viewport size changed.
    Resize {
        /// Width in pixels.
        width: f32,
        /// Height in pixels.
        height: f32,
    },
    /// Restore the initial orientation and zoom.
    ResetView,
}
