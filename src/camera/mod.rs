//! Arcball camera: pointer drags on a virtual sphere, accumulated as a unit
//! quaternion, turned into a look-at view matrix.

/// Drag state machine, zoom and the cached view transform.
pub mod controller;
/// Look-at derivation and GPU uniform types.
pub mod core;
/// Minimal-angle rotations and drift-free composition.
pub mod rotation;
/// Pixel to arcball-sphere projection.
pub mod sphere;

pub use controller::ArcballController;
pub use self::core::{Camera, ViewUniform, WORLD_UP};
pub use rotation::{compose_and_normalize, minimal_rotation};
pub use sphere::Viewport;
