//! Projection of pixel coordinates onto the virtual arcball hemisphere.

use glam::{Vec2, Vec3};

use crate::error::ArcballError;

/// Viewport dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Width in pixels (always > 0).
    pub width: f32,
    /// Height in pixels (always > 0).
    pub height: f32,
}

impl Viewport {
    /// Create a viewport, rejecting non-finite or non-positive sizes.
    pub fn new(width: f32, height: f32) -> Result<Self, ArcballError> {
        if Self::is_valid_size(width, height) {
            Ok(Self { width, height })
        } else {
            Err(ArcballError::InvalidViewport { width, height })
        }
    }

    /// Whether `width x height` is usable as a viewport.
    #[must_use]
    pub fn is_valid_size(width: f32, height: f32) -> bool {
        width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0
    }

    /// Width / height.
    #[must_use]
    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }

    /// Map a pixel position to normalized coordinates in `[-1, 1]`,
    /// Y pointing up.
    #[must_use]
    pub fn to_ndc(&self, x: f32, y: f32) -> Vec2 {
        Vec2::new(
            (2.0 * x - self.width) / self.width,
            (self.height - 2.0 * y) / self.height,
        )
    }

    /// Project a pixel position onto the arcball.
    ///
    /// Points inside the unit disk land on the front hemisphere; points
    /// outside it are pulled onto the rim (`z = 0`). The result is always a
    /// unit vector in camera-local space, even for coordinates far outside
    /// the viewport.
    #[must_use]
    pub fn screen_to_sphere(&self, x: f32, y: f32) -> Vec3 {
        let ndc = self.to_ndc(x, y);
        let z_sq = 1.0 - ndc.length_squared();

        if z_sq > 0.0 {
            return ndc.extend(z_sq.sqrt()).normalize_or(Vec3::Z);
        }

        // Rescale before normalizing so huge offsets can't overflow the
        // squared length.
        let scale = ndc.abs().max_element();
        if scale.is_finite() && scale > 0.0 {
            (ndc / scale).normalize_or(Vec2::X).extend(0.0)
        } else {
            Vec3::Z
        }
    }
}
