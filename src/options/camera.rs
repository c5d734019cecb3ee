use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ArcballError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Orbit geometry and zoom limits.
pub struct CameraOptions {
    /// Fixed world-space focus point.
    #[schemars(skip)]
    pub target: Vec3,
    /// Base eye-to-target distance before zoom.
    #[schemars(title = "Radius", range(min = 0.1, max = 1000.0))]
    pub radius: f32,
    /// Initial zoom factor, also restored by a view reset.
    #[schemars(title = "Initial Zoom", range(min = 0.05, max = 20.0), extend("step" = 0.05))]
    pub zoom: f32,
    /// Smallest allowed zoom factor.
    #[schemars(title = "Min Zoom", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub min_zoom: f32,
    /// Largest allowed zoom factor.
    #[schemars(title = "Max Zoom", range(min = 1.0, max = 100.0), extend("step" = 1.0))]
    pub max_zoom: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            target: Vec3::ZERO,
            radius: 10.0,
            zoom: 1.0,
            min_zoom: 0.05,
            max_zoom: 20.0,
        }
    }
}

impl CameraOptions {
    /// Check that the options describe an eye strictly outside the target.
    pub fn validate(&self) -> Result<(), ArcballError> {
        if !self.target.is_finite() {
            return Err(ArcballError::InvalidOptions(format!(
                "target {} is not finite",
                self.target
            )));
        }
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(ArcballError::InvalidOptions(format!(
                "radius must be positive, got {}",
                self.radius
            )));
        }
        if !(self.min_zoom.is_finite()
            && self.max_zoom.is_finite()
            && self.min_zoom > 0.0
            && self.min_zoom <= self.max_zoom)
        {
            return Err(ArcballError::InvalidOptions(format!(
                "zoom range [{}, {}] is empty or non-positive",
                self.min_zoom, self.max_zoom
            )));
        }
        if !(self.min_zoom..=self.max_zoom).contains(&self.zoom) {
            return Err(ArcballError::InvalidOptions(format!(
                "initial zoom {} outside [{}, {}]",
                self.zoom, self.min_zoom, self.max_zoom
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(CameraOptions::default().validate().is_ok());
    }

    #[test]
    fn rejects_degenerate_orbits() {
        let bad = [
            CameraOptions {
                radius: 0.0,
                ..Default::default()
            },
            CameraOptions {
                radius: f32::NAN,
                ..Default::default()
            },
            CameraOptions {
                min_zoom: 0.0,
                ..Default::default()
            },
            CameraOptions {
                min_zoom: 5.0,
                max_zoom: 2.0,
                ..Default::default()
            },
            CameraOptions {
                zoom: 50.0,
                ..Default::default()
            },
            CameraOptions {
                target: Vec3::new(f32::INFINITY, 0.0, 0.0),
                ..Default::default()
            },
        ];
        for options in bad {
            assert!(
                matches!(options.validate(), Err(ArcballError::InvalidOptions(_))),
                "{options:?} should be rejected"
            );
        }
    }
}
