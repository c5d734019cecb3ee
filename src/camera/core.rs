use glam::{Mat4, Quat, Vec3};

/// Fixed world-up used for the look-at basis.
pub const WORLD_UP: Vec3 = Vec3::Y;

/// `|forward . up|` above this means the look-at basis has collapsed.
const DEGENERATE_ALIGNMENT: f32 = 1.0 - 1e-6;

/// Look-at camera derived from the orbit state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Look-at target position.
    pub target: Vec3,
    /// Up direction vector.
    pub up: Vec3,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform layout for the view transform.
pub struct ViewUniform {
    /// Column-major view matrix.
    pub view: [[f32; 4]; 4],
    /// Camera world-space position.
    pub eye: [f32; 3],
    /// Eye-to-target distance.
    pub distance: f32,
}

impl Camera {
    /// Place the eye at `distance` along `orientation * +Z` from `target`.
    ///
    /// With the identity orientation the camera sits on the +Z axis looking
    /// down -Z at the target.
    #[must_use]
    pub fn orbit(target: Vec3, orientation: Quat, distance: f32) -> Self {
        let offset = Vec3::new(0.0, 0.0, distance);
        Self {
            eye: target + orientation * offset,
            target,
            up: WORLD_UP,
        }
    }

    /// Right-handed look-at view matrix.
    ///
    /// Undefined (non-finite) when the view direction is parallel to `up`;
    /// see [`Camera::is_degenerate`].
    #[must_use]
    pub fn build_view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Whether the view direction is (anti)parallel to `up`.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        let forward = (self.target - self.eye).normalize_or_zero();
        forward.dot(self.up).abs() > DEGENERATE_ALIGNMENT
    }
}

impl ViewUniform {
    /// Uniform for the given camera and its view matrix.
    #[must_use]
    pub fn new(camera: &Camera, view: Mat4) -> Self {
        Self {
            view: view.to_cols_array_2d(),
            eye: camera.eye.to_array(),
            distance: camera.eye.distance(camera.target),
        }
    }
}

impl Default for ViewUniform {
    fn default() -> Self {
        Self {
            view: Mat4::IDENTITY.to_cols_array_2d(),
            eye: [0.0; 3],
            distance: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use super::*;

    #[test]
    fn identity_orbit_sits_on_positive_z() {
        let camera = Camera::orbit(Vec3::new(1.0, 2.0, 3.0), Quat::IDENTITY, 5.0);
        assert_eq!(camera.eye, Vec3::new(1.0, 2.0, 8.0));
        assert!(!camera.is_degenerate());
    }

    #[test]
    fn view_maps_target_onto_negative_z_axis() {
        let camera = Camera::orbit(
            Vec3::ZERO,
            Quat::from_rotation_y(0.7) * Quat::from_rotation_x(-0.3),
            10.0,
        );
        let in_view = camera.build_view().transform_point3(camera.target);
        assert!(in_view.x.abs() < 1e-4 && in_view.y.abs() < 1e-4);
        assert!((in_view.z + 10.0).abs() < 1e-4, "got {in_view}");
    }

    #[test]
    fn looking_straight_down_is_flagged_degenerate() {
        let camera =
            Camera::orbit(Vec3::ZERO, Quat::from_rotation_x(-FRAC_PI_2), 10.0);
        assert!((camera.eye - Vec3::new(0.0, 10.0, 0.0)).length() < 1e-4);
        assert!(camera.is_degenerate());
    }

    #[test]
    fn uniform_is_tightly_packed() {
        let camera = Camera::orbit(Vec3::ZERO, Quat::IDENTITY, 4.0);
        let uniform = ViewUniform::new(&camera, camera.build_view());
        assert_eq!(uniform.eye, [0.0, 0.0, 4.0]);
        assert_eq!(uniform.distance, 4.0);
        assert_eq!(bytemuck::bytes_of(&uniform).len(), 80);
    }
}
