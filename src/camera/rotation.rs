//! Minimal-angle rotations between sphere points and drift-free
//! accumulation.

use std::f32::consts::PI;

use glam::{Quat, Vec3};

/// `1 + dot(from, to)` below this is treated as antipodal.
const ANTIPODAL_EPSILON: f32 = 1e-6;

/// Squared length under which a fallback axis candidate is rejected.
const AXIS_EPSILON_SQ: f32 = 1e-12;

/// Quaternion of minimal angle taking unit vector `from` onto unit vector
/// `to`.
///
/// Uses the half-angle construction `w = s / 2`, `xyz = (from x to) / s`
/// with `s = sqrt(2 (1 + from . to))`, which needs no trig calls and stays
/// well conditioned for small angles. Nearly antipodal inputs get a 180°
/// turn about an axis orthogonal to `from`.
#[must_use]
pub fn minimal_rotation(from: Vec3, to: Vec3) -> Quat {
    let one_plus_dot = 1.0 + from.dot(to);

    if one_plus_dot < ANTIPODAL_EPSILON {
        return Quat::from_axis_angle(orthogonal_axis(from), PI);
    }

    let s = (2.0 * one_plus_dot).sqrt();
    let xyz = from.cross(to) / s;
    Quat::from_xyzw(xyz.x, xyz.y, xyz.z, s * 0.5).normalize()
}

/// Any unit axis perpendicular to `v`.
fn orthogonal_axis(v: Vec3) -> Vec3 {
    let axis = Vec3::X.cross(v);
    if axis.length_squared() >= AXIS_EPSILON_SQ {
        return axis.normalize();
    }
    // v is (anti)parallel to X, so Y can't be parallel to it.
    Vec3::Y.cross(v).normalize_or(Vec3::Z)
}

/// Apply `step` in world space on top of `orientation` and renormalize.
///
/// Left-multiplication orbits around the target as seen from the current
/// eye. The renormalization keeps repeated composition from drifting off
/// the unit sphere.
#[must_use]
pub fn compose_and_normalize(step: Quat, orientation: Quat) -> Quat {
    (step * orientation).normalize()
}
