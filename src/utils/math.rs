use bevy::math::{Quat, Vec3};
use nalgebra::{Unit, UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

use crate::utils::constants::{BODY_FORWARD, BODY_RIGHT, GIMBAL_LOCK_THRESHOLD, WORLD_UP};

/// Euler angles in yaw-then-pitch-then-roll (intrinsic Y, X, Z) order.
///
/// `pitch` rotates about body X, `yaw` about Y and `roll` about Z, matching
/// the channel layout of the ship's angular velocity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct YxzAngles {
    pub pitch: f64,
    pub yaw: f64,
    pub roll: f64,
}

impl YxzAngles {
    pub fn new(pitch: f64, yaw: f64, roll: f64) -> Self {
        Self { pitch, yaw, roll }
    }

    /// Interpret a body-rate vector `(pitch, yaw, roll)` as an angle triple.
    pub fn from_rates(rates: &Vector3<f64>) -> Self {
        Self::new(rates.x, rates.y, rates.z)
    }

    /// Decompose a rotation. Near the singularity (pitch at +-90 deg) roll is
    /// folded into yaw and reported as zero.
    pub fn from_quaternion(q: &UnitQuaternion<f64>) -> Self {
        let rotation = q.to_rotation_matrix();
        let m = rotation.matrix();

        let m23 = m[(1, 2)];
        let pitch = (-m23.clamp(-1.0, 1.0)).asin();

        if m23.abs() < GIMBAL_LOCK_THRESHOLD {
            Self {
                pitch,
                yaw: m[(0, 2)].atan2(m[(2, 2)]),
                roll: m[(1, 0)].atan2(m[(1, 1)]),
            }
        } else {
            Self {
                pitch,
                yaw: (-m[(2, 0)]).atan2(m[(0, 0)]),
                roll: 0.0,
            }
        }
    }

    pub fn to_quaternion(&self) -> UnitQuaternion<f64> {
        UnitQuaternion::from_axis_angle(&Vector3::y_axis(), self.yaw)
            * UnitQuaternion::from_axis_angle(&Vector3::x_axis(), self.pitch)
            * UnitQuaternion::from_axis_angle(&Vector3::z_axis(), self.roll)
    }
}

/// Rescale `v` so its magnitude does not exceed `max`. Zero vectors are left alone.
pub fn clamp_magnitude(v: &mut Vector3<f64>, max: f64) {
    let norm = v.norm();
    if norm > max && norm > 0.0 {
        *v *= max / norm;
    }
}

/// Nose elevation above the world horizontal plane, in radians.
///
/// Equal to the pitch component of [`YxzAngles::from_quaternion`].
pub fn nose_elevation(q: &UnitQuaternion<f64>) -> f64 {
    let forward = q.transform_vector(&BODY_FORWARD);
    forward.y.clamp(-1.0, 1.0).asin()
}

/// Clamp pitch by decomposing into YXZ Euler angles and re-encoding.
pub fn clamp_pitch_euler(q: &UnitQuaternion<f64>, limit: f64) -> UnitQuaternion<f64> {
    let mut angles = YxzAngles::from_quaternion(q);
    if angles.pitch.abs() <= limit {
        return *q;
    }
    angles.pitch = angles.pitch.clamp(-limit, limit);
    angles.to_quaternion()
}

/// Clamp pitch by swinging the nose back to the limit about the horizontal
/// axis perpendicular to it. Heading and the twist about the nose are kept.
pub fn clamp_pitch_swing(q: &UnitQuaternion<f64>, limit: f64) -> UnitQuaternion<f64> {
    let elevation = nose_elevation(q);
    let clamped = elevation.clamp(-limit, limit);
    if clamped == elevation {
        return *q;
    }

    let forward = q.transform_vector(&BODY_FORWARD);
    let axis = Unit::try_new(forward.cross(&WORLD_UP), 1e-9)
        .unwrap_or_else(|| Unit::new_normalize(q.transform_vector(&BODY_RIGHT)));

    UnitQuaternion::from_axis_angle(&axis, clamped - elevation) * q
}

/// Convert a simulation vector into render space.
#[inline]
pub fn to_render_vec(v: &Vector3<f64>) -> Vec3 {
    Vec3::new(v.x as f32, v.y as f32, v.z as f32)
}

/// Convert a simulation attitude into a render rotation.
#[inline]
pub fn to_render_quat(q: &UnitQuaternion<f64>) -> Quat {
    let c = q.quaternion().coords;
    Quat::from_xyzw(c.x as f32, c.y as f32, c.z as f32, c.w as f32)
}
