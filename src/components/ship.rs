use bevy::prelude::*;
use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

use crate::utils::{FlightError, YxzAngles, BODY_FORWARD, BODY_RIGHT, ORIENTATION_NORM_TOLERANCE};

/// Kinematic state of the player craft.
///
/// Written only by the flight tick; everything else reads it.
#[derive(Component, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShipState {
    /// Position in world space
    pub position: Vector3<f64>,

    /// Attitude quaternion (rotation from body to world frame)
    pub orientation: UnitQuaternion<f64>,

    /// Linear velocity in world space, per tick
    pub linear_velocity: Vector3<f64>,

    /// Body rates per tick, channels (pitch, yaw, roll)
    pub angular_velocity: Vector3<f64>,
}

impl Default for ShipState {
    fn default() -> Self {
        Self {
            position: Vector3::zeros(),
            orientation: UnitQuaternion::identity(),
            linear_velocity: Vector3::zeros(),
            angular_velocity: Vector3::zeros(),
        }
    }
}

impl ShipState {
    pub fn at_position(position: Vector3<f64>) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Unit nose direction in world space.
    pub fn forward(&self) -> Vector3<f64> {
        self.orientation.transform_vector(&BODY_FORWARD)
    }

    /// Unit starboard direction in world space.
    pub fn right(&self) -> Vector3<f64> {
        self.orientation.transform_vector(&BODY_RIGHT)
    }

    pub fn speed(&self) -> f64 {
        self.linear_velocity.norm()
    }

    pub fn euler_angles(&self) -> YxzAngles {
        YxzAngles::from_quaternion(&self.orientation)
    }

    /// Check that the state can still be integrated.
    pub fn validate(&self) -> Result<(), FlightError> {
        let vectors = [
            ("position", &self.position),
            ("linear velocity", &self.linear_velocity),
            ("angular velocity", &self.angular_velocity),
        ];
        for (name, v) in vectors {
            if !v.iter().all(|c| c.is_finite()) {
                return Err(FlightError::CorruptState(format!("{} {:?}", name, v)));
            }
        }

        let norm = self.orientation.quaternion().norm();
        if !norm.is_finite() || (norm - 1.0).abs() > ORIENTATION_NORM_TOLERANCE {
            return Err(FlightError::CorruptState(format!("orientation norm {}", norm)));
        }

        Ok(())
    }
}
