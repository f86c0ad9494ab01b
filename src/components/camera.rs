use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::utils::CHASE_CAMERA_OFFSET;

/// Camera rigidly attached behind and above the player craft.
#[derive(Component, Debug, Clone, Serialize, Deserialize)]
pub struct ChaseCamera {
    /// Offset in the craft's body frame
    pub offset: Vector3<f64>,
}

impl Default for ChaseCamera {
    fn default() -> Self {
        Self {
            offset: CHASE_CAMERA_OFFSET,
        }
    }
}

/// World-space camera placement derived from the ship state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraPose {
    pub position: Vector3<f64>,
    pub look_at: Vector3<f64>,
}
