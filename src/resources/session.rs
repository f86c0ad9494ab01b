use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::components::ShipState;
use crate::utils::YxzAngles;

/// Whether the simulation is advancing.
#[derive(States, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SessionState {
    #[default]
    Active,
    Paused,
}

/// Debug visualisation switch.
#[derive(Resource, Debug, Clone, Default)]
pub struct Diagnostics {
    pub enabled: bool,
}

impl Diagnostics {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        self.enabled
    }
}

/// Run condition for diagnostics-only systems.
pub fn diagnostics_enabled(diagnostics: Res<Diagnostics>) -> bool {
    diagnostics.enabled
}

/// Read-only readout of the player ship for overlays.
#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShipTelemetry {
    pub speed: f64,
    pub position: Vector3<f64>,
    pub rotation: YxzAngles,
}

impl ShipTelemetry {
    pub fn from_state(state: &ShipState) -> Self {
        Self {
            speed: state.speed(),
            position: state.position,
            rotation: state.euler_angles(),
        }
    }
}

/// Raised when the ship state had to be reset after becoming unusable.
#[derive(Event, Debug, Clone)]
pub struct FlightFault {
    pub reason: String,
}
