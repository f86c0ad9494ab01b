use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::FlightError;

/// One tick's worth of control input. Built once before the tick begins and
/// never mutated while it runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlInput {
    pub forward: bool,
    pub backward: bool,
    pub strafe_left: bool,
    pub strafe_right: bool,
    pub roll_left: bool,
    pub roll_right: bool,
    pub boost: bool,
    pub mouse_aim_active: bool,
    /// Horizontal pointer travel since the previous tick, pixels
    pub aim_delta_x: f64,
    /// Vertical pointer travel since the previous tick, pixels
    pub aim_delta_y: f64,
}

impl ControlInput {
    pub fn validate(&self) -> Result<(), FlightError> {
        for (field, value) in [
            ("aim_delta_x", self.aim_delta_x),
            ("aim_delta_y", self.aim_delta_y),
        ] {
            if !value.is_finite() {
                return Err(FlightError::NonFiniteInput { field, value });
            }
        }
        Ok(())
    }
}

/// Live input accumulator fed by the platform input systems.
#[derive(Resource, Debug, Clone, Default)]
pub struct FlightInput {
    pending: ControlInput,
}

impl FlightInput {
    pub fn pending(&self) -> &ControlInput {
        &self.pending
    }

    pub fn pending_mut(&mut self) -> &mut ControlInput {
        &mut self.pending
    }

    pub fn mouse_aim_active(&self) -> bool {
        self.pending.mouse_aim_active
    }

    pub fn set_mouse_aim(&mut self, active: bool) {
        self.pending.mouse_aim_active = active;
    }

    pub fn accumulate_aim(&mut self, dx: f64, dy: f64) {
        self.pending.aim_delta_x += dx;
        self.pending.aim_delta_y += dy;
    }

    pub fn reset_aim(&mut self) {
        self.pending.aim_delta_x = 0.0;
        self.pending.aim_delta_y = 0.0;
    }

    /// Copy out the input for one tick and zero the consumed aim deltas.
    pub fn take_snapshot(&mut self) -> ControlInput {
        let snapshot = self.pending;
        self.reset_aim();
        snapshot
    }
}

/// Keyboard layout for the flight controls.
#[derive(Resource, Debug, Clone)]
pub struct KeyBindings {
    pub forward: KeyCode,
    pub backward: KeyCode,
    pub strafe_left: KeyCode,
    pub strafe_right: KeyCode,
    pub roll_left: KeyCode,
    pub roll_right: KeyCode,
    pub boost: Vec<KeyCode>,
    pub pause: KeyCode,
    pub resume: KeyCode,
    pub toggle_diagnostics: KeyCode,
    pub engage_aim: MouseButton,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            forward: KeyCode::KeyW,
            backward: KeyCode::KeyS,
            strafe_left: KeyCode::KeyA,
            strafe_right: KeyCode::KeyD,
            roll_left: KeyCode::KeyQ,
            roll_right: KeyCode::KeyE,
            boost: vec![KeyCode::ShiftLeft, KeyCode::ShiftRight],
            pause: KeyCode::Escape,
            resume: KeyCode::Enter,
            toggle_diagnostics: KeyCode::KeyM,
            engage_aim: MouseButton::Left,
        }
    }
}
