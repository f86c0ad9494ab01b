use bevy::prelude::*;

use crate::resources::{diagnostics_enabled, ShipTelemetry};
use crate::systems::{draw_debug_vectors_system, telemetry_system};

/// Debug arrows and telemetry, active while diagnostics are switched on.
pub struct DiagnosticsPlugin;

impl Plugin for DiagnosticsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ShipTelemetry>().add_systems(
            Update,
            (draw_debug_vectors_system, telemetry_system).run_if(diagnostics_enabled),
        );
    }
}
