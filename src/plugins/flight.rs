use bevy::input::InputSystem;
use bevy::prelude::*;

use crate::resources::{
    ConfigError, Diagnostics, FlightConfig, FlightFault, FlightInput, KeyBindings, SessionState,
};
use crate::systems::{
    diagnostics_toggle_system, flight_tick_system, keyboard_control_system, mouse_aim_system,
    mouse_capture_system, on_pause, on_resume, session_control_system, ship_transform_sync_system,
    spawn_player_ship,
};

/// Flight simulation stages, run on the fixed timestep
#[derive(Debug, Hash, PartialEq, Eq, Clone, SystemSet)]
pub enum FlightSet {
    Integrate,
    Present,
}

/// Player ship, input collection, session gating and the flight tick.
#[derive(Default)]
pub struct FlightPlugin {
    config: FlightConfig,
}

impl FlightPlugin {
    pub fn with_config(config: FlightConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }
}

impl Plugin for FlightPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.config.tuning.clone())
            .insert_resource(Diagnostics::new(self.config.diagnostics_enabled))
            .init_resource::<FlightInput>()
            .init_resource::<KeyBindings>()
            .init_state::<SessionState>()
            .add_event::<FlightFault>();

        // Every fixed step is one unit tick of the integrator
        app.insert_resource(Time::<Fixed>::from_hz(self.config.tick_rate_hz));

        app.configure_sets(
            FixedUpdate,
            (FlightSet::Integrate, FlightSet::Present).chain(),
        );

        app.add_systems(Startup, spawn_player_ship)
            .add_systems(
                PreUpdate,
                (
                    session_control_system,
                    diagnostics_toggle_system,
                    mouse_capture_system,
                    keyboard_control_system,
                    mouse_aim_system,
                )
                    .chain()
                    .after(InputSystem),
            )
            .add_systems(OnEnter(SessionState::Paused), on_pause)
            .add_systems(
                OnTransition {
                    exited: SessionState::Paused,
                    entered: SessionState::Active,
                },
                on_resume,
            )
            .add_systems(
                FixedUpdate,
                (
                    flight_tick_system
                        .in_set(FlightSet::Integrate)
                        .run_if(in_state(SessionState::Active)),
                    ship_transform_sync_system.in_set(FlightSet::Present),
                ),
            );

        info!(
            "Flight plugin ready: {} Hz, pitch clamp {:?}",
            self.config.tick_rate_hz, self.config.tuning.pitch_clamp
        );
    }
}
