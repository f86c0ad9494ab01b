pub mod config;
mod input;
mod session;

pub use config::{ConfigError, FlightConfig, PitchClampMode, TuningConstants};
pub use input::{ControlInput, FlightInput, KeyBindings};
pub use session::{diagnostics_enabled, Diagnostics, FlightFault, SessionState, ShipTelemetry};
