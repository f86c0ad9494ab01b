mod camera;
mod diagnostics;
mod flight;

pub use camera::ChaseCameraPlugin;
pub use diagnostics::DiagnosticsPlugin;
pub use flight::{FlightPlugin, FlightSet};
