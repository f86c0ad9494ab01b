pub mod camera;
pub mod controller;
pub mod debug;
pub mod ship;

pub use camera::{CameraPose, ChaseCamera};
pub use controller::PlayerController;
pub use debug::{DebugVector, DebugVectors};
pub use ship::ShipState;
