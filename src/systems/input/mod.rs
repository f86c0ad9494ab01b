mod keyboard;
mod mouse;
mod session;

pub use keyboard::{diagnostics_toggle_system, keyboard_control_system};
pub use mouse::{mouse_aim_system, mouse_capture_system};
pub use session::{on_pause, on_resume, session_control_system};
