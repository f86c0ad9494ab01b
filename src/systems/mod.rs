pub mod camera;
pub mod debug;
pub mod flight;
pub mod input;
mod render;

pub use camera::{chase_camera_system, compute_pose, compute_pose_with_offset};
pub use debug::{compute_vectors, draw_debug_vectors_system, telemetry_system};
pub use flight::{flight_tick_system, spawn_player_ship, tick};
pub use input::{
    diagnostics_toggle_system, keyboard_control_system, mouse_aim_system, mouse_capture_system,
    on_pause, on_resume, session_control_system,
};
pub use render::ship_transform_sync_system;
