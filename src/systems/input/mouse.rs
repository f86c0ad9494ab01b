use bevy::input::mouse::MouseMotion;
use bevy::prelude::*;

use crate::resources::{FlightInput, KeyBindings, SessionState};

/// Accumulate pointer travel into the aim deltas.
///
/// Events are always drained so that motion seen while paused or unlocked
/// never reaches a later tick.
pub fn mouse_aim_system(
    mut motion: EventReader<MouseMotion>,
    session: Res<State<SessionState>>,
    mut input: ResMut<FlightInput>,
) {
    let engaged = *session.get() == SessionState::Active && input.mouse_aim_active();

    for event in motion.read() {
        if engaged {
            input.accumulate_aim(event.delta.x as f64, event.delta.y as f64);
        }
    }
}

/// Engage mouse aim on click while flying.
pub fn mouse_capture_system(
    mouse: Res<ButtonInput<MouseButton>>,
    bindings: Res<KeyBindings>,
    session: Res<State<SessionState>>,
    mut input: ResMut<FlightInput>,
) {
    if *session.get() == SessionState::Active
        && !input.mouse_aim_active()
        && mouse.just_pressed(bindings.engage_aim)
    {
        input.set_mouse_aim(true);
        info!("Mouse aim engaged");
    }
}
