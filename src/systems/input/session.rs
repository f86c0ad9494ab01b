use bevy::prelude::*;

use crate::resources::{FlightInput, KeyBindings, SessionState};

pub fn session_control_system(
    keyboard: Res<ButtonInput<KeyCode>>,
    bindings: Res<KeyBindings>,
    session: Res<State<SessionState>>,
    mut next_session: ResMut<NextState<SessionState>>,
) {
    match session.get() {
        SessionState::Active if keyboard.just_pressed(bindings.pause) => {
            next_session.set(SessionState::Paused);
        }
        SessionState::Paused if keyboard.just_pressed(bindings.resume) => {
            next_session.set(SessionState::Active);
        }
        _ => {}
    }
}

pub fn on_pause(mut input: ResMut<FlightInput>) {
    input.set_mouse_aim(false);
    info!("Flight session paused");
}

/// Drop any aim travel gathered before the resume so the first tick does
/// not snap the camera.
pub fn on_resume(mut input: ResMut<FlightInput>) {
    input.reset_aim();
    input.set_mouse_aim(true);
    info!("Flight session resumed");
}
