use bevy::prelude::*;

use crate::resources::{Diagnostics, FlightInput, KeyBindings};

/// Mirror the held flight keys into the pending control input.
pub fn keyboard_control_system(
    keyboard: Res<ButtonInput<KeyCode>>,
    bindings: Res<KeyBindings>,
    mut input: ResMut<FlightInput>,
) {
    let controls = input.pending_mut();
    controls.forward = keyboard.pressed(bindings.forward);
    controls.backward = keyboard.pressed(bindings.backward);
    controls.strafe_left = keyboard.pressed(bindings.strafe_left);
    controls.strafe_right = keyboard.pressed(bindings.strafe_right);
    controls.roll_left = keyboard.pressed(bindings.roll_left);
    controls.roll_right = keyboard.pressed(bindings.roll_right);
    controls.boost = keyboard.any_pressed(bindings.boost.iter().copied());
}

pub fn diagnostics_toggle_system(
    keyboard: Res<ButtonInput<KeyCode>>,
    bindings: Res<KeyBindings>,
    mut diagnostics: ResMut<Diagnostics>,
) {
    if keyboard.just_pressed(bindings.toggle_diagnostics) {
        let enabled = diagnostics.toggle();
        info!("Diagnostics {}", if enabled { "enabled" } else { "disabled" });
    }
}
