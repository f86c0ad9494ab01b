use bevy::prelude::*;

use crate::components::ShipState;
use crate::utils::{to_render_quat, to_render_vec};

/// Copy the simulated pose onto the scene-graph transform.
pub fn ship_transform_sync_system(mut query: Query<(&ShipState, &mut Transform)>) {
    for (state, mut transform) in query.iter_mut() {
        transform.translation = to_render_vec(&state.position);
        transform.rotation = to_render_quat(&state.orientation);
    }
}
