use bevy::prelude::*;
use nalgebra::Vector3;

use crate::components::{CameraPose, ChaseCamera, PlayerController, ShipState};
use crate::utils::{to_render_vec, CHASE_CAMERA_OFFSET};

/// Chase camera pose with the default body-frame offset.
pub fn compute_pose(state: &ShipState) -> CameraPose {
    compute_pose_with_offset(state, &CHASE_CAMERA_OFFSET)
}

/// Camera pose rigidly attached to the craft: no lag, no smoothing.
pub fn compute_pose_with_offset(state: &ShipState, offset: &Vector3<f64>) -> CameraPose {
    CameraPose {
        position: state.position + state.orientation.transform_vector(offset),
        look_at: state.position,
    }
}

pub fn chase_camera_system(
    ship_query: Query<&ShipState, With<PlayerController>>,
    mut camera_query: Query<(&mut Transform, &ChaseCamera)>,
) {
    let Ok(state) = ship_query.get_single() else {
        return;
    };

    for (mut camera_transform, chase) in camera_query.iter_mut() {
        let pose = compute_pose_with_offset(state, &chase.offset);
        *camera_transform = Transform::from_translation(to_render_vec(&pose.position))
            .looking_at(to_render_vec(&pose.look_at), Vec3::Y);
    }
}
