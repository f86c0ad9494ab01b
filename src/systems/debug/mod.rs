use bevy::prelude::*;
use nalgebra::Unit;

use crate::components::{DebugVector, DebugVectors, PlayerController, ShipState};
use crate::resources::ShipTelemetry;
use crate::utils::{to_render_vec, FORWARD_ARROW_LENGTH, VELOCITY_ARROW_SCALE};

const TELEMETRY_LOG_INTERVAL: u32 = 60;

/// Velocity and nose arrows anchored at the ship.
pub fn compute_vectors(state: &ShipState) -> DebugVectors {
    let speed = state.linear_velocity.norm();
    let velocity = if speed > 0.0 {
        DebugVector {
            origin: state.position,
            direction: Some(Unit::new_normalize(state.linear_velocity)),
            length: speed * VELOCITY_ARROW_SCALE,
        }
    } else {
        DebugVector {
            origin: state.position,
            direction: None,
            length: 0.0,
        }
    };

    DebugVectors {
        velocity,
        forward: DebugVector {
            origin: state.position,
            direction: Some(Unit::new_normalize(state.forward())),
            length: FORWARD_ARROW_LENGTH,
        },
    }
}

pub fn draw_debug_vectors_system(
    mut gizmos: Gizmos,
    query: Query<&ShipState, With<PlayerController>>,
) {
    for state in query.iter() {
        let vectors = compute_vectors(state);
        let arrows = [
            (vectors.velocity, Color::srgb(1.0, 0.0, 0.0)),
            (vectors.forward, Color::srgb(0.0, 1.0, 0.0)),
        ];
        for (vector, color) in arrows {
            if let Some(tip) = vector.tip() {
                gizmos.arrow(to_render_vec(&vector.origin), to_render_vec(&tip), color);
            }
        }
    }
}

pub fn telemetry_system(
    query: Query<&ShipState, With<PlayerController>>,
    mut telemetry: ResMut<ShipTelemetry>,
    mut frames: Local<u32>,
) {
    let Ok(state) = query.get_single() else {
        return;
    };
    *telemetry = ShipTelemetry::from_state(state);

    *frames += 1;
    if *frames % TELEMETRY_LOG_INTERVAL == 0 {
        debug!(
            "speed: {:.2}, position: ({:.1}, {:.1}, {:.1}), rotation: ({:.2}, {:.2}, {:.2})",
            telemetry.speed,
            telemetry.position.x,
            telemetry.position.y,
            telemetry.position.z,
            telemetry.rotation.pitch,
            telemetry.rotation.yaw,
            telemetry.rotation.roll
        );
    }
}
