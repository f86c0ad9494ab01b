use spaceflight::{components::ShipState, resources::TuningConstants, utils::nose_elevation};

const EPSILON: f64 = 1e-9;

/// Assert every component of the ship state is finite
#[track_caller]
pub fn assert_ship_finite(state: &ShipState) {
    assert!(
        state.position.iter().all(|v| v.is_finite()),
        "Position is not finite: {:?}",
        state.position
    );
    assert!(
        state.linear_velocity.iter().all(|v| v.is_finite()),
        "Velocity is not finite: {:?}",
        state.linear_velocity
    );
    assert!(
        state.angular_velocity.iter().all(|v| v.is_finite()),
        "Angular velocity is not finite: {:?}",
        state.angular_velocity
    );
}

/// Assert the invariants that must hold after every tick
#[track_caller]
pub fn assert_ship_invariants(state: &ShipState, tuning: &TuningConstants, boosting: bool) {
    assert_ship_finite(state);

    let norm = state.orientation.quaternion().norm();
    assert!(
        (norm - 1.0).abs() < EPSILON,
        "Orientation drifted from unit length: {}",
        norm
    );

    let speed_limit = tuning.speed_limit(boosting);
    assert!(
        state.speed() <= speed_limit + EPSILON,
        "Speed {} exceeds limit {}",
        state.speed(),
        speed_limit
    );

    assert!(
        state.angular_velocity.norm() <= tuning.max_angular_speed + EPSILON,
        "Angular speed {} exceeds limit {}",
        state.angular_velocity.norm(),
        tuning.max_angular_speed
    );

    let pitch = nose_elevation(&state.orientation);
    assert!(
        pitch.abs() <= tuning.pitch_limit + EPSILON,
        "Pitch {} exceeds limit {}",
        pitch,
        tuning.pitch_limit
    );
}
