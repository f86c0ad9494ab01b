use nalgebra::{UnitQuaternion, Vector3};

use crate::components::ShipState;
use crate::resources::{ControlInput, TuningConstants};
use crate::utils::{clamp_magnitude, FlightError, YxzAngles, REVERSE_THRUST_FACTOR};

/// Advance the ship by one unit time step.
///
/// The input is validated before anything is touched; on error the state is
/// left exactly as it was. `constants` are expected to have passed
/// [`TuningConstants::validate`].
pub fn tick(
    state: &mut ShipState,
    input: &ControlInput,
    constants: &TuningConstants,
) -> Result<(), FlightError> {
    input.validate()?;

    integrate_linear(state, input, constants);
    integrate_angular(state, input, constants);

    Ok(())
}

/// +1 when only `positive` is held, -1 when only `negative` is, 0 otherwise.
fn axis(positive: bool, negative: bool) -> f64 {
    match (positive, negative) {
        (true, false) => 1.0,
        (false, true) => -1.0,
        _ => 0.0,
    }
}

fn integrate_linear(state: &mut ShipState, input: &ControlInput, constants: &TuningConstants) {
    // Thrust axes come from the attitude at the start of the tick
    let forward = state.forward();
    let right = state.right();

    let boost = if input.boost {
        constants.boost_multiplier
    } else {
        1.0
    };

    state.linear_velocity *= constants.linear_damping;

    if input.forward {
        state.linear_velocity += forward * (constants.linear_acceleration * boost);
    }
    if input.backward {
        state.linear_velocity +=
            forward * (-constants.linear_acceleration * REVERSE_THRUST_FACTOR * boost);
    }

    let strafe = axis(input.strafe_right, input.strafe_left);
    if strafe != 0.0 {
        let thrust = constants.linear_acceleration * constants.strafe_acceleration_factor;
        state.linear_velocity += right * (strafe * thrust * boost);
    }

    clamp_magnitude(&mut state.linear_velocity, constants.speed_limit(input.boost));

    state.position += state.linear_velocity;
}

fn integrate_angular(state: &mut ShipState, input: &ControlInput, constants: &TuningConstants) {
    let roll = axis(input.roll_left, input.roll_right);
    if roll != 0.0 {
        state.angular_velocity.z += roll * constants.roll_acceleration;
    }

    if input.mouse_aim_active {
        let target_yaw = -input.aim_delta_x * constants.aim_sensitivity;
        let target_pitch = -input.aim_delta_y * constants.aim_sensitivity;

        let rates = &mut state.angular_velocity;
        rates.y += (target_yaw - rates.y) * constants.aim_smoothing;
        rates.x += (target_pitch - rates.x) * constants.aim_smoothing;
    }
    clamp_magnitude(&mut state.angular_velocity, constants.max_angular_speed);

    state.angular_velocity *= constants.angular_damping;

    if state.angular_velocity != Vector3::zeros() {
        // Body-frame increment: right-multiply onto the current attitude
        let delta = YxzAngles::from_rates(&state.angular_velocity).to_quaternion();
        let attitude = state.orientation * delta;
        state.orientation = UnitQuaternion::from_quaternion(attitude.into_inner().normalize());
    }

    state.orientation = constants
        .pitch_clamp
        .apply(&state.orientation, constants.pitch_limit);
}
