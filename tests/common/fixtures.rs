use nalgebra::Vector3;
use rand::{rngs::StdRng, Rng, SeedableRng};
use spaceflight::{
    components::ShipState,
    resources::{ControlInput, TuningConstants},
    utils::YxzAngles,
};

pub const SEED: u64 = 0x5EED;

pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(SEED)
}

/// Handling constants used by the boost saturation scenario
pub fn boost_test_tuning() -> TuningConstants {
    TuningConstants {
        linear_acceleration: 0.04,
        boost_multiplier: 2.0,
        max_linear_speed: 2.0,
        boost_speed_factor: 1.5,
        ..Default::default()
    }
}

pub fn random_vector(rng: &mut StdRng, scale: f64) -> Vector3<f64> {
    Vector3::new(
        rng.gen_range(-scale..scale),
        rng.gen_range(-scale..scale),
        rng.gen_range(-scale..scale),
    )
}

/// Attitude with pitch inside `pitch_bound`
pub fn random_attitude(rng: &mut StdRng, pitch_bound: f64) -> YxzAngles {
    YxzAngles::new(
        rng.gen_range(-pitch_bound..pitch_bound),
        rng.gen_range(-std::f64::consts::PI..std::f64::consts::PI),
        rng.gen_range(-std::f64::consts::PI..std::f64::consts::PI),
    )
}

/// A ship parked somewhere with an arbitrary attitude and no motion
pub fn random_resting_ship(rng: &mut StdRng) -> ShipState {
    ShipState {
        position: random_vector(rng, 500.0),
        orientation: random_attitude(rng, 1.0).to_quaternion(),
        ..Default::default()
    }
}

pub fn random_control_input(rng: &mut StdRng) -> ControlInput {
    ControlInput {
        forward: rng.gen_bool(0.5),
        backward: rng.gen_bool(0.2),
        strafe_left: rng.gen_bool(0.3),
        strafe_right: rng.gen_bool(0.3),
        roll_left: rng.gen_bool(0.3),
        roll_right: rng.gen_bool(0.3),
        boost: rng.gen_bool(0.3),
        mouse_aim_active: rng.gen_bool(0.8),
        aim_delta_x: rng.gen_range(-2000.0..2000.0),
        aim_delta_y: rng.gen_range(-2000.0..2000.0),
    }
}
