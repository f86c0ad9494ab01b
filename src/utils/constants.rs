use nalgebra::Vector3;

/// Body-frame nose direction (the craft flies towards -Z).
pub const BODY_FORWARD: Vector3<f64> = Vector3::new(0.0, 0.0, -1.0);
/// Body-frame starboard direction.
pub const BODY_RIGHT: Vector3<f64> = Vector3::new(1.0, 0.0, 0.0);
/// World up, used for nose elevation and camera up.
pub const WORLD_UP: Vector3<f64> = Vector3::new(0.0, 1.0, 0.0);

/// Chase camera offset expressed in the craft's body frame.
pub const CHASE_CAMERA_OFFSET: Vector3<f64> = Vector3::new(0.0, 3.0, 10.0);

/// Reverse thrust relative to forward thrust.
pub const REVERSE_THRUST_FACTOR: f64 = 0.5;

/// Debug arrow scale applied to the velocity magnitude.
pub const VELOCITY_ARROW_SCALE: f64 = 2.0;
/// Debug arrow length for the nose direction.
pub const FORWARD_ARROW_LENGTH: f64 = 3.0;

/// |sin(pitch)| above which the YXZ decomposition is treated as gimbal locked.
pub const GIMBAL_LOCK_THRESHOLD: f64 = 0.999_999_9;

/// Tolerance on |orientation| before the state is considered corrupt.
pub const ORIENTATION_NORM_TOLERANCE: f64 = 1e-6;

pub const DEFAULT_TICK_RATE_HZ: f64 = 60.0;
