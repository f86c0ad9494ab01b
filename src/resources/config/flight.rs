use bevy::prelude::*;
use nalgebra::UnitQuaternion;
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, FRAC_PI_3};
use std::path::Path;

use super::ConfigError;
use crate::utils::{clamp_pitch_euler, clamp_pitch_swing, DEFAULT_TICK_RATE_HZ};

/// How the pitch limit is enforced after each attitude update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PitchClampMode {
    /// Decompose to YXZ Euler angles, clamp pitch, re-encode.
    #[default]
    Euler,
    /// Swing the nose back to the limit; roll is never re-derived.
    Swing,
}

impl PitchClampMode {
    pub fn apply(&self, orientation: &UnitQuaternion<f64>, limit: f64) -> UnitQuaternion<f64> {
        match self {
            PitchClampMode::Euler => clamp_pitch_euler(orientation, limit),
            PitchClampMode::Swing => clamp_pitch_swing(orientation, limit),
        }
    }
}

/// Handling constants. All rates and accelerations are per tick.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TuningConstants {
    pub max_linear_speed: f64,
    pub linear_acceleration: f64,
    /// Strafe thrust as a fraction of forward thrust
    pub strafe_acceleration_factor: f64,
    pub linear_damping: f64,
    pub max_angular_speed: f64,
    /// Carried for configuration compatibility; the integrator does not read it.
    pub angular_acceleration: f64,
    pub roll_acceleration: f64,
    pub angular_damping: f64,
    /// Thrust multiplier while boosting
    pub boost_multiplier: f64,
    /// Top speed multiplier while boosting
    pub boost_speed_factor: f64,
    /// Target body rate per pixel of mouse travel
    pub aim_sensitivity: f64,
    pub aim_smoothing: f64,
    /// Maximum nose elevation, radians
    pub pitch_limit: f64,
    pub pitch_clamp: PitchClampMode,
}

impl Default for TuningConstants {
    fn default() -> Self {
        Self {
            max_linear_speed: 2.0,
            linear_acceleration: 0.04,
            strafe_acceleration_factor: 0.7,
            linear_damping: 0.98,
            max_angular_speed: 0.02,
            angular_acceleration: 0.0008,
            roll_acceleration: 0.0015,
            angular_damping: 0.95,
            boost_multiplier: 2.0,
            boost_speed_factor: 1.5,
            aim_sensitivity: 0.00002,
            aim_smoothing: 0.1,
            pitch_limit: FRAC_PI_3,
            pitch_clamp: PitchClampMode::Euler,
        }
    }
}

impl TuningConstants {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("max_linear_speed", self.max_linear_speed),
            ("linear_acceleration", self.linear_acceleration),
            ("strafe_acceleration_factor", self.strafe_acceleration_factor),
            ("linear_damping", self.linear_damping),
            ("max_angular_speed", self.max_angular_speed),
            ("angular_acceleration", self.angular_acceleration),
            ("roll_acceleration", self.roll_acceleration),
            ("angular_damping", self.angular_damping),
            ("boost_multiplier", self.boost_multiplier),
            ("boost_speed_factor", self.boost_speed_factor),
            ("aim_sensitivity", self.aim_sensitivity),
            ("aim_smoothing", self.aim_smoothing),
            ("pitch_limit", self.pitch_limit),
        ];

        for (name, value) in fields {
            if !value.is_finite() {
                return Err(ConfigError::ValidationError(format!(
                    "{} must be finite, got {}",
                    name, value
                )));
            }
            if value < 0.0 {
                return Err(ConfigError::ValidationError(format!(
                    "{} must not be negative, got {}",
                    name, value
                )));
            }
        }

        if self.max_linear_speed == 0.0 || self.max_angular_speed == 0.0 {
            return Err(ConfigError::ValidationError(
                "speed limits must be positive".to_string(),
            ));
        }

        for (name, value) in [
            ("linear_damping", self.linear_damping),
            ("angular_damping", self.angular_damping),
            ("aim_smoothing", self.aim_smoothing),
        ] {
            if value > 1.0 {
                return Err(ConfigError::ValidationError(format!(
                    "{} must lie in [0, 1], got {}",
                    name, value
                )));
            }
        }

        if self.boost_multiplier < 1.0 || self.boost_speed_factor < 1.0 {
            return Err(ConfigError::ValidationError(
                "boost factors must be at least 1".to_string(),
            ));
        }

        if self.pitch_limit <= 0.0 || self.pitch_limit >= FRAC_PI_2 {
            return Err(ConfigError::ValidationError(format!(
                "pitch_limit must lie in (0, pi/2), got {}",
                self.pitch_limit
            )));
        }

        Ok(())
    }

    /// Top speed for the current boost state.
    pub fn speed_limit(&self, boosting: bool) -> f64 {
        let boost = if boosting { self.boost_multiplier } else { 1.0 };
        self.max_linear_speed * if boost > 1.0 { self.boost_speed_factor } else { 1.0 }
    }
}

/// Session-wide flight configuration, loaded once at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightConfig {
    /// Simulation ticks per second; every tick is one unit time step
    pub tick_rate_hz: f64,
    pub diagnostics_enabled: bool,
    pub tuning: TuningConstants,
}

impl Default for FlightConfig {
    fn default() -> Self {
        Self {
            tick_rate_hz: DEFAULT_TICK_RATE_HZ,
            diagnostics_enabled: false,
            tuning: TuningConstants::default(),
        }
    }
}

impl FlightConfig {
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: FlightConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let file_contents = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_yaml(&file_contents)?;
        info!("Loaded flight config from {}", path.as_ref().display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.tick_rate_hz.is_finite() || self.tick_rate_hz <= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "tick_rate_hz must be positive, got {}",
                self.tick_rate_hz
            )));
        }
        self.tuning.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_defaults_are_valid() {
        assert!(FlightConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let yaml = r#"
tick_rate_hz: 120.0
tuning:
  max_linear_speed: 5.0
  pitch_clamp: swing
"#;
        let config = FlightConfig::from_yaml(yaml).unwrap();

        assert_eq!(config.tick_rate_hz, 120.0);
        assert_eq!(config.tuning.max_linear_speed, 5.0);
        assert_eq!(config.tuning.pitch_clamp, PitchClampMode::Swing);
        assert_eq!(config.tuning.linear_damping, 0.98);
        assert!(!config.diagnostics_enabled);
    }

    #[test]
    fn test_rejects_invalid_values() {
        let mut tuning = TuningConstants::default();
        tuning.linear_damping = 1.5;
        assert!(matches!(tuning.validate(), Err(ConfigError::ValidationError(_))));

        let mut tuning = TuningConstants::default();
        tuning.aim_sensitivity = f64::NAN;
        assert!(tuning.validate().is_err());

        let mut tuning = TuningConstants::default();
        tuning.pitch_limit = FRAC_PI_2;
        assert!(tuning.validate().is_err());

        let mut tuning = TuningConstants::default();
        tuning.boost_multiplier = 0.5;
        assert!(tuning.validate().is_err());

        let config = FlightConfig {
            tick_rate_hz: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_malformed_yaml() {
        let result = FlightConfig::from_yaml("tuning: [1, 2");
        assert!(matches!(result, Err(ConfigError::YamlError(_))));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "diagnostics_enabled: true").unwrap();

        let config = FlightConfig::from_file(file.path()).unwrap();
        assert!(config.diagnostics_enabled);

        let missing = FlightConfig::from_file("/nonexistent/flight.yaml");
        assert!(matches!(missing, Err(ConfigError::FileError(_))));
    }

    #[test]
    fn test_speed_limit() {
        let tuning = TuningConstants::default();
        assert_eq!(tuning.speed_limit(false), 2.0);
        assert_eq!(tuning.speed_limit(true), 3.0);
    }
}
