pub mod flight;

use thiserror::Error;

pub use flight::{FlightConfig, PitchClampMode, TuningConstants};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Invalid flight configuration: {0}")]
    ValidationError(String),
}
