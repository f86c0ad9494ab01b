use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FlightError {
    #[error("Non-finite control input: {field} = {value}")]
    NonFiniteInput { field: &'static str, value: f64 },

    #[error("Corrupt ship state: {0}")]
    CorruptState(String),
}
