//! Boundary error type
//!
//! Only boundary components can fail: weather acquisition and input
//! validation. Geometric degeneracies inside the advance rule are absorbed
//! by documented fallbacks, so propagation itself has no error variant. Any
//! failure aborts the whole run and surfaces exactly one error; there are no
//! retries and no partial results.

/// Errors surfaced by a simulation run
#[derive(Debug)]
pub enum SimulationError {
    /// Failed to acquire or normalize the weather series
    WeatherFetch(String),
    /// Rejected simulation configuration or polygon
    InvalidInput(String),
}

impl std::fmt::Display for SimulationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SimulationError::WeatherFetch(msg) => write!(f, "weather acquisition failed: {msg}"),
            SimulationError::InvalidInput(msg) => write!(f, "invalid simulation input: {msg}"),
        }
    }
}

impl std::error::Error for SimulationError {}
