//! Weather acquisition capability
//!
//! One pluggable contract with clearly labeled variants:
//! - [`SyntheticWeather`] perturbs the configured initial wind with a
//!   seeded random stream (the "synthetic" variant),
//! - [`ForecastTable`] normalizes pre-acquired textual forecast periods
//!   (the data half of the "live" variant; network transport stays outside
//!   this crate).
//!
//! Either variant must deliver exactly one sample per simulation step,
//! gap-free, with bearings already folded into `[0, 360)`. The propagator
//! consumes the result as an opaque ordered input and never retries.

pub mod forecast;
pub mod synthetic;

use chrono::{DateTime, Duration, Utc};

use crate::core_types::vec2::Vec2;
use crate::core_types::weather::WeatherSeries;
use crate::error::SimulationError;

pub use forecast::{ForecastPeriod, ForecastTable};
pub use synthetic::SyntheticWeather;

/// What the orchestrator asks a provider for: a location, a time window,
/// and the step grid the series must align with.
#[derive(Debug, Clone)]
pub struct WeatherRequest {
    /// Forecast point as (longitude, latitude)
    pub location: Vec2,
    /// Timestamp of the first sample
    pub start_time: DateTime<Utc>,
    /// Number of samples to deliver (one per simulation step)
    pub steps: usize,
    /// Spacing between consecutive samples
    pub step: Duration,
}

impl WeatherRequest {
    /// Timestamp of sample `index` on the request's step grid.
    #[must_use]
    pub fn timestamp_at(&self, index: usize) -> DateTime<Utc> {
        self.start_time + self.step * i32::try_from(index).unwrap_or(i32::MAX)
    }
}

/// A source of weather series. Fetching happens once per run; a failure
/// aborts the whole simulation with no partial output.
pub trait WeatherProvider {
    /// Produce exactly `request.steps` samples aligned to the request grid.
    ///
    /// # Errors
    /// Returns `SimulationError::WeatherFetch` when the series cannot be
    /// acquired or normalized.
    fn fetch(&self, request: &WeatherRequest) -> Result<WeatherSeries, SimulationError>;
}
