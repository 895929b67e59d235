//! Simulation orchestration
//!
//! Sequences one run end to end: validate the configuration, acquire the
//! weather series once, fold the perimeter propagator over it, ask the
//! plume collaborator for its frames, and zip everything into ordered
//! output records. A weather failure aborts the whole run; no partial
//! output is ever returned.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core_types::vec2::Vec2;
use crate::core_types::weather::WindSample;
use crate::error::SimulationError;
use crate::geojson::PolygonFeature;
use crate::plume::PlumeModel;
use crate::spread::PerimeterPropagator;
use crate::weather::{WeatherProvider, WeatherRequest};

/// One fully specified simulation run. Each run owns its configuration;
/// nothing is shared or cached across runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Ignition point as (longitude, latitude)
    pub start_location: Vec2,
    /// Simulation start time
    pub start_time: DateTime<Utc>,
    /// Total simulated duration in hours
    pub duration_hours: u32,
    /// Step size in minutes
    pub time_step_minutes: u32,
    /// Open vertex list of the initial fire boundary; empty means the fire
    /// originates from `start_location`
    pub initial_polygon: Vec<Vec2>,
    /// Wind observation at ignition time, the anchor for synthetic series
    pub initial_wind: WindSample,
}

impl SimulationConfig {
    /// Create a config with the default 24 h duration and 30 min step.
    #[must_use]
    pub fn new(start_location: Vec2, start_time: DateTime<Utc>, initial_wind: WindSample) -> Self {
        SimulationConfig {
            start_location,
            start_time,
            duration_hours: 24,
            time_step_minutes: 30,
            initial_polygon: Vec::new(),
            initial_wind,
        }
    }

    /// Number of simulation steps, `duration / step size`.
    #[must_use]
    pub fn step_count(&self) -> usize {
        (u64::from(self.duration_hours) * 60 / u64::from(self.time_step_minutes.max(1))) as usize
    }

    /// Reject configurations the propagator cannot honor.
    ///
    /// # Errors
    /// Returns `SimulationError::InvalidInput` for a zero duration or step
    /// size, a window shorter than one step, or non-finite coordinates in
    /// the start location, polygon, or initial wind.
    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.duration_hours == 0 || self.time_step_minutes == 0 {
            return Err(SimulationError::InvalidInput(
                "duration and step size must be positive".to_string(),
            ));
        }
        if self.step_count() == 0 {
            return Err(SimulationError::InvalidInput(format!(
                "{} h window holds no {} min steps",
                self.duration_hours, self.time_step_minutes
            )));
        }
        if !self.start_location.x.is_finite() || !self.start_location.y.is_finite() {
            return Err(SimulationError::InvalidInput(
                "start location must be finite".to_string(),
            ));
        }
        if self
            .initial_polygon
            .iter()
            .any(|p| !p.x.is_finite() || !p.y.is_finite())
        {
            return Err(SimulationError::InvalidInput(
                "initial polygon contains non-finite coordinates".to_string(),
            ));
        }
        if !self.initial_wind.speed().value().is_finite()
            || !self.initial_wind.direction().value().is_finite()
        {
            return Err(SimulationError::InvalidInput(
                "initial wind must be finite".to_string(),
            ));
        }
        Ok(())
    }

    fn weather_request(&self) -> WeatherRequest {
        WeatherRequest {
            location: self.start_location,
            start_time: self.start_time,
            steps: self.step_count(),
            step: Duration::minutes(i64::from(self.time_step_minutes)),
        }
    }
}

/// One output record: the fire perimeter and smoke plume at a step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationRecord {
    /// Simulation time of this record
    pub timestamp: DateTime<Utc>,
    /// Propagated fire boundary
    pub fire_perimeter: PolygonFeature,
    /// Placeholder smoke boundary; not authoritative
    pub smoke_plume: PolygonFeature,
}

/// The orchestrator: one configured run against a weather provider and a
/// plume collaborator.
pub struct FireSimulation<'a> {
    config: SimulationConfig,
    weather: &'a dyn WeatherProvider,
    plume: &'a dyn PlumeModel,
}

impl<'a> FireSimulation<'a> {
    /// Bind a configuration to its collaborators.
    #[must_use]
    pub fn new(
        config: SimulationConfig,
        weather: &'a dyn WeatherProvider,
        plume: &'a dyn PlumeModel,
    ) -> Self {
        FireSimulation {
            config,
            weather,
            plume,
        }
    }

    /// Run the complete simulation and return one record per step.
    ///
    /// # Errors
    /// Returns `SimulationError::InvalidInput` for a rejected configuration
    /// and `SimulationError::WeatherFetch` when acquisition fails; either
    /// aborts the run with no partial output.
    pub fn run(&self) -> Result<Vec<SimulationRecord>, SimulationError> {
        self.config.validate()?;

        let request = self.config.weather_request();
        let series = self.weather.fetch(&request)?;
        info!(
            steps = series.len(),
            start = %self.config.start_time,
            "weather series acquired"
        );

        let initial_polygon = if self.config.initial_polygon.is_empty() {
            None
        } else {
            Some(self.config.initial_polygon.clone())
        };
        let propagator = PerimeterPropagator::new(self.config.start_location, initial_polygon);
        let fire_frames = propagator.propagate(&series);

        let polygon_ref = if self.config.initial_polygon.is_empty() {
            None
        } else {
            Some(self.config.initial_polygon.as_slice())
        };
        let smoke_frames = self
            .plume
            .frames(self.config.start_location, polygon_ref, &series);

        let records: Vec<SimulationRecord> = fire_frames
            .into_iter()
            .zip(smoke_frames)
            .map(|(fire, smoke)| SimulationRecord {
                timestamp: fire.timestamp,
                fire_perimeter: PolygonFeature::from_ring(&fire.ring),
                smoke_plume: PolygonFeature::from_ring(&smoke.ring),
            })
            .collect();
        info!(records = records.len(), "simulation complete");
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::core_types::units::{Degrees, MetersPerSecond};

    fn base_config() -> SimulationConfig {
        SimulationConfig::new(
            Vec2::new(-118.2, 34.05),
            Utc.with_ymd_and_hms(2026, 1, 10, 6, 0, 0).unwrap(),
            WindSample::new(MetersPerSecond::new(10.0), Degrees::new(90.0)),
        )
    }

    #[test]
    fn default_window_yields_48_steps() {
        assert_eq!(base_config().step_count(), 48);
    }

    #[test]
    fn validate_rejects_zero_duration() {
        let mut config = base_config();
        config.duration_hours = 0;
        assert!(matches!(
            config.validate(),
            Err(SimulationError::InvalidInput(_))
        ));
    }

    #[test]
    fn validate_rejects_sub_step_window() {
        let mut config = base_config();
        config.duration_hours = 1;
        config.time_step_minutes = 90;
        assert!(matches!(
            config.validate(),
            Err(SimulationError::InvalidInput(_))
        ));
    }

    #[test]
    fn validate_rejects_non_finite_polygon() {
        let mut config = base_config();
        config.initial_polygon = vec![Vec2::new(0.0, f64::NAN)];
        assert!(matches!(
            config.validate(),
            Err(SimulationError::InvalidInput(_))
        ));
    }

    #[test]
    fn validate_accepts_the_default_config() {
        assert!(base_config().validate().is_ok());
    }
}
