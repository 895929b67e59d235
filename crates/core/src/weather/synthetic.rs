//! Seeded synthetic weather generation
//!
//! Produces a plausible series by randomly perturbing the configured
//! initial wind: speed within ±30% of the base, direction within ±30° of
//! the base bearing. The random source is an explicit seed rather than
//! process-global state, so a given (seed, request) pair reproduces the
//! series bit for bit.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::core_types::units::{Celsius, Degrees, MetersPerSecond, Percent};
use crate::core_types::weather::{WeatherSeries, WeatherStep, WindSample};
use crate::error::SimulationError;
use crate::weather::{WeatherProvider, WeatherRequest};

/// Bounded relative perturbation of the base wind speed.
const SPEED_JITTER: f64 = 0.3;

/// Bounded absolute perturbation of the base bearing, degrees.
const DIRECTION_JITTER: f64 = 30.0;

/// Bounded absolute perturbation of the base temperature, °C.
const TEMPERATURE_JITTER: f64 = 1.5;

/// Bounded absolute perturbation of the base humidity, percentage points.
const HUMIDITY_JITTER: f64 = 5.0;

/// The "synthetic" weather variant: seeded perturbation around an initial
/// wind observation.
#[derive(Debug, Clone)]
pub struct SyntheticWeather {
    base_wind: WindSample,
    base_temperature: Celsius,
    base_humidity: Percent,
    seed: u64,
}

impl SyntheticWeather {
    /// Create a generator around `base_wind`, with default climate values
    /// (25 °C, 30% relative humidity).
    #[must_use]
    pub fn new(base_wind: WindSample, seed: u64) -> Self {
        SyntheticWeather {
            base_wind,
            base_temperature: Celsius::new(25.0),
            base_humidity: Percent::new(30.0),
            seed,
        }
    }

    /// Override the base temperature and humidity the jitter centers on.
    #[must_use]
    pub fn with_climate(mut self, temperature: Celsius, humidity: Percent) -> Self {
        self.base_temperature = temperature;
        self.base_humidity = humidity;
        self
    }
}

impl WeatherProvider for SyntheticWeather {
    fn fetch(&self, request: &WeatherRequest) -> Result<WeatherSeries, SimulationError> {
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        let base_speed = self.base_wind.speed().value();
        let base_direction = self.base_wind.direction().value();

        let mut steps = Vec::with_capacity(request.steps);
        for i in 0..request.steps {
            let speed_factor: f64 = rng.random_range(-SPEED_JITTER..=SPEED_JITTER);
            let direction_offset: f64 = rng.random_range(-DIRECTION_JITTER..=DIRECTION_JITTER);
            let temperature_offset: f64 =
                rng.random_range(-TEMPERATURE_JITTER..=TEMPERATURE_JITTER);
            let humidity_offset: f64 = rng.random_range(-HUMIDITY_JITTER..=HUMIDITY_JITTER);

            steps.push(WeatherStep {
                timestamp: request.timestamp_at(i),
                wind: WindSample::new(
                    MetersPerSecond::new(base_speed * (1.0 + speed_factor)),
                    Degrees::new(base_direction + direction_offset),
                ),
                temperature: Celsius::new(self.base_temperature.value() + temperature_offset),
                humidity: Percent::new(
                    (self.base_humidity.value() + humidity_offset).clamp(0.0, 100.0),
                ),
            });
        }
        debug!(steps = steps.len(), seed = self.seed, "synthetic weather series generated");
        WeatherSeries::new(steps)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};

    use super::*;
    use crate::core_types::vec2::Vec2;

    fn request(steps: usize) -> WeatherRequest {
        WeatherRequest {
            location: Vec2::new(-118.2, 34.05),
            start_time: Utc.with_ymd_and_hms(2026, 1, 10, 6, 0, 0).unwrap(),
            steps,
            step: Duration::minutes(30),
        }
    }

    #[test]
    fn same_seed_reproduces_the_series() {
        let base = WindSample::new(MetersPerSecond::new(10.0), Degrees::new(90.0));
        let provider = SyntheticWeather::new(base, 42);
        let a = provider.fetch(&request(48)).unwrap();
        let b = provider.fetch(&request(48)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_diverge() {
        let base = WindSample::new(MetersPerSecond::new(10.0), Degrees::new(90.0));
        let a = SyntheticWeather::new(base, 1).fetch(&request(8)).unwrap();
        let b = SyntheticWeather::new(base, 2).fetch(&request(8)).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn perturbations_stay_within_bounds() {
        let base = WindSample::new(MetersPerSecond::new(10.0), Degrees::new(90.0));
        let series = SyntheticWeather::new(base, 7).fetch(&request(96)).unwrap();
        assert_eq!(series.len(), 96);
        for step in series.steps() {
            let speed = step.wind.speed().value();
            assert!((7.0..=13.0).contains(&speed), "speed out of bounds: {speed}");
            let direction = step.wind.direction().value();
            assert!(
                (60.0..=120.0).contains(&direction),
                "direction out of bounds: {direction}"
            );
        }
    }

    #[test]
    fn timestamps_follow_the_request_grid() {
        let base = WindSample::new(MetersPerSecond::new(5.0), Degrees::new(0.0));
        let req = request(4);
        let series = SyntheticWeather::new(base, 3).fetch(&req).unwrap();
        for (i, step) in series.steps().iter().enumerate() {
            assert_eq!(step.timestamp, req.start_time + Duration::minutes(30 * i64::try_from(i).unwrap()));
        }
    }
}
