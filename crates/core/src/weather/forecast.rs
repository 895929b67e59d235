//! Forecast-table normalization
//!
//! Point-forecast services deliver hourly periods with textual wind fields:
//! a speed like `"10 mph"` and a cardinal direction like `"NNW"`. This
//! module is the normalization half of the live-weather path — it converts
//! such periods into the typed, step-aligned [`WeatherSeries`] the
//! propagator consumes. Fetching the periods over the network is a
//! transport concern and stays outside the crate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core_types::units::{Celsius, Degrees, MetersPerSecond, Percent};
use crate::core_types::weather::{CompassPoint, WeatherSeries, WeatherStep, WindSample};
use crate::error::SimulationError;
use crate::weather::{WeatherProvider, WeatherRequest};

const MPH_TO_MPS: f64 = 0.44704;
const KMH_TO_MPS: f64 = 1.0 / 3.6;

/// One textual forecast period as delivered by a point-forecast feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPeriod {
    /// Start of the period's validity window
    pub start_time: DateTime<Utc>,
    /// Wind speed with unit suffix, e.g. `"10 mph"`
    pub wind_speed: String,
    /// Cardinal wind direction, e.g. `"NNW"`; may be empty in calm air
    pub wind_direction: String,
    /// Air temperature in °C
    pub temperature: f64,
    /// Relative humidity in percent
    pub relative_humidity: f64,
}

/// Parse a `"<number> <unit>"` wind speed into m/s. A bare number is
/// already m/s; `mph` and `km/h` convert.
fn parse_wind_speed(text: &str) -> Result<MetersPerSecond, SimulationError> {
    let mut tokens = text.split_whitespace();
    let number = tokens
        .next()
        .ok_or_else(|| SimulationError::WeatherFetch(format!("empty wind speed {text:?}")))?;
    let value: f64 = number.parse().map_err(|_| {
        SimulationError::WeatherFetch(format!("unparseable wind speed {text:?}"))
    })?;
    let converted = match tokens.next() {
        Some("mph") => value * MPH_TO_MPS,
        Some("km/h") => value * KMH_TO_MPS,
        Some("m/s") | None => value,
        Some(unit) => {
            return Err(SimulationError::WeatherFetch(format!(
                "unknown wind speed unit {unit:?}"
            )))
        }
    };
    Ok(MetersPerSecond::new(converted))
}

/// The table-backed weather variant: resamples normalized forecast periods
/// onto the request's step grid.
#[derive(Debug, Clone)]
pub struct ForecastTable {
    periods: Vec<ForecastPeriod>,
}

impl ForecastTable {
    /// Wrap pre-acquired forecast periods, ordered by `start_time`.
    #[must_use]
    pub fn new(periods: Vec<ForecastPeriod>) -> Self {
        ForecastTable { periods }
    }

    /// The period in effect at `at`: the latest one starting at or before
    /// that instant, or the earliest period when `at` precedes the table.
    fn period_at(&self, at: DateTime<Utc>) -> &ForecastPeriod {
        self.periods
            .iter()
            .rev()
            .find(|p| p.start_time <= at)
            .unwrap_or(&self.periods[0])
    }
}

impl WeatherProvider for ForecastTable {
    fn fetch(&self, request: &WeatherRequest) -> Result<WeatherSeries, SimulationError> {
        if self.periods.is_empty() {
            return Err(SimulationError::WeatherFetch(
                "forecast table holds no periods".to_string(),
            ));
        }

        let mut steps = Vec::with_capacity(request.steps);
        for i in 0..request.steps {
            let timestamp = request.timestamp_at(i);
            let period = self.period_at(timestamp);
            let speed = parse_wind_speed(&period.wind_speed)?;
            let bearing: Degrees = period
                .wind_direction
                .parse::<CompassPoint>()?
                .bearing();
            steps.push(WeatherStep {
                timestamp,
                wind: WindSample::new(speed, bearing),
                temperature: Celsius::new(period.temperature),
                humidity: Percent::new(period.relative_humidity),
            });
        }
        debug!(
            steps = steps.len(),
            periods = self.periods.len(),
            "forecast table resampled onto step grid"
        );
        WeatherSeries::new(steps)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;
    use crate::core_types::vec2::Vec2;

    fn period(hour: u32, speed: &str, direction: &str) -> ForecastPeriod {
        ForecastPeriod {
            start_time: Utc.with_ymd_and_hms(2026, 1, 10, hour, 0, 0).unwrap(),
            wind_speed: speed.to_string(),
            wind_direction: direction.to_string(),
            temperature: 28.0,
            relative_humidity: 22.0,
        }
    }

    fn request(steps: usize, step_minutes: i64) -> WeatherRequest {
        WeatherRequest {
            location: Vec2::new(-118.2, 34.05),
            start_time: Utc.with_ymd_and_hms(2026, 1, 10, 6, 0, 0).unwrap(),
            steps,
            step: Duration::minutes(step_minutes),
        }
    }

    #[test]
    fn parses_speed_text_with_units() {
        use approx::assert_relative_eq;

        assert_relative_eq!(*parse_wind_speed("10 mph").unwrap(), 4.4704, epsilon = 1e-12);
        assert_relative_eq!(*parse_wind_speed("36 km/h").unwrap(), 10.0, epsilon = 1e-12);
        assert_eq!(parse_wind_speed("5 m/s").unwrap(), MetersPerSecond::new(5.0));
        assert_eq!(parse_wind_speed("5").unwrap(), MetersPerSecond::new(5.0));
        assert!(parse_wind_speed("brisk").is_err());
        assert!(parse_wind_speed("10 knots").is_err());
    }

    #[test]
    fn resamples_hourly_periods_onto_a_half_hour_grid() {
        let table = ForecastTable::new(vec![
            period(6, "10 mph", "N"),
            period(7, "20 mph", "E"),
        ]);
        let series = table.fetch(&request(4, 30)).unwrap();
        assert_eq!(series.len(), 4);
        // 06:00 and 06:30 fall in the first period, 07:00 and 07:30 in the
        // second.
        assert_eq!(*series.steps()[0].wind.direction(), 0.0);
        assert_eq!(*series.steps()[1].wind.direction(), 0.0);
        assert_eq!(*series.steps()[2].wind.direction(), 90.0);
        assert_eq!(*series.steps()[3].wind.direction(), 90.0);
        assert!(series
            .steps()
            .windows(2)
            .all(|w| w[0].timestamp < w[1].timestamp));
    }

    #[test]
    fn empty_table_is_a_fetch_error() {
        let table = ForecastTable::new(Vec::new());
        let err = table.fetch(&request(2, 30));
        assert!(matches!(err, Err(SimulationError::WeatherFetch(_))));
    }

    #[test]
    fn bad_cardinal_direction_is_a_fetch_error() {
        let table = ForecastTable::new(vec![period(6, "10 mph", "NORTHISH")]);
        assert!(matches!(
            table.fetch(&request(1, 30)),
            Err(SimulationError::WeatherFetch(_))
        ));
    }

    #[test]
    fn deserializes_camel_case_periods() {
        let json = r#"{
            "startTime": "2026-01-10T06:00:00Z",
            "windSpeed": "10 mph",
            "windDirection": "NNW",
            "temperature": 28.0,
            "relativeHumidity": 22.0
        }"#;
        let parsed: ForecastPeriod = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.wind_direction, "NNW");
    }
}
