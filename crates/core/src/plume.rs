//! Smoke-plume collaborators (placeholders)
//!
//! The plume contract mirrors the propagator's: one ring per weather step,
//! index-aligned. Neither implementation here is a dispersion model — both
//! are stand-ins until a real transport solver backs this trait, and their
//! output must not be treated as authoritative.

use tracing::debug;

use crate::core_types::ring::{PerimeterFrame, Ring};
use crate::core_types::vec2::Vec2;
use crate::core_types::weather::WeatherSeries;

/// A source of smoke rings, one per weather step.
pub trait PlumeModel {
    /// Produce one frame per series sample, aligned with the perimeter
    /// frames by index and timestamp.
    fn frames(
        &self,
        origin: Vec2,
        initial_polygon: Option<&[Vec2]>,
        series: &WeatherSeries,
    ) -> Vec<PerimeterFrame>;
}

/// Placeholder that echoes the initial boundary unchanged for every step.
/// With no boundary it echoes the single-point pseudo-ring at the origin.
#[derive(Debug, Clone, Copy, Default)]
pub struct EchoPlume;

impl PlumeModel for EchoPlume {
    fn frames(
        &self,
        origin: Vec2,
        initial_polygon: Option<&[Vec2]>,
        series: &WeatherSeries,
    ) -> Vec<PerimeterFrame> {
        let ring = match initial_polygon {
            Some(polygon) if !polygon.is_empty() => Ring::closed(polygon.to_vec()),
            _ => Ring::closed(vec![origin]),
        };
        debug!(steps = series.len(), "echo plume frames generated");
        series
            .steps()
            .iter()
            .map(|step| PerimeterFrame {
                timestamp: step.timestamp,
                ring: ring.clone(),
            })
            .collect()
    }
}

/// Placeholder that extrudes a three-point triangle downwind from the
/// origin, growing with the step index.
#[derive(Debug, Clone, Copy)]
pub struct WindTriangle {
    /// Downwind reach added per step, coordinate degrees
    pub growth_per_step: f64,
    /// Half-width of the triangle base as a fraction of its reach
    pub spread_ratio: f64,
}

impl Default for WindTriangle {
    fn default() -> Self {
        WindTriangle {
            growth_per_step: 0.02,
            spread_ratio: 0.3,
        }
    }
}

impl PlumeModel for WindTriangle {
    fn frames(
        &self,
        origin: Vec2,
        _initial_polygon: Option<&[Vec2]>,
        series: &WeatherSeries,
    ) -> Vec<PerimeterFrame> {
        debug!(steps = series.len(), "wind triangle plume frames generated");
        series
            .steps()
            .iter()
            .enumerate()
            .map(|(i, step)| {
                let reach = self.growth_per_step * (i + 1) as f64;
                let downwind = step.wind.unit_vector();
                let across = Vec2::new(-downwind.y, downwind.x);
                let tip = origin + downwind * reach;
                let half_width = reach * self.spread_ratio;
                let ring = Ring::closed(vec![
                    origin,
                    tip + across * half_width,
                    tip - across * half_width,
                ]);
                PerimeterFrame {
                    timestamp: step.timestamp,
                    ring,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};

    use super::*;
    use crate::core_types::units::{Celsius, Degrees, MetersPerSecond, Percent};
    use crate::core_types::weather::{WeatherStep, WindSample};

    fn constant_series(steps: usize) -> WeatherSeries {
        let start = Utc.with_ymd_and_hms(2026, 1, 10, 6, 0, 0).unwrap();
        let samples = (0..steps)
            .map(|i| WeatherStep {
                timestamp: start + Duration::minutes(30 * i64::try_from(i).unwrap()),
                wind: WindSample::new(MetersPerSecond::new(8.0), Degrees::new(90.0)),
                temperature: Celsius::new(28.0),
                humidity: Percent::new(25.0),
            })
            .collect();
        WeatherSeries::new(samples).unwrap()
    }

    #[test]
    fn echo_repeats_the_initial_boundary() {
        let polygon = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 1.0),
            Vec2::new(1.0, 0.5),
        ];
        let series = constant_series(5);
        let frames = EchoPlume.frames(Vec2::new(0.0, 0.0), Some(&polygon), &series);
        assert_eq!(frames.len(), 5);
        for frame in &frames {
            assert!(frame.ring.is_closed());
            assert_eq!(frame.ring.distinct(), polygon.as_slice());
        }
    }

    #[test]
    fn echo_without_boundary_uses_the_origin() {
        let series = constant_series(2);
        let frames = EchoPlume.frames(Vec2::new(-118.2, 34.05), None, &series);
        assert_eq!(frames[0].ring.distinct(), &[Vec2::new(-118.2, 34.05)]);
    }

    #[test]
    fn triangle_grows_downwind_with_step_index() {
        let series = constant_series(3);
        let origin = Vec2::new(0.0, 0.0);
        let frames = WindTriangle::default().frames(origin, None, &series);
        assert_eq!(frames.len(), 3);
        let mut last_reach = 0.0;
        for frame in &frames {
            assert!(frame.ring.is_closed());
            assert_eq!(frame.ring.distinct_len(), 3);
            // Wind blows east, so the extruded corners sit east of the origin.
            let reach = frame.ring.distinct()[1].x;
            assert!(reach > last_reach);
            last_reach = reach;
        }
    }
}
