//! Perimeter propagation: the per-vertex advance rule and the step fold
//!
//! This is the heart of the simulation. Each step derives a fresh closed
//! ring from the previous one by advancing every distinct vertex outward
//! along a blend of its local outward normal and the wind direction. The
//! rule is a heuristic kinematic model, not a calibrated fire-behavior
//! simulator: coefficients are tunable, and no physical rate law is implied.
//!
//! Totality is the design constraint that matters here. Duplicate vertices,
//! single-point pseudo-rings, zero wind, and exactly opposite edge vectors
//! all fall back to well-defined directions, so propagation can never fail
//! or emit NaN.

use rayon::prelude::*;
use tracing::debug;

use crate::core_types::ring::{PerimeterFrame, Ring};
use crate::core_types::units::Percent;
use crate::core_types::vec2::Vec2;
use crate::core_types::weather::{WeatherSeries, WeatherStep, WindSample};

/// Vectors shorter than this are treated as zero (duplicate or collapsed
/// edge points).
const DEGENERACY_EPS: f64 = 1e-10;

/// Base spread coefficient, coordinate degrees per step.
const BASE_RATE: f64 = 0.002;

/// Wind speed (m/s) that doubles the base rate.
const WIND_SPEED_SCALE: f64 = 5.0;

/// Humidity (%) at which the moisture term is neutral.
const HUMIDITY_NEUTRAL: f64 = 30.0;

/// Humidity percentage points per unit of moisture effect.
const HUMIDITY_SCALE: f64 = 50.0;

/// Extra distance gain per m/s of wind.
const WIND_DISTANCE_GAIN: f64 = 0.2;

/// Hard upper clamp on per-step vertex displacement, coordinate degrees.
/// Prevents runaway growth under extreme wind.
pub const MAX_STEP_DISTANCE: f64 = 0.1;

/// Normalize, or return the zero vector when the input is degenerate.
fn unit_or_zero(v: Vec2) -> Vec2 {
    let length = v.norm();
    if length > DEGENERACY_EPS {
        v / length
    } else {
        Vec2::zeros()
    }
}

/// Un-clamped heuristic spread magnitude for one weather sample.
///
/// Monotonically increasing in wind speed; increases as humidity drops
/// below 30% and goes negative in very humid air, pulling vertices inward.
#[must_use]
pub fn base_spread(wind: WindSample, humidity: Percent) -> f64 {
    BASE_RATE
        * (1.0 + wind.speed().value() / WIND_SPEED_SCALE)
        * (1.0 + (HUMIDITY_NEUTRAL - humidity.value()) / HUMIDITY_SCALE)
}

/// Per-step displacement distance: wind-amplified base spread, upper-clamped
/// at [`MAX_STEP_DISTANCE`].
#[must_use]
pub fn spread_distance(wind: WindSample, humidity: Percent) -> f64 {
    (base_spread(wind, humidity) * (1.0 + wind.speed().value() * WIND_DISTANCE_GAIN))
        .min(MAX_STEP_DISTANCE)
}

/// Advance one vertex given its ring neighbors and the current weather.
///
/// Pure and stateless: the new position depends only on the arguments.
/// `prev` and `next` are the neighbors in distinct-vertex order (the closing
/// duplicate never participates). Degenerate local geometry falls back to
/// the wind direction, so the result is always finite.
#[must_use]
pub fn advance_vertex(p: Vec2, prev: Vec2, next: Vec2, wind: WindSample, humidity: Percent) -> Vec2 {
    let v1 = unit_or_zero(next - p);
    let v2 = unit_or_zero(p - prev);

    let wind_dir = wind.unit_vector();

    // Outward normal estimate from the two adjacent edges. Collinear or
    // fully collapsed neighborhoods leave nothing to average.
    let normal_raw = Vec2::new(-v1.y - v2.y, v1.x + v2.x);
    let normal = if normal_raw.norm() > DEGENERACY_EPS {
        normal_raw.normalize()
    } else {
        wind_dir
    };

    let blended = normal * 0.5 + wind_dir * 0.5;
    let direction = if blended.norm() > DEGENERACY_EPS {
        blended.normalize()
    } else {
        wind_dir
    };

    p + direction * spread_distance(wind, humidity)
}

/// Advance every distinct vertex of `previous` under one weather sample.
///
/// The per-vertex evaluations are independent pure functions, so they run
/// in parallel; the ordered collect keeps the result deterministic.
fn advance_ring(previous: &Ring, step: &WeatherStep) -> Ring {
    let vertices = previous.distinct();
    let n = vertices.len();
    let advanced: Vec<Vec2> = (0..n)
        .into_par_iter()
        .map(|j| {
            let prev = vertices[(j + n - 1) % n];
            let next = vertices[(j + 1) % n];
            advance_vertex(vertices[j], prev, next, step.wind, step.humidity)
        })
        .collect();
    Ring::closed(advanced)
}

/// Derives the full sequence of perimeter rings from an initial boundary and
/// a weather series.
///
/// Stepping is a pure fold: `ring_i = advance(ring_{i-1}, weather_i)`. Given
/// identical inputs the output sequence is exactly reproducible; there is no
/// randomness, no convergence check, and no early exit.
///
/// Known limitation: vertices advance independently and the ring is never
/// resampled or repaired, so self-intersections and vertex clustering can
/// accumulate over long runs. Winding order is likewise not enforced.
#[derive(Debug, Clone)]
pub struct PerimeterPropagator {
    origin: Vec2,
    initial_polygon: Option<Vec<Vec2>>,
}

impl PerimeterPropagator {
    /// Create a propagator. `initial_polygon` is the open vertex list of the
    /// starting boundary; when absent the fire originates from `origin` as a
    /// single-point pseudo-ring.
    #[must_use]
    pub fn new(origin: Vec2, initial_polygon: Option<Vec<Vec2>>) -> Self {
        PerimeterPropagator {
            origin,
            initial_polygon: initial_polygon.filter(|polygon| !polygon.is_empty()),
        }
    }

    /// Run exactly one step per weather sample and return the frames.
    ///
    /// The first frame passes the caller's polygon through verbatim (closing
    /// vertex appended); without a polygon the first frame is already an
    /// advance of the single-point pseudo-ring. Every later frame advances
    /// its predecessor.
    #[must_use]
    pub fn propagate(&self, series: &WeatherSeries) -> Vec<PerimeterFrame> {
        let mut frames: Vec<PerimeterFrame> = Vec::with_capacity(series.len());
        for (i, step) in series.steps().iter().enumerate() {
            let ring = if i == 0 {
                match &self.initial_polygon {
                    Some(polygon) => Ring::closed(polygon.clone()),
                    None => advance_ring(&Ring::closed(vec![self.origin]), step),
                }
            } else {
                advance_ring(&frames[i - 1].ring, step)
            };
            frames.push(PerimeterFrame {
                timestamp: step.timestamp,
                ring,
            });
        }
        debug!(
            frames = frames.len(),
            vertices = frames.first().map_or(0, |f| f.ring.distinct_len()),
            "perimeter propagation complete"
        );
        frames
    }
}
