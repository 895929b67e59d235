//! Typed weather records driving each propagation step
//!
//! The propagator consumes weather as an opaque, ordered series of typed
//! samples. Field-shape errors are caught at construction time instead of
//! leaking key-value maps through the simulation.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core_types::units::{Celsius, Degrees, MetersPerSecond, Percent};
use crate::core_types::vec2::Vec2;
use crate::error::SimulationError;

/// One wind observation: speed plus a compass bearing.
///
/// The constructor enforces the contract the spread rule relies on:
/// non-negative speed and a direction folded into `[0, 360)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindSample {
    speed: MetersPerSecond,
    direction: Degrees,
}

impl WindSample {
    /// Create a wind sample. Negative speeds clamp to zero and the bearing
    /// is normalized into the compass range.
    #[must_use]
    pub fn new(speed: MetersPerSecond, direction: Degrees) -> Self {
        WindSample {
            speed: MetersPerSecond::new(speed.value().max(0.0)),
            direction: direction.normalized(),
        }
    }

    /// Wind speed in m/s
    #[must_use]
    pub fn speed(&self) -> MetersPerSecond {
        self.speed
    }

    /// Compass bearing in `[0, 360)`, clockwise from north
    #[must_use]
    pub fn direction(&self) -> Degrees {
        self.direction
    }

    /// Unit vector of the bearing in the (east, north) plane:
    /// 0° → (0, 1), 90° → (1, 0).
    #[must_use]
    pub fn unit_vector(&self) -> Vec2 {
        let theta = self.direction.to_radians();
        Vec2::new(theta.sin(), theta.cos())
    }
}

/// One weather sample for one simulation step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherStep {
    /// Sample time; strictly increasing across a series
    pub timestamp: DateTime<Utc>,
    /// Wind conditions
    pub wind: WindSample,
    /// Air temperature
    pub temperature: Celsius,
    /// Relative humidity, `[0, 100]`
    pub humidity: Percent,
}

/// The ordered, gap-free sequence of weather samples for a run.
///
/// One entry per simulation step, index-aligned with the output frames.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSeries {
    steps: Vec<WeatherStep>,
}

impl WeatherSeries {
    /// Build a series, rejecting out-of-order timestamps.
    ///
    /// # Errors
    /// Returns `SimulationError::InvalidInput` if any timestamp fails to
    /// strictly increase over its predecessor.
    pub fn new(steps: Vec<WeatherStep>) -> Result<Self, SimulationError> {
        if steps.windows(2).any(|w| w[1].timestamp <= w[0].timestamp) {
            return Err(SimulationError::InvalidInput(
                "weather series timestamps must be strictly increasing".to_string(),
            ));
        }
        Ok(WeatherSeries { steps })
    }

    /// Number of samples (equals the number of simulation steps).
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the series holds no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The ordered samples.
    #[must_use]
    pub fn steps(&self) -> &[WeatherStep] {
        &self.steps
    }
}

/// The 16-point compass rose, used to normalize textual wind directions
/// into bearings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompassPoint {
    /// North, 0°
    N,
    /// North-northeast, 22.5°
    Nne,
    /// Northeast, 45°
    Ne,
    /// East-northeast, 67.5°
    Ene,
    /// East, 90°
    E,
    /// East-southeast, 112.5°
    Ese,
    /// Southeast, 135°
    Se,
    /// South-southeast, 157.5°
    Sse,
    /// South, 180°
    S,
    /// South-southwest, 202.5°
    Ssw,
    /// Southwest, 225°
    Sw,
    /// West-southwest, 247.5°
    Wsw,
    /// West, 270°
    W,
    /// West-northwest, 292.5°
    Wnw,
    /// Northwest, 315°
    Nw,
    /// North-northwest, 337.5°
    Nnw,
}

impl CompassPoint {
    /// The bearing of this compass point.
    #[must_use]
    pub const fn bearing(self) -> Degrees {
        match self {
            CompassPoint::N => Degrees::new(0.0),
            CompassPoint::Nne => Degrees::new(22.5),
            CompassPoint::Ne => Degrees::new(45.0),
            CompassPoint::Ene => Degrees::new(67.5),
            CompassPoint::E => Degrees::new(90.0),
            CompassPoint::Ese => Degrees::new(112.5),
            CompassPoint::Se => Degrees::new(135.0),
            CompassPoint::Sse => Degrees::new(157.5),
            CompassPoint::S => Degrees::new(180.0),
            CompassPoint::Ssw => Degrees::new(202.5),
            CompassPoint::Sw => Degrees::new(225.0),
            CompassPoint::Wsw => Degrees::new(247.5),
            CompassPoint::W => Degrees::new(270.0),
            CompassPoint::Wnw => Degrees::new(292.5),
            CompassPoint::Nw => Degrees::new(315.0),
            CompassPoint::Nnw => Degrees::new(337.5),
        }
    }
}

impl FromStr for CompassPoint {
    type Err = SimulationError;

    /// Parse a cardinal direction string. An empty string reads as north,
    /// matching the behavior of point-forecast feeds that leave the field
    /// blank in calm conditions.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "" | "N" => Ok(CompassPoint::N),
            "NNE" => Ok(CompassPoint::Nne),
            "NE" => Ok(CompassPoint::Ne),
            "ENE" => Ok(CompassPoint::Ene),
            "E" => Ok(CompassPoint::E),
            "ESE" => Ok(CompassPoint::Ese),
            "SE" => Ok(CompassPoint::Se),
            "SSE" => Ok(CompassPoint::Sse),
            "S" => Ok(CompassPoint::S),
            "SSW" => Ok(CompassPoint::Ssw),
            "SW" => Ok(CompassPoint::Sw),
            "WSW" => Ok(CompassPoint::Wsw),
            "W" => Ok(CompassPoint::W),
            "WNW" => Ok(CompassPoint::Wnw),
            "NW" => Ok(CompassPoint::Nw),
            "NNW" => Ok(CompassPoint::Nnw),
            other => Err(SimulationError::WeatherFetch(format!(
                "unknown compass direction {other:?}"
            ))),
        }
    }
}
