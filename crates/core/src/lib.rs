//! Fire Perimeter Simulation Core Library
//!
//! A deterministic, weather-driven wildfire perimeter propagator with a
//! placeholder smoke-plume stage, producing time-stepped polygon frames for
//! planning and awareness tooling.
//!
//! The propagation algorithm is an explicitly heuristic kinematic model:
//! each step advances every perimeter vertex along a blend of its local
//! outward normal and the wind direction, scaled by a wind/humidity spread
//! coefficient. It is total over degenerate inputs (single-point rings,
//! duplicate vertices, zero wind, collinear edges) and exactly reproducible
//! for identical inputs.

// Core types and utilities
pub mod core_types;

// Boundary error type
pub mod error;

// Output record wrappers
pub mod geojson;

// Smoke plume placeholders
pub mod plume;

// Orchestration
pub mod simulation;

// Perimeter propagation (the core algorithm)
pub mod spread;

// Weather acquisition capability
pub mod weather;

// Re-export core types
pub use core_types::units::{Celsius, Degrees, MetersPerSecond, Percent};
pub use core_types::{CompassPoint, PerimeterFrame, Ring, Vec2};
pub use core_types::{WeatherSeries, WeatherStep, WindSample};

// Re-export the simulation surface
pub use error::SimulationError;
pub use geojson::{PolygonFeature, PolygonGeometry};
pub use plume::{EchoPlume, PlumeModel, WindTriangle};
pub use simulation::{FireSimulation, SimulationConfig, SimulationRecord};
pub use spread::{advance_vertex, base_spread, spread_distance, PerimeterPropagator};
pub use weather::{
    ForecastPeriod, ForecastTable, SyntheticWeather, WeatherProvider, WeatherRequest,
};
