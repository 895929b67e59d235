//! Vector type alias for plane coordinates and directions.

use nalgebra::Vector2;

/// 2D vector type for perimeter vertices, edge vectors, and wind directions.
///
/// This is a simple alias for `nalgebra::Vector2<f64>`. Coordinates are
/// (longitude, latitude) treated as locally planar degrees; the approximation
/// is only valid near the simulation's start location.
pub type Vec2 = Vector2<f64>;
