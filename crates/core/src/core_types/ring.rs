//! Closed-ring geometry for perimeter frames.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core_types::vec2::Vec2;

/// A closed polygon boundary: ordered vertices with the first point
/// duplicated at the end.
///
/// The closure invariant (`first == last`) holds for every ring produced by
/// the propagator, including the degenerate single-point pseudo-ring used
/// when a simulation starts from an ignition point instead of a polygon.
/// Rings are immutable once built; each simulation step derives a fresh ring
/// from the previous one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ring {
    points: Vec<Vec2>,
}

impl Ring {
    /// Build a closed ring from distinct vertices by appending the closing
    /// duplicate. Asserts the vertex list is non-empty.
    #[must_use]
    #[track_caller]
    pub fn closed(mut distinct: Vec<Vec2>) -> Self {
        assert!(
            !distinct.is_empty(),
            "Ring::closed: a ring needs at least one vertex"
        );
        distinct.push(distinct[0]);
        Ring { points: distinct }
    }

    /// All points including the closing duplicate.
    #[must_use]
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// The distinct vertices, excluding the closing duplicate. Neighbor
    /// arithmetic in the advance rule runs modulo this slice's length.
    #[must_use]
    pub fn distinct(&self) -> &[Vec2] {
        &self.points[..self.points.len() - 1]
    }

    /// Number of distinct vertices.
    #[must_use]
    pub fn distinct_len(&self) -> usize {
        self.points.len() - 1
    }

    /// Whether the closure invariant holds.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.points.first() == self.points.last()
    }

    /// Whether every coordinate is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.points
            .iter()
            .all(|p| p.x.is_finite() && p.y.is_finite())
    }
}

/// One timestamped ring in the output sequence, index-aligned with the
/// weather series that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerimeterFrame {
    /// Simulation time of this frame
    pub timestamp: DateTime<Utc>,
    /// The perimeter at that time
    pub ring: Ring,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_appends_the_first_vertex() {
        let ring = Ring::closed(vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 1.0),
            Vec2::new(1.0, 1.0),
        ]);
        assert!(ring.is_closed());
        assert_eq!(ring.points().len(), 4);
        assert_eq!(ring.distinct_len(), 3);
        assert_eq!(ring.points()[3], Vec2::new(0.0, 0.0));
    }

    #[test]
    fn single_point_pseudo_ring_is_closed() {
        let ring = Ring::closed(vec![Vec2::new(-118.2, 34.1)]);
        assert!(ring.is_closed());
        assert_eq!(ring.distinct_len(), 1);
        assert_eq!(ring.points().len(), 2);
    }

    #[test]
    fn is_finite_rejects_nan_coordinates() {
        let ring = Ring::closed(vec![Vec2::new(0.0, f64::NAN), Vec2::new(1.0, 0.0)]);
        assert!(!ring.is_finite());
    }
}
