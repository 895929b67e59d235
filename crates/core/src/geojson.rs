//! Minimal `GeoJSON`-shaped output wrappers
//!
//! Output records wrap each ring in a `Feature` carrying a `Polygon`
//! geometry, the shape mapping clients already consume. Only the small
//! subset the simulation emits is modeled; this is not a general `GeoJSON`
//! implementation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core_types::ring::Ring;

/// A polygon geometry: one outer ring of `[lon, lat]` positions, closed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolygonGeometry {
    /// Always `"Polygon"`
    #[serde(rename = "type")]
    pub geometry_type: String,
    /// One outer ring; first and last position coincide
    pub coordinates: Vec<Vec<[f64; 2]>>,
}

/// A feature wrapping one polygon geometry with (empty) properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolygonFeature {
    /// Always `"Feature"`
    #[serde(rename = "type")]
    pub feature_type: String,
    /// The wrapped geometry
    pub geometry: PolygonGeometry,
    /// Feature properties; currently always empty
    pub properties: BTreeMap<String, String>,
}

impl PolygonFeature {
    /// Wrap a closed ring as a polygon feature.
    #[must_use]
    pub fn from_ring(ring: &Ring) -> Self {
        let positions = ring.points().iter().map(|p| [p.x, p.y]).collect();
        PolygonFeature {
            feature_type: "Feature".to_string(),
            geometry: PolygonGeometry {
                geometry_type: "Polygon".to_string(),
                coordinates: vec![positions],
            },
            properties: BTreeMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::vec2::Vec2;

    #[test]
    fn wraps_a_closed_ring() {
        let ring = Ring::closed(vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 1.0),
            Vec2::new(1.0, 1.0),
        ]);
        let feature = PolygonFeature::from_ring(&ring);
        assert_eq!(feature.feature_type, "Feature");
        assert_eq!(feature.geometry.geometry_type, "Polygon");
        let outer = &feature.geometry.coordinates[0];
        assert_eq!(outer.len(), 4);
        assert_eq!(outer.first(), outer.last());
    }

    #[test]
    fn serializes_to_the_expected_shape() {
        let ring = Ring::closed(vec![Vec2::new(1.5, 2.5)]);
        let json = serde_json::to_value(PolygonFeature::from_ring(&ring)).unwrap();
        assert_eq!(json["type"], "Feature");
        assert_eq!(json["geometry"]["type"], "Polygon");
        assert_eq!(json["geometry"]["coordinates"][0][0][0], 1.5);
        assert_eq!(json["properties"], serde_json::json!({}));
    }
}
