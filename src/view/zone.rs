//! Busy-zone geometry: the square overlay drawn around each place.

use crate::core::geo::LatLng;
use serde_json::{json, Value};

/// Default half-size of a zone square, in degrees.
pub const DEFAULT_ZONE_HALF_SIZE: f64 = 0.012;

/// A closed square ring around a place, vertices in `[lng, lat]` order
/// (the GeoJSON convention), first vertex repeated last.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneRing(pub [[f64; 2]; 5]);

impl ZoneRing {
    /// The ring as a GeoJSON Polygon value.
    pub fn to_geojson(&self) -> Value {
        json!({
            "type": "Polygon",
            "coordinates": [self.0],
        })
    }
}

/// Builds the square ring centered on a place.
pub fn zone_ring(center: LatLng, half_size: f64) -> ZoneRing {
    let (lng, lat) = (center.lng, center.lat);
    let s = half_size;
    ZoneRing([
        [lng - s, lat - s],
        [lng + s, lat - s],
        [lng + s, lat + s],
        [lng - s, lat + s],
        [lng - s, lat - s],
    ])
}
