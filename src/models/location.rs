use serde::{Deserialize, Serialize};
use crate::helpers::geo::haversine_distance;

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Offsets this point by raw degree deltas. No wrapping or clamping is applied.
    pub fn offset(&self, d_lat: f64, d_lng: f64) -> Self {
        Self::new(self.lat + d_lat, self.lng + d_lng)
    }

    /// Great-circle distance in meters.
    pub fn distance_to(&self, other: &Location) -> f64 {
        haversine_distance(self.lat, self.lng, other.lat, other.lng)
    }

    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}
