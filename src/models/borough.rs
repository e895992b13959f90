use serde::{Deserialize, Serialize};

/// Rough borough outline. Points are `[lng, lat]`, matching GeoJSON ordering.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct BoroughBoundary {
    pub id: String,
    pub name: String,
    pub coordinates: Vec<(f64, f64)>,
    pub center: (f64, f64),
    /// Square kilometres.
    pub area: f64,
}

impl BoroughBoundary {
    /// Builds a closed rectangular ring from a bounding box.
    pub fn from_bounds(
        id: &str,
        name: &str,
        (west, south): (f64, f64),
        (east, north): (f64, f64),
        area: f64,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            coordinates: vec![
                (west, south),
                (east, south),
                (east, north),
                (west, north),
                (west, south),
            ],
            center: ((west + east) / 2.0, (south + north) / 2.0),
            area,
        }
    }
}
