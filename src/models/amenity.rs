use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use thiserror::Error;
use crate::models::location::Location;

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum AmenityType {
    Restaurant,
    Cafe,
    Bar,
    Pub,
    School,
    University,
    Library,
    Park,
    Garden,
    Playground,
    Hospital,
    Clinic,
    Pharmacy,
    Shop,
    Supermarket,
    Market,
    Theatre,
    Museum,
    Cinema,
    Gym,
    SportsCentre,
    SwimmingPool,
    BusStation,
    TrainStation,
    SubwayStation,
}

impl AmenityType {
    pub const ALL: [AmenityType; 25] = [
        AmenityType::Restaurant,
        AmenityType::Cafe,
        AmenityType::Bar,
        AmenityType::Pub,
        AmenityType::School,
        AmenityType::University,
        AmenityType::Library,
        AmenityType::Park,
        AmenityType::Garden,
        AmenityType::Playground,
        AmenityType::Hospital,
        AmenityType::Clinic,
        AmenityType::Pharmacy,
        AmenityType::Shop,
        AmenityType::Supermarket,
        AmenityType::Market,
        AmenityType::Theatre,
        AmenityType::Museum,
        AmenityType::Cinema,
        AmenityType::Gym,
        AmenityType::SportsCentre,
        AmenityType::SwimmingPool,
        AmenityType::BusStation,
        AmenityType::TrainStation,
        AmenityType::SubwayStation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AmenityType::Restaurant => "restaurant",
            AmenityType::Cafe => "cafe",
            AmenityType::Bar => "bar",
            AmenityType::Pub => "pub",
            AmenityType::School => "school",
            AmenityType::University => "university",
            AmenityType::Library => "library",
            AmenityType::Park => "park",
            AmenityType::Garden => "garden",
            AmenityType::Playground => "playground",
            AmenityType::Hospital => "hospital",
            AmenityType::Clinic => "clinic",
            AmenityType::Pharmacy => "pharmacy",
            AmenityType::Shop => "shop",
            AmenityType::Supermarket => "supermarket",
            AmenityType::Market => "market",
            AmenityType::Theatre => "theatre",
            AmenityType::Museum => "museum",
            AmenityType::Cinema => "cinema",
            AmenityType::Gym => "gym",
            AmenityType::SportsCentre => "sports_centre",
            AmenityType::SwimmingPool => "swimming_pool",
            AmenityType::BusStation => "bus_station",
            AmenityType::TrainStation => "train_station",
            AmenityType::SubwayStation => "subway_station",
        }
    }
}

impl fmt::Display for AmenityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown amenity type: {0}")]
pub struct UnknownAmenityType(pub String);

impl FromStr for AmenityType {
    type Err = UnknownAmenityType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AmenityType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownAmenityType(s.to_string()))
    }
}

/// A point of interest near a search anchor.
///
/// `id` and `distance` are only filled in once the amenity has gone through a search.
#[skip_serializing_none]
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Amenity {
    pub id: Option<String>,
    pub name: String,
    #[serde(rename = "type")]
    pub amenity_type: AmenityType,
    /// `[lat, lng]`
    pub coordinates: (f64, f64),
    pub tags: BTreeMap<String, String>,
    pub distance: Option<f64>,
}

impl Amenity {
    pub fn new(
        name: &str,
        amenity_type: AmenityType,
        location: Location,
        tags: &[(&str, &str)],
    ) -> Self {
        Self {
            id: None,
            name: name.to_string(),
            amenity_type,
            coordinates: (location.lat, location.lng),
            tags: tags
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            distance: None,
        }
    }

    pub fn location(&self) -> Location {
        Location::new(self.coordinates.0, self.coordinates.1)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum TypeFilter {
    All,
    Only(Vec<AmenityType>),
}

impl TypeFilter {
    /// An empty list, or any entry equal to `"all"`, disables filtering.
    /// Names that are not a known amenity type match nothing.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Self {
        if names.is_empty() || names.iter().any(|n| n.as_ref() == "all") {
            return TypeFilter::All;
        }

        TypeFilter::Only(
            names
                .iter()
                .filter_map(|n| n.as_ref().parse::<AmenityType>().ok())
                .collect(),
        )
    }

    pub fn matches(&self, amenity_type: AmenityType) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Only(types) => types.contains(&amenity_type),
        }
    }
}

impl From<&[AmenityType]> for TypeFilter {
    fn from(types: &[AmenityType]) -> Self {
        if types.is_empty() {
            TypeFilter::All
        } else {
            TypeFilter::Only(types.to_vec())
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SearchQuery {
    pub anchor: Location,
    /// Meters.
    pub radius: f64,
    pub types: TypeFilter,
}

impl SearchQuery {
    pub fn new(anchor: Location, radius: f64) -> Self {
        Self {
            anchor,
            radius,
            types: TypeFilter::All,
        }
    }

    pub fn with_types(mut self, types: TypeFilter) -> Self {
        self.types = types;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amenity_type_parses_snake_case_names() {
        assert_eq!("sports_centre".parse::<AmenityType>(), Ok(AmenityType::SportsCentre));
        assert_eq!("cafe".parse::<AmenityType>(), Ok(AmenityType::Cafe));
        assert!("Cafe".parse::<AmenityType>().is_err());
    }

    #[test]
    fn unknown_type_error_names_the_value() {
        let err = "spaceport".parse::<AmenityType>().unwrap_err();
        assert_eq!(err, UnknownAmenityType("spaceport".to_string()));
        assert_eq!(err.to_string(), "unknown amenity type: spaceport");
    }

    #[test]
    fn amenity_type_serializes_like_its_name() {
        for t in AmenityType::ALL {
            let json = serde_json::to_value(t).unwrap();
            assert_eq!(json, serde_json::Value::String(t.as_str().to_string()));
        }
    }

    #[test]
    fn type_filter_all_literal_disables_filtering() {
        assert_eq!(TypeFilter::from_names(&["cafe", "all"]), TypeFilter::All);
        assert_eq!(TypeFilter::from_names::<&str>(&[]), TypeFilter::All);
    }

    #[test]
    fn type_filter_with_only_unknown_names_matches_nothing() {
        let filter = TypeFilter::from_names(&["spaceport"]);
        assert!(AmenityType::ALL.iter().all(|t| !filter.matches(*t)));
    }

    #[test]
    fn unsearched_amenity_omits_id_and_distance() {
        let amenity = Amenity::new(
            "Starbucks",
            AmenityType::Cafe,
            Location::new(51.5, -0.1),
            &[("brand", "Starbucks")],
        );
        let json = serde_json::to_value(&amenity).unwrap();

        assert!(json.get("id").is_none());
        assert!(json.get("distance").is_none());
        assert_eq!(json["type"], "cafe");
        assert_eq!(json["coordinates"], serde_json::json!([51.5, -0.1]));
    }
}
