use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;
use crate::errors::LifestyleError;
use crate::models::amenity::{Amenity, AmenityType, SearchQuery, TypeFilter};
use crate::models::location::Location;
use crate::repositories::amenity_catalog::AmenitySource;

pub const DEFAULT_RADIUS_METERS: f64 = 2000.0;
pub const MAX_LIFESTYLE_SCORE: u32 = 100;

const DIVERSITY_BONUS: u32 = 10;

pub const RESTAURANT_TYPES: [AmenityType; 4] = [
    AmenityType::Restaurant,
    AmenityType::Cafe,
    AmenityType::Bar,
    AmenityType::Pub,
];

pub const SCHOOL_TYPES: [AmenityType; 3] = [
    AmenityType::School,
    AmenityType::University,
    AmenityType::Library,
];

pub const GREEN_SPACE_TYPES: [AmenityType; 3] = [
    AmenityType::Park,
    AmenityType::Garden,
    AmenityType::Playground,
];

pub const TRANSPORT_TYPES: [AmenityType; 3] = [
    AmenityType::BusStation,
    AmenityType::TrainStation,
    AmenityType::SubwayStation,
];

/// Amenity search and lifestyle scoring around a point.
///
/// Stateless apart from the injected amenity source; every call regenerates the
/// catalog at the requested anchor.
pub struct LifestyleService {
    source: Arc<dyn AmenitySource + Send + Sync>,
}

impl LifestyleService {
    pub fn new(source: Arc<dyn AmenitySource + Send + Sync>) -> Self {
        Self { source }
    }

    /// Amenities of the requested types within `query.radius` meters, nearest first.
    ///
    /// A radius of zero or less is valid and yields nothing. Ties keep catalog order.
    pub fn search_amenities(
        &self,
        query: &SearchQuery,
    ) -> Result<Vec<Amenity>, LifestyleError> {
        if !query.anchor.is_finite() {
            return Err(LifestyleError::InvalidArgument(format!(
                "anchor must be finite, got ({}, {})",
                query.anchor.lat, query.anchor.lng
            )));
        }
        if query.radius.is_nan() {
            return Err(LifestyleError::InvalidArgument("radius must be a number".to_string()));
        }

        let mut amenities: Vec<Amenity> = self
            .source
            .generate(query.anchor)
            .into_iter()
            .enumerate()
            .filter(|(_, amenity)| query.types.matches(amenity.amenity_type))
            .filter_map(|(index, mut amenity)| {
                let distance = query.anchor.distance_to(&amenity.location());
                if distance > query.radius {
                    return None;
                }
                amenity.id = Some(format!("{}-{}", amenity.amenity_type, index));
                amenity.distance = Some(distance);
                Some(amenity)
            })
            .collect();

        // sort_by is stable
        amenities.sort_by(|a, b| a.distance.unwrap_or(0.0).total_cmp(&b.distance.unwrap_or(0.0)));

        debug!(
            "Found {} amenities within {}m of ({}, {})",
            amenities.len(),
            query.radius,
            query.anchor.lat,
            query.anchor.lng
        );
        Ok(amenities)
    }

    pub fn restaurants(
        &self,
        anchor: Location,
        radius: Option<f64>,
    ) -> Result<Vec<Amenity>, LifestyleError> {
        self.search_group(anchor, radius, &RESTAURANT_TYPES)
    }

    pub fn schools(
        &self,
        anchor: Location,
        radius: Option<f64>,
    ) -> Result<Vec<Amenity>, LifestyleError> {
        self.search_group(anchor, radius, &SCHOOL_TYPES)
    }

    pub fn green_spaces(
        &self,
        anchor: Location,
        radius: Option<f64>,
    ) -> Result<Vec<Amenity>, LifestyleError> {
        self.search_group(anchor, radius, &GREEN_SPACE_TYPES)
    }

    pub fn transport(
        &self,
        anchor: Location,
        radius: Option<f64>,
    ) -> Result<Vec<Amenity>, LifestyleError> {
        self.search_group(anchor, radius, &TRANSPORT_TYPES)
    }

    /// Score in `0..=100` for everything around `anchor` within `radius` meters.
    pub fn lifestyle_score(
        &self,
        anchor: Location,
        radius: f64,
    ) -> Result<u32, LifestyleError> {
        let amenities = self.search_amenities(&SearchQuery::new(anchor, radius))?;
        Ok(score_amenities(&amenities))
    }

    fn search_group(
        &self,
        anchor: Location,
        radius: Option<f64>,
        types: &[AmenityType],
    ) -> Result<Vec<Amenity>, LifestyleError> {
        let query = SearchQuery::new(anchor, radius.unwrap_or(DEFAULT_RADIUS_METERS))
            .with_types(TypeFilter::from(types));
        self.search_amenities(&query)
    }
}

/// +10 the first time each amenity type shows up, plus a proximity bonus for every
/// amenity. Capped at [`MAX_LIFESTYLE_SCORE`].
pub fn score_amenities(amenities: &[Amenity]) -> u32 {
    let mut seen_types = HashSet::new();
    let mut score = 0u32;

    for amenity in amenities {
        if seen_types.insert(amenity.amenity_type) {
            score += DIVERSITY_BONUS;
        }
        score += amenity.distance.map_or(0, proximity_bonus);
    }

    score.min(MAX_LIFESTYLE_SCORE)
}

fn proximity_bonus(distance: f64) -> u32 {
    if distance < 500.0 {
        5
    } else if distance < 1000.0 {
        3
    } else if distance < 2000.0 {
        1
    } else {
        0
    }
}
