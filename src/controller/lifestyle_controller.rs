use std::sync::Arc;
use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::warn;
use crate::controller::AppState;
use crate::helpers::params::{first_value, parse_finite_or, parse_leading_i64};
use crate::models::amenity::{Amenity, SearchQuery};
use crate::models::location::Location;
use crate::services::lifestyle_service::{LifestyleService, DEFAULT_RADIUS_METERS};

pub const DEFAULT_LAT: f64 = 51.5074;
pub const DEFAULT_LNG: f64 = -0.1278;

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(retrieve_lifestyle_data))
        .route_layer(Extension(app_state.lifestyle_service))
}

/// Everything arrives as text so a bad value falls back to its default instead of
/// rejecting the request.
#[derive(Clone, Serialize, Deserialize, Debug, Default)]
pub struct LifestyleParams {
    pub lat: Option<String>,
    pub lng: Option<String>,
    pub radius: Option<String>,
    pub r#type: Option<String>,
}

impl LifestyleParams {
    /// Takes the first value of each key from a decoded query string.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            lat: first_value(pairs, "lat"),
            lng: first_value(pairs, "lng"),
            radius: first_value(pairs, "radius"),
            r#type: first_value(pairs, "type"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifestyleRequest {
    Restaurants,
    Schools,
    GreenSpaces,
    Transport,
    Score,
    All,
}

impl LifestyleRequest {
    pub fn parse(kind: &str) -> Self {
        match kind {
            "restaurants" => LifestyleRequest::Restaurants,
            "schools" => LifestyleRequest::Schools,
            "greenspaces" => LifestyleRequest::GreenSpaces,
            "transport" => LifestyleRequest::Transport,
            "score" => LifestyleRequest::Score,
            _ => LifestyleRequest::All,
        }
    }
}

#[derive(Clone, Serialize, Debug)]
pub struct AmenityListResponse {
    pub amenities: Vec<Amenity>,
    pub total: usize,
    pub location: Location,
    pub radius: i64,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Clone, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LifestyleScoreResponse {
    pub lifestyle_score: u32,
}

pub async fn retrieve_lifestyle_data(
    Extension(lifestyle_service): Extension<Arc<LifestyleService>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> impl IntoResponse {
    let query = LifestyleParams::from_pairs(&pairs);
    let location = Location::new(
        parse_finite_or(query.lat.as_deref(), DEFAULT_LAT),
        parse_finite_or(query.lng.as_deref(), DEFAULT_LNG),
    );
    let radius = parse_leading_i64(query.radius.as_deref())
        .unwrap_or(DEFAULT_RADIUS_METERS as i64);
    let kind = query
        .r#type
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| "all".to_string());

    let meters = Some(radius as f64);
    let amenities_res = match LifestyleRequest::parse(&kind) {
        LifestyleRequest::Restaurants => lifestyle_service.restaurants(location, meters),
        LifestyleRequest::Schools => lifestyle_service.schools(location, meters),
        LifestyleRequest::GreenSpaces => lifestyle_service.green_spaces(location, meters),
        LifestyleRequest::Transport => lifestyle_service.transport(location, meters),
        LifestyleRequest::Score => {
            return match lifestyle_service.lifestyle_score(location, radius as f64) {
                Ok(lifestyle_score) => {
                    (StatusCode::OK, Json(LifestyleScoreResponse { lifestyle_score })).into_response()
                }
                Err(e) => lifestyle_failure(e),
            };
        }
        LifestyleRequest::All => {
            lifestyle_service.search_amenities(&SearchQuery::new(location, radius as f64))
        }
    };

    match amenities_res {
        Ok(amenities) => {
            let response = AmenityListResponse {
                total: amenities.len(),
                amenities,
                location,
                radius,
                kind,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => lifestyle_failure(e),
    }
}

fn lifestyle_failure(e: impl std::fmt::Display) -> axum::response::Response {
    warn!("Something went wrong fetching lifestyle data due to: {}", e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "Failed to fetch lifestyle data" })),
    ).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_kinds_fall_back_to_all() {
        assert_eq!(LifestyleRequest::parse("greenspaces"), LifestyleRequest::GreenSpaces);
        assert_eq!(LifestyleRequest::parse("score"), LifestyleRequest::Score);
        assert_eq!(LifestyleRequest::parse("nightlife"), LifestyleRequest::All);
        assert_eq!(LifestyleRequest::parse("Score"), LifestyleRequest::All);
    }

    #[test]
    fn repeated_keys_keep_the_first_value() {
        let pairs = vec![
            ("type".to_string(), "score".to_string()),
            ("radius".to_string(), "250".to_string()),
            ("type".to_string(), "all".to_string()),
        ];
        let params = LifestyleParams::from_pairs(&pairs);

        assert_eq!(params.r#type.as_deref(), Some("score"));
        assert_eq!(params.radius.as_deref(), Some("250"));
        assert_eq!(params.lat, None);
    }
}
