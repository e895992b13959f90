use std::sync::Arc;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use crate::helpers::params::{first_value, parse_leading_u64, parse_opt, parse_or};
use crate::models::listing::Listing;
use crate::models::property::{Property, PropertyDetailsResponse, PropertySearchResponse};
use crate::repositories::listings_client::ListingsClient;
use crate::repositories::property_repo::{MockPropertyRepo, PropertySource};

pub const DEFAULT_PAGE_SIZE: usize = 20;

const BASE_LISTING_SCORE: u32 = 75;
const PREMIUM_AREAS: [&str; 5] = ["kensington", "chelsea", "mayfair", "belgravia", "knightsbridge"];

/// Raw search filters. Every value is optional and malformed ones are ignored.
#[derive(Clone, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct PropertySearchParams {
    pub location: Option<String>,
    pub postcode: Option<String>,
    pub borough: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub property_type: Option<String>,
    pub min_bedrooms: Option<String>,
    pub max_bedrooms: Option<String>,
    pub page: Option<String>,
    pub page_size: Option<String>,
}

impl PropertySearchParams {
    /// Takes the first value of each key from a decoded query string.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            location: first_value(pairs, "location"),
            postcode: first_value(pairs, "postcode"),
            borough: first_value(pairs, "borough"),
            min_price: first_value(pairs, "minPrice"),
            max_price: first_value(pairs, "maxPrice"),
            property_type: first_value(pairs, "propertyType"),
            min_bedrooms: first_value(pairs, "minBedrooms"),
            max_bedrooms: first_value(pairs, "maxBedrooms"),
            page: first_value(pairs, "page"),
            page_size: first_value(pairs, "pageSize"),
        }
    }
}

pub struct PropertyService {
    source: Arc<dyn PropertySource + Send + Sync>,
    demo: MockPropertyRepo,
    listings: Option<ListingsClient>,
}

impl PropertyService {
    pub fn new(
        source: Arc<dyn PropertySource + Send + Sync>,
        listings: Option<ListingsClient>,
    ) -> Self {
        Self {
            source,
            demo: MockPropertyRepo,
            listings,
        }
    }

    pub fn search(&self, params: &PropertySearchParams) -> PropertySearchResponse {
        let properties = match self.source.list_properties() {
            Ok(properties) => properties,
            Err(e) => {
                warn!("Something went wrong listing properties due to: {:#}, serving demo data", e);
                return self.degraded_search();
            }
        };

        let filter = PropertyFilter::from_params(params);
        let filtered: Vec<Property> = properties
            .into_iter()
            .filter(|p| filter.matches(p))
            .collect();

        let page = parse_or(params.page.as_deref(), 1usize).max(1);
        let page_size = parse_or(params.page_size.as_deref(), DEFAULT_PAGE_SIZE).max(1);
        let start = (page - 1).saturating_mul(page_size);
        let total_results = filtered.len();

        PropertySearchResponse {
            properties: filtered.into_iter().skip(start).take(page_size).collect(),
            total_results,
            page,
            page_size,
            fallback: None,
        }
    }

    /// Details for a single listing, from the upstream provider when one is configured.
    /// Falls back to demo data on any failure; this never errors.
    pub async fn details(&self, id: &str) -> PropertyDetailsResponse {
        let listing_id = parse_opt::<u32>(Some(id));

        match (&self.listings, listing_id) {
            (Some(client), Some(listing_id)) => match client.fetch_listing(listing_id).await {
                Ok(envelope) => {
                    return PropertyDetailsResponse {
                        property: property_from_listing(listing_id, envelope.listing.as_ref()),
                        success: true,
                        fallback: None,
                    };
                }
                Err(e) => {
                    warn!("Something went wrong fetching listing {} due to: {:#}", listing_id, e);
                }
            },
            (None, _) => debug!("No listings provider configured, serving demo property {}", id),
            (_, None) => debug!("Listing id {} is not numeric, serving demo property", id),
        }

        PropertyDetailsResponse {
            property: self.demo.find_or_first(listing_id),
            success: true,
            fallback: Some(true),
        }
    }

    fn degraded_search(&self) -> PropertySearchResponse {
        let properties = self.demo.properties();
        PropertySearchResponse {
            total_results: properties.len(),
            properties,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            fallback: Some(true),
        }
    }
}

#[derive(Debug, Default)]
struct PropertyFilter {
    location_terms: Vec<String>,
    min_price: Option<u64>,
    max_price: Option<u64>,
    property_type: Option<String>,
    min_bedrooms: Option<u64>,
    max_bedrooms: Option<u64>,
}

impl PropertyFilter {
    fn from_params(params: &PropertySearchParams) -> Self {
        let location_terms = [&params.location, &params.postcode, &params.borough]
            .into_iter()
            .flatten()
            .filter(|term| !term.is_empty())
            .map(|term| term.to_lowercase())
            .collect();

        let property_type = params
            .property_type
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty() && !t.eq_ignore_ascii_case("all"))
            .map(str::to_lowercase);

        // "5+" is the open-ended top bucket of the bedrooms picker
        let max_bedrooms = match params.max_bedrooms.as_deref().map(str::trim) {
            Some("5+") => None,
            other => parse_leading_u64(other),
        };

        Self {
            location_terms,
            min_price: parse_leading_u64(params.min_price.as_deref()),
            max_price: parse_leading_u64(params.max_price.as_deref()),
            property_type,
            min_bedrooms: parse_leading_u64(params.min_bedrooms.as_deref()),
            max_bedrooms,
        }
    }

    fn matches(&self, property: &Property) -> bool {
        let location = property.location.to_lowercase();
        if !self.location_terms.iter().all(|term| location.contains(term)) {
            return false;
        }

        if let Some(price) = property.price_value() {
            if self.min_price.map_or(false, |min| price < min) {
                return false;
            }
            if self.max_price.map_or(false, |max| price > max) {
                return false;
            }
        }

        if let Some(property_type) = &self.property_type {
            if property.property_type.to_lowercase() != *property_type {
                return false;
            }
        }

        let bedrooms = u64::from(property.bedrooms);
        if self.min_bedrooms.map_or(false, |min| bedrooms < min) {
            return false;
        }
        if self.max_bedrooms.map_or(false, |max| bedrooms > max) {
            return false;
        }

        true
    }
}

/// Maps an upstream listing onto our property shape, filling gaps with defaults.
pub fn property_from_listing(id: u32, listing: Option<&Listing>) -> Property {
    let details = listing.and_then(|l| l.details.clone()).unwrap_or_default();
    let display_address = details.display_address.clone().filter(|a| !a.is_empty());
    let property_type = details.property_type.clone().filter(|t| !t.is_empty());

    Property {
        id,
        title: display_address
            .clone()
            .or_else(|| property_type.clone())
            .unwrap_or_else(|| "Property".to_string()),
        price: listing
            .and_then(Listing::price_display)
            .unwrap_or_else(|| "Price on request".to_string()),
        location: display_address.unwrap_or_else(|| "Location TBC".to_string()),
        bedrooms: details.bedrooms(),
        bathrooms: details.bathrooms(),
        property_type: property_type.unwrap_or_else(|| "Property".to_string()),
        lifestyle_score: listing_lifestyle_score(listing),
        commute_time: listing_commute_time(listing),
        nearby_amenities: listing_nearby_amenities(listing),
        description: details
            .description
            .clone()
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| "No description available".to_string()),
        image_url: Some(
            details
                .image_url
                .clone()
                .filter(|u| !u.is_empty())
                .unwrap_or_else(|| "/api/placeholder/800/600".to_string()),
        ),
        details_url: Some(
            listing
                .and_then(|l| l.details_url.clone())
                .filter(|u| !u.is_empty())
                .unwrap_or_else(|| "#".to_string()),
        ),
        coordinates: details.coordinates(),
    }
}

pub fn listing_lifestyle_score(listing: Option<&Listing>) -> u32 {
    let Some(listing) = listing else {
        return BASE_LISTING_SCORE;
    };
    let details = listing.details.clone().unwrap_or_default();
    let mut score = BASE_LISTING_SCORE;

    if details.bedrooms() >= 3 {
        score += 5;
    }
    if details.bathrooms() >= 2 {
        score += 5;
    }
    if details.has_garden() {
        score += 5;
    }
    if details.has_parking() {
        score += 5;
    }

    let address = details.address_key();
    if PREMIUM_AREAS.iter().any(|area| address.contains(area)) {
        score += 10;
    }

    score.min(100)
}

/// Commute estimate keyed off the address. There is no routing behind this.
pub fn listing_commute_time(listing: Option<&Listing>) -> String {
    let Some(listing) = listing else {
        return "25 min".to_string();
    };
    let address = listing
        .details
        .as_ref()
        .map(|d| d.address_key())
        .unwrap_or_default();
    let mentions = |areas: &[&str]| areas.iter().any(|area| address.contains(area));

    let minutes = if mentions(&["mayfair", "soho"]) {
        15
    } else if mentions(&["kensington", "chelsea"]) {
        20
    } else if mentions(&["notting hill", "hampstead"]) {
        30
    } else if mentions(&["canary wharf"]) {
        35
    } else {
        25
    };
    format!("{} min", minutes)
}

pub fn listing_nearby_amenities(listing: Option<&Listing>) -> Vec<String> {
    let Some(listing) = listing else {
        return vec!["Transport Links".to_string(), "Local Amenities".to_string()];
    };
    let details = listing.details.clone().unwrap_or_default();
    let address = details.address_key();
    let mut amenities = vec!["Transport Links"];

    match details.property_type.as_deref() {
        Some("House") | Some("Townhouse") => amenities.extend(["Family Parks", "Good Schools"]),
        Some("Apartment") | Some("Penthouse") => amenities.extend(["Shopping District", "Restaurants"]),
        _ => {}
    }
    if address.contains("mayfair") || address.contains("knightsbridge") {
        amenities.extend(["Luxury Retail", "Fine Dining"]);
    }
    if address.contains("chelsea") || address.contains("kensington") {
        amenities.extend(["Boutique Shops", "Cultural Venues"]);
    }

    amenities.into_iter().map(String::from).collect()
}
