use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use crate::models::location::Location;

#[skip_serializing_none]
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: u32,
    pub title: String,
    /// Display price, e.g. `£2,500,000`.
    pub price: String,
    pub location: String,
    pub bedrooms: u32,
    pub bathrooms: u32,
    #[serde(rename = "type")]
    pub property_type: String,
    pub lifestyle_score: u32,
    pub commute_time: String,
    pub nearby_amenities: Vec<String>,
    pub description: String,
    pub image_url: Option<String>,
    pub details_url: Option<String>,
    pub coordinates: Option<Location>,
}

impl Property {
    /// Numeric value of the display price, ignoring `£` and thousands separators.
    pub fn price_value(&self) -> Option<u64> {
        let digits: String = self
            .price
            .chars()
            .filter(|c| *c != '£' && *c != ',')
            .collect();
        digits.trim().parse().ok()
    }
}

#[skip_serializing_none]
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PropertySearchResponse {
    pub properties: Vec<Property>,
    pub total_results: usize,
    pub page: usize,
    pub page_size: usize,
    pub fallback: Option<bool>,
}

#[skip_serializing_none]
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct PropertyDetailsResponse {
    pub property: Property,
    pub success: bool,
    pub fallback: Option<bool>,
}
