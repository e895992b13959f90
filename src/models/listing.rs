use serde::Deserialize;
use serde_json::Value;
use crate::models::location::Location;

/// Response body of the upstream `property_details.json` endpoint.
///
/// The provider is loose with types (numbers sometimes arrive as strings), so the
/// numeric fields stay as raw JSON values and are coerced on read.
#[derive(Clone, Deserialize, Debug, Default)]
pub struct ListingEnvelope {
    pub listing: Option<Listing>,
}

#[derive(Clone, Deserialize, Debug, Default)]
pub struct Listing {
    pub price: Option<Value>,
    pub details_url: Option<String>,
    pub details: Option<ListingDetails>,
}

#[derive(Clone, Deserialize, Debug, Default)]
pub struct ListingDetails {
    pub display_address: Option<String>,
    pub property_type: Option<String>,
    pub num_bedrooms: Option<Value>,
    pub num_bathrooms: Option<Value>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub latitude: Option<Value>,
    pub longitude: Option<Value>,
    pub garden: Option<Value>,
    pub parking: Option<Value>,
}

impl Listing {
    pub fn price_display(&self) -> Option<String> {
        match self.price.as_ref()? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
            _ => None,
        }
    }
}

impl ListingDetails {
    pub fn bedrooms(&self) -> u32 {
        self.num_bedrooms.as_ref().and_then(value_as_f64).map_or(0, |n| n.max(0.0) as u32)
    }

    pub fn bathrooms(&self) -> u32 {
        self.num_bathrooms.as_ref().and_then(value_as_f64).map_or(0, |n| n.max(0.0) as u32)
    }

    pub fn has_garden(&self) -> bool {
        self.garden.as_ref().map_or(false, is_truthy)
    }

    pub fn has_parking(&self) -> bool {
        self.parking.as_ref().map_or(false, is_truthy)
    }

    /// Lower-cased display address, empty when missing.
    pub fn address_key(&self) -> String {
        self.display_address
            .as_deref()
            .unwrap_or_default()
            .to_lowercase()
    }

    pub fn coordinates(&self) -> Option<Location> {
        let lat = self.latitude.as_ref().and_then(value_as_f64)?;
        let lng = self.longitude.as_ref().and_then(value_as_f64)?;
        Some(Location::new(lat, lng))
    }
}

fn value_as_f64(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    number.filter(|n| n.is_finite())
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(false, |n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numeric_fields_accept_strings() {
        let details: ListingDetails = serde_json::from_value(json!({
            "num_bedrooms": "3",
            "num_bathrooms": 2,
            "latitude": "51.5",
            "longitude": -0.12,
            "garden": 1,
            "parking": ""
        }))
        .unwrap();

        assert_eq!(details.bedrooms(), 3);
        assert_eq!(details.bathrooms(), 2);
        assert_eq!(details.coordinates(), Some(Location::new(51.5, -0.12)));
        assert!(details.has_garden());
        assert!(!details.has_parking());
    }

    #[test]
    fn missing_fields_deserialize_to_none() {
        let envelope: ListingEnvelope = serde_json::from_value(json!({})).unwrap();
        assert!(envelope.listing.is_none());

        let listing: Listing = serde_json::from_value(json!({ "price": 0 })).unwrap();
        assert_eq!(listing.price_display(), None);
    }
}
