use crate::models::amenity::{Amenity, AmenityType};
use crate::models::location::Location;

/// Anything able to list the amenities around an anchor point.
pub trait AmenitySource {
    /// Amenities returned here carry no `id` and no `distance`.
    fn generate(&self, anchor: Location) -> Vec<Amenity>;
}

/// Fixed demo catalog placed at constant offsets from whatever anchor is given.
///
/// This is illustrative data, not geodata: the same 17 London names appear around any
/// coordinate, including out-of-range ones.
#[derive(Clone, Copy, Debug, Default)]
pub struct MockAmenityCatalog;

type Entry = (&'static str, AmenityType, (f64, f64), &'static [(&'static str, &'static str)]);

const CATALOG: &[Entry] = &[
    ("The Ivy", AmenityType::Restaurant, (0.001, 0.001), &[("cuisine", "British"), ("category", "restaurant")]),
    ("Starbucks", AmenityType::Cafe, (-0.001, 0.002), &[("brand", "Starbucks"), ("category", "cafe")]),
    ("The Red Lion", AmenityType::Pub, (0.002, -0.001), &[("food", "yes"), ("category", "pub")]),
    ("Westminster School", AmenityType::School, (0.003, 0.003), &[("level", "secondary"), ("category", "school")]),
    ("British Library", AmenityType::Library, (-0.002, 0.004), &[("access", "public"), ("category", "library")]),
    ("Hyde Park", AmenityType::Park, (0.005, 0.001), &[("leisure", "park"), ("category", "park")]),
    ("Kensington Gardens", AmenityType::Garden, (0.004, -0.002), &[("historic", "yes"), ("category", "garden")]),
    ("Westminster Tube Station", AmenityType::SubwayStation, (0.001, -0.003), &[("network", "London Underground"), ("category", "transport")]),
    ("Victoria Bus Station", AmenityType::BusStation, (-0.003, 0.005), &[("operator", "TfL"), ("category", "transport")]),
    ("Harrods", AmenityType::Shop, (0.006, 0.004), &[("shop", "department_store"), ("category", "shopping")]),
    ("Tesco Express", AmenityType::Supermarket, (-0.001, -0.004), &[("brand", "Tesco"), ("category", "shopping")]),
    ("Royal Opera House", AmenityType::Theatre, (0.007, 0.006), &[("art", "opera"), ("category", "culture")]),
    ("National Gallery", AmenityType::Museum, (0.008, 0.007), &[("art", "fine_art"), ("category", "culture")]),
    ("St Thomas Hospital", AmenityType::Hospital, (-0.004, 0.008), &[("emergency", "yes"), ("category", "health")]),
    ("Boots Pharmacy", AmenityType::Pharmacy, (0.002, -0.005), &[("brand", "Boots"), ("category", "health")]),
    ("PureGym", AmenityType::Gym, (0.003, -0.006), &[("brand", "PureGym"), ("category", "fitness")]),
    ("Virgin Active", AmenityType::SportsCentre, (-0.005, -0.003), &[("brand", "Virgin Active"), ("category", "fitness")]),
];

impl AmenitySource for MockAmenityCatalog {
    fn generate(&self, anchor: Location) -> Vec<Amenity> {
        CATALOG
            .iter()
            .map(|(name, amenity_type, (d_lat, d_lng), tags)| {
                Amenity::new(name, *amenity_type, anchor.offset(*d_lat, *d_lng), tags)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_a_pure_function_of_the_anchor() {
        let anchor = Location::new(51.5074, -0.1278);
        let first = MockAmenityCatalog.generate(anchor);
        let second = MockAmenityCatalog.generate(anchor);

        assert_eq!(first.len(), 17);
        assert_eq!(first, second);
        assert!(first.iter().all(|a| a.id.is_none() && a.distance.is_none()));
    }

    #[test]
    fn amenities_follow_the_anchor() {
        let a = MockAmenityCatalog.generate(Location::new(0.0, 0.0));
        let b = MockAmenityCatalog.generate(Location::new(10.0, 20.0));

        for (x, y) in a.iter().zip(b.iter()) {
            assert_eq!(x.name, y.name);
            assert!((y.coordinates.0 - x.coordinates.0 - 10.0).abs() < 1e-9);
            assert!((y.coordinates.1 - x.coordinates.1 - 20.0).abs() < 1e-9);
        }
    }

    #[test]
    fn out_of_range_anchor_is_accepted() {
        let amenities = MockAmenityCatalog.generate(Location::new(120.0, 400.0));
        assert_eq!(amenities.len(), 17);
    }
}
