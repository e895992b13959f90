use crate::models::location::Location;
use crate::models::property::Property;

/// Backing store for property search.
pub trait PropertySource {
    fn list_properties(&self) -> anyhow::Result<Vec<Property>>;
}

/// Hard-coded demo listings. Also serves as the degraded-mode data set.
#[derive(Clone, Copy, Debug, Default)]
pub struct MockPropertyRepo;

impl MockPropertyRepo {
    pub fn properties(&self) -> Vec<Property> {
        vec![
            demo_property(
                1,
                "1 Surrey Street, Temple - Luxury Apartment",
                "£2,500,000",
                "1 Surrey St, Temple, London WC2R 2ND",
                (4, 3),
                "Apartment",
                95,
                "15 min",
                &["Temple Station", "Royal Courts of Justice", "Fleet Street", "Embankment Gardens"],
                "Stunning luxury apartment in the prestigious Temple area, minutes from the Royal Courts of Justice and excellent transport links.",
                Location::new(51.5136, -0.1136),
            ),
            demo_property(
                2,
                "111 Southwark Street - Modern Loft",
                "£1,800,000",
                "111 Southwark St, London SE1 0JF",
                (3, 2),
                "Loft",
                92,
                "12 min",
                &["London Bridge Station", "Borough Market", "Tate Modern", "Shard"],
                "Contemporary loft conversion in vibrant Southwark, perfectly positioned near Borough Market and the cultural quarter.",
                Location::new(51.5045, -0.0865),
            ),
            demo_property(
                3,
                "57 Clerkenwell Road - Farringdon Townhouse",
                "£4,200,000",
                "57 Clerkenwell Rd, Farringdon, London EC1M 5NG",
                (5, 4),
                "Townhouse",
                98,
                "8 min",
                &["Farringdon Station", "Clerkenwell Green", "Exmouth Market", "Barbican Centre"],
                "Exclusive townhouse in the heart of Farringdon, offering the ultimate city lifestyle with access to the best of London.",
                Location::new(51.5208, -0.1053),
            ),
            demo_property(
                4,
                "30 Millbank - Westminster Mansion",
                "£6,500,000",
                "30 Millbank, Westminster, London SW1P 4DU",
                (6, 4),
                "Mansion",
                96,
                "10 min",
                &["Westminster Station", "Houses of Parliament", "Tate Britain", "Thames Path"],
                "Magnificent mansion on prestigious Millbank, overlooking the Thames with views of the Houses of Parliament.",
                Location::new(51.4958, -0.1247),
            ),
            demo_property(
                5,
                "27 Broadley Terrace - Marylebone Victorian House",
                "£3,800,000",
                "27 Broadley Terrace, Marylebone, London NW1 6LG",
                (5, 3),
                "House",
                91,
                "18 min",
                &["Baker Street Station", "Regent's Park", "Marylebone High Street", "Madame Tussauds"],
                "Beautiful Victorian house in Marylebone with period features, garden access and excellent family amenities.",
                Location::new(51.5225, -0.1537),
            ),
            demo_property(
                6,
                "4 Northington Street - Holborn Modern Apartment",
                "£2,800,000",
                "4 Northington St, Holborn, London WC1N 2JG",
                (3, 3),
                "Apartment",
                94,
                "14 min",
                &["Holborn Station", "British Museum", "Lincoln's Inn Fields", "Covent Garden"],
                "Elegant modern apartment in Holborn with access to world-class cultural institutions and excellent transport links.",
                Location::new(51.5175, -0.1187),
            ),
            demo_property(
                7,
                "Marylebone Victorian House",
                "£3,800,000",
                "Marylebone, London",
                (5, 3),
                "House",
                91,
                "28 min",
                &["Boutique Shops", "Fine Dining", "Cultural Venues"],
                "Beautiful Victorian house in Marylebone with period features and modern amenities.",
                Location::new(51.5225, -0.1537),
            ),
            demo_property(
                8,
                "Fitzrovia Modern Flat",
                "£1,200,000",
                "Fitzrovia, London",
                (2, 2),
                "Flat",
                87,
                "18 min",
                &["Creative Studios", "Tech Companies", "Trendy Cafes"],
                "Contemporary flat in Fitzrovia perfect for young professionals in the creative and tech industries.",
                Location::new(51.5175, -0.1337),
            ),
            demo_property(
                9,
                "Soho Loft Apartment",
                "£2,100,000",
                "Soho, London",
                (2, 2),
                "Apartment",
                93,
                "12 min",
                &["Nightlife", "Entertainment", "Restaurants"],
                "Stylish loft apartment in the heart of Soho with vibrant nightlife and entertainment options.",
                Location::new(51.5125, -0.1337),
            ),
            demo_property(
                10,
                "Covent Garden Penthouse",
                "£3,500,000",
                "Covent Garden, London",
                (3, 3),
                "Penthouse",
                90,
                "16 min",
                &["Theatre District", "Shopping", "Cultural Venues"],
                "Luxurious penthouse in Covent Garden with access to London's premier theatre and shopping district.",
                Location::new(51.5125, -0.1237),
            ),
        ]
    }

    /// Demo listing with the given id, or the first listing when there is none.
    /// Unlike search results it links to its own details page.
    pub fn find_or_first(&self, id: Option<u32>) -> Property {
        let mut properties = self.properties();
        let position = id
            .and_then(|id| properties.iter().position(|p| p.id == id))
            .unwrap_or(0);
        let mut property = properties.swap_remove(position);
        property.details_url = Some(format!("/property/{}", property.id));
        property
    }
}

impl PropertySource for MockPropertyRepo {
    fn list_properties(&self) -> anyhow::Result<Vec<Property>> {
        Ok(self.properties())
    }
}

#[allow(clippy::too_many_arguments)]
fn demo_property(
    id: u32,
    title: &str,
    price: &str,
    location: &str,
    (bedrooms, bathrooms): (u32, u32),
    property_type: &str,
    lifestyle_score: u32,
    commute_time: &str,
    nearby_amenities: &[&str],
    description: &str,
    coordinates: Location,
) -> Property {
    Property {
        id,
        title: title.to_string(),
        price: price.to_string(),
        location: location.to_string(),
        bedrooms,
        bathrooms,
        property_type: property_type.to_string(),
        lifestyle_score,
        commute_time: commute_time.to_string(),
        nearby_amenities: nearby_amenities.iter().map(|a| a.to_string()).collect(),
        description: description.to_string(),
        image_url: Some("/api/placeholder/400/300".to_string()),
        details_url: Some("#".to_string()),
        coordinates: Some(coordinates),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_ids_are_unique_and_sequential() {
        let ids: Vec<u32> = MockPropertyRepo.properties().iter().map(|p| p.id).collect();
        assert_eq!(ids, (1..=10).collect::<Vec<u32>>());
    }

    #[test]
    fn find_or_first_falls_back_to_first_listing() {
        assert_eq!(MockPropertyRepo.find_or_first(Some(4)).id, 4);
        assert_eq!(MockPropertyRepo.find_or_first(Some(999)).id, 1);
        assert_eq!(MockPropertyRepo.find_or_first(None).id, 1);
        assert_eq!(
            MockPropertyRepo.find_or_first(Some(999)).details_url.as_deref(),
            Some("/property/1")
        );
    }

    #[test]
    fn display_prices_parse() {
        let first = MockPropertyRepo.find_or_first(Some(1));
        assert_eq!(first.price_value(), Some(2_500_000));
    }
}
