use crate::models::borough::BoroughBoundary;

const POPULAR_LOCATIONS: [&str; 10] = [
    "Kensington",
    "Chelsea",
    "Mayfair",
    "Notting Hill",
    "Belgravia",
    "Knightsbridge",
    "Marylebone",
    "Fitzrovia",
    "Soho",
    "Covent Garden",
];

/// Static London borough outlines used by the demo map.
pub struct BoroughRepo {
    boroughs: Vec<BoroughBoundary>,
}

impl Default for BoroughRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl BoroughRepo {
    pub fn new() -> Self {
        let boroughs = vec![
            BoroughBoundary::from_bounds("kensington-chelsea", "Kensington and Chelsea", (-0.2037, 51.4994), (-0.1837, 51.5094), 12.13),
            BoroughBoundary::from_bounds("westminster", "Westminster", (-0.1537, 51.4975), (-0.1337, 51.5175), 21.48),
            BoroughBoundary::from_bounds("hammersmith-fulham", "Hammersmith and Fulham", (-0.2337, 51.4875), (-0.2037, 51.4994), 16.40),
            BoroughBoundary::from_bounds("camden", "Camden", (-0.1537, 51.5175), (-0.1337, 51.5375), 21.80),
            BoroughBoundary::from_bounds("islington", "Islington", (-0.1337, 51.5175), (-0.1137, 51.5375), 14.86),
            BoroughBoundary::from_bounds("hackney", "Hackney", (-0.1137, 51.5175), (-0.0937, 51.5375), 19.06),
            BoroughBoundary::from_bounds("tower-hamlets", "Tower Hamlets", (-0.0937, 51.4975), (-0.0737, 51.5175), 19.77),
            BoroughBoundary::from_bounds("southwark", "Southwark", (-0.1137, 51.4775), (-0.0937, 51.4975), 28.85),
            BoroughBoundary::from_bounds("lambeth", "Lambeth", (-0.1337, 51.4575), (-0.1137, 51.4775), 26.82),
            BoroughBoundary::from_bounds("wandsworth", "Wandsworth", (-0.2337, 51.4375), (-0.2137, 51.4575), 34.26),
        ];

        Self { boroughs }
    }

    pub fn all(&self) -> &[BoroughBoundary] {
        &self.boroughs
    }

    /// First borough whose name contains `name`, ignoring case.
    pub fn find_by_name(&self, name: &str) -> Option<&BoroughBoundary> {
        let needle = name.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }
        self.boroughs
            .iter()
            .find(|b| b.name.to_lowercase().contains(&needle))
    }

    pub fn popular_locations(&self) -> Vec<String> {
        POPULAR_LOCATIONS.iter().map(|l| l.to_string()).collect()
    }
}
