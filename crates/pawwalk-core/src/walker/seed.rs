//! Bootstrap walker catalog.
//!
//! Copied into storage on first run and whenever the persisted collection
//! fails schema validation.

use super::model::Walker;

/// Number of walkers in the seed catalog.
pub const SEED_WALKER_COUNT: usize = 3;

/// Returns a fresh copy of the seed catalog (Banff / Lake Louise area).
pub fn seed_walkers() -> Vec<Walker> {
    vec![
        Walker {
            id: "w1".to_string(),
            name: "Alex".to_string(),
            rating: 4.8,
            walks_completed: 120,
            price_per_hour: 35.0,
            photo_url: "https://randomuser.me/api/portraits/men/32.jpg".to_string(),
            bio: "Trail runner & dog whisperer. Loves long alpine walks.".to_string(),
            is_available: true,
            favorite: false,
            lat: 51.1784,
            lng: -115.5708,
        },
        Walker {
            id: "w2".to_string(),
            name: "Maya".to_string(),
            rating: 5.0,
            walks_completed: 210,
            price_per_hour: 40.0,
            photo_url: "https://randomuser.me/api/portraits/women/65.jpg".to_string(),
            bio: "Gentle training approach; specializes in high-energy dogs.".to_string(),
            is_available: false,
            favorite: true,
            lat: 51.4254,
            lng: -116.1773,
        },
        Walker {
            id: "w3".to_string(),
            name: "Riley".to_string(),
            rating: 4.7,
            walks_completed: 80,
            price_per_hour: 32.0,
            photo_url: "https://randomuser.me/api/portraits/men/12.jpg".to_string(),
            bio: "Early-morning walks and obedience games.".to_string(),
            is_available: true,
            favorite: false,
            lat: 51.0892,
            lng: -115.3596,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_count_matches_constant() {
        assert_eq!(seed_walkers().len(), SEED_WALKER_COUNT);
    }

    #[test]
    fn test_seed_coordinates_are_finite() {
        for walker in seed_walkers() {
            assert!(walker.lat.is_finite(), "{} has no latitude", walker.id);
            assert!(walker.lng.is_finite(), "{} has no longitude", walker.id);
            assert!(walker.coordinates().is_valid());
        }
    }

    #[test]
    fn test_seed_ids_are_unique() {
        let ids: HashSet<String> = seed_walkers().into_iter().map(|w| w.id).collect();
        assert_eq!(ids.len(), SEED_WALKER_COUNT);
    }

    #[test]
    fn test_seed_ratings_and_prices_in_range() {
        for walker in seed_walkers() {
            assert!((0.0..=5.0).contains(&walker.rating));
            assert!(walker.price_per_hour > 0.0);
        }
    }
}
