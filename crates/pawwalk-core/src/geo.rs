//! Great-circle distance and distance-based walker filtering.

use serde::{Deserialize, Serialize};

use crate::walker::Walker;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Default radius used by the nearby filter.
pub const DEFAULT_NEARBY_RADIUS_KM: f64 = 25.0;

/// Nearest-walker distance beyond which a point is considered outside the service area.
pub const DEFAULT_SERVICE_AREA_KM: f64 = 200.0;

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// True when both components are finite and inside the usual lat/lng ranges.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

/// Haversine distance between two points in kilometers.
///
/// Returns `f64::INFINITY` when either point is absent.
pub fn distance_km(a: Option<&Coordinates>, b: Option<&Coordinates>) -> f64 {
    let (Some(a), Some(b)) = (a, b) else {
        return f64::INFINITY;
    };

    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();

    let s = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);
    // Rounding can push s marginally outside [0, 1] near antipodes.
    let s = s.clamp(0.0, 1.0);

    EARTH_RADIUS_KM * 2.0 * s.sqrt().atan2((1.0 - s).sqrt())
}

/// A walker annotated with its distance from a reference point.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NearbyWalker {
    #[serde(flatten)]
    pub walker: Walker,
    pub distance_km: f64,
}

/// Distance from `here` to a walker; infinite when the walker's coordinates are unusable.
pub fn walker_distance_km(here: &Coordinates, walker: &Walker) -> f64 {
    let coords = walker.coordinates();
    if coords.is_valid() {
        distance_km(Some(here), Some(&coords))
    } else {
        f64::INFINITY
    }
}

/// Annotates every walker with its distance from `here`, preserving input order.
pub fn annotate_distances(walkers: &[Walker], here: &Coordinates) -> Vec<NearbyWalker> {
    walkers
        .iter()
        .map(|walker| NearbyWalker {
            distance_km: walker_distance_km(here, walker),
            walker: walker.clone(),
        })
        .collect()
}

/// Walkers within `radius_km` of `here`, closest first.
pub fn nearby_walkers(walkers: &[Walker], here: &Coordinates, radius_km: f64) -> Vec<NearbyWalker> {
    let mut nearby: Vec<NearbyWalker> = annotate_distances(walkers, here)
        .into_iter()
        .filter(|w| w.distance_km <= radius_km)
        .collect();

    nearby.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    nearby
}

/// Distance to the closest walker with usable coordinates, if any.
pub fn nearest_walker_km(walkers: &[Walker], here: &Coordinates) -> Option<f64> {
    walkers
        .iter()
        .map(|w| walker_distance_km(here, w))
        .filter(|d| d.is_finite())
        .min_by(|a, b| a.total_cmp(b))
}

/// True when no walker is within `service_area_km` of `here`.
///
/// An empty catalog, or one with no usable coordinates, is never reported as far.
pub fn is_far_from_service_area(walkers: &[Walker], here: &Coordinates, service_area_km: f64) -> bool {
    nearest_walker_km(walkers, here).is_some_and(|d| d > service_area_km)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::walker::seed_walkers;

    fn banff() -> Coordinates {
        Coordinates::new(51.1784, -115.5708)
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        let p = banff();
        assert_eq!(distance_km(Some(&p), Some(&p)), 0.0);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = banff();
        let b = Coordinates::new(49.2827, -123.1207);
        let ab = distance_km(Some(&a), Some(&b));
        let ba = distance_km(Some(&b), Some(&a));
        assert!((ab - ba).abs() < 1e-9);
    }

    #[test]
    fn test_distance_missing_input_is_infinite() {
        let p = banff();
        assert!(distance_km(None, Some(&p)).is_infinite());
        assert!(distance_km(Some(&p), None).is_infinite());
        assert!(distance_km(None, None).is_infinite());
    }

    #[test]
    fn test_antipodal_distance_is_half_circumference() {
        let a = Coordinates::new(0.0, 0.0);
        let b = Coordinates::new(0.0, 180.0);
        let d = distance_km(Some(&a), Some(&b));
        let expected = std::f64::consts::PI * EARTH_RADIUS_KM;
        assert!(d.is_finite());
        assert!((d - expected).abs() < 1e-6);
    }

    #[test]
    fn test_known_distance_banff_to_lake_louise() {
        let lake_louise = Coordinates::new(51.4254, -116.1773);
        let d = distance_km(Some(&banff()), Some(&lake_louise));
        assert!(d > 45.0 && d < 55.0, "unexpected distance {d}");
    }

    #[test]
    fn test_nearby_filters_and_sorts() {
        let walkers = seed_walkers();
        // w3 sits in Canmore; w1 is ~18 km away and w2 ~68 km.
        let canmore = Coordinates::new(51.0892, -115.3596);
        let nearby = nearby_walkers(&walkers, &canmore, DEFAULT_NEARBY_RADIUS_KM);

        let ids: Vec<&str> = nearby.iter().map(|w| w.walker.id.as_str()).collect();
        assert_eq!(ids, vec!["w3", "w1"]);
        assert!(nearby[0].distance_km <= nearby[1].distance_km);
    }

    #[test]
    fn test_invalid_walker_coordinates_are_infinitely_far() {
        let mut walkers = seed_walkers();
        walkers[0].lat = f64::NAN;
        let annotated = annotate_distances(&walkers, &banff());
        assert!(annotated[0].distance_km.is_infinite());

        let nearby = nearby_walkers(&walkers, &banff(), 10_000.0);
        assert!(nearby.iter().all(|w| w.walker.id != walkers[0].id));
    }

    #[test]
    fn test_far_from_service_area() {
        let walkers = seed_walkers();
        let toronto = Coordinates::new(43.6532, -79.3832);
        assert!(is_far_from_service_area(&walkers, &toronto, DEFAULT_SERVICE_AREA_KM));
        assert!(!is_far_from_service_area(&walkers, &banff(), DEFAULT_SERVICE_AREA_KM));
        assert!(!is_far_from_service_area(&[], &toronto, DEFAULT_SERVICE_AREA_KM));
    }
}
