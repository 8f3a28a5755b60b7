//! Application state domain models.
//!
//! `AppSnapshot` is the read-only view the domain store publishes after
//! every action. A new snapshot fully replaces the previous one.

use chrono::{DateTime, Utc};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use crate::booking::Booking;
use crate::geo::{self, Coordinates, NearbyWalker};
use crate::location::UserLocation;
use crate::user::SessionUser;
use crate::walker::Walker;

/// Pointer to the most recently viewed walker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LastSelection {
    pub walker_id: String,
    /// Written as RFC 3339; epoch milliseconds are also accepted on load.
    #[serde(deserialize_with = "deserialize_instant")]
    pub at: DateTime<Utc>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredInstant {
    EpochMillis(i64),
    Rfc3339(DateTime<Utc>),
}

fn deserialize_instant<'de, D>(deserializer: D) -> std::result::Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    match StoredInstant::deserialize(deserializer)? {
        StoredInstant::Rfc3339(at) => Ok(at),
        StoredInstant::EpochMillis(millis) => DateTime::from_timestamp_millis(millis)
            .ok_or_else(|| de::Error::custom(format!("timestamp out of range: {}", millis))),
    }
}

/// Everything the domain store owns, at one point in time.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSnapshot {
    pub walkers: Vec<Walker>,
    /// Newest first
    pub bookings: Vec<Booking>,
    pub last_selection: Option<LastSelection>,
    pub user: Option<SessionUser>,
    /// In-memory only
    pub user_location: Option<UserLocation>,
}

impl AppSnapshot {
    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn walker(&self, walker_id: &str) -> Option<&Walker> {
        self.walkers.iter().find(|w| w.id == walker_id)
    }

    pub fn booking(&self, booking_id: &str) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.id == booking_id)
    }

    pub fn favorite_walkers(&self) -> Vec<&Walker> {
        self.walkers.iter().filter(|w| w.favorite).collect()
    }

    pub fn last_selected_walker(&self) -> Option<&Walker> {
        self.last_selection
            .as_ref()
            .and_then(|sel| self.walker(&sel.walker_id))
    }

    /// Coordinates of the stored user location, if any.
    pub fn here(&self) -> Option<Coordinates> {
        self.user_location.as_ref().map(|loc| loc.coords.coordinates())
    }

    /// Nearby walkers around the stored user location.
    ///
    /// `None` when no location is known, so callers can fall back to the full list.
    pub fn nearby_walkers(&self, radius_km: f64) -> Option<Vec<NearbyWalker>> {
        self.here()
            .map(|here| geo::nearby_walkers(&self.walkers, &here, radius_km))
    }

    /// False when no location is known.
    pub fn is_far_from_service_area(&self, service_area_km: f64) -> bool {
        self.here()
            .is_some_and(|here| geo::is_far_from_service_area(&self.walkers, &here, service_area_km))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::PositionFix;
    use crate::walker::seed_walkers;

    fn snapshot_at(lat: f64, lng: f64) -> AppSnapshot {
        AppSnapshot {
            walkers: seed_walkers(),
            user_location: Some(UserLocation {
                coords: PositionFix {
                    lat,
                    lng,
                    accuracy: Some(15.0),
                },
                place: None,
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_default_is_logged_out() {
        let snapshot = AppSnapshot::default();
        assert!(!snapshot.is_logged_in());
        assert!(snapshot.nearby_walkers(25.0).is_none());
        assert!(!snapshot.is_far_from_service_area(200.0));
    }

    #[test]
    fn test_favorites_follow_seed() {
        let snapshot = snapshot_at(51.1784, -115.5708);
        let favorites: Vec<&str> = snapshot.favorite_walkers().iter().map(|w| w.id.as_str()).collect();
        assert_eq!(favorites, vec!["w2"]);
    }

    #[test]
    fn test_nearby_uses_user_location() {
        let snapshot = snapshot_at(51.1784, -115.5708);
        let nearby = snapshot.nearby_walkers(25.0).unwrap();
        assert_eq!(nearby[0].walker.id, "w1");
        assert_eq!(nearby[0].distance_km, 0.0);
    }

    #[test]
    fn test_last_selected_walker_resolves() {
        let mut snapshot = snapshot_at(51.1784, -115.5708);
        snapshot.last_selection = Some(LastSelection {
            walker_id: "w3".to_string(),
            at: Utc::now(),
        });
        assert_eq!(snapshot.last_selected_walker().unwrap().name, "Riley");
    }

    #[test]
    fn test_last_selection_accepts_epoch_millis() {
        let selection: LastSelection =
            serde_json::from_str(r#"{"walkerId":"w1","at":1714550000000}"#).unwrap();
        assert_eq!(selection.walker_id, "w1");
        assert_eq!(selection.at.timestamp_millis(), 1_714_550_000_000);
    }

    #[test]
    fn test_last_selection_accepts_rfc3339() {
        let selection: LastSelection =
            serde_json::from_str(r#"{"walkerId":"w2","at":"2026-01-01T00:00:00Z"}"#).unwrap();
        assert_eq!(selection.at.to_rfc3339(), "2026-01-01T00:00:00+00:00");

        let written = serde_json::to_string(&selection).unwrap();
        assert!(written.contains(r#""at":"2026-01-01T00:00:00Z""#));
    }
}
