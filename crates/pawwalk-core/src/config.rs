//! Application configuration model.
//!
//! Loaded from `config.toml`. Every field has a default so a partial or
//! empty file is valid.

use serde::{Deserialize, Serialize};

use crate::geo::{DEFAULT_NEARBY_RADIUS_KM, DEFAULT_SERVICE_AREA_KM};
use crate::location::{Place, PositionFix, UserLocation};
use crate::storage::DEFAULT_NAMESPACE;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Prefix for persisted keys (`<namespace>/walkers`, ...)
    pub storage_namespace: String,
    pub nearby_radius_km: f64,
    pub service_area_km: f64,
    /// How long before a walk its reminder fires
    pub reminder_lead_minutes: i64,
    /// Fallback filter when `RUST_LOG` is unset
    pub log_level: String,
    /// Fixed device location for hosts without a positioning service
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home: Option<HomeLocation>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_namespace: DEFAULT_NAMESPACE.to_string(),
            nearby_radius_km: DEFAULT_NEARBY_RADIUS_KM,
            service_area_km: DEFAULT_SERVICE_AREA_KM,
            reminder_lead_minutes: 10,
            log_level: "info".to_string(),
            home: None,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct HomeLocation {
    pub lat: f64,
    pub lng: f64,
    #[serde(default)]
    pub accuracy: Option<f64>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
}

impl HomeLocation {
    pub fn to_user_location(&self) -> UserLocation {
        let place = Place {
            city: self.city.clone(),
            region: self.region.clone(),
            country: self.country.clone(),
            postal_code: self.postal_code.clone(),
        };
        let has_place = place != Place::default();

        UserLocation {
            coords: PositionFix {
                lat: self.lat,
                lng: self.lng,
                accuracy: self.accuracy,
            },
            place: has_place.then_some(place),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.nearby_radius_km, 25.0);
        assert_eq!(config.storage_namespace, "@rmt");
    }

    #[test]
    fn test_partial_toml() {
        let config: AppConfig = toml::from_str(
            r#"
            nearby_radius_km = 10.0

            [home]
            lat = 51.1784
            lng = -115.5708
            city = "Banff"
            "#,
        )
        .unwrap();

        assert_eq!(config.nearby_radius_km, 10.0);
        assert_eq!(config.reminder_lead_minutes, 10);

        let location = config.home.unwrap().to_user_location();
        assert_eq!(location.coords.lat, 51.1784);
        assert_eq!(location.place.unwrap().city.as_deref(), Some("Banff"));
    }

    #[test]
    fn test_home_without_place_fields() {
        let home = HomeLocation {
            lat: 1.0,
            lng: 2.0,
            accuracy: None,
            city: None,
            region: None,
            country: None,
            postal_code: None,
        };
        assert!(home.to_user_location().place.is_none());
    }
}
