//! Location provider for hosts without a positioning service.

use async_trait::async_trait;
use pawwalk_core::config::HomeLocation;
use pawwalk_core::location::{LocationError, LocationProvider, UserLocation};

/// Answers every lookup with a configured position, or with a permission denial.
#[derive(Debug, Clone)]
pub struct FixedLocationProvider {
    location: Option<UserLocation>,
}

impl FixedLocationProvider {
    pub fn new(location: UserLocation) -> Self {
        Self {
            location: Some(location),
        }
    }

    /// A provider whose permission prompt is always declined.
    pub fn denied() -> Self {
        Self { location: None }
    }

    /// Uses the configured home location, or denies when none is set.
    pub fn from_home(home: Option<&HomeLocation>) -> Self {
        match home {
            Some(home) => Self::new(home.to_user_location()),
            None => Self::denied(),
        }
    }
}

#[async_trait]
impl LocationProvider for FixedLocationProvider {
    async fn locate_once(&self, with_address: bool) -> Result<UserLocation, LocationError> {
        let Some(location) = &self.location else {
            tracing::debug!("Location lookup denied");
            return Err(LocationError::PermissionDenied);
        };

        let mut location = location.clone();
        if !with_address {
            location.place = None;
        }
        Ok(location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pawwalk_core::location::{Place, PositionFix};

    fn banff() -> UserLocation {
        UserLocation {
            coords: PositionFix {
                lat: 51.1784,
                lng: -115.5708,
                accuracy: Some(20.0),
            },
            place: Some(Place {
                city: Some("Banff".to_string()),
                ..Default::default()
            }),
        }
    }

    #[tokio::test]
    async fn test_returns_configured_location() {
        let provider = FixedLocationProvider::new(banff());
        assert_eq!(provider.locate_once(true).await.unwrap(), banff());
    }

    #[tokio::test]
    async fn test_without_address_drops_place() {
        let provider = FixedLocationProvider::new(banff());
        let location = provider.locate_once(false).await.unwrap();
        assert!(location.place.is_none());
        assert_eq!(location.coords, banff().coords);
    }

    #[tokio::test]
    async fn test_denied() {
        let provider = FixedLocationProvider::from_home(None);
        assert_eq!(
            provider.locate_once(true).await.unwrap_err(),
            LocationError::PermissionDenied
        );
    }
}
