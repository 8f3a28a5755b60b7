//! User location models.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geo::Coordinates;

/// A one-shot position reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionFix {
    pub lat: f64,
    pub lng: f64,
    /// Horizontal accuracy in meters, when the platform reports it
    #[serde(default)]
    pub accuracy: Option<f64>,
}

impl PositionFix {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.lat, self.lng)
    }
}

/// Reverse-geocoded description of a position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    pub city: Option<String>,
    pub region: Option<String>,
    pub country: Option<String>,
    pub postal_code: Option<String>,
}

impl Place {
    /// "City, Region, Country" using whichever parts are present.
    pub fn label(&self) -> String {
        [&self.city, &self.region, &self.country]
            .into_iter()
            .filter_map(|part| part.as_deref())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// A successful location lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserLocation {
    pub coords: PositionFix,
    /// `None` when reverse geocoding was skipped or failed
    pub place: Option<Place>,
}

/// A failed location lookup. Returned as a value so callers can show a message.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LocationError {
    #[error("Location permission denied.")]
    PermissionDenied,

    #[error("Location unavailable: {0}")]
    Unavailable(String),
}
