//! Walker domain model.

use serde::{Deserialize, Serialize};

use crate::geo::Coordinates;

/// A dog walker listed in the catalog.
///
/// Walkers are only ever created by seeding. The store mutates `favorite`
/// and `is_available` in place and never deletes a walker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Walker {
    /// Stable identifier (e.g. "w1")
    pub id: String,
    pub name: String,
    /// Average review score, 0.0 to 5.0
    pub rating: f64,
    #[serde(alias = "walks")]
    pub walks_completed: u32,
    #[serde(alias = "price")]
    pub price_per_hour: f64,
    #[serde(alias = "photo")]
    pub photo_url: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub is_available: bool,
    #[serde(default)]
    pub favorite: bool,
    pub lat: f64,
    pub lng: f64,
}

impl Walker {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.lat, self.lng)
    }
}
