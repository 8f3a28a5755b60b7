//! Location provider trait.

use async_trait::async_trait;

use super::model::{LocationError, UserLocation};

/// One-shot permission + position + optional reverse-geocode lookup.
///
/// Implementations swallow reverse-geocoding failures and report `place: None`.
/// They own their own timeouts.
#[async_trait]
pub trait LocationProvider: Send + Sync {
    async fn locate_once(&self, with_address: bool) -> Result<UserLocation, LocationError>;
}
