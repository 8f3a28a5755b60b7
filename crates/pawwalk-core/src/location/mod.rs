//! User location domain module.
//!
//! The location itself lives only in memory; it is never persisted.

mod model;
mod provider;

pub use model::{LocationError, Place, PositionFix, UserLocation};
pub use provider::LocationProvider;
