//! Booking domain module.
//!
//! # Module Structure
//!
//! - `model`: Booking, creation input and partial patch
//! - `schedule`: Date/time form helpers and the allowed walk durations

mod model;
pub mod schedule;

pub use model::{Booking, BookingPatch, NewBooking};
pub use schedule::ALLOWED_DURATIONS;
