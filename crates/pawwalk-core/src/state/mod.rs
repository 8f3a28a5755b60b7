//! Domain state snapshot models.

pub mod model;

pub use model::{AppSnapshot, LastSelection};
