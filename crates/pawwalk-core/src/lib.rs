pub mod booking;
pub mod config;
pub mod error;
pub mod geo;
pub mod location;
pub mod notification;
pub mod state;
pub mod storage;
pub mod user;
pub mod walker;

// Re-export common error type
pub use error::{PawError, Result};
