//! Walker domain module.
//!
//! # Module Structure
//!
//! - `model`: Walker domain model
//! - `seed`: Hardcoded bootstrap catalog
//! - `schema`: Load-time validation of persisted walker collections

mod model;
pub mod schema;
mod seed;

pub use model::Walker;
pub use schema::{WalkerLoad, validate_walkers};
pub use seed::{SEED_WALKER_COUNT, seed_walkers};
