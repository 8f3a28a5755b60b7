//! Persistence boundary.
//!
//! The domain store writes JSON blobs under a handful of string keys.

mod key_value;
mod keys;

pub use key_value::KeyValueStore;
pub use keys::{DEFAULT_NAMESPACE, StorageKeys, StorageSlot};
