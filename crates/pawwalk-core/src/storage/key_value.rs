//! Key-value store trait.

use async_trait::async_trait;

use crate::error::Result;

/// String-keyed durable storage, in the shape of a mobile async storage API.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Returns the stored value, or `None` if the key is absent.
    async fn get_item(&self, key: &str) -> Result<Option<String>>;

    async fn set_item(&self, key: &str, value: String) -> Result<()>;

    /// Removing an absent key succeeds.
    async fn remove_item(&self, key: &str) -> Result<()>;
}
