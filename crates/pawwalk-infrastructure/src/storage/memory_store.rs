//! In-memory key-value store.

use std::collections::HashMap;

use async_trait::async_trait;
use pawwalk_core::Result;
use pawwalk_core::storage::KeyValueStore;
use tokio::sync::RwLock;

/// Volatile store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `items`.
    pub fn with_items<I, K, V>(items: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            items: RwLock::new(
                items
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    pub async fn contains_key(&self, key: &str) -> bool {
        self.items.read().await.contains_key(key)
    }

    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.read().await.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: String) -> Result<()> {
        self.items.write().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<()> {
        self.items.write().await.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_get_remove() {
        let store = MemoryStore::new();
        assert!(store.get_item("k").await.unwrap().is_none());

        store.set_item("k", "v".to_string()).await.unwrap();
        assert_eq!(store.get_item("k").await.unwrap().as_deref(), Some("v"));

        store.remove_item("k").await.unwrap();
        assert!(store.is_empty().await);

        // Removing again is fine
        store.remove_item("k").await.unwrap();
    }

    #[tokio::test]
    async fn test_with_items() {
        let store = MemoryStore::with_items([("a", "1"), ("b", "2")]);
        assert_eq!(store.len().await, 2);
        assert!(store.contains_key("b").await);
    }
}
