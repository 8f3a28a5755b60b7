//! File-backed key-value store.
//!
//! All keys live in one JSON object on disk:
//!
//! ```text
//! {
//!   "@rmt/walkers": "[{\"id\":\"w1\", ...}]",
//!   "@rmt/bookings": "[]"
//! }
//! ```
//!
//! Values are opaque strings. The map is cached in memory and written back
//! in full on every change.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use pawwalk_core::storage::KeyValueStore;
use pawwalk_core::{PawError, Result};
use tokio::sync::Mutex;

use super::atomic_file::AtomicFile;
use crate::paths::PawwalkPaths;

pub struct JsonFileStore {
    file: Arc<AtomicFile>,
    items: Mutex<BTreeMap<String, String>>,
}

impl JsonFileStore {
    /// Opens the store at the default location (or under `base_dir`).
    pub async fn new(base_dir: Option<&Path>) -> Result<Self> {
        let path = PawwalkPaths::new(base_dir).storage_file()?;
        Self::open(path).await
    }

    /// Opens the store backed by `path`. A missing or corrupt file is an empty store.
    pub async fn open(path: PathBuf) -> Result<Self> {
        let file = Arc::new(AtomicFile::new(path));

        let loader = file.clone();
        let contents = tokio::task::spawn_blocking(move || loader.load())
            .await
            .map_err(|e| PawError::internal(format!("Failed to join task: {}", e)))??;

        // An unreadable map starts empty; the next write replaces the file.
        let items = match contents.as_deref().map(serde_json::from_str::<BTreeMap<String, String>>) {
            Some(Ok(items)) => items,
            Some(Err(e)) => {
                tracing::warn!(path = %file.path().display(), error = %e, "Storage file is corrupt, starting empty");
                BTreeMap::new()
            }
            None => BTreeMap::new(),
        };

        tracing::debug!(path = %file.path().display(), keys = items.len(), "Opened JSON file store");

        Ok(Self {
            file,
            items: Mutex::new(items),
        })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    async fn flush(&self, items: &BTreeMap<String, String>) -> Result<()> {
        let contents = serde_json::to_string_pretty(items)?;
        let file = self.file.clone();

        tokio::task::spawn_blocking(move || file.save(&contents))
            .await
            .map_err(|e| PawError::internal(format!("Failed to join task: {}", e)))?
    }
}

#[async_trait]
impl KeyValueStore for JsonFileStore {
    async fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.lock().await.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: String) -> Result<()> {
        let mut items = self.items.lock().await;
        items.insert(key.to_string(), value);
        self.flush(&items).await
    }

    async fn remove_item(&self, key: &str) -> Result<()> {
        let mut items = self.items.lock().await;
        if items.remove(key).is_none() {
            return Ok(());
        }
        self.flush(&items).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn create_test_store() -> (JsonFileStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(Some(temp_dir.path())).await.unwrap();
        (store, temp_dir)
    }

    #[tokio::test]
    async fn test_missing_file_is_empty() {
        let (store, _temp_dir) = create_test_store().await;
        assert!(store.get_item("@rmt/walkers").await.unwrap().is_none());
        assert!(!store.path().exists());
    }

    #[tokio::test]
    async fn test_values_survive_reopen() {
        let (store, temp_dir) = create_test_store().await;
        store
            .set_item("@rmt/bookings", "[]".to_string())
            .await
            .unwrap();
        store
            .set_item("@rmt/user", r#"{"id":"u_1"}"#.to_string())
            .await
            .unwrap();
        drop(store);

        let reopened = JsonFileStore::new(Some(temp_dir.path())).await.unwrap();
        assert_eq!(
            reopened.get_item("@rmt/bookings").await.unwrap().as_deref(),
            Some("[]")
        );
        assert_eq!(
            reopened.get_item("@rmt/user").await.unwrap().as_deref(),
            Some(r#"{"id":"u_1"}"#)
        );
    }

    #[tokio::test]
    async fn test_remove_persists() {
        let (store, temp_dir) = create_test_store().await;
        store.set_item("@rmt/user", "{}".to_string()).await.unwrap();
        store.remove_item("@rmt/user").await.unwrap();
        store.remove_item("@rmt/never-set").await.unwrap();
        drop(store);

        let reopened = JsonFileStore::new(Some(temp_dir.path())).await.unwrap();
        assert!(reopened.get_item("@rmt/user").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_corrupt_file_opens_empty_and_is_replaced() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("storage.json");
        std::fs::write(&path, "not json").unwrap();

        let store = JsonFileStore::open(path.clone()).await.unwrap();
        assert!(store.get_item("@rmt/walkers").await.unwrap().is_none());

        store.set_item("@rmt/bookings", "[]".to_string()).await.unwrap();
        let on_disk: BTreeMap<String, String> =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(on_disk.get("@rmt/bookings").map(String::as_str), Some("[]"));
    }
}
