//! Composition root: wires storage, location and notifications into the store.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use pawwalk_application::{AppStore, ReminderService};
use pawwalk_core::config::AppConfig;
use pawwalk_core::storage::StorageKeys;
use pawwalk_infrastructure::{FixedLocationProvider, JsonFileStore, TracingNotificationScheduler};

pub struct AppContext {
    pub config: AppConfig,
    pub store: AppStore,
    pub reminders: ReminderService,
}

impl AppContext {
    pub async fn open(base_dir: Option<&Path>, config: AppConfig) -> Result<Self> {
        let kv = JsonFileStore::new(base_dir)
            .await
            .context("Failed to open storage")?;
        tracing::debug!(path = %kv.path().display(), "Using storage file");

        let location = FixedLocationProvider::from_home(config.home.as_ref());
        let keys = StorageKeys::new(config.storage_namespace.clone());
        let store = AppStore::load(Arc::new(kv), Arc::new(location), keys).await;

        let reminders = ReminderService::new(Arc::new(TracingNotificationScheduler::new()));

        Ok(Self {
            config,
            store,
            reminders,
        })
    }
}
