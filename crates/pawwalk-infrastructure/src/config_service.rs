//! Configuration service implementation.
//!
//! Loads the application configuration from `config.toml`, writing the
//! defaults out on first run.

use std::path::Path;
use std::sync::{Arc, RwLock};

use pawwalk_core::Result;
use pawwalk_core::config::AppConfig;

use crate::paths::PawwalkPaths;
use crate::storage::AtomicFile;

/// Loads and caches the application configuration.
#[derive(Debug, Clone)]
pub struct ConfigService {
    file: Arc<AtomicFile>,
    config: Arc<RwLock<Option<AppConfig>>>,
}

impl ConfigService {
    /// Uses the default config location, or `base_dir/config.toml`.
    pub fn new(base_dir: Option<&Path>) -> Result<Self> {
        let path = PawwalkPaths::new(base_dir).config_file()?;
        Ok(Self {
            file: Arc::new(AtomicFile::new(path)),
            config: Arc::new(RwLock::new(None)),
        })
    }

    /// Returns the configuration, loading it on first access.
    ///
    /// A missing file is created with defaults. An unreadable or invalid file
    /// falls back to defaults and is left untouched.
    pub fn get_config(&self) -> AppConfig {
        if let Ok(guard) = self.config.read() {
            if let Some(cached) = guard.as_ref() {
                return cached.clone();
            }
        }

        let loaded = self.load_config().unwrap_or_else(|e| {
            tracing::warn!(path = %self.file.path().display(), error = %e, "Failed to load config, using defaults");
            AppConfig::default()
        });

        if let Ok(mut guard) = self.config.write() {
            *guard = Some(loaded.clone());
        }
        loaded
    }

    /// Forces a reload on next access.
    pub fn invalidate_cache(&self) {
        if let Ok(mut guard) = self.config.write() {
            *guard = None;
        }
    }

    fn load_config(&self) -> Result<AppConfig> {
        match self.file.load()? {
            Some(text) => Ok(toml::from_str(&text)?),
            None => {
                let default_config = AppConfig::default();
                self.file.save(&toml::to_string_pretty(&default_config)?)?;
                tracing::info!(path = %self.file.path().display(), "Wrote default config");
                Ok(default_config)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_creates_default_config() {
        let temp_dir = TempDir::new().unwrap();
        let service = ConfigService::new(Some(temp_dir.path())).unwrap();

        let config = service.get_config();
        assert_eq!(config, AppConfig::default());
        assert!(temp_dir.path().join("config.toml").exists());
    }

    #[test]
    fn test_reads_existing_config_and_caches() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "nearby_radius_km = 5.0\nstorage_namespace = \"@dev\"\n").unwrap();

        let service = ConfigService::new(Some(temp_dir.path())).unwrap();
        assert_eq!(service.get_config().nearby_radius_km, 5.0);

        std::fs::write(&path, "nearby_radius_km = 50.0\n").unwrap();
        assert_eq!(service.get_config().nearby_radius_km, 5.0);

        service.invalidate_cache();
        let reloaded = service.get_config();
        assert_eq!(reloaded.nearby_radius_km, 50.0);
        assert_eq!(reloaded.storage_namespace, "@rmt");
    }

    #[test]
    fn test_invalid_config_falls_back_to_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "nearby_radius_km = \"far\"\n").unwrap();

        let service = ConfigService::new(Some(temp_dir.path())).unwrap();
        assert_eq!(service.get_config(), AppConfig::default());
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "nearby_radius_km = \"far\"\n"
        );
    }
}
