//! Unified path management for pawwalk files.
//!
//! ```text
//! ~/.config/pawwalk/           # Config directory
//! └── config.toml              # Application configuration
//!
//! ~/.local/share/pawwalk/      # Data directory
//! └── storage.json             # Key-value store backing the domain state
//! ```
//!
//! A base directory override puts both files directly under that directory,
//! which is what tests and the CLI's `--base-dir` flag use.

use std::path::{Path, PathBuf};

const APP_DIR: &str = "pawwalk";
const CONFIG_FILE: &str = "config.toml";
const STORAGE_FILE: &str = "storage.json";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

impl From<PathError> for pawwalk_core::PawError {
    fn from(err: PathError) -> Self {
        pawwalk_core::PawError::config(err.to_string())
    }
}

#[derive(Debug, Clone, Default)]
pub struct PawwalkPaths {
    base_dir: Option<PathBuf>,
}

impl PawwalkPaths {
    /// `None` resolves through the platform directories.
    pub fn new(base_dir: Option<&Path>) -> Self {
        Self {
            base_dir: base_dir.map(Path::to_path_buf),
        }
    }

    pub fn config_dir(&self) -> Result<PathBuf, PathError> {
        match &self.base_dir {
            Some(base) => Ok(base.clone()),
            None => dirs::config_dir()
                .map(|dir| dir.join(APP_DIR))
                .ok_or(PathError::HomeDirNotFound),
        }
    }

    pub fn data_dir(&self) -> Result<PathBuf, PathError> {
        match &self.base_dir {
            Some(base) => Ok(base.clone()),
            None => dirs::data_dir()
                .map(|dir| dir.join(APP_DIR))
                .ok_or(PathError::HomeDirNotFound),
        }
    }

    pub fn config_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join(CONFIG_FILE))
    }

    pub fn storage_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.data_dir()?.join(STORAGE_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_dir_override() {
        let paths = PawwalkPaths::new(Some(Path::new("/tmp/pawwalk-test")));
        assert_eq!(
            paths.config_file().unwrap(),
            PathBuf::from("/tmp/pawwalk-test/config.toml")
        );
        assert_eq!(
            paths.storage_file().unwrap(),
            PathBuf::from("/tmp/pawwalk-test/storage.json")
        );
    }

    #[test]
    fn test_platform_dirs_end_with_app_dir() {
        let paths = PawwalkPaths::new(None);
        if let Ok(config_dir) = paths.config_dir() {
            assert!(config_dir.ends_with(APP_DIR));
        }
        if let Ok(storage_file) = paths.storage_file() {
            assert!(storage_file.ends_with("pawwalk/storage.json"));
        }
    }
}
