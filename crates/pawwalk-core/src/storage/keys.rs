//! Storage key layout.

use strum::{AsRefStr, EnumIter, IntoEnumIterator};

/// Namespace shared with the mobile app's storage.
pub const DEFAULT_NAMESPACE: &str = "@rmt";

/// The persisted slices of domain state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumIter)]
pub enum StorageSlot {
    #[strum(serialize = "walkers")]
    Walkers,
    #[strum(serialize = "lastSelection")]
    LastSelection,
    #[strum(serialize = "bookings")]
    Bookings,
    #[strum(serialize = "user")]
    User,
}

/// Resolves slots to namespaced keys such as `@rmt/walkers`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    namespace: String,
}

impl StorageKeys {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }

    pub fn key(&self, slot: StorageSlot) -> String {
        format!("{}/{}", self.namespace, slot.as_ref())
    }

    /// Every key this layout uses.
    pub fn all(&self) -> Vec<String> {
        StorageSlot::iter().map(|slot| self.key(slot)).collect()
    }
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self::new(DEFAULT_NAMESPACE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_keys() {
        let keys = StorageKeys::default();
        assert_eq!(keys.key(StorageSlot::Walkers), "@rmt/walkers");
        assert_eq!(keys.key(StorageSlot::LastSelection), "@rmt/lastSelection");
        assert_eq!(keys.key(StorageSlot::Bookings), "@rmt/bookings");
        assert_eq!(keys.key(StorageSlot::User), "@rmt/user");
    }

    #[test]
    fn test_custom_namespace() {
        let keys = StorageKeys::new("@test");
        assert_eq!(keys.all().len(), 4);
        assert!(keys.all().iter().all(|k| k.starts_with("@test/")));
    }
}
