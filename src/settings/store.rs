//! Key-Value Stores
//!
//! The settings page persists a single entry in a browser-style key-value
//! store. [`MemoryStore`] is process-local; [`FileStore`] keeps all keys in
//! one JSON file on disk.

use std::collections::HashMap;
use std::sync::Mutex;

use super::SettingsError;

/// `localStorage`-shaped string store
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, SettingsError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), SettingsError>;
    fn remove_item(&self, key: &str) -> Result<(), SettingsError>;
}

/// In-memory store
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn items(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, SettingsError> {
        self.items
            .lock()
            .map_err(|e| SettingsError::Storage(format!("store lock poisoned: {}", e)))
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, SettingsError> {
        Ok(self.items()?.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), SettingsError> {
        self.items()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), SettingsError> {
        self.items()?.remove(key);
        Ok(())
    }
}

#[cfg(feature = "native")]
pub use file::FileStore;

#[cfg(feature = "native")]
mod file {
    use std::collections::BTreeMap;
    use std::path::{Path, PathBuf};

    use super::KeyValueStore;
    use crate::settings::SettingsError;

    /// All keys in one JSON object file
    #[derive(Debug, Clone)]
    pub struct FileStore {
        path: PathBuf,
    }

    impl FileStore {
        pub fn new(path: impl Into<PathBuf>) -> Self {
            Self { path: path.into() }
        }

        /// `store.json` under the local data directory
        pub fn in_data_dir(data_dir: &Path) -> Self {
            Self::new(data_dir.join("store.json"))
        }

        pub fn path(&self) -> &Path {
            &self.path
        }

        fn read_all(&self) -> Result<BTreeMap<String, String>, SettingsError> {
            match std::fs::read_to_string(&self.path) {
                Ok(content) => serde_json::from_str(&content).map_err(|e| {
                    SettingsError::Storage(format!(
                        "{} is not a key-value file: {}",
                        self.path.display(),
                        e
                    ))
                }),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
                Err(e) => Err(e.into()),
            }
        }

        fn write_all(&self, items: &BTreeMap<String, String>) -> Result<(), SettingsError> {
            if let Some(parent) = self.path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(items)?;
            std::fs::write(&self.path, content)?;
            Ok(())
        }
    }

    impl KeyValueStore for FileStore {
        fn get_item(&self, key: &str) -> Result<Option<String>, SettingsError> {
            Ok(self.read_all()?.remove(key))
        }

        fn set_item(&self, key: &str, value: &str) -> Result<(), SettingsError> {
            let mut items = self.read_all()?;
            items.insert(key.to_string(), value.to_string());
            self.write_all(&items)
        }

        fn remove_item(&self, key: &str) -> Result<(), SettingsError> {
            let mut items = self.read_all()?;
            if items.remove(key).is_some() {
                self.write_all(&items)?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryStore::new();
        assert_eq!(store.get_item("k").unwrap(), None);
        store.set_item("k", "v").unwrap();
        assert_eq!(store.get_item("k").unwrap().as_deref(), Some("v"));
        store.remove_item("k").unwrap();
        assert_eq!(store.get_item("k").unwrap(), None);
    }

    #[cfg(feature = "native")]
    #[test]
    fn test_file_store_keeps_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::in_data_dir(&dir.path().join("nested"));

        assert_eq!(store.get_item("a").unwrap(), None);
        store.set_item("a", "1").unwrap();
        store.set_item("b", "2").unwrap();
        store.remove_item("a").unwrap();

        let reopened = FileStore::new(store.path());
        assert_eq!(reopened.get_item("a").unwrap(), None);
        assert_eq!(reopened.get_item("b").unwrap().as_deref(), Some("2"));
    }

    #[cfg(feature = "native")]
    #[test]
    fn test_file_store_rejects_garbage_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        std::fs::write(&path, "[1, 2, 3]").unwrap();

        let store = FileStore::new(&path);
        assert!(matches!(store.get_item("a"), Err(SettingsError::Storage(_))));
    }
}
