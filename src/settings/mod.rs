//! User Settings
//!
//! Profile, preference and notification settings kept in a single
//! key-value entry. Absent or malformed entries read as defaults.

mod model;
mod repository;
mod store;

pub use model::{
    Integration, NotificationKind, NotificationPrefs, SettingsPatch, Theme, UserSettings,
};
pub use repository::{SettingsRepository, SETTINGS_KEY};
#[cfg(feature = "native")]
pub use store::FileStore;
pub use store::{KeyValueStore, MemoryStore};

use thiserror::Error;

/// Settings errors
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
