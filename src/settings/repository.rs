//! Settings persistence

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use super::model::UserSettings;
use super::store::KeyValueStore;
use super::SettingsError;

/// Storage key of the settings document
pub const SETTINGS_KEY: &str = "nefra_user_settings_v2";

/// Loads, saves and resets [`UserSettings`] under one key
pub struct SettingsRepository<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> SettingsRepository<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, SETTINGS_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Stored settings, or the defaults when nothing usable is stored
    pub fn load(&self) -> UserSettings {
        match self.store.get_item(&self.key) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(settings) => settings,
                Err(e) => {
                    debug!(
                        key = %self.key,
                        error = %e,
                        "Stored settings malformed, using defaults"
                    );
                    UserSettings::default()
                }
            },
            Ok(None) => UserSettings::default(),
            Err(e) => {
                warn!(key = %self.key, error = %e, "Settings store unavailable, using defaults");
                UserSettings::default()
            }
        }
    }

    /// Persist `settings`, returning the save time
    pub fn save(&self, settings: &UserSettings) -> Result<DateTime<Utc>, SettingsError> {
        let raw = serde_json::to_string(settings)?;
        self.store.set_item(&self.key, &raw)?;
        let saved_at = Utc::now();
        info!(key = %self.key, "Settings saved");
        Ok(saved_at)
    }

    /// Forget stored settings and return the defaults
    pub fn reset(&self) -> Result<UserSettings, SettingsError> {
        self.store.remove_item(&self.key)?;
        info!(key = %self.key, "Settings reset to defaults");
        Ok(UserSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{MemoryStore, Theme};

    #[test]
    fn test_absent_settings_load_defaults() {
        let repo = SettingsRepository::new(MemoryStore::new());
        assert_eq!(repo.load(), UserSettings::default());
    }

    #[test]
    fn test_save_then_load() {
        let repo = SettingsRepository::new(MemoryStore::new());
        let mut settings = UserSettings::default();
        settings.theme = Theme::Dark;
        settings.full_name = "Divya R.".to_string();

        let before = Utc::now();
        let saved_at = repo.save(&settings).unwrap();
        assert!(saved_at >= before);
        assert_eq!(repo.load(), settings);

        let raw = repo.store().get_item(SETTINGS_KEY).unwrap().unwrap();
        assert!(raw.contains("\"fullName\":\"Divya R.\""));
    }

    #[test]
    fn test_malformed_settings_load_defaults() {
        let store = MemoryStore::new();
        store.set_item(SETTINGS_KEY, "{not json").unwrap();
        let repo = SettingsRepository::new(store);
        assert_eq!(repo.load(), UserSettings::default());

        repo.store()
            .set_item(SETTINGS_KEY, r#"{"theme": "sepia"}"#)
            .unwrap();
        assert_eq!(repo.load(), UserSettings::default());
    }

    #[test]
    fn test_reset_removes_key() {
        let repo = SettingsRepository::new(MemoryStore::new());
        let mut settings = UserSettings::default();
        settings.two_factor = true;
        repo.save(&settings).unwrap();

        let restored = repo.reset().unwrap();
        assert_eq!(restored, UserSettings::default());
        assert_eq!(repo.store().get_item(SETTINGS_KEY).unwrap(), None);
    }
}
