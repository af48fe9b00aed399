//! `localStorage` key-value store

use nefra_connect::settings::{KeyValueStore, SettingsError};
use wasm_bindgen::JsValue;

#[derive(Clone, Copy, Default)]
pub struct LocalStore;

impl LocalStore {
    fn storage() -> Result<web_sys::Storage, SettingsError> {
        web_sys::window()
            .ok_or_else(|| SettingsError::Storage("no window".into()))?
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| SettingsError::Storage("localStorage disabled".into()))
    }
}

fn js_error(e: JsValue) -> SettingsError {
    SettingsError::Storage(format!("{:?}", e))
}

impl KeyValueStore for LocalStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, SettingsError> {
        Self::storage()?.get_item(key).map_err(js_error)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), SettingsError> {
        Self::storage()?.set_item(key, value).map_err(js_error)
    }

    fn remove_item(&self, key: &str) -> Result<(), SettingsError> {
        Self::storage()?.remove_item(key).map_err(js_error)
    }
}
