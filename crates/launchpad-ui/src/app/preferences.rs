//! Browser-backed persistence and environment helpers for the app shell.

use crate::core::config::ShellConfig;
use crate::core::preferences::{PreferenceError, PreferenceStore};
use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use gloo::utils::{document, window};

pub(crate) const CONFIG_ELEMENT_ID: &str = "launchpad-config";

/// Dark-mode preference kept in `localStorage`.
pub(crate) struct LocalStoragePreferences {
    key: String,
}

impl LocalStoragePreferences {
    pub(crate) fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl PreferenceStore for LocalStoragePreferences {
    fn load_dark_mode(&self) -> Option<bool> {
        LocalStorage::get::<bool>(&self.key).ok()
    }

    fn save_dark_mode(&self, dark_mode: bool) -> Result<(), PreferenceError> {
        LocalStorage::set(&self.key, dark_mode).map_err(|err| PreferenceError::Write {
            key: self.key.clone(),
            detail: err.to_string(),
        })
    }
}

/// Read the inline JSON config; absent means defaults, malformed is logged.
pub(crate) fn load_config() -> ShellConfig {
    let Some(raw) = document()
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content())
    else {
        return ShellConfig::default();
    };
    match ShellConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            console::warn!("using default shell configuration", err.to_string());
            ShellConfig::default()
        }
    }
}

pub(crate) fn system_prefers_dark() -> bool {
    window()
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()
        .is_some_and(|query| query.matches())
}

pub(crate) fn origin() -> String {
    window()
        .location()
        .origin()
        .unwrap_or_else(|_| "/".to_string())
}
