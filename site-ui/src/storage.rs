use std::cell::RefCell;
use std::collections::HashMap;

use shared_types::Theme;

use crate::error::{UiError, UiResult};

/// A durable key-value slot store scoped to the page origin.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> UiResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> UiResult<()>;
}

/// `window.localStorage`
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStore;

impl LocalStore {
    fn storage() -> UiResult<web_sys::Storage> {
        web_sys::window()
            .ok_or(UiError::StorageUnavailable)?
            .local_storage()
            .map_err(|_| UiError::StorageUnavailable)?
            .ok_or(UiError::StorageUnavailable)
    }
}

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> UiResult<Option<String>> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| UiError::storage("getItem", e))
    }

    fn set(&self, key: &str, value: &str) -> UiResult<()> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| UiError::storage("setItem", e))
    }
}

/// In-memory store, lost on reload.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> UiResult<Option<String>> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> UiResult<()> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Owns the persisted theme slot. All reads and writes of the preference go
/// through here.
#[derive(Debug)]
pub struct ThemePreference<S> {
    store: S,
    key: String,
}

impl<S: PreferenceStore> ThemePreference<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Stored theme, or `Theme::Dark` when absent, unreadable or invalid.
    pub fn load(&self) -> Theme {
        match self.store.get(&self.key) {
            Ok(Some(raw)) => raw.parse().unwrap_or_else(|e| {
                log::warn!("Ignoring stored theme preference: {e}");
                Theme::default()
            }),
            Ok(None) => Theme::default(),
            Err(e) => {
                log::debug!("Theme preference unreadable, using default: {e}");
                Theme::default()
            }
        }
    }

    pub fn save(&self, theme: Theme) {
        if let Err(e) = self.store.set(&self.key, theme.as_str()) {
            log::debug!("Theme preference not persisted: {e}");
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn get(&self, _key: &str) -> UiResult<Option<String>> {
            Err(UiError::StorageUnavailable)
        }

        fn set(&self, _key: &str, _value: &str) -> UiResult<()> {
            Err(UiError::StorageUnavailable)
        }
    }

    #[test]
    fn missing_preference_loads_dark() {
        let pref = ThemePreference::new(MemoryStore::new(), "bsh-theme");
        assert_eq!(pref.load(), Theme::Dark);
        assert_eq!(pref.load(), Theme::Dark);
    }

    #[test]
    fn stored_light_is_loaded() {
        let pref = ThemePreference::new(MemoryStore::with_item("bsh-theme", "light"), "bsh-theme");
        assert_eq!(pref.load(), Theme::Light);
    }

    #[test]
    fn invalid_stored_value_falls_back_to_dark() {
        let pref = ThemePreference::new(MemoryStore::with_item("bsh-theme", "purple"), "bsh-theme");
        assert_eq!(pref.load(), Theme::Dark);
    }

    #[test]
    fn save_writes_string_form_under_key() {
        let pref = ThemePreference::new(MemoryStore::new(), "bsh-theme");
        pref.save(Theme::Light);
        assert_eq!(
            pref.store().get("bsh-theme").unwrap().as_deref(),
            Some("light")
        );
        assert_eq!(pref.load(), Theme::Light);
        assert_eq!(pref.store().get("other").unwrap(), None);
    }

    #[test]
    fn broken_storage_degrades_silently() {
        let pref = ThemePreference::new(BrokenStore, "bsh-theme");
        pref.save(Theme::Light);
        assert_eq!(pref.load(), Theme::Dark);
    }
}
