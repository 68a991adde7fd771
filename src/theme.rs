//! Light/dark preference persisted in the browser's local storage.

use crate::{
    config::THEME_STORAGE_KEY,
    store::{Action, Store, Theme},
};

pub trait ThemeStorage {
    fn load(&self) -> Option<String>;
    fn save(&self, value: &str);
}

/// `window.localStorage`. Every failure degrades to "nothing stored".
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl ThemeStorage for LocalStorage {
    fn load(&self) -> Option<String> {
        Self::storage()?.get_item(THEME_STORAGE_KEY).ok().flatten()
    }

    fn save(&self, value: &str) {
        match Self::storage() {
            Some(storage) => {
                if let Err(err) = storage.set_item(THEME_STORAGE_KEY, value) {
                    log::warn!("could not persist theme: {:?}", err);
                }
            }
            None => log::warn!("local storage unavailable, theme not persisted"),
        }
    }
}

pub fn initial_theme(storage: &dyn ThemeStorage) -> Theme {
    storage
        .load()
        .and_then(|value| Theme::parse(&value))
        .unwrap_or_default()
}

pub fn toggle_theme(store: &impl Store, storage: &dyn ThemeStorage) {
    store.dispatch(Action::ThemeToggled);
    let theme = store.snapshot().theme;
    log::debug!("theme switched to {}", theme.as_str());
    storage.save(theme.as_str());
}
