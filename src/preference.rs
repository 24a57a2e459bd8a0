//! Dark-mode preference and its persistence.
//!
//! The preference lives under a single storage key as `"enabled"` or
//! `"disabled"`. Storage is reached through [`PreferenceStorage`] so the
//! browser's `localStorage` can be swapped for [`MemoryStorage`] in tests.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort: a missing or failing store reads as
//! [`DarkModePreference::Disabled`] and writes silently do nothing.

#[cfg(test)]
#[path = "preference_test.rs"]
mod preference_test;

use std::collections::HashMap;

use crate::consts::DARK_MODE_KEY;

/// Whether the dark theme is applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DarkModePreference {
    Enabled,
    #[default]
    Disabled,
}

impl DarkModePreference {
    /// Stored representation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Enabled => "enabled",
            Self::Disabled => "disabled",
        }
    }

    /// Parse a stored value. Anything but `"enabled"` is treated as disabled.
    #[must_use]
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw {
            Some("enabled") => Self::Enabled,
            _ => Self::Disabled,
        }
    }

    #[must_use]
    pub fn is_enabled(self) -> bool {
        self == Self::Enabled
    }

    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Enabled => Self::Disabled,
            Self::Disabled => Self::Enabled,
        }
    }
}

/// Durable per-origin key/value storage.
pub trait PreferenceStorage {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&mut self, key: &str, value: &str);
}

/// In-memory storage, used natively and in tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    values: HashMap<String, String>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-populated with one entry.
    #[must_use]
    pub fn with(key: &str, value: &str) -> Self {
        let mut storage = Self::new();
        storage.write(key, value);
        storage
    }
}

impl PreferenceStorage for MemoryStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_owned(), value.to_owned());
    }
}

/// Browser `localStorage`. Every failure degrades to "unset" or a dropped write.
#[cfg(feature = "hydrate")]
#[derive(Debug, Default)]
pub struct LocalStorage;

#[cfg(feature = "hydrate")]
impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        match web_sys::window()?.local_storage() {
            Ok(storage) => storage,
            Err(err) => {
                log::debug!("localStorage unavailable: {err:?}");
                None
            }
        }
    }
}

#[cfg(feature = "hydrate")]
impl PreferenceStorage for LocalStorage {
    fn read(&self, key: &str) -> Option<String> {
        match Self::storage()?.get_item(key) {
            Ok(value) => value,
            Err(err) => {
                log::debug!("localStorage read of {key} failed: {err:?}");
                None
            }
        }
    }

    fn write(&mut self, key: &str, value: &str) {
        let Some(storage) = Self::storage() else {
            return;
        };
        if let Err(err) = storage.set_item(key, value) {
            log::debug!("localStorage write of {key} failed: {err:?}");
        }
    }
}

/// Owns the applied theme and keeps it in step with storage.
#[derive(Debug)]
pub struct ThemeController<S> {
    storage: S,
    applied: DarkModePreference,
}

impl<S: PreferenceStorage> ThemeController<S> {
    /// Wrap a store and apply whatever it holds.
    #[must_use]
    pub fn new(storage: S) -> Self {
        let mut controller = Self { storage, applied: DarkModePreference::Disabled };
        controller.applied = controller.load();
        controller
    }

    /// Read the persisted preference, defaulting to disabled.
    #[must_use]
    pub fn load(&self) -> DarkModePreference {
        DarkModePreference::from_stored(self.storage.read(DARK_MODE_KEY).as_deref())
    }

    /// Persist a preference, overwriting any previous value.
    pub fn save(&mut self, pref: DarkModePreference) {
        self.storage.write(DARK_MODE_KEY, pref.as_str());
    }

    /// Flip the applied theme and persist the result.
    pub fn toggle(&mut self) -> DarkModePreference {
        self.applied = self.applied.flipped();
        self.save(self.applied);
        self.applied
    }

    /// Theme currently applied to the page.
    #[must_use]
    pub fn applied(&self) -> DarkModePreference {
        self.applied
    }

    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }
}
