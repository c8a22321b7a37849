//! Light/dark theme preference: persistence and application.
//!
//! SYSTEM CONTEXT
//! ==============
//! The preference is read once when the site header mounts and written on
//! every toggle. [`PreferenceStore`] owns the storage side and a
//! [`ThemeSurface`] owns the presentation side; [`ThemeController`] is the one
//! place that holds the current value.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::cell::Cell;

use crate::util::storage::KeyValueStorage;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value. Anything other than the two known strings is
    /// rejected so the caller falls back to the default.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

/// Where the active theme becomes visible (document class, toggle control).
pub trait ThemeSurface {
    fn apply(&self, theme: Theme);
}

/// Reads and writes the theme under a single storage key.
pub struct PreferenceStore<S> {
    storage: S,
    key: &'static str,
}

impl<S: KeyValueStorage> PreferenceStore<S> {
    pub fn new(storage: S, key: &'static str) -> Self {
        Self { storage, key }
    }

    /// Stored preference, or [`Theme::Light`] when nothing usable is stored.
    #[must_use]
    pub fn load(&self) -> Theme {
        self.storage
            .get(self.key)
            .and_then(|raw| Theme::parse(&raw))
            .unwrap_or_default()
    }

    pub fn save(&self, theme: Theme) {
        if let Err(e) = self.storage.set(self.key, theme.as_str()) {
            leptos::logging::warn!("theme preference not saved: {e}");
        }
    }
}

/// Owns the current theme for the page.
pub struct ThemeController<S, P> {
    store: PreferenceStore<S>,
    surface: P,
    current: Cell<Theme>,
}

impl<S: KeyValueStorage, P: ThemeSurface> ThemeController<S, P> {
    /// Load the saved preference and apply it so the page and the toggle
    /// control start in sync.
    pub fn init(store: PreferenceStore<S>, surface: P) -> Self {
        let current = store.load();
        surface.apply(current);
        Self { store, surface, current: Cell::new(current) }
    }

    #[must_use]
    pub fn current(&self) -> Theme {
        self.current.get()
    }

    /// Switch to the opposite theme, apply it, and persist it.
    pub fn toggle(&self) -> Theme {
        let next = self.current.get().toggled();
        self.set(next);
        next
    }

    pub fn set(&self, theme: Theme) {
        self.current.set(theme);
        self.surface.apply(theme);
        self.store.save(theme);
    }
}
