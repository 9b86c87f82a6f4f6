//! Persisted light/dark display preference.
//!
//! The store is the one process-wide piece of state. It is initialized once
//! from the persisted value (falling back to the system preference), applies
//! the presentation flag, and writes every change straight back to storage.
//!
//! TRADE-OFFS
//! ==========
//! Storage failures never reach the visitor. The first failed read or write
//! marks the store as in-memory only and it stops touching storage for the
//! rest of the session, so memory and storage cannot drift further apart.

#[cfg(test)]
#[path = "preference_test.rs"]
mod preference_test;

use std::fmt;
use std::str::FromStr;

use crate::error::PreferenceError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn from_dark(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Stored representation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Icon for the toggle button: the theme you would switch to.
    #[must_use]
    pub fn toggle_icon_class(self) -> &'static str {
        match self {
            Self::Dark => "fas fa-sun",
            Self::Light => "fas fa-moon",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            _ => Err(()),
        }
    }
}

/// Platform side of the preference: persisted value, ambient system signal,
/// and the global presentation flag.
pub trait ThemeBackend {
    fn load(&self) -> Result<Option<String>, PreferenceError>;
    fn save(&self, value: &str) -> Result<(), PreferenceError>;
    fn system_prefers_dark(&self) -> bool;
    fn apply(&self, dark: bool);
}

/// Resolve the startup preference.
///
/// A stored `"dark"` means dark and any other non-empty stored value means
/// light. Absent or empty values defer to the system signal.
#[must_use]
pub fn resolve_initial(stored: Option<&str>, system_prefers_dark: bool) -> bool {
    match stored {
        Some(raw) if !raw.is_empty() => raw.parse::<Theme>().is_ok_and(Theme::is_dark),
        _ => system_prefers_dark,
    }
}

#[derive(Clone, Debug)]
pub struct PreferenceStore<B> {
    backend: B,
    is_dark: bool,
    persistent: bool,
}

impl<B: ThemeBackend> PreferenceStore<B> {
    /// Read the preference, apply it, and write it through once.
    pub fn initialize(backend: B) -> Self {
        let (stored, persistent) = match backend.load() {
            Ok(stored) => (stored, true),
            Err(e) => {
                log::warn!("{e}; theme preference kept in memory only");
                (None, false)
            }
        };
        let is_dark = resolve_initial(stored.as_deref(), backend.system_prefers_dark());
        let mut store = Self { backend, is_dark, persistent };
        store.commit();
        store
    }

    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.is_dark
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        Theme::from_dark(self.is_dark)
    }

    /// Whether writes still reach storage this session.
    #[must_use]
    pub fn is_persistent(&self) -> bool {
        self.persistent
    }

    pub fn set(&mut self, dark: bool) {
        self.is_dark = dark;
        log::debug!("theme -> {}", self.theme());
        self.commit();
    }

    /// Flip the preference and return the new value.
    pub fn toggle(&mut self) -> bool {
        self.set(!self.is_dark);
        self.is_dark
    }

    /// End the store's lifetime, handing back the backend.
    pub fn teardown(self) -> B {
        self.backend
    }

    fn commit(&mut self) {
        self.backend.apply(self.is_dark);
        if !self.persistent {
            return;
        }
        if let Err(e) = self.backend.save(self.theme().as_str()) {
            log::warn!("{e}; theme preference kept in memory only");
            self.persistent = false;
        }
    }
}
