//! Browser backend for the theme preference.
//!
//! Reads and writes the preference in `localStorage`, consults the
//! `prefers-color-scheme` media query, and toggles the `dark` class on the
//! `<html>` element. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Outside the `csr` build there is no storage: reads report it unavailable
//! so the store stays in memory, and `apply` is a no-op.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::error::PreferenceError;
use crate::state::preference::ThemeBackend;

/// Class set on the document root while dark mode is on.
pub const DARK_CLASS: &str = "dark";

/// Media query for the OS-level dark preference.
pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BrowserTheme {
    storage_key: String,
}

impl BrowserTheme {
    pub fn new(storage_key: impl Into<String>) -> Self {
        Self { storage_key: storage_key.into() }
    }

    #[must_use]
    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }
}

#[cfg(feature = "csr")]
fn local_storage() -> Result<web_sys::Storage, PreferenceError> {
    let window = web_sys::window().ok_or(PreferenceError::Unavailable)?;
    match window.local_storage() {
        Ok(Some(storage)) => Ok(storage),
        Ok(None) => Err(PreferenceError::Unavailable),
        Err(e) => Err(PreferenceError::Read(format!("{e:?}"))),
    }
}

impl ThemeBackend for BrowserTheme {
    fn load(&self) -> Result<Option<String>, PreferenceError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .get_item(&self.storage_key)
                .map_err(|e| PreferenceError::Read(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(PreferenceError::Unavailable)
        }
    }

    fn save(&self, value: &str) -> Result<(), PreferenceError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .set_item(&self.storage_key, value)
                .map_err(|e| PreferenceError::Write(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            log::trace!("{} = {value} not persisted outside the browser", self.storage_key);
            Err(PreferenceError::Unavailable)
        }
    }

    fn system_prefers_dark(&self) -> bool {
        #[cfg(feature = "csr")]
        {
            let Some(window) = web_sys::window() else {
                return false;
            };
            match window.match_media(PREFERS_DARK_QUERY) {
                Ok(Some(mq)) => mq.matches(),
                Ok(None) => false,
                Err(e) => {
                    log::debug!("matchMedia unavailable: {e:?}");
                    false
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            false
        }
    }

    fn apply(&self, dark: bool) {
        #[cfg(feature = "csr")]
        {
            let Some(root) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.document_element())
            else {
                return;
            };
            if let Err(e) = root.class_list().toggle_with_force(DARK_CLASS, dark) {
                log::warn!("could not apply theme class: {e:?}");
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            log::trace!("presentation flag dark={dark} skipped outside the browser");
        }
    }
}
