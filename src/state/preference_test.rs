use super::*;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// In-memory backend with switchable failures; clones share state.
#[derive(Clone, Default)]
struct MemoryBackend {
    stored: Rc<RefCell<Option<String>>>,
    system_dark: bool,
    fail_reads: bool,
    fail_writes: Rc<Cell<bool>>,
    applied: Rc<RefCell<Vec<bool>>>,
}

impl MemoryBackend {
    fn with_stored(value: &str) -> Self {
        let backend = Self::default();
        *backend.stored.borrow_mut() = Some(value.to_owned());
        backend
    }

    fn stored(&self) -> Option<String> {
        self.stored.borrow().clone()
    }
}

impl ThemeBackend for MemoryBackend {
    fn load(&self) -> Result<Option<String>, PreferenceError> {
        if self.fail_reads {
            return Err(PreferenceError::Unavailable);
        }
        Ok(self.stored())
    }

    fn save(&self, value: &str) -> Result<(), PreferenceError> {
        if self.fail_writes.get() {
            return Err(PreferenceError::Write("quota exceeded".into()));
        }
        *self.stored.borrow_mut() = Some(value.to_owned());
        Ok(())
    }

    fn system_prefers_dark(&self) -> bool {
        self.system_dark
    }

    fn apply(&self, dark: bool) {
        self.applied.borrow_mut().push(dark);
    }
}

// =============================================================
// Startup resolution
// =============================================================

#[test]
fn resolve_prefers_stored_value_over_system_signal() {
    assert!(resolve_initial(Some("dark"), false));
    assert!(!resolve_initial(Some("light"), true));
}

#[test]
fn resolve_falls_back_to_system_when_absent_or_empty() {
    assert!(resolve_initial(None, true));
    assert!(!resolve_initial(None, false));
    assert!(resolve_initial(Some(""), true));
}

#[test]
fn resolve_treats_unknown_stored_value_as_light() {
    assert!(!resolve_initial(Some("sepia"), true));
}

#[test]
fn no_stored_value_and_dark_system_starts_dark() {
    let backend = MemoryBackend { system_dark: true, ..MemoryBackend::default() };
    let store = PreferenceStore::initialize(backend.clone());
    assert!(store.is_dark());
    assert_eq!(backend.stored().as_deref(), Some("dark"));
    assert_eq!(*backend.applied.borrow(), vec![true]);
}

#[test]
fn stored_light_ignores_dark_system() {
    let backend = MemoryBackend { system_dark: true, ..MemoryBackend::with_stored("light") };
    let store = PreferenceStore::initialize(backend);
    assert!(!store.is_dark());
    assert_eq!(store.theme(), Theme::Light);
}

// =============================================================
// Set / toggle
// =============================================================

#[test]
fn every_toggle_sequence_leaves_memory_equal_to_storage() {
    let sequences: [&[bool]; 4] = [&[], &[true], &[true, true, true], &[false, true, false, false, true]];
    for sequence in sequences {
        let backend = MemoryBackend::default();
        let mut store = PreferenceStore::initialize(backend.clone());
        for &explicit in sequence {
            if explicit {
                store.toggle();
            } else {
                store.set(!store.is_dark());
            }
        }
        let persisted = backend.stored().and_then(|v| v.parse::<Theme>().ok());
        assert_eq!(persisted, Some(store.theme()));
    }
}

#[test]
fn set_applies_presentation_flag() {
    let backend = MemoryBackend::default();
    let mut store = PreferenceStore::initialize(backend.clone());
    store.set(true);
    store.set(false);
    assert_eq!(*backend.applied.borrow(), vec![false, true, false]);
}

#[test]
fn toggle_returns_new_value() {
    let mut store = PreferenceStore::initialize(MemoryBackend::default());
    assert!(store.toggle());
    assert!(!store.toggle());
}

#[test]
fn teardown_returns_backend_with_last_value() {
    let mut store = PreferenceStore::initialize(MemoryBackend::default());
    store.set(true);
    let backend = store.teardown();
    assert_eq!(backend.stored().as_deref(), Some("dark"));
}

// =============================================================
// Degraded persistence
// =============================================================

#[test]
fn unreadable_storage_uses_system_signal_in_memory() {
    let backend = MemoryBackend { fail_reads: true, system_dark: true, ..MemoryBackend::default() };
    let mut store = PreferenceStore::initialize(backend.clone());
    assert!(store.is_dark());
    assert!(!store.is_persistent());
    store.toggle();
    assert!(!store.is_dark());
    assert_eq!(backend.stored(), None);
}

#[test]
fn failed_write_degrades_to_memory_only() {
    let backend = MemoryBackend::default();
    let mut store = PreferenceStore::initialize(backend.clone());
    assert!(store.is_persistent());

    backend.fail_writes.set(true);
    store.set(true);
    assert!(store.is_dark());
    assert!(!store.is_persistent());

    backend.fail_writes.set(false);
    store.set(false);
    store.set(true);
    assert_eq!(backend.stored().as_deref(), Some("light"));
    assert_eq!(backend.applied.borrow().last(), Some(&true));
}

#[test]
fn theme_icons_offer_the_other_mode() {
    assert_eq!(Theme::Dark.toggle_icon_class(), "fas fa-sun");
    assert_eq!(Theme::Light.toggle_icon_class(), "fas fa-moon");
}
