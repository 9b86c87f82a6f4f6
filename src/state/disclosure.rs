//! Open/closed state of the narrow-viewport navigation panel.

#[cfg(test)]
#[path = "disclosure_test.rs"]
mod disclosure_test;

use crate::state::sections::SectionId;
use crate::util::scroll::Navigator;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DisclosureState {
    open: bool,
}

impl DisclosureState {
    #[must_use]
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Called on every navigation selection, whatever the prior state.
    pub fn close_on_navigate(&mut self) {
        self.open = false;
    }

    /// Navigation selection: scroll to `id` and fold the panel away.
    pub fn navigate(&mut self, navigator: &impl Navigator, id: SectionId) {
        navigator.scroll_to(id);
        self.close_on_navigate();
    }

    /// Icon class for the menu button.
    #[must_use]
    pub fn icon_class(self) -> &'static str {
        if self.open { "fas fa-times" } else { "fas fa-bars" }
    }
}
