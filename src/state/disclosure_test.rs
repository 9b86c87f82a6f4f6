use super::*;

#[test]
fn starts_closed() {
    assert!(!DisclosureState::default().is_open());
}

#[test]
fn toggle_twice_is_identity() {
    for start_open in [false, true] {
        let mut state = DisclosureState::default();
        if start_open {
            state.toggle();
        }
        let before = state;
        state.toggle();
        assert_ne!(state, before);
        state.toggle();
        assert_eq!(state, before);
    }
}

#[test]
fn close_on_navigate_closes_open_panel() {
    let mut state = DisclosureState::default();
    state.toggle();
    state.close_on_navigate();
    assert!(!state.is_open());
}

#[test]
fn close_on_navigate_is_idempotent() {
    let mut state = DisclosureState::default();
    state.close_on_navigate();
    state.close_on_navigate();
    assert!(!state.is_open());
}

#[test]
fn icon_tracks_open_state() {
    let mut state = DisclosureState::default();
    assert_eq!(state.icon_class(), "fas fa-bars");
    state.toggle();
    assert_eq!(state.icon_class(), "fas fa-times");
}

#[derive(Default)]
struct RecordingNavigator {
    visited: std::cell::RefCell<Vec<SectionId>>,
}

impl Navigator for RecordingNavigator {
    fn scroll_to(&self, id: SectionId) {
        self.visited.borrow_mut().push(id);
    }

    fn scroll_to_top(&self) {}
}

#[test]
fn navigate_scrolls_and_closes_regardless_of_state() {
    let nav = RecordingNavigator::default();
    let mut state = DisclosureState::default();
    state.toggle();
    state.navigate(&nav, SectionId::Work);
    assert!(!state.is_open());

    state.navigate(&nav, SectionId::Reach);
    assert!(!state.is_open());
    assert_eq!(*nav.visited.borrow(), vec![SectionId::Work, SectionId::Reach]);
}
