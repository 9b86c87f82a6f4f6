//! Scroll spy: which page section is under the trigger line.
//!
//! ARCHITECTURE
//! ============
//! `compute_active` is a pure function over section geometry. `SectionTracker`
//! wraps it with the navigation's sticky highlight, and `watch_sections`
//! binds a tracker to a scroll signal source for the lifetime of the
//! returned subscription.

#[cfg(test)]
#[path = "sections_test.rs"]
mod sections_test;

use std::cell::RefCell;
use std::fmt;
use std::str::FromStr;

use crate::util::scroll::{ScrollSource, ScrollSubscription};

/// Page sections, in page order. Order breaks activation ties and drives the
/// navigation menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionId {
    Intro,
    About,
    Writing,
    Skills,
    Work,
    History,
    Academics,
    Reach,
}

impl SectionId {
    pub const ALL: [Self; 8] = [
        Self::Intro,
        Self::About,
        Self::Writing,
        Self::Skills,
        Self::Work,
        Self::History,
        Self::Academics,
        Self::Reach,
    ];

    /// DOM element id of the section.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Intro => "intro",
            Self::About => "about",
            Self::Writing => "writing",
            Self::Skills => "skills",
            Self::Work => "work",
            Self::History => "history",
            Self::Academics => "academics",
            Self::Reach => "reach",
        }
    }

    /// Navigation label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Intro => "Home",
            Self::About => "About",
            Self::Writing => "Blog",
            Self::Skills => "Skills",
            Self::Work => "Projects",
            Self::History => "Experience",
            Self::Academics => "Education",
            Self::Reach => "Contact",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionId {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|id| id.as_str() == s).ok_or(())
    }
}

/// Vertical span of a section relative to the viewport top, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionRect {
    pub top: f64,
    pub bottom: f64,
}

impl SectionRect {
    #[must_use]
    pub fn straddles(self, line: f64) -> bool {
        self.top <= line && self.bottom >= line
    }
}

/// Source of on-screen section geometry. `None` means the section is not
/// mounted and never matches.
pub trait SectionGeometry {
    fn rect(&self, id: SectionId) -> Option<SectionRect>;
}

/// First section, in the given order, whose span straddles `trigger_line`.
pub fn compute_active<I>(sections: I, trigger_line: f64) -> Option<SectionId>
where
    I: IntoIterator<Item = (SectionId, Option<SectionRect>)>,
{
    sections
        .into_iter()
        .find(|(_, rect)| rect.is_some_and(|r| r.straddles(trigger_line)))
        .map(|(id, _)| id)
}

/// Navigation highlight state fed by scroll signals.
///
/// `current` is the raw result of the latest computation and may be `None`
/// between sections. `highlighted` keeps the last section that matched so
/// the menu does not flicker while scrolling through gaps.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionTracker {
    trigger_line: f64,
    current: Option<SectionId>,
    highlighted: SectionId,
}

impl SectionTracker {
    #[must_use]
    pub fn new(trigger_line: f64) -> Self {
        Self { trigger_line, current: None, highlighted: SectionId::Intro }
    }

    #[must_use]
    pub fn current(&self) -> Option<SectionId> {
        self.current
    }

    #[must_use]
    pub fn highlighted(&self) -> SectionId {
        self.highlighted
    }

    /// Recompute from fresh geometry. Returns the new highlight when it changed.
    pub fn on_scroll(&mut self, geometry: &impl SectionGeometry) -> Option<SectionId> {
        let ordered = SectionId::ALL.into_iter().map(|id| (id, geometry.rect(id)));
        self.current = compute_active(ordered, self.trigger_line);
        match self.current {
            Some(id) if id != self.highlighted => {
                self.highlighted = id;
                Some(id)
            }
            _ => None,
        }
    }
}

/// Run `tracker` on every scroll signal from `source` until the returned
/// subscription is dropped. `on_change` fires only when the highlight moves.
pub fn watch_sections<S, G, F>(source: &S, geometry: G, tracker: SectionTracker, on_change: F) -> ScrollSubscription
where
    S: ScrollSource + ?Sized,
    G: SectionGeometry + 'static,
    F: FnMut(SectionId) + 'static,
{
    let tracker = RefCell::new(tracker);
    let on_change = RefCell::new(on_change);
    source.subscribe(Box::new(move || {
        let changed = tracker.borrow_mut().on_scroll(&geometry);
        if let Some(id) = changed {
            log::debug!("active section -> {id}");
            (on_change.borrow_mut())(id);
        }
    }))
}
