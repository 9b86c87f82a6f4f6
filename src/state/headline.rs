//! Rotating headline: typewriter reveal of each title, then a pause.
//!
//! The animator is a plain state machine. Each `step` is one timer firing;
//! `next_delay` says how long to wait before the next one. `animate` drives
//! it from a [`Sleep`] capability and is spawned behind a cancellable
//! [`TaskHandle`](crate::util::schedule::TaskHandle) by the hero component.

#[cfg(test)]
#[path = "headline_test.rs"]
mod headline_test;

use std::time::Duration;

use crate::error::HeadlineError;
use crate::util::schedule::Sleep;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// One more character appears on each tick.
    Revealing,
    /// Full title shown; the next tick clears it and moves to the next title.
    Holding,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeadlineAnimator {
    titles: Vec<String>,
    title_index: usize,
    char_index: usize,
    phase: Phase,
    display: String,
    reveal_interval: Duration,
    hold_interval: Duration,
}

/// One emitted display string and the delay that preceded it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub after: Duration,
    pub text: String,
}

impl HeadlineAnimator {
    pub fn new(titles: Vec<String>, reveal_interval: Duration, hold_interval: Duration) -> Result<Self, HeadlineError> {
        if titles.is_empty() {
            return Err(HeadlineError::NoTitles);
        }
        let mut animator = Self {
            titles,
            title_index: 0,
            char_index: 0,
            phase: Phase::Revealing,
            display: String::new(),
            reveal_interval,
            hold_interval,
        };
        animator.phase = animator.phase_for_position();
        Ok(animator)
    }

    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn title_index(&self) -> usize {
        self.title_index
    }

    #[must_use]
    pub fn char_index(&self) -> usize {
        self.char_index
    }

    #[must_use]
    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    /// Wait before the next `step`.
    #[must_use]
    pub fn next_delay(&self) -> Duration {
        match self.phase {
            Phase::Revealing => self.reveal_interval,
            Phase::Holding => self.hold_interval,
        }
    }

    /// Apply one timer firing and return the new display string.
    pub fn step(&mut self) -> &str {
        match self.phase {
            Phase::Revealing => {
                if let Some(ch) = self.current_title().chars().nth(self.char_index) {
                    self.display.push(ch);
                    self.char_index += 1;
                }
            }
            Phase::Holding => {
                self.char_index = 0;
                self.display.clear();
                self.title_index = (self.title_index + 1) % self.titles.len();
                if self.title_index == 0 {
                    log::debug!("headline wrapped after {} titles", self.titles.len());
                }
            }
        }
        self.phase = self.phase_for_position();
        &self.display
    }

    /// Endless lazy sequence of frames starting from the current state.
    pub fn frames(&mut self) -> impl Iterator<Item = Frame> + '_ {
        std::iter::from_fn(move || {
            let after = self.next_delay();
            let text = self.step().to_owned();
            Some(Frame { after, text })
        })
    }

    fn current_title(&self) -> &str {
        &self.titles[self.title_index]
    }

    fn phase_for_position(&self) -> Phase {
        if self.char_index < self.current_title().chars().count() {
            Phase::Revealing
        } else {
            Phase::Holding
        }
    }
}

/// Drive `animator` forever, reporting each new display string.
///
/// Never returns on its own; stop it by cancelling the task it runs in.
pub async fn animate<S, F>(mut animator: HeadlineAnimator, sleeper: S, mut on_frame: F)
where
    S: Sleep,
    F: FnMut(&str),
{
    on_frame(animator.display());
    loop {
        sleeper.sleep(animator.next_delay()).await;
        on_frame(animator.step());
    }
}
