use super::*;

use std::cell::RefCell;
use std::rc::Rc;

use futures::executor::LocalPool;
use futures::task::LocalSpawnExt;

use crate::util::schedule::{ManualClock, TaskHandle};

const REVEAL: Duration = Duration::from_millis(100);
const HOLD: Duration = Duration::from_millis(2000);

fn animator(titles: &[&str]) -> HeadlineAnimator {
    HeadlineAnimator::new(titles.iter().map(|t| (*t).to_owned()).collect(), REVEAL, HOLD).unwrap()
}

// =============================================================
// State machine
// =============================================================

#[test]
fn rejects_empty_title_list() {
    assert_eq!(HeadlineAnimator::new(Vec::new(), REVEAL, HOLD), Err(HeadlineError::NoTitles));
}

#[test]
fn starts_blank_and_revealing() {
    let a = animator(&["AI", "ML"]);
    assert_eq!(a.display(), "");
    assert_eq!(a.phase(), Phase::Revealing);
    assert_eq!(a.next_delay(), REVEAL);
}

#[test]
fn reveals_holds_and_wraps() {
    let mut a = animator(&["AI", "ML"]);
    assert_eq!(a.step(), "A");
    assert_eq!(a.step(), "AI");
    assert_eq!(a.phase(), Phase::Holding);
    assert_eq!(a.next_delay(), HOLD);

    assert_eq!(a.step(), "");
    assert_eq!(a.title_index(), 1);
    assert_eq!(a.step(), "M");
    assert_eq!(a.step(), "ML");
    assert_eq!(a.step(), "");
    assert_eq!(a.title_index(), 0);
    assert_eq!(a.step(), "A");
}

#[test]
fn char_index_stays_within_current_title() {
    let mut a = animator(&["Data", "Py", "ML Engineer"]);
    for _ in 0..200 {
        a.step();
        let len = a.titles()[a.title_index()].chars().count();
        assert!(a.char_index() <= len);
        assert!(a.title_index() < a.titles().len());
    }
}

#[test]
fn reveals_multibyte_titles_by_character() {
    let mut a = animator(&["Café"]);
    let shown: Vec<String> = (0..4).map(|_| a.step().to_owned()).collect();
    assert_eq!(shown, ["C", "Ca", "Caf", "Café"]);
    assert_eq!(a.phase(), Phase::Holding);
}

#[test]
fn single_title_cycles_onto_itself() {
    let mut a = animator(&["Go"]);
    a.step();
    a.step();
    assert_eq!(a.step(), "");
    assert_eq!(a.title_index(), 0);
    assert_eq!(a.step(), "G");
}

#[test]
fn empty_title_holds_immediately() {
    let mut a = animator(&["", "X"]);
    assert_eq!(a.phase(), Phase::Holding);
    assert_eq!(a.step(), "");
    assert_eq!(a.step(), "X");
}

#[test]
fn frames_pair_each_text_with_its_delay() {
    let mut a = animator(&["AI", "ML"]);
    let frames: Vec<Frame> = a.frames().take(4).collect();
    let delays: Vec<Duration> = frames.iter().map(|f| f.after).collect();
    let texts: Vec<&str> = frames.iter().map(|f| f.text.as_str()).collect();
    assert_eq!(delays, [REVEAL, REVEAL, HOLD, REVEAL]);
    assert_eq!(texts, ["A", "AI", "", "M"]);
}

// =============================================================
// Timer chain
// =============================================================

struct Harness {
    pool: LocalPool,
    clock: ManualClock,
    shown: Rc<RefCell<Vec<String>>>,
}

impl Harness {
    fn start(titles: &[&str]) -> (Self, TaskHandle) {
        let pool = LocalPool::new();
        let clock = ManualClock::default();
        let shown = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&shown);
        let spawner = pool.spawner();
        let task = animate(animator(titles), clock.clone(), move |text| sink.borrow_mut().push(text.to_owned()));
        let handle = TaskHandle::spawn(task, move |fut| spawner.spawn_local(fut).unwrap());
        let mut harness = Self { pool, clock, shown };
        harness.pool.run_until_stalled();
        (harness, handle)
    }

    fn elapse(&mut self, ms: u64) {
        self.clock.advance(Duration::from_millis(ms));
        self.pool.run_until_stalled();
    }

    fn last(&self) -> String {
        self.shown.borrow().last().cloned().unwrap_or_default()
    }
}

#[test]
fn timer_chain_follows_reveal_and_hold_intervals() {
    let (mut h, _handle) = Harness::start(&["AI", "ML"]);
    assert_eq!(h.last(), "");

    h.elapse(100);
    assert_eq!(h.last(), "A");
    h.elapse(100);
    assert_eq!(h.last(), "AI");

    h.elapse(1999);
    assert_eq!(h.last(), "AI");
    h.elapse(1);
    assert_eq!(h.last(), "");
    h.elapse(100);
    assert_eq!(h.last(), "M");

    h.elapse(100);
    h.elapse(2000);
    h.elapse(100);
    assert_eq!(h.last(), "A");
}

#[test]
fn cancelled_chain_never_fires_again() {
    let (mut h, handle) = Harness::start(&["AI", "ML"]);
    h.elapse(100);
    let frames_before = h.shown.borrow().len();

    drop(handle);
    h.elapse(100);
    h.elapse(2000);
    assert_eq!(h.shown.borrow().len(), frames_before);
    assert_eq!(h.clock.pending(), 0);
}
