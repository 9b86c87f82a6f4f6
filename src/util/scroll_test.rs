use super::*;

use std::cell::Cell;
use std::rc::Rc;

#[test]
fn dropping_subscription_runs_detach_once() {
    let detached = Rc::new(Cell::new(0));
    let counter = Rc::clone(&detached);
    let sub = ScrollSubscription::new(move || counter.set(counter.get() + 1));
    drop(sub);
    assert_eq!(detached.get(), 1);
}

#[test]
fn explicit_unsubscribe_does_not_detach_twice() {
    let detached = Rc::new(Cell::new(0));
    let counter = Rc::clone(&detached);
    ScrollSubscription::new(move || counter.set(counter.get() + 1)).unsubscribe();
    assert_eq!(detached.get(), 1);
}

#[test]
fn manual_scroll_stops_calling_detached_handlers() {
    let source = ManualScroll::default();
    let hits = Rc::new(Cell::new(0));
    let counter = Rc::clone(&hits);
    let sub = source.subscribe(Box::new(move || counter.set(counter.get() + 1)));
    source.emit();
    source.emit();
    assert_eq!(hits.get(), 2);
    assert_eq!(source.listener_count(), 1);

    drop(sub);
    source.emit();
    assert_eq!(hits.get(), 2);
    assert_eq!(source.listener_count(), 0);
}

#[test]
fn browser_scroll_outside_browser_reports_unmounted_sections() {
    for id in SectionId::ALL {
        assert_eq!(BrowserScroll.rect(id), None);
    }
}

#[test]
fn browser_scroll_navigation_is_noop_outside_browser() {
    BrowserScroll.scroll_to(SectionId::Reach);
    BrowserScroll.scroll_to_top();
    let sub = BrowserScroll.subscribe(Box::new(|| {}));
    sub.unsubscribe();
}
