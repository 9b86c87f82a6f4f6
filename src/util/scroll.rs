//! Scroll signals, section geometry, and smooth-scroll navigation.
//!
//! SYSTEM CONTEXT
//! ==============
//! `BrowserScroll` is the window-backed implementation of the scroll
//! capabilities used by the navigation. Outside the `csr` build it has no
//! window: it never fires, reports every section as unmounted, and navigation
//! calls are no-ops.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use crate::state::sections::{SectionGeometry, SectionId, SectionRect};

/// Subscribe/unsubscribe capability for the viewport scroll stream.
pub trait ScrollSource {
    fn subscribe(&self, handler: Box<dyn FnMut()>) -> ScrollSubscription;
}

/// Smooth-scroll navigation. Missing targets are silent no-ops.
pub trait Navigator {
    fn scroll_to(&self, id: SectionId);
    fn scroll_to_top(&self);
}

/// Live scroll listener. Dropping it (or calling `unsubscribe`) detaches the
/// handler.
#[must_use = "dropping the subscription detaches the scroll handler"]
pub struct ScrollSubscription {
    detach: Option<Box<dyn FnOnce()>>,
}

impl ScrollSubscription {
    pub fn new(detach: impl FnOnce() + 'static) -> Self {
        Self { detach: Some(Box::new(detach)) }
    }

    /// A subscription with nothing to detach.
    pub fn inert() -> Self {
        Self { detach: None }
    }

    pub fn unsubscribe(mut self) {
        self.run_detach();
    }

    fn run_detach(&mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        self.run_detach();
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScroll;

impl ScrollSource for BrowserScroll {
    fn subscribe(&self, handler: Box<dyn FnMut()>) -> ScrollSubscription {
        #[cfg(feature = "csr")]
        {
            use wasm_bindgen::JsCast;
            use wasm_bindgen::closure::Closure;

            let Some(window) = web_sys::window() else {
                return ScrollSubscription::inert();
            };
            let closure = Closure::wrap(handler);
            let options = web_sys::AddEventListenerOptions::new();
            options.set_passive(true);
            if let Err(e) = window.add_event_listener_with_callback_and_add_event_listener_options(
                "scroll",
                closure.as_ref().unchecked_ref(),
                &options,
            ) {
                log::warn!("scroll listener not attached: {e:?}");
                return ScrollSubscription::inert();
            }
            ScrollSubscription::new(move || {
                if let Err(e) = window.remove_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref()) {
                    log::warn!("scroll listener not detached: {e:?}");
                }
                drop(closure);
            })
        }
        #[cfg(not(feature = "csr"))]
        {
            drop(handler);
            ScrollSubscription::inert()
        }
    }
}

impl SectionGeometry for BrowserScroll {
    fn rect(&self, id: SectionId) -> Option<SectionRect> {
        #[cfg(feature = "csr")]
        {
            let el = web_sys::window()?.document()?.get_element_by_id(id.as_str())?;
            let rect = el.get_bounding_client_rect();
            Some(SectionRect { top: rect.top(), bottom: rect.bottom() })
        }
        #[cfg(not(feature = "csr"))]
        {
            log::trace!("no geometry for #{id} outside the browser");
            None
        }
    }
}

impl Navigator for BrowserScroll {
    fn scroll_to(&self, id: SectionId) {
        #[cfg(feature = "csr")]
        {
            let target = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.get_element_by_id(id.as_str()));
            let Some(el) = target else {
                log::debug!("scroll target #{id} not mounted");
                return;
            };
            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            el.scroll_into_view_with_scroll_into_view_options(&options);
        }
        #[cfg(not(feature = "csr"))]
        {
            log::debug!("scroll to #{id} skipped outside the browser");
        }
    }

    fn scroll_to_top(&self) {
        #[cfg(feature = "csr")]
        {
            if let Some(window) = web_sys::window() {
                let options = web_sys::ScrollToOptions::new();
                options.set_top(0.0);
                options.set_behavior(web_sys::ScrollBehavior::Smooth);
                window.scroll_to_with_scroll_to_options(&options);
            }
        }
    }
}

/// Scroll source driven by hand, for tests.
#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct ManualScroll {
    handlers: std::rc::Rc<std::cell::RefCell<Vec<(u64, Box<dyn FnMut()>)>>>,
    next_id: std::rc::Rc<std::cell::Cell<u64>>,
}

#[cfg(test)]
impl ManualScroll {
    pub(crate) fn emit(&self) {
        for (_, handler) in self.handlers.borrow_mut().iter_mut() {
            handler();
        }
    }

    pub(crate) fn listener_count(&self) -> usize {
        self.handlers.borrow().len()
    }
}

#[cfg(test)]
impl ScrollSource for ManualScroll {
    fn subscribe(&self, handler: Box<dyn FnMut()>) -> ScrollSubscription {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.handlers.borrow_mut().push((id, handler));
        let handlers = std::rc::Rc::clone(&self.handlers);
        ScrollSubscription::new(move || handlers.borrow_mut().retain(|(h, _)| *h != id))
    }
}
