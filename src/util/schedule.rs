//! Cancellable timer chains.
//!
//! A timer chain is an async loop that sleeps between steps. Spawning it
//! yields a [`TaskHandle`]; dropping or cancelling the handle aborts the loop
//! at its next suspension point and drops the pending sleep with it, so no
//! step can fire after the owner is gone.

#[cfg(test)]
#[path = "schedule_test.rs"]
mod schedule_test;

use std::future::Future;
use std::time::Duration;

use futures::FutureExt;
use futures::future::{AbortHandle, Abortable, LocalBoxFuture};

/// Timer capability used by timer chains.
pub trait Sleep {
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()>;
}

/// Owned handle to a spawned timer chain.
#[must_use = "dropping the handle cancels the task"]
#[derive(Debug)]
pub struct TaskHandle {
    abort: AbortHandle,
}

impl TaskHandle {
    /// Wrap `task` so it can be aborted, and hand it to `spawn`.
    pub fn spawn<F, S>(task: F, spawn: S) -> Self
    where
        F: Future<Output = ()> + 'static,
        S: FnOnce(LocalBoxFuture<'static, ()>),
    {
        let (abort, registration) = AbortHandle::new_pair();
        let guarded = Abortable::new(task, registration);
        spawn(
            async move {
                if guarded.await.is_err() {
                    log::trace!("timer chain cancelled");
                }
            }
            .boxed_local(),
        );
        Self { abort }
    }

    pub fn cancel(&self) {
        self.abort.abort();
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.abort.is_aborted()
    }
}

impl Drop for TaskHandle {
    fn drop(&mut self) {
        self.abort.abort();
    }
}

/// Holds at most one running chain.
#[derive(Debug, Default)]
pub struct TaskSlot {
    current: Option<TaskHandle>,
}

impl TaskSlot {
    /// Cancel the running chain, then install whatever `spawn` starts.
    pub fn replace(&mut self, spawn: impl FnOnce() -> Option<TaskHandle>) {
        self.clear();
        self.current = spawn();
    }

    pub fn clear(&mut self) {
        if let Some(handle) = self.current.take() {
            handle.cancel();
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.current.as_ref().is_some_and(|h| !h.is_cancelled())
    }
}

/// `setTimeout`-backed sleeps.
#[cfg(feature = "csr")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSleep;

#[cfg(feature = "csr")]
impl Sleep for BrowserSleep {
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
        gloo_timers::future::sleep(duration).boxed_local()
    }
}

/// Spawn a timer chain on the browser event loop.
#[cfg(feature = "csr")]
pub fn spawn_local<F>(task: F) -> TaskHandle
where
    F: Future<Output = ()> + 'static,
{
    TaskHandle::spawn(task, |fut| leptos::task::spawn_local(fut))
}

/// Virtual clock whose sleeps complete only when the test advances time.
#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct ManualClock {
    inner: std::rc::Rc<std::cell::RefCell<ManualClockInner>>,
}

#[cfg(test)]
#[derive(Default)]
struct ManualClockInner {
    now: Duration,
    timers: Vec<(Duration, futures::channel::oneshot::Sender<()>)>,
}

#[cfg(test)]
impl ManualClock {
    /// Move time forward and fire every sleep that is due.
    pub(crate) fn advance(&self, by: Duration) {
        let due = {
            let mut inner = self.inner.borrow_mut();
            inner.now += by;
            let now = inner.now;
            let (due, waiting) = inner.timers.drain(..).partition::<Vec<_>, _>(|(at, _)| *at <= now);
            inner.timers = waiting;
            due
        };
        for (_, tx) in due {
            if tx.send(()).is_err() {
                log::trace!("sleep dropped before firing");
            }
        }
    }

    /// Sleeps still waited on by a live future.
    pub(crate) fn pending(&self) -> usize {
        self.inner.borrow().timers.iter().filter(|(_, tx)| !tx.is_canceled()).count()
    }
}

#[cfg(test)]
impl Sleep for ManualClock {
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
        let (tx, rx) = futures::channel::oneshot::channel();
        {
            let mut inner = self.inner.borrow_mut();
            let at = inner.now + duration;
            inner.timers.push((at, tx));
        }
        async move {
            if rx.await.is_err() {
                log::trace!("manual clock dropped");
            }
        }
        .boxed_local()
    }
}
