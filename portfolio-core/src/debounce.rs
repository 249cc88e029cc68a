//! Trailing-edge debounce.

use crate::schedule::{Deferred, Scheduler};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// Collapses bursts of calls into one invocation `delay` after the last call.
///
/// Dropping the debouncer (or calling [`Debouncer::cancel`]) discards the
/// pending invocation, so an unmounted view never sees a late callback.
pub struct Debouncer<S: Scheduler, A: 'static> {
    scheduler: S,
    delay: Duration,
    callback: Rc<dyn Fn(A)>,
    pending: Rc<RefCell<Option<S::Handle>>>,
}

impl<S: Scheduler, A: 'static> Debouncer<S, A> {
    pub fn new(scheduler: S, delay: Duration, callback: impl Fn(A) + 'static) -> Self {
        Self {
            scheduler,
            delay,
            callback: Rc::new(callback),
            pending: Rc::new(RefCell::new(None)),
        }
    }

    /// Restart the idle window; `args` replace those of any pending call.
    pub fn call(&self, args: A) {
        self.cancel();

        let callback = Rc::clone(&self.callback);
        let pending = Rc::downgrade(&self.pending);
        let handle = self.scheduler.schedule(
            self.delay,
            Box::new(move || {
                if let Some(pending) = pending.upgrade() {
                    pending.borrow_mut().take();
                }
                callback(args);
            }),
        );
        *self.pending.borrow_mut() = Some(handle);
    }

    pub fn cancel(&self) {
        let previous = self.pending.borrow_mut().take();
        previous.cancel();
    }

    pub fn is_pending(&self) -> bool {
        self.pending.borrow().is_some()
    }
}

impl<S: Scheduler, A: 'static> Drop for Debouncer<S, A> {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::testing::ManualScheduler;
    use pretty_assertions::assert_eq;

    fn recording(scheduler: &ManualScheduler) -> (Debouncer<ManualScheduler, u32>, Rc<RefCell<Vec<u32>>>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&calls);
        let debouncer = Debouncer::new(
            scheduler.clone(),
            Duration::from_millis(50),
            move |value| sink.borrow_mut().push(value),
        );
        (debouncer, calls)
    }

    #[test]
    fn burst_collapses_to_last_call() {
        let scheduler = ManualScheduler::default();
        let (debouncer, calls) = recording(&scheduler);

        for value in 1..=5 {
            debouncer.call(value);
            scheduler.advance(Duration::from_millis(10));
        }
        assert!(calls.borrow().is_empty());

        scheduler.advance(Duration::from_millis(50));
        assert_eq!(*calls.borrow(), vec![5]);
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn separate_idle_windows_fire_separately() {
        let scheduler = ManualScheduler::default();
        let (debouncer, calls) = recording(&scheduler);

        debouncer.call(1);
        scheduler.advance(Duration::from_millis(60));
        debouncer.call(2);
        scheduler.advance(Duration::from_millis(60));

        assert_eq!(*calls.borrow(), vec![1, 2]);
    }

    #[test]
    fn fires_exactly_at_delay() {
        let scheduler = ManualScheduler::default();
        let (debouncer, calls) = recording(&scheduler);

        debouncer.call(7);
        scheduler.advance(Duration::from_millis(49));
        assert!(calls.borrow().is_empty());
        scheduler.advance(Duration::from_millis(1));
        assert_eq!(*calls.borrow(), vec![7]);
    }

    #[test]
    fn cancel_discards_pending_call() {
        let scheduler = ManualScheduler::default();
        let (debouncer, calls) = recording(&scheduler);

        debouncer.call(1);
        debouncer.cancel();
        scheduler.advance(Duration::from_millis(100));

        assert!(calls.borrow().is_empty());
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn drop_discards_pending_call() {
        let scheduler = ManualScheduler::default();
        let (debouncer, calls) = recording(&scheduler);

        debouncer.call(1);
        drop(debouncer);
        scheduler.advance(Duration::from_millis(100));

        assert!(calls.borrow().is_empty());
    }
}
