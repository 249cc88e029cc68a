//! Cancelable deferred operations.
//!
//! Timers, animation frames and simulated network latency all follow the same
//! shape: schedule a task, get back a handle, cancel the handle on teardown.
//! [`Scheduler`] is the seam between the state machines in this crate and
//! whatever event loop runs them (the browser in `portfolio-site`, a manual
//! virtual clock in tests).

use std::time::Duration;

/// A scheduled operation that has not necessarily run yet.
pub trait Deferred {
    /// Prevent the operation from running. Cancelling an operation that has
    /// already run (or was already cancelled) is a no-op.
    fn cancel(self);
}

/// Runs tasks after a delay on a single-threaded event loop.
pub trait Scheduler {
    /// Handle returned for each scheduled task. Handles are stored inside
    /// other scheduled tasks, so they must own their data.
    type Handle: Deferred + 'static;

    /// Schedule `task` to run once, `delay` from now.
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Self::Handle;
}

impl Deferred for () {
    fn cancel(self) {}
}

impl<D: Deferred> Deferred for Option<D> {
    fn cancel(self) {
        if let Some(inner) = self {
            inner.cancel();
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Virtual clock used by the unit tests.

    use super::{Deferred, Scheduler};
    use std::cell::RefCell;
    use std::rc::{Rc, Weak};
    use std::time::Duration;

    struct Task {
        id: u64,
        due: Duration,
        run: Box<dyn FnOnce()>,
    }

    #[derive(Default)]
    struct Queue {
        now: Duration,
        next_id: u64,
        tasks: Vec<Task>,
    }

    /// Scheduler whose clock only moves on [`ManualScheduler::advance`].
    #[derive(Clone, Default)]
    pub(crate) struct ManualScheduler {
        queue: Rc<RefCell<Queue>>,
    }

    pub(crate) struct ManualHandle {
        id: u64,
        queue: Weak<RefCell<Queue>>,
    }

    impl Deferred for ManualHandle {
        fn cancel(self) {
            if let Some(queue) = self.queue.upgrade() {
                queue.borrow_mut().tasks.retain(|task| task.id != self.id);
            }
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = ManualHandle;

        fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> ManualHandle {
            let mut queue = self.queue.borrow_mut();
            let id = queue.next_id;
            queue.next_id += 1;
            let due = queue.now + delay;
            queue.tasks.push(Task { id, due, run: task });
            ManualHandle {
                id,
                queue: Rc::downgrade(&self.queue),
            }
        }
    }

    impl ManualScheduler {
        /// Move the clock forward, running due tasks in (due, id) order.
        pub(crate) fn advance(&self, by: Duration) {
            let target = self.queue.borrow().now + by;
            loop {
                let next = {
                    let mut queue = self.queue.borrow_mut();
                    let position = queue
                        .tasks
                        .iter()
                        .enumerate()
                        .filter(|(_, task)| task.due <= target)
                        .min_by_key(|(_, task)| (task.due, task.id))
                        .map(|(index, _)| index);
                    position.map(|index| {
                        let task = queue.tasks.remove(index);
                        queue.now = task.due;
                        task.run
                    })
                };
                match next {
                    Some(run) => run(),
                    None => break,
                }
            }
            self.queue.borrow_mut().now = target;
        }

        pub(crate) fn pending(&self) -> usize {
            self.queue.borrow().tasks.len()
        }
    }

    #[test]
    fn runs_tasks_in_due_order() {
        let scheduler = ManualScheduler::default();
        let log = Rc::new(RefCell::new(Vec::new()));
        for (delay, tag) in [(30, "c"), (10, "a"), (20, "b")] {
            let log = Rc::clone(&log);
            scheduler.schedule(
                Duration::from_millis(delay),
                Box::new(move || log.borrow_mut().push(tag)),
            );
        }

        scheduler.advance(Duration::from_millis(25));
        assert_eq!(*log.borrow(), vec!["a", "b"]);

        scheduler.advance(Duration::from_millis(5));
        assert_eq!(*log.borrow(), vec!["a", "b", "c"]);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn cancelled_task_never_runs() {
        let scheduler = ManualScheduler::default();
        let ran = Rc::new(RefCell::new(false));
        let flag = Rc::clone(&ran);
        let handle = scheduler.schedule(
            Duration::from_millis(10),
            Box::new(move || *flag.borrow_mut() = true),
        );

        handle.cancel();
        scheduler.advance(Duration::from_millis(100));
        assert!(!*ran.borrow());
    }

    fn cancel_after<S: Scheduler>(scheduler: &S, target: S::Handle, delay: Duration) -> S::Handle {
        let slot = Rc::new(RefCell::new(Some(target)));
        scheduler.schedule(delay, Box::new(move || slot.borrow_mut().take().cancel()))
    }

    #[test]
    fn handle_cancelled_from_another_task() {
        let scheduler = ManualScheduler::default();
        let ran = Rc::new(RefCell::new(false));
        let flag = Rc::clone(&ran);
        let handle = scheduler.schedule(
            Duration::from_millis(20),
            Box::new(move || *flag.borrow_mut() = true),
        );

        cancel_after(&scheduler, handle, Duration::from_millis(10));
        scheduler.advance(Duration::from_millis(100));

        assert!(!*ran.borrow());
        assert_eq!(scheduler.pending(), 0);
    }
}
