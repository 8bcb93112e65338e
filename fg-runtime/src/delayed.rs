//! One-shot delayed completion tied to its owner's lifetime.

use crate::scheduler::{Scheduler, TaskHandle};
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

/// A pending simulated-latency completion.
///
/// Dropping it before the delay elapses cancels the completion, which is
/// how a torn-down form avoids a late state update.
#[derive(Debug)]
pub struct DelayedTask {
    handle: TaskHandle,
    done: Rc<Cell<bool>>,
}

impl DelayedTask {
    pub fn schedule(
        scheduler: &dyn Scheduler,
        delay: Duration,
        complete: impl FnOnce() + 'static,
    ) -> Self {
        let done = Rc::new(Cell::new(false));
        let flag = done.clone();
        let handle = scheduler.after(
            delay,
            Box::new(move || {
                flag.set(true);
                complete();
            }),
        );
        Self { handle, done }
    }

    /// Still waiting: neither completed nor cancelled.
    pub fn is_pending(&self) -> bool {
        !self.done.get() && !self.handle.is_cancelled()
    }

    pub fn cancel(&mut self) {
        self.handle.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manual::ManualScheduler;

    #[test]
    fn completes_after_delay() {
        let scheduler = ManualScheduler::new();
        let hit = Rc::new(Cell::new(false));
        let h = hit.clone();
        let task = DelayedTask::schedule(&scheduler, Duration::from_millis(1500), move || h.set(true));
        scheduler.advance(Duration::from_millis(1499));
        assert!(task.is_pending());
        scheduler.advance(Duration::from_millis(1));
        assert!(hit.get());
        assert!(!task.is_pending());
    }

    #[test]
    fn dropping_owner_discards_completion() {
        let scheduler = ManualScheduler::new();
        let hit = Rc::new(Cell::new(false));
        let h = hit.clone();
        let task = DelayedTask::schedule(&scheduler, Duration::from_secs(1), move || h.set(true));
        drop(task);
        scheduler.advance(Duration::from_secs(5));
        assert!(!hit.get());
    }
}
