//! Periodic snapshot refresh.

use crate::scheduler::{Scheduler, TaskHandle};
use std::cell::{Cell, Ref, RefCell};
use std::rc::Rc;
use std::time::Duration;

/// Owns a piece of view state and replaces it on a fixed period.
///
/// The state is only reachable through this loop and the tick closure, so
/// once the loop is stopped (or dropped) nothing mutates it any more.
pub struct RefreshLoop<S> {
    state: Rc<RefCell<S>>,
    ticks: Rc<Cell<u64>>,
    period: Duration,
    handle: Option<TaskHandle>,
}

impl<S: 'static> RefreshLoop<S> {
    /// Start refreshing `initial` every `period` with `tick`.
    pub fn start<F>(scheduler: &dyn Scheduler, period: Duration, initial: S, mut tick: F) -> Self
    where
        F: FnMut(&mut S) + 'static,
    {
        let state = Rc::new(RefCell::new(initial));
        let ticks = Rc::new(Cell::new(0));

        let task_state = Rc::downgrade(&state);
        let task_ticks = ticks.clone();
        let handle = scheduler.every(
            period,
            Box::new(move || {
                // The loop may already be gone if the view tore down mid-flush.
                let Some(state) = task_state.upgrade() else {
                    return;
                };
                tick(&mut state.borrow_mut());
                task_ticks.set(task_ticks.get() + 1);
            }),
        );
        log::debug!("[FlowGuard] refresh: started loop every {:?}", period);

        Self {
            state,
            ticks,
            period,
            handle: Some(handle),
        }
    }

    /// Borrow the current snapshot.
    pub fn snapshot(&self) -> Ref<'_, S> {
        self.state.borrow()
    }

    /// Mutate the state from an input handler (filter changes and the like).
    pub fn update<R>(&self, f: impl FnOnce(&mut S) -> R) -> R {
        f(&mut self.state.borrow_mut())
    }

    /// Ticks applied so far.
    pub fn ticks(&self) -> u64 {
        self.ticks.get()
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_cancelled())
    }

    /// Cancel the timer. The last snapshot stays readable.
    pub fn stop(&mut self) {
        if let Some(mut handle) = self.handle.take() {
            handle.cancel();
            log::debug!("[FlowGuard] refresh: stopped after {} ticks", self.ticks());
        }
    }
}

impl<S> Drop for RefreshLoop<S> {
    fn drop(&mut self) {
        if let Some(mut handle) = self.handle.take() {
            handle.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manual::ManualScheduler;

    #[test]
    fn ticks_replace_state_on_period() {
        let scheduler = ManualScheduler::new();
        let refresh = RefreshLoop::start(&scheduler, Duration::from_secs(10), 0u32, |n| *n += 1);
        scheduler.advance(Duration::from_secs(30));
        assert_eq!(*refresh.snapshot(), 3);
        assert_eq!(refresh.ticks(), 3);
        assert!(refresh.is_running());
    }

    #[test]
    fn stop_freezes_state() {
        let scheduler = ManualScheduler::new();
        let mut refresh = RefreshLoop::start(&scheduler, Duration::from_secs(10), 0u32, |n| *n += 1);
        scheduler.advance(Duration::from_secs(10));
        refresh.stop();
        scheduler.advance(Duration::from_secs(100));
        assert_eq!(*refresh.snapshot(), 1);
        assert!(!refresh.is_running());
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn dropping_loop_cancels_timer() {
        let scheduler = ManualScheduler::new();
        let refresh = RefreshLoop::start(&scheduler, Duration::from_secs(15), (), |_| {});
        assert_eq!(scheduler.pending(), 1);
        drop(refresh);
        assert_eq!(scheduler.pending(), 0);
        scheduler.advance(Duration::from_secs(60));
    }

    #[test]
    fn update_runs_against_live_state() {
        let scheduler = ManualScheduler::new();
        let refresh = RefreshLoop::start(&scheduler, Duration::from_secs(10), vec![1, 2], |v| v.push(0));
        let len = refresh.update(|v| {
            v.retain(|x| *x > 1);
            v.len()
        });
        assert_eq!(len, 1);
        scheduler.advance(Duration::from_secs(10));
        assert_eq!(*refresh.snapshot(), vec![2, 0]);
    }
}
