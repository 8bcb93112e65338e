//! Virtual-time scheduler.
//!
//! Nothing runs until [`ManualScheduler::advance`] moves virtual time
//! forward; due tasks then fire in deadline order (ties in scheduling
//! order). An attached [`ManualClock`] is moved to each task's deadline
//! before the task runs, so timestamps written by a tick match the tick.

use crate::clock::ManualClock;
use crate::scheduler::{CancelToken, Scheduler, TaskHandle};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// Shortest repeat period; a zero period would never let time advance.
const MIN_PERIOD: Duration = Duration::from_millis(1);

enum Job {
    Repeating {
        period: Duration,
        task: Box<dyn FnMut()>,
    },
    Once(Box<dyn FnOnce()>),
}

struct Entry {
    id: u64,
    due: Duration,
    token: CancelToken,
    job: Job,
}

#[derive(Default)]
struct Inner {
    elapsed: Duration,
    next_id: u64,
    entries: Vec<Entry>,
}

/// Deterministic scheduler driven by the test. Clones share state.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    inner: Rc<RefCell<Inner>>,
    clock: Option<ManualClock>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep `clock` in step with virtual time.
    pub fn with_clock(clock: ManualClock) -> Self {
        Self {
            inner: Rc::default(),
            clock: Some(clock),
        }
    }

    /// Virtual time since creation.
    pub fn elapsed(&self) -> Duration {
        self.inner.borrow().elapsed
    }

    /// Number of tasks that are scheduled and not cancelled.
    pub fn pending(&self) -> usize {
        self.inner
            .borrow()
            .entries
            .iter()
            .filter(|e| !e.token.is_cancelled())
            .count()
    }

    /// Move virtual time forward by `by`, running every task that falls due.
    pub fn advance(&self, by: Duration) {
        let target = self.elapsed() + by;
        while let Some(entry) = self.take_next_due(target) {
            self.move_to(entry.due);
            let Entry { id, due, token, job } = entry;
            match job {
                Job::Once(task) => task(),
                Job::Repeating { period, mut task } => {
                    task();
                    if !token.is_cancelled() {
                        self.inner.borrow_mut().entries.push(Entry {
                            id,
                            due: due + period,
                            token,
                            job: Job::Repeating { period, task },
                        });
                    }
                }
            }
        }
        self.move_to(target);
    }

    fn take_next_due(&self, target: Duration) -> Option<Entry> {
        let mut inner = self.inner.borrow_mut();
        inner.entries.retain(|e| !e.token.is_cancelled());
        let index = inner
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.due <= target)
            .min_by_key(|(_, e)| (e.due, e.id))
            .map(|(i, _)| i)?;
        Some(inner.entries.swap_remove(index))
    }

    fn move_to(&self, to: Duration) {
        let from = {
            let mut inner = self.inner.borrow_mut();
            let from = inner.elapsed;
            inner.elapsed = to;
            from
        };
        if let Some(clock) = &self.clock {
            if let Ok(step) = chrono::Duration::from_std(to - from) {
                clock.advance(step);
            }
        }
    }

    fn push(&self, due_in: Duration, job: Job) -> TaskHandle {
        let token = CancelToken::new();
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        let due = inner.elapsed + due_in;
        inner.entries.push(Entry {
            id,
            due,
            token: token.clone(),
            job,
        });
        TaskHandle::from_token(token)
    }
}

impl Scheduler for ManualScheduler {
    fn every(&self, period: Duration, task: Box<dyn FnMut()>) -> TaskHandle {
        let period = period.max(MIN_PERIOD);
        self.push(period, Job::Repeating { period, task })
    }

    fn after(&self, delay: Duration, task: Box<dyn FnOnce()>) -> TaskHandle {
        self.push(delay, Job::Once(task))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::Clock;
    use chrono::{TimeZone, Utc};
    use std::cell::Cell;

    fn counter() -> (Rc<Cell<u32>>, Box<dyn FnMut()>) {
        let count = Rc::new(Cell::new(0));
        let c = count.clone();
        (count, Box::new(move || c.set(c.get() + 1)))
    }

    #[test]
    fn repeating_task_fires_once_per_period() {
        let scheduler = ManualScheduler::new();
        let (count, task) = counter();
        let _handle = scheduler.every(Duration::from_secs(10), task);

        scheduler.advance(Duration::from_secs(9));
        assert_eq!(count.get(), 0);
        scheduler.advance(Duration::from_secs(1));
        assert_eq!(count.get(), 1);
        scheduler.advance(Duration::from_secs(35));
        assert_eq!(count.get(), 4);
        assert_eq!(scheduler.elapsed(), Duration::from_secs(45));
    }

    #[test]
    fn dropped_handle_stops_future_ticks() {
        let scheduler = ManualScheduler::new();
        let (count, task) = counter();
        let handle = scheduler.every(Duration::from_secs(10), task);
        scheduler.advance(Duration::from_secs(20));
        assert_eq!(count.get(), 2);

        drop(handle);
        scheduler.advance(Duration::from_secs(100));
        assert_eq!(count.get(), 2);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn one_shot_fires_once_and_can_be_cancelled() {
        let scheduler = ManualScheduler::new();
        let fired = Rc::new(Cell::new(false));
        let f = fired.clone();
        let _kept = scheduler.after(Duration::from_millis(1500), Box::new(move || f.set(true)));

        let cancelled = Rc::new(Cell::new(false));
        let c = cancelled.clone();
        let mut dropped = scheduler.after(Duration::from_millis(1000), Box::new(move || c.set(true)));
        dropped.cancel();

        scheduler.advance(Duration::from_secs(5));
        assert!(fired.get());
        assert!(!cancelled.get());
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn tasks_fire_in_deadline_order() {
        let scheduler = ManualScheduler::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut handles = Vec::new();
        for (name, secs) in [("b", 15u64), ("a", 10), ("c", 15)] {
            let log = log.clone();
            handles.push(scheduler.after(
                Duration::from_secs(secs),
                Box::new(move || log.borrow_mut().push(name)),
            ));
        }
        scheduler.advance(Duration::from_secs(30));
        assert_eq!(*log.borrow(), vec!["a", "b", "c"]);
    }

    #[test]
    fn task_may_schedule_more_work() {
        let scheduler = ManualScheduler::new();
        let fired = Rc::new(Cell::new(false));
        let inner_handle: Rc<RefCell<Option<TaskHandle>>> = Rc::default();
        let s = scheduler.clone();
        let f = fired.clone();
        let slot = inner_handle.clone();
        let _outer = scheduler.after(
            Duration::from_secs(1),
            Box::new(move || {
                let f = f.clone();
                *slot.borrow_mut() = Some(s.after(Duration::from_secs(1), Box::new(move || f.set(true))));
            }),
        );
        scheduler.advance(Duration::from_secs(1));
        assert!(!fired.get());
        scheduler.advance(Duration::from_secs(1));
        assert!(fired.get());
    }

    #[test]
    fn task_cancelling_itself_is_not_rescheduled() {
        let scheduler = ManualScheduler::new();
        let count = Rc::new(Cell::new(0));
        let slot: Rc<RefCell<Option<TaskHandle>>> = Rc::default();
        let c = count.clone();
        let s = slot.clone();
        let handle = scheduler.every(
            Duration::from_secs(1),
            Box::new(move || {
                c.set(c.get() + 1);
                if let Some(h) = s.borrow_mut().as_mut() {
                    h.cancel();
                }
            }),
        );
        *slot.borrow_mut() = Some(handle);
        scheduler.advance(Duration::from_secs(10));
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn attached_clock_reads_deadline_inside_task() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let clock = ManualClock::new(start);
        let scheduler = ManualScheduler::with_clock(clock.clone());
        let seen = Rc::new(RefCell::new(Vec::new()));
        let (s, c) = (seen.clone(), clock.clone());
        let _h = scheduler.every(
            Duration::from_secs(10),
            Box::new(move || s.borrow_mut().push(c.now())),
        );
        scheduler.advance(Duration::from_secs(25));
        assert_eq!(
            *seen.borrow(),
            vec![
                start + chrono::Duration::seconds(10),
                start + chrono::Duration::seconds(20)
            ]
        );
        assert_eq!(clock.now(), start + chrono::Duration::seconds(25));
    }
}
