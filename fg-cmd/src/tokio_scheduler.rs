//! Tokio timers behind the `Scheduler` trait.
//!
//! Tasks are `!Send`, so they run with `spawn_local` and must be scheduled
//! from inside a `tokio::task::LocalSet`. Cancelling a handle aborts the
//! spawned task.

use fg_runtime::{CancelToken, Scheduler, TaskHandle};
use std::time::Duration;
use tokio::time::{self, Instant, MissedTickBehavior};

#[derive(Debug, Clone, Copy, Default)]
pub struct TokioScheduler;

impl Scheduler for TokioScheduler {
    fn every(&self, period: Duration, mut task: Box<dyn FnMut()>) -> TaskHandle {
        let token = CancelToken::new();
        let guard = token.clone();
        let join = tokio::task::spawn_local(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if guard.is_cancelled() {
                    break;
                }
                task();
            }
        });
        TaskHandle::new(token, move || join.abort())
    }

    fn after(&self, delay: Duration, task: Box<dyn FnOnce()>) -> TaskHandle {
        let token = CancelToken::new();
        let guard = token.clone();
        let join = tokio::task::spawn_local(async move {
            time::sleep(delay).await;
            if !guard.is_cancelled() {
                task();
            }
        });
        TaskHandle::new(token, move || join.abort())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[tokio::test(start_paused = true)]
    async fn interval_fires_per_period_until_dropped() {
        let local = tokio::task::LocalSet::new();
        local
            .run_until(async {
                let count = Rc::new(Cell::new(0));
                let c = count.clone();
                let handle = TokioScheduler.every(
                    Duration::from_secs(10),
                    Box::new(move || c.set(c.get() + 1)),
                );

                time::sleep(Duration::from_secs(25)).await;
                assert_eq!(count.get(), 2);

                drop(handle);
                time::sleep(Duration::from_secs(60)).await;
                assert_eq!(count.get(), 2);
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_timeout_never_runs() {
        let local = tokio::task::LocalSet::new();
        local
            .run_until(async {
                let fired = Rc::new(Cell::new(false));
                let f = fired.clone();
                let mut handle = TokioScheduler.after(Duration::from_millis(1500), Box::new(move || f.set(true)));
                handle.cancel();
                time::sleep(Duration::from_secs(5)).await;
                assert!(!fired.get());

                let f = fired.clone();
                let _kept = TokioScheduler.after(Duration::from_millis(1500), Box::new(move || f.set(true)));
                time::sleep(Duration::from_secs(2)).await;
                assert!(fired.get());
            })
            .await;
    }
}
