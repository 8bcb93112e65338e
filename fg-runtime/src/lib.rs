//! Timing primitives for FlowGuard views.
//!
//! Views never touch ambient timers. They receive a [`Scheduler`] and a
//! [`Clock`], get back a [`TaskHandle`] for every task they schedule, and
//! drop those handles on teardown. Dropping a handle cancels the task, so a
//! destroyed view can never be mutated by a late callback.
//!
//! - `clock`: wall-clock and manually driven clocks
//! - `scheduler`: the scheduler trait and cancellation handles
//! - `manual`: a virtual-time scheduler for deterministic tests
//! - `refresh`: a periodic snapshot refresher built on the scheduler
//! - `delayed`: a one-shot, cancellable delayed completion

pub mod clock;
pub mod delayed;
pub mod manual;
pub mod refresh;
pub mod scheduler;

pub use clock::{Clock, ManualClock, SystemClock};
pub use delayed::DelayedTask;
pub use manual::ManualScheduler;
pub use refresh::RefreshLoop;
pub use scheduler::{CancelToken, Scheduler, TaskHandle};
