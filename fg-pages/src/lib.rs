//! Page state for the FlowGuard views.
//!
//! Each page owns its own copy of the mock data, created when the page
//! mounts and dropped when it unmounts. Dropping a page drops its timers.
//! Pages do not share mutable state with one another; two pages seeded at
//! the same moment diverge as soon as their refresh loops tick.
//!
//! Rendering layers hand every page a [`PageContext`] and get told about
//! asynchronous changes through its `notify` callback.

pub mod alerts;
pub mod analytics;
pub mod config;
pub mod contact;
pub mod dashboard;
pub mod event_map;
pub mod feed;
pub mod login;
pub mod signup;

use fg_runtime::{Clock, Scheduler};
use std::rc::Rc;

pub use alerts::AlertsPage;
pub use analytics::AnalyticsPage;
pub use config::RefreshConfig;
pub use contact::{ContactPage, ContactStatus};
pub use dashboard::DashboardPage;
pub use event_map::EventMapPage;
pub use feed::{SensorFeed, SensorSnapshot};
pub use login::{LoginPage, LoginStatus, LOGIN_FAILED_MESSAGE};
pub use signup::{SignupPage, SignupStatus};

/// Everything a page needs from its host.
#[derive(Clone)]
pub struct PageContext {
    pub scheduler: Rc<dyn Scheduler>,
    pub clock: Rc<dyn Clock>,
    pub config: RefreshConfig,
    /// Called after a timer or delayed completion changed page state.
    pub notify: Rc<dyn Fn()>,
}

impl PageContext {
    pub fn new(scheduler: Rc<dyn Scheduler>, clock: Rc<dyn Clock>) -> Self {
        Self {
            scheduler,
            clock,
            config: RefreshConfig::default(),
            notify: Rc::new(|| {}),
        }
    }

    pub fn with_config(mut self, config: RefreshConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_notify(mut self, notify: impl Fn() + 'static) -> Self {
        self.notify = Rc::new(notify);
        self
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::PageContext;
    use chrono::{DateTime, TimeZone, Utc};
    use fg_runtime::{ManualClock, ManualScheduler};
    use rand::RngCore;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::cell::Cell;
    use std::rc::Rc;

    pub fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    pub struct Harness {
        pub scheduler: ManualScheduler,
        pub clock: ManualClock,
        pub notified: Rc<Cell<u32>>,
        pub ctx: PageContext,
    }

    pub fn harness() -> Harness {
        let clock = ManualClock::new(start());
        let scheduler = ManualScheduler::with_clock(clock.clone());
        let notified = Rc::new(Cell::new(0));
        let counter = notified.clone();
        let ctx = PageContext::new(Rc::new(scheduler.clone()), Rc::new(clock.clone()))
            .with_notify(move || counter.set(counter.get() + 1));
        Harness {
            scheduler,
            clock,
            notified,
            ctx,
        }
    }

    pub fn rng(seed: u64) -> Box<dyn RngCore> {
        Box::new(ChaCha8Rng::seed_from_u64(seed))
    }
}
