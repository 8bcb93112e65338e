//! The periodically refreshed sensor list shared in shape (not in state)
//! by the dashboard and the event map.

use chrono::{DateTime, Utc};
use fg_core::generator::{refresh_sensors, Perturbation};
use fg_core::seed::seed_sensors;
use fg_core::Sensor;
use fg_runtime::RefreshLoop;
use rand::RngCore;
use std::cell::Ref;
use std::time::Duration;

use crate::PageContext;

/// Sensors as of `updated_at`.
#[derive(Debug, Clone, PartialEq)]
pub struct SensorSnapshot {
    pub sensors: Vec<Sensor>,
    pub updated_at: DateTime<Utc>,
}

/// A page-owned sensor list that regenerates itself every `period`.
pub struct SensorFeed {
    refresh: RefreshLoop<SensorSnapshot>,
}

impl SensorFeed {
    /// Seed from the fixture list and start refreshing.
    pub fn start(ctx: &PageContext, period: Duration, mut rng: Box<dyn RngCore>) -> anyhow::Result<Self> {
        let now = ctx.clock.now();
        let initial = SensorSnapshot {
            sensors: seed_sensors(now)?,
            updated_at: now,
        };

        let clock = ctx.clock.clone();
        let notify = ctx.notify.clone();
        let refresh = RefreshLoop::start(ctx.scheduler.as_ref(), period, initial, move |snapshot| {
            let now = clock.now();
            snapshot.sensors = refresh_sensors(&snapshot.sensors, &mut rng, now, &Perturbation::DEFAULT);
            snapshot.updated_at = now;
            log::debug!("[FlowGuard] feed: refreshed {} sensors", snapshot.sensors.len());
            notify();
        });
        Ok(Self { refresh })
    }

    pub fn snapshot(&self) -> Ref<'_, SensorSnapshot> {
        self.refresh.snapshot()
    }

    pub fn ticks(&self) -> u64 {
        self.refresh.ticks()
    }

    pub fn is_running(&self) -> bool {
        self.refresh.is_running()
    }

    pub fn stop(&mut self) {
        self.refresh.stop();
    }
}
