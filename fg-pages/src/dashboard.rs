//! Dashboard: live sensors, headline metrics, recent alerts and the
//! water-level and prediction charts.

use fg_core::seed::{seed_alerts, seed_metrics};
use fg_core::series::{forecast_series, water_level_series, ForecastPoint, WaterLevelPoint};
use fg_core::view::{alerts_newest_first, sensors_by_risk, StatusCounts};
use fg_core::{Alert, Metric, Sensor};
use rand::RngCore;
use std::cell::Ref;

use crate::feed::{SensorFeed, SensorSnapshot};
use crate::PageContext;

/// Number of alerts listed in the recent-alerts panel.
pub const RECENT_ALERTS: usize = 3;

pub struct DashboardPage {
    feed: SensorFeed,
    alerts: Vec<Alert>,
    metrics: Vec<Metric>,
    water_levels: Vec<WaterLevelPoint>,
    forecast: Vec<ForecastPoint>,
}

impl DashboardPage {
    /// Seed the page and start its sensor refresh. Alerts, metrics and the
    /// chart series are fixed for the lifetime of the page.
    pub fn mount(ctx: &PageContext, mut rng: Box<dyn RngCore>) -> anyhow::Result<Self> {
        let now = ctx.clock.now();
        let water_levels = water_level_series(now, &mut rng);
        let forecast = forecast_series(now, &mut rng);
        let feed = SensorFeed::start(ctx, ctx.config.dashboard(), rng)?;
        log::info!("[FlowGuard] dashboard: mounted");

        Ok(Self {
            feed,
            alerts: seed_alerts(now)?,
            metrics: seed_metrics()?,
            water_levels,
            forecast,
        })
    }

    pub fn snapshot(&self) -> Ref<'_, SensorSnapshot> {
        self.feed.snapshot()
    }

    pub fn status_counts(&self) -> StatusCounts {
        StatusCounts::of(&self.snapshot().sensors)
    }

    /// Sensors ordered by risk, highest first.
    pub fn sensors_by_risk(&self) -> Vec<Sensor> {
        sensors_by_risk(&self.snapshot().sensors)
    }

    pub fn recent_alerts(&self) -> Vec<Alert> {
        let mut alerts = alerts_newest_first(&self.alerts);
        alerts.truncate(RECENT_ALERTS);
        alerts
    }

    pub fn metrics(&self) -> &[Metric] {
        &self.metrics
    }

    pub fn water_levels(&self) -> &[WaterLevelPoint] {
        &self.water_levels
    }

    pub fn forecast(&self) -> &[ForecastPoint] {
        &self.forecast
    }

    pub fn ticks(&self) -> u64 {
        self.feed.ticks()
    }
}

impl Drop for DashboardPage {
    fn drop(&mut self) {
        self.feed.stop();
        log::info!("[FlowGuard] dashboard: unmounted");
    }
}
