//! Analytics: historical trends, the seven-day forecast and KPI cards.
//!
//! There is no timer here. The series are regenerated when the page mounts
//! and whenever the selected time range changes.

use chrono::NaiveDate;
use fg_core::seed::seed_kpis;
use fg_core::series::{
    historical_series, prediction_series, ChartMetric, HistoricalPoint, PredictionPoint, TimeRange,
    HISTORY_DAYS, PREDICTION_DAYS, RISK_DISTRIBUTION,
};
use fg_core::{Metric, RiskTier};
use fg_runtime::Clock;
use rand::RngCore;
use std::rc::Rc;

use crate::PageContext;

pub struct AnalyticsPage {
    rng: Box<dyn RngCore>,
    clock: Rc<dyn Clock>,
    range: TimeRange,
    metric: ChartMetric,
    history: Vec<HistoricalPoint>,
    predictions: Vec<PredictionPoint>,
    kpis: Vec<Metric>,
    generations: u32,
}

impl AnalyticsPage {
    pub fn mount(ctx: &PageContext, rng: Box<dyn RngCore>) -> anyhow::Result<Self> {
        let mut page = Self {
            rng,
            clock: ctx.clock.clone(),
            range: TimeRange::default(),
            metric: ChartMetric::default(),
            history: Vec::new(),
            predictions: Vec::new(),
            kpis: seed_kpis()?,
            generations: 0,
        };
        page.regenerate();
        log::info!("[FlowGuard] analytics: mounted");
        Ok(page)
    }

    fn regenerate(&mut self) {
        let now = self.clock.now();
        self.history = historical_series(now, HISTORY_DAYS, &mut self.rng);
        self.predictions = prediction_series(now, PREDICTION_DAYS, &mut self.rng);
        self.generations += 1;
        log::debug!("[FlowGuard] analytics: regenerated series for {}", self.range);
    }

    pub fn range(&self) -> TimeRange {
        self.range
    }

    /// Switching to a different range regenerates both series.
    pub fn set_range(&mut self, range: TimeRange) {
        if range != self.range {
            self.range = range;
            self.regenerate();
        }
    }

    pub fn metric(&self) -> ChartMetric {
        self.metric
    }

    pub fn set_metric(&mut self, metric: ChartMetric) {
        self.metric = metric;
    }

    /// History points inside the selected range.
    pub fn window(&self) -> &[HistoricalPoint] {
        self.range.window(&self.history)
    }

    /// The selected measurement over the selected range.
    pub fn trend(&self) -> Vec<(NaiveDate, f64)> {
        self.metric.project(self.window())
    }

    pub fn predictions(&self) -> &[PredictionPoint] {
        &self.predictions
    }

    pub fn kpis(&self) -> &[Metric] {
        &self.kpis
    }

    pub fn risk_distribution(&self) -> &'static [(RiskTier, f64)] {
        &RISK_DISTRIBUTION
    }

    /// How many times the series were generated.
    pub fn generations(&self) -> u32 {
        self.generations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{harness, rng};
    use fg_core::RiskThresholds;

    #[test]
    fn mount_generates_once_with_default_selection() {
        let h = harness();
        let page = AnalyticsPage::mount(&h.ctx, rng(21)).unwrap();
        assert_eq!(page.generations(), 1);
        assert_eq!(page.range(), TimeRange::SevenDays);
        assert_eq!(page.window().len(), 7);
        assert_eq!(page.predictions().len(), 7);
        assert_eq!(page.kpis().len(), 4);
        let total: f64 = page.risk_distribution().iter().map(|(_, share)| share).sum();
        assert_eq!(total, 100.0);
    }

    #[test]
    fn range_change_regenerates_and_rewindows() {
        let h = harness();
        let mut page = AnalyticsPage::mount(&h.ctx, rng(22)).unwrap();
        let before = page.window().last().cloned();

        page.set_range(TimeRange::ThirtyDays);
        assert_eq!(page.generations(), 2);
        assert_eq!(page.window().len(), 30);
        assert_ne!(page.window().last().cloned(), before);

        page.set_range(TimeRange::NinetyDays);
        assert_eq!(page.window().len(), HISTORY_DAYS as usize);

        page.set_range(TimeRange::NinetyDays);
        assert_eq!(page.generations(), 3);
    }

    #[test]
    fn metric_change_reprojects_without_regenerating() {
        let h = harness();
        let mut page = AnalyticsPage::mount(&h.ctx, rng(23)).unwrap();
        page.set_metric(ChartMetric::Rainfall);
        let trend = page.trend();
        assert_eq!(page.generations(), 1);
        assert_eq!(trend.len(), 7);
        for ((date, value), point) in trend.iter().zip(page.window()) {
            assert_eq!(*date, point.date);
            assert_eq!(*value, point.rainfall);
        }
    }

    #[test]
    fn predictions_use_forecast_tiers() {
        let h = harness();
        let page = AnalyticsPage::mount(&h.ctx, rng(24)).unwrap();
        for point in page.predictions() {
            assert_eq!(point.risk_level, RiskThresholds::FORECAST.tier(point.predicted));
        }
    }
}
