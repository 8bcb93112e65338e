//! Alerts: the alert list with occasional updates and combined filters.

use chrono::{DateTime, Utc};
use fg_core::generator::{churn_alerts, AlertChurn};
use fg_core::seed::seed_alerts;
use fg_core::view::{alert_age, AlertFilter, AlertSummary};
use fg_core::Alert;
use fg_runtime::{Clock, RefreshLoop};
use rand::RngCore;
use std::cell::Ref;
use std::rc::Rc;

use crate::PageContext;

pub struct AlertsPage {
    refresh: RefreshLoop<Vec<Alert>>,
    clock: Rc<dyn Clock>,
    filter: AlertFilter,
}

impl AlertsPage {
    pub fn mount(ctx: &PageContext, mut rng: Box<dyn RngCore>) -> anyhow::Result<Self> {
        let alerts = seed_alerts(ctx.clock.now())?;
        let clock = ctx.clock.clone();
        let notify = ctx.notify.clone();
        let refresh = RefreshLoop::start(ctx.scheduler.as_ref(), ctx.config.alerts(), alerts, move |alerts| {
            if let Some(next) = churn_alerts(alerts, &mut rng, clock.now(), &AlertChurn::DEFAULT) {
                log::debug!("[FlowGuard] alerts: update pass applied");
                *alerts = next;
                notify();
            }
        });
        log::info!("[FlowGuard] alerts: mounted");

        Ok(Self {
            refresh,
            clock: ctx.clock.clone(),
            filter: AlertFilter::default(),
        })
    }

    pub fn alerts(&self) -> Ref<'_, Vec<Alert>> {
        self.refresh.snapshot()
    }

    pub fn filter(&self) -> AlertFilter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: AlertFilter) {
        self.filter = filter;
    }

    pub fn visible(&self) -> Vec<Alert> {
        self.filter.apply(&self.alerts())
    }

    /// Counts over the unfiltered list.
    pub fn summary(&self) -> AlertSummary {
        AlertSummary::of(&self.alerts())
    }

    /// "Nm ago" label of an alert as of now.
    pub fn age(&self, alert: &Alert) -> String {
        alert_age(alert, &self.now())
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    pub fn ticks(&self) -> u64 {
        self.refresh.ticks()
    }
}

impl Drop for AlertsPage {
    fn drop(&mut self) {
        self.refresh.stop();
        log::info!("[FlowGuard] alerts: unmounted");
    }
}
