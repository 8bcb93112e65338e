//! Event map: live sensors with a status filter and a selected marker.

use fg_core::view::{filter_sensors, Filter, StatusCounts};
use fg_core::{Sensor, SensorStatus};
use rand::RngCore;
use std::cell::Ref;

use crate::feed::{SensorFeed, SensorSnapshot};
use crate::PageContext;

pub struct EventMapPage {
    feed: SensorFeed,
    filter: Filter<SensorStatus>,
    selected: Option<String>,
}

impl EventMapPage {
    pub fn mount(ctx: &PageContext, rng: Box<dyn RngCore>) -> anyhow::Result<Self> {
        let feed = SensorFeed::start(ctx, ctx.config.event_map(), rng)?;
        log::info!("[FlowGuard] event map: mounted");
        Ok(Self {
            feed,
            filter: Filter::All,
            selected: None,
        })
    }

    pub fn snapshot(&self) -> Ref<'_, SensorSnapshot> {
        self.feed.snapshot()
    }

    pub fn filter(&self) -> Filter<SensorStatus> {
        self.filter
    }

    pub fn set_filter(&mut self, filter: Filter<SensorStatus>) {
        self.filter = filter;
    }

    /// Sensors passing the current filter, in snapshot order.
    pub fn visible(&self) -> Vec<Sensor> {
        filter_sensors(&self.snapshot().sensors, self.filter)
    }

    /// Counts over the unfiltered snapshot.
    pub fn counts(&self) -> StatusCounts {
        StatusCounts::of(&self.snapshot().sensors)
    }

    /// Select a marker; selecting the selected marker again clears it.
    pub fn select(&mut self, id: &str) {
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        } else {
            self.selected = Some(id.to_string());
        }
    }

    /// The selected sensor as of the current snapshot.
    pub fn selected(&self) -> Option<Sensor> {
        let id = self.selected.as_deref()?;
        self.snapshot().sensors.iter().find(|s| s.id == id).cloned()
    }
}

impl Drop for EventMapPage {
    fn drop(&mut self) {
        self.feed.stop();
        log::info!("[FlowGuard] event map: unmounted");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{harness, rng};
    use std::time::Duration;

    #[test]
    fn filter_is_applied_to_each_new_snapshot() {
        let h = harness();
        let mut page = EventMapPage::mount(&h.ctx, rng(7)).unwrap();
        page.set_filter(Filter::Only(SensorStatus::Safe));
        assert_eq!(page.visible().len(), 3);

        for _ in 0..20 {
            h.scheduler.advance(Duration::from_secs(10));
            let counts = page.counts();
            assert_eq!(page.visible().len(), counts.safe);
            assert!(page.visible().iter().all(|s| s.status == SensorStatus::Safe));
        }
    }

    #[test]
    fn selection_follows_refreshes() {
        let h = harness();
        let mut page = EventMapPage::mount(&h.ctx, rng(8)).unwrap();
        page.select("S003");
        let before = page.selected().unwrap();
        h.scheduler.advance(Duration::from_secs(10));
        let after = page.selected().unwrap();
        assert_eq!(after.id, "S003");
        assert_ne!(after.last_updated, before.last_updated);

        page.select("S003");
        assert!(page.selected().is_none());
        page.select("S999");
        assert!(page.selected().is_none());
    }

    #[test]
    fn unmount_cancels_the_timer() {
        let h = harness();
        let page = EventMapPage::mount(&h.ctx, rng(9)).unwrap();
        drop(page);
        h.scheduler.advance(Duration::from_secs(60));
        assert_eq!(h.notified.get(), 0);
    }
}
