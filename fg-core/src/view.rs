//! Derived view state.
//!
//! Everything here is a pure function of the current snapshot and is
//! recomputed on every render; nothing is cached between snapshots.

use crate::alert::{Alert, AlertStatus, Severity};
use crate::sensor::{Sensor, SensorStatus};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::str::FromStr;

/// A single active filter: everything, or exact matches on one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Filter<T> {
    All,
    Only(T),
}

impl<T> Default for Filter<T> {
    fn default() -> Self {
        Filter::All
    }
}

impl<T: PartialEq> Filter<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(wanted) => wanted == value,
        }
    }
}

impl<T: FromStr> FromStr for Filter<T> {
    type Err = T::Err;

    /// `"all"` or one of the value's own labels.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            Ok(Filter::All)
        } else {
            s.parse().map(Filter::Only)
        }
    }
}

/// Per-status sensor counts. The three buckets always sum to `total()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct StatusCounts {
    pub safe: usize,
    pub warning: usize,
    pub critical: usize,
}

impl StatusCounts {
    pub fn of(sensors: &[Sensor]) -> Self {
        sensors.iter().fold(Self::default(), |mut counts, sensor| {
            match sensor.status {
                SensorStatus::Safe => counts.safe += 1,
                SensorStatus::Warning => counts.warning += 1,
                SensorStatus::Critical => counts.critical += 1,
            }
            counts
        })
    }

    pub fn get(&self, status: SensorStatus) -> usize {
        match status {
            SensorStatus::Safe => self.safe,
            SensorStatus::Warning => self.warning,
            SensorStatus::Critical => self.critical,
        }
    }

    pub fn total(&self) -> usize {
        self.safe + self.warning + self.critical
    }
}

/// Per-severity alert counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SeverityCounts {
    pub normal: usize,
    pub warning: usize,
    pub critical: usize,
}

impl SeverityCounts {
    pub fn of(alerts: &[Alert]) -> Self {
        alerts.iter().fold(Self::default(), |mut counts, alert| {
            match alert.severity {
                Severity::Normal => counts.normal += 1,
                Severity::Warning => counts.warning += 1,
                Severity::Critical => counts.critical += 1,
            }
            counts
        })
    }

    pub fn get(&self, severity: Severity) -> usize {
        match severity {
            Severity::Normal => self.normal,
            Severity::Warning => self.warning,
            Severity::Critical => self.critical,
        }
    }

    pub fn total(&self) -> usize {
        self.normal + self.warning + self.critical
    }
}

/// Headline numbers of the alerts page summary cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AlertSummary {
    pub active: usize,
    pub critical: usize,
    pub total: usize,
}

impl AlertSummary {
    pub fn of(alerts: &[Alert]) -> Self {
        Self {
            active: alerts.iter().filter(|a| a.status == AlertStatus::Active).count(),
            critical: SeverityCounts::of(alerts).critical,
            total: alerts.len(),
        }
    }
}

/// Sensors matching `filter`, in snapshot order.
pub fn filter_sensors(sensors: &[Sensor], filter: Filter<SensorStatus>) -> Vec<Sensor> {
    sensors
        .iter()
        .filter(|s| filter.matches(&s.status))
        .cloned()
        .collect()
}

/// Combined severity AND status filter of the alerts page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AlertFilter {
    pub severity: Filter<Severity>,
    pub status: Filter<AlertStatus>,
}

impl AlertFilter {
    pub fn matches(&self, alert: &Alert) -> bool {
        self.severity.matches(&alert.severity) && self.status.matches(&alert.status)
    }

    pub fn apply(&self, alerts: &[Alert]) -> Vec<Alert> {
        alerts.iter().filter(|a| self.matches(a)).cloned().collect()
    }
}

/// Sensor shown in the dashboard's "most at risk" list, sorted by risk,
/// highest first.
pub fn sensors_by_risk(sensors: &[Sensor]) -> Vec<Sensor> {
    let mut sorted = sensors.to_vec();
    sorted.sort_by(|a, b| b.risk_percentage.total_cmp(&a.risk_percentage));
    sorted
}

/// Alerts newest first.
pub fn alerts_newest_first(alerts: &[Alert]) -> Vec<Alert> {
    let mut sorted = alerts.to_vec();
    sorted.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    sorted
}

/// "5m ago" style label of an alert's age at render time.
pub fn alert_age(alert: &Alert, now: &DateTime<Utc>) -> String {
    fg_utils::dates::time_ago(&alert.timestamp, now)
}

/// Whole-number percentage label, e.g. "88%".
pub fn percent_label(value: f64) -> String {
    format!("{:.0}%", value)
}
