//! Data model and mock-data pipeline for the FlowGuard demo dashboard.
//!
//! This crate provides:
//! - `sensor`, `alert`, `metric`: the records every page renders
//! - `risk`: threshold tiering shared by sensor status and forecasts
//! - `seed`: the fixture-backed seed lists each page starts from
//! - `generator`: random perturbation of sensors and alerts on refresh
//! - `series`: synthetic chart series for the dashboard and analytics
//! - `view`: pure derived state (counts, filters, labels)
//! - `forms`: synchronous validation for the contact and signup forms

pub mod alert;
pub mod forms;
pub mod generator;
pub mod metric;
pub mod risk;
pub mod seed;
pub mod sensor;
pub mod series;
pub mod view;

pub use alert::{Alert, AlertStatus, Severity};
pub use metric::{Metric, Trend};
pub use risk::{RiskThresholds, RiskTier};
pub use sensor::{Coordinates, Sensor, SensorStatus};

/// Error returned when parsing one of the lowercase enum labels fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}'")]
pub struct ParseLabelError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseLabelError {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}
