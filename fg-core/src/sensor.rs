use crate::risk::{RiskThresholds, RiskTier};
use crate::ParseLabelError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Every sensor reports against a fixed capacity of 100 (percent full).
pub const SENSOR_CAPACITY: f64 = 100.0;

/// Operational status of a monitoring point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SensorStatus {
    Safe,
    Warning,
    Critical,
}

impl SensorStatus {
    pub const ALL: [SensorStatus; 3] = [
        SensorStatus::Safe,
        SensorStatus::Warning,
        SensorStatus::Critical,
    ];

    /// Derive status from a water level: above 80 is critical, above 60 is
    /// warning, anything else is safe.
    ///
    /// This is the single status derivation used by every refresh loop.
    pub fn from_level(level: f64) -> Self {
        match RiskThresholds::SENSOR.tier(level) {
            RiskTier::High => SensorStatus::Critical,
            RiskTier::Medium => SensorStatus::Warning,
            RiskTier::Low => SensorStatus::Safe,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SensorStatus::Safe => "safe",
            SensorStatus::Warning => "warning",
            SensorStatus::Critical => "critical",
        }
    }

    /// Label shown in the map legend and filter panel ("safe" reads as "Normal").
    pub fn label(&self) -> &'static str {
        match self {
            SensorStatus::Safe => "Normal",
            SensorStatus::Warning => "Warning",
            SensorStatus::Critical => "Critical",
        }
    }

    /// Marker and badge color.
    pub fn color(&self) -> &'static str {
        match self {
            SensorStatus::Safe => "#10b981",
            SensorStatus::Warning => "#f59e0b",
            SensorStatus::Critical => "#ef4444",
        }
    }
}

impl fmt::Display for SensorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SensorStatus {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "safe" => Ok(SensorStatus::Safe),
            "warning" => Ok(SensorStatus::Warning),
            "critical" => Ok(SensorStatus::Critical),
            other => Err(ParseLabelError::new("sensor status", other)),
        }
    }
}

/// Latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// A synthetic monitoring point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sensor {
    pub id: String,
    pub name: String,
    pub location: String,
    pub coordinates: Coordinates,
    pub status: SensorStatus,
    /// Percent of capacity, in [0, 100].
    pub water_level: f64,
    pub capacity: f64,
    pub last_updated: DateTime<Utc>,
    /// Overflow risk, in [0, 100].
    pub risk_percentage: f64,
}

impl Sensor {
    /// Risk tier of this sensor's overflow risk.
    pub fn risk_tier(&self) -> RiskTier {
        RiskThresholds::SENSOR.tier(self.risk_percentage)
    }
}
