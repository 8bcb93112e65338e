//! Risk tiering by percentage thresholds.
//!
//! Sensors and forecasts are tiered with different cutoffs: sensor risk and
//! status use 80/60, the seven-day forecast uses 70/50.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Three-level risk classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    pub const ALL: [RiskTier; 3] = [RiskTier::Low, RiskTier::Medium, RiskTier::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTier::Low => "low",
            RiskTier::Medium => "medium",
            RiskTier::High => "high",
        }
    }

    /// Capitalized label, e.g. "Medium".
    pub fn label(&self) -> &'static str {
        match self {
            RiskTier::Low => "Low",
            RiskTier::Medium => "Medium",
            RiskTier::High => "High",
        }
    }

    /// Recommended operator action shown next to a forecast.
    pub fn recommendation(&self) -> &'static str {
        match self {
            RiskTier::High => "Pre-position resources",
            RiskTier::Medium => "Monitor closely",
            RiskTier::Low => "Normal operations",
        }
    }

    /// Hex color used by badges and chart series.
    pub fn color(&self) -> &'static str {
        match self {
            RiskTier::Low => "#10b981",
            RiskTier::Medium => "#f59e0b",
            RiskTier::High => "#ef4444",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strict lower bounds for the high and medium tiers.
///
/// A value equal to a bound falls into the tier below it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskThresholds {
    pub high_above: f64,
    pub medium_above: f64,
}

impl RiskThresholds {
    /// Sensor water level and risk percentage.
    pub const SENSOR: RiskThresholds = RiskThresholds {
        high_above: 80.0,
        medium_above: 60.0,
    };

    /// Analytics seven-day forecast.
    pub const FORECAST: RiskThresholds = RiskThresholds {
        high_above: 70.0,
        medium_above: 50.0,
    };

    pub fn tier(&self, value: f64) -> RiskTier {
        if value > self.high_above {
            RiskTier::High
        } else if value > self.medium_above {
            RiskTier::Medium
        } else {
            RiskTier::Low
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sensor_thresholds_are_strict() {
        let t = RiskThresholds::SENSOR;
        assert_eq!(t.tier(80.0), RiskTier::Medium);
        assert_eq!(t.tier(80.1), RiskTier::High);
        assert_eq!(t.tier(60.0), RiskTier::Low);
        assert_eq!(t.tier(60.5), RiskTier::Medium);
        assert_eq!(t.tier(0.0), RiskTier::Low);
    }

    #[test]
    fn forecast_thresholds_differ_from_sensor() {
        assert_eq!(RiskThresholds::FORECAST.tier(75.0), RiskTier::High);
        assert_eq!(RiskThresholds::SENSOR.tier(75.0), RiskTier::Medium);
        assert_eq!(RiskThresholds::FORECAST.tier(55.0), RiskTier::Medium);
        assert_eq!(RiskThresholds::SENSOR.tier(55.0), RiskTier::Low);
    }

    #[test]
    fn recommendation_follows_tier() {
        assert_eq!(RiskTier::High.recommendation(), "Pre-position resources");
        assert_eq!(RiskTier::Medium.recommendation(), "Monitor closely");
    }
}
