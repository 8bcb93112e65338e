//! Synthetic chart series.
//!
//! Series are regenerated wholesale (on mount, or when the analytics time
//! range changes) and never mutated incrementally.

use crate::risk::{RiskThresholds, RiskTier};
use crate::sensor::SENSOR_CAPACITY;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Days of history generated for the analytics page.
pub const HISTORY_DAYS: u32 = 30;

/// Days of forecast generated for the analytics page.
pub const PREDICTION_DAYS: u32 = 7;

/// Hourly points in the dashboard water-level chart.
pub const WATER_LEVEL_HOURS: u32 = 24;

/// Half-hour steps in the dashboard prediction chart.
pub const FORECAST_STEPS: u32 = 12;

/// Forecast steps that already have an observed level.
pub const FORECAST_OBSERVED_STEPS: u32 = 6;

/// Static share of events per risk tier shown in the severity pie chart.
pub const RISK_DISTRIBUTION: [(RiskTier, f64); 3] = [
    (RiskTier::Low, 65.0),
    (RiskTier::Medium, 25.0),
    (RiskTier::High, 10.0),
];

/// One day of historical readings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoricalPoint {
    pub date: NaiveDate,
    pub water_level: f64,
    pub flow_rate: f64,
    pub rainfall: f64,
    pub temperature: f64,
}

/// One day of forecast.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionPoint {
    pub date: NaiveDate,
    pub predicted: f64,
    pub confidence: f64,
    pub risk_level: RiskTier,
}

/// One hourly sample of the dashboard water-level chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WaterLevelPoint {
    pub timestamp: DateTime<Utc>,
    pub level: f64,
    pub capacity: f64,
}

/// One half-hour step of the dashboard prediction chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastPoint {
    pub timestamp: DateTime<Utc>,
    pub predicted_level: f64,
    pub actual_level: Option<f64>,
    pub confidence: f64,
}

/// Daily history ending today, oldest first.
pub fn historical_series<R: Rng + ?Sized>(
    now: DateTime<Utc>,
    days: u32,
    rng: &mut R,
) -> Vec<HistoricalPoint> {
    let today = now.date_naive();
    (0..days)
        .rev()
        .map(|i| {
            let x = i as f64;
            HistoricalPoint {
                date: today - Duration::days(i as i64),
                water_level: 40.0 + (x * 0.2).sin() * 20.0 + rng.gen::<f64>() * 10.0,
                flow_rate: 60.0 + (x * 0.15).cos() * 15.0 + rng.gen::<f64>() * 8.0,
                rainfall: ((x * 0.3).sin() * 30.0 + rng.gen::<f64>() * 20.0).max(0.0),
                temperature: 20.0 + (x * 0.1).sin() * 10.0 + rng.gen::<f64>() * 5.0,
            }
        })
        .collect()
}

/// Daily forecast starting tomorrow, tiered with the forecast thresholds.
pub fn prediction_series<R: Rng + ?Sized>(
    now: DateTime<Utc>,
    days: u32,
    rng: &mut R,
) -> Vec<PredictionPoint> {
    let today = now.date_naive();
    (1..=days)
        .map(|i| {
            let predicted = 45.0 + (i as f64 * 0.3).sin() * 15.0 + rng.gen::<f64>() * 8.0;
            PredictionPoint {
                date: today + Duration::days(i as i64),
                predicted,
                confidence: 85.0 + rng.gen::<f64>() * 10.0,
                risk_level: RiskThresholds::FORECAST.tier(predicted),
            }
        })
        .collect()
}

/// Last 24 hours of water level, hourly, oldest first.
pub fn water_level_series<R: Rng + ?Sized>(now: DateTime<Utc>, rng: &mut R) -> Vec<WaterLevelPoint> {
    (0..WATER_LEVEL_HOURS)
        .map(|i| WaterLevelPoint {
            timestamp: now - Duration::hours((WATER_LEVEL_HOURS - 1 - i) as i64),
            level: rng.gen_range(20..80) as f64,
            capacity: SENSOR_CAPACITY,
        })
        .collect()
}

/// Next six hours in half-hour steps; only the first steps carry an
/// observed level.
pub fn forecast_series<R: Rng + ?Sized>(now: DateTime<Utc>, rng: &mut R) -> Vec<ForecastPoint> {
    (0..FORECAST_STEPS)
        .map(|i| {
            let predicted_level = rng.gen_range(30..100) as f64;
            let actual_level = if i < FORECAST_OBSERVED_STEPS {
                Some(rng.gen_range(30..100) as f64)
            } else {
                None
            };
            ForecastPoint {
                timestamp: now + Duration::minutes(30 * i as i64),
                predicted_level,
                actual_level,
                confidence: rng.gen_range(80..100) as f64,
            }
        })
        .collect()
}

/// Analytics time-range selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TimeRange {
    #[default]
    #[serde(rename = "7d")]
    SevenDays,
    #[serde(rename = "30d")]
    ThirtyDays,
    #[serde(rename = "90d")]
    NinetyDays,
}

impl TimeRange {
    pub const ALL: [TimeRange; 3] = [
        TimeRange::SevenDays,
        TimeRange::ThirtyDays,
        TimeRange::NinetyDays,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeRange::SevenDays => "7d",
            TimeRange::ThirtyDays => "30d",
            TimeRange::NinetyDays => "90d",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeRange::SevenDays => "7 Days",
            TimeRange::ThirtyDays => "30 Days",
            TimeRange::NinetyDays => "90 Days",
        }
    }

    /// Trailing window of `history` shown for this range.
    ///
    /// 90 days shows everything that was generated.
    pub fn window<'a>(&self, history: &'a [HistoricalPoint]) -> &'a [HistoricalPoint] {
        let keep = match self {
            TimeRange::SevenDays => 7,
            TimeRange::ThirtyDays => 30,
            TimeRange::NinetyDays => history.len(),
        };
        &history[history.len().saturating_sub(keep)..]
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeRange {
    type Err = crate::ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "7d" => Ok(TimeRange::SevenDays),
            "30d" => Ok(TimeRange::ThirtyDays),
            "90d" => Ok(TimeRange::NinetyDays),
            other => Err(crate::ParseLabelError::new("time range", other)),
        }
    }
}

/// Which historical measurement the analytics trend chart plots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartMetric {
    #[default]
    WaterLevel,
    FlowRate,
    Rainfall,
    Temperature,
}

impl ChartMetric {
    pub const ALL: [ChartMetric; 4] = [
        ChartMetric::WaterLevel,
        ChartMetric::FlowRate,
        ChartMetric::Rainfall,
        ChartMetric::Temperature,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ChartMetric::WaterLevel => "waterLevel",
            ChartMetric::FlowRate => "flowRate",
            ChartMetric::Rainfall => "rainfall",
            ChartMetric::Temperature => "temperature",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ChartMetric::WaterLevel => "Water Level (%)",
            ChartMetric::FlowRate => "Flow Rate (L/s)",
            ChartMetric::Rainfall => "Rainfall (mm)",
            ChartMetric::Temperature => "Temperature (°C)",
        }
    }

    pub fn value(&self, point: &HistoricalPoint) -> f64 {
        match self {
            ChartMetric::WaterLevel => point.water_level,
            ChartMetric::FlowRate => point.flow_rate,
            ChartMetric::Rainfall => point.rainfall,
            ChartMetric::Temperature => point.temperature,
        }
    }

    /// Project the selected measurement out of a history window.
    pub fn project(&self, history: &[HistoricalPoint]) -> Vec<(NaiveDate, f64)> {
        history.iter().map(|p| (p.date, self.value(p))).collect()
    }
}

impl FromStr for ChartMetric {
    type Err = crate::ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChartMetric::ALL
            .into_iter()
            .find(|m| m.key() == s)
            .ok_or_else(|| crate::ParseLabelError::new("chart metric", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 9, 30, 0).unwrap()
    }

    #[test]
    fn historical_series_ends_today() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let history = historical_series(now(), HISTORY_DAYS, &mut rng);
        assert_eq!(history.len(), 30);
        assert_eq!(history.last().unwrap().date, now().date_naive());
        assert_eq!(
            history.first().unwrap().date,
            now().date_naive() - Duration::days(29)
        );
        assert!(history.iter().all(|p| p.rainfall >= 0.0));
        assert!(history.windows(2).all(|w| w[0].date < w[1].date));
    }

    #[test]
    fn prediction_series_tiers_with_forecast_thresholds() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let predictions = prediction_series(now(), PREDICTION_DAYS, &mut rng);
        assert_eq!(predictions.len(), 7);
        assert_eq!(predictions[0].date, now().date_naive() + Duration::days(1));
        for p in &predictions {
            assert_eq!(p.risk_level, RiskThresholds::FORECAST.tier(p.predicted));
            assert!((85.0..95.0).contains(&p.confidence));
        }
    }

    #[test]
    fn water_level_series_is_hourly_and_bounded() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let series = water_level_series(now(), &mut rng);
        assert_eq!(series.len(), 24);
        assert_eq!(series.last().unwrap().timestamp, now());
        assert!(series.iter().all(|p| (20.0..80.0).contains(&p.level)));
    }

    #[test]
    fn forecast_has_observations_only_for_first_steps() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let series = forecast_series(now(), &mut rng);
        assert_eq!(series.len(), 12);
        assert!(series[..6].iter().all(|p| p.actual_level.is_some()));
        assert!(series[6..].iter().all(|p| p.actual_level.is_none()));
        assert!(series.iter().all(|p| (80.0..100.0).contains(&p.confidence)));
    }

    #[test]
    fn time_range_windows() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let history = historical_series(now(), HISTORY_DAYS, &mut rng);
        assert_eq!(TimeRange::SevenDays.window(&history).len(), 7);
        assert_eq!(TimeRange::ThirtyDays.window(&history).len(), 30);
        assert_eq!(TimeRange::NinetyDays.window(&history).len(), 30);
        assert_eq!(
            TimeRange::SevenDays.window(&history).last(),
            history.last()
        );
        assert!(TimeRange::SevenDays.window(&history[..3]).len() == 3);
    }

    #[test]
    fn chart_metric_projection() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let history = historical_series(now(), 3, &mut rng);
        let projected = ChartMetric::FlowRate.project(&history);
        assert_eq!(projected.len(), 3);
        assert_eq!(projected[1].1, history[1].flow_rate);
        assert_eq!("rainfall".parse::<ChartMetric>(), Ok(ChartMetric::Rainfall));
        assert!("humidity".parse::<ChartMetric>().is_err());
    }

    #[test]
    fn risk_distribution_sums_to_one_hundred() {
        let total: f64 = RISK_DISTRIBUTION.iter().map(|(_, v)| v).sum();
        assert_eq!(total, 100.0);
    }
}
