//! Random perturbation of sensor and alert snapshots.
//!
//! Every function takes the RNG explicitly so refresh loops can own their
//! randomness and tests can seed it.

use crate::alert::Alert;
use crate::sensor::{Sensor, SensorStatus};
use chrono::{DateTime, Utc};
use rand::Rng;

/// Clamp a percentage into [0, 100].
pub fn clamp_percent(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}

/// Widths of the uniform deltas applied to a sensor on each refresh.
///
/// A span of 10 draws the delta from [-5, +5].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Perturbation {
    pub level_span: f64,
    pub risk_span: f64,
}

impl Perturbation {
    pub const DEFAULT: Perturbation = Perturbation {
        level_span: 10.0,
        risk_span: 15.0,
    };

    fn delta<R: Rng + ?Sized>(rng: &mut R, span: f64) -> f64 {
        (rng.gen::<f64>() - 0.5) * span
    }
}

impl Default for Perturbation {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Produce the next sensor snapshot.
///
/// Each sensor's water level and risk get an independent uniform delta,
/// clamped to [0, 100], and `last_updated` is set to `now`. Status is
/// re-derived from the new water level. Cardinality and order are preserved.
pub fn refresh_sensors<R: Rng + ?Sized>(
    sensors: &[Sensor],
    rng: &mut R,
    now: DateTime<Utc>,
    perturbation: &Perturbation,
) -> Vec<Sensor> {
    sensors
        .iter()
        .map(|sensor| {
            let water_level = clamp_percent(
                sensor.water_level + Perturbation::delta(rng, perturbation.level_span),
            );
            let risk_percentage = clamp_percent(
                sensor.risk_percentage + Perturbation::delta(rng, perturbation.risk_span),
            );
            Sensor {
                water_level,
                risk_percentage,
                status: SensorStatus::from_level(water_level),
                last_updated: now,
                ..sensor.clone()
            }
        })
        .collect()
}

/// Probabilities driving the alert update pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlertChurn {
    /// Chance that a tick runs an update pass at all.
    pub update_chance: f64,
    /// Per active alert: chance its timestamp is bumped to now.
    pub touch_chance: f64,
    /// Per active alert: chance it is resolved.
    pub resolve_chance: f64,
}

impl AlertChurn {
    pub const DEFAULT: AlertChurn = AlertChurn {
        update_chance: 0.2,
        touch_chance: 0.1,
        resolve_chance: 0.05,
    };
}

impl Default for AlertChurn {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Produce the next alert snapshot, or `None` when this tick skips the
/// update pass.
///
/// Only active alerts are touched. Resolved alerts are never reopened, so
/// the number of active alerts never increases.
pub fn churn_alerts<R: Rng + ?Sized>(
    alerts: &[Alert],
    rng: &mut R,
    now: DateTime<Utc>,
    churn: &AlertChurn,
) -> Option<Vec<Alert>> {
    if !rng.gen_bool(churn.update_chance) {
        return None;
    }

    let next = alerts
        .iter()
        .map(|alert| {
            let mut alert = alert.clone();
            if alert.is_active() {
                if rng.gen_bool(churn.touch_chance) {
                    alert.timestamp = now;
                }
                if rng.gen_bool(churn.resolve_chance) {
                    alert.resolve();
                }
            }
            alert
        })
        .collect();
    Some(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alert::AlertStatus;
    use crate::seed::{seed_alerts, seed_sensors};
    use chrono::{Duration, TimeZone};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn refresh_keeps_order_and_cardinality() {
        let sensors = seed_sensors(now()).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let later = now() + Duration::seconds(10);
        let next = refresh_sensors(&sensors, &mut rng, later, &Perturbation::DEFAULT);
        assert_eq!(next.len(), sensors.len());
        for (before, after) in sensors.iter().zip(&next) {
            assert_eq!(before.id, after.id);
            assert_eq!(after.last_updated, later);
            assert!((after.water_level - before.water_level).abs() <= 5.0);
            assert!((after.risk_percentage - before.risk_percentage).abs() <= 7.5);
        }
    }

    #[test]
    fn values_stay_clamped_over_many_ticks() {
        let mut sensors = seed_sensors(now()).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let wide = Perturbation {
            level_span: 80.0,
            risk_span: 80.0,
        };
        for _ in 0..2_000 {
            sensors = refresh_sensors(&sensors, &mut rng, now(), &wide);
            for s in &sensors {
                assert!((0.0..=100.0).contains(&s.water_level));
                assert!((0.0..=100.0).contains(&s.risk_percentage));
            }
        }
    }

    #[test]
    fn status_tracks_new_water_level() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut sensors = seed_sensors(now()).unwrap();
        for _ in 0..200 {
            sensors = refresh_sensors(&sensors, &mut rng, now(), &Perturbation::DEFAULT);
            for s in &sensors {
                assert_eq!(s.status, SensorStatus::from_level(s.water_level));
            }
        }
    }

    #[test]
    fn clamp_percent_bounds() {
        assert_eq!(clamp_percent(-3.0), 0.0);
        assert_eq!(clamp_percent(104.0), 100.0);
        assert_eq!(clamp_percent(55.5), 55.5);
    }

    #[test]
    fn churn_never_reopens_alerts() {
        let mut alerts = seed_alerts(now()).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut active = alerts.iter().filter(|a| a.is_active()).count();
        for _ in 0..5_000 {
            let before = alerts.clone();
            if let Some(next) = churn_alerts(&alerts, &mut rng, now(), &AlertChurn::DEFAULT) {
                alerts = next;
            }
            for (b, a) in before.iter().zip(&alerts) {
                if b.status == AlertStatus::Resolved {
                    assert_eq!(a.status, AlertStatus::Resolved);
                    assert_eq!(a.timestamp, b.timestamp);
                }
            }
            let now_active = alerts.iter().filter(|a| a.is_active()).count();
            assert!(now_active <= active);
            active = now_active;
        }
        assert_eq!(active, 0, "every alert resolves over a long session");
    }

    #[test]
    fn churn_skips_when_update_chance_is_zero() {
        let alerts = seed_alerts(now()).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let churn = AlertChurn {
            update_chance: 0.0,
            ..AlertChurn::DEFAULT
        };
        assert!(churn_alerts(&alerts, &mut rng, now(), &churn).is_none());
    }

    #[test]
    fn churn_with_certain_odds_resolves_and_touches_active_alerts() {
        let alerts = seed_alerts(now()).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let churn = AlertChurn {
            update_chance: 1.0,
            touch_chance: 1.0,
            resolve_chance: 1.0,
        };
        let later = now() + Duration::minutes(1);
        let next = churn_alerts(&alerts, &mut rng, later, &churn).unwrap();
        assert!(next.iter().all(|a| a.status == AlertStatus::Resolved));
        // A004 was already resolved and keeps its old timestamp.
        assert_eq!(next[3].timestamp, alerts[3].timestamp);
        assert_eq!(next[0].timestamp, later);
    }
}
