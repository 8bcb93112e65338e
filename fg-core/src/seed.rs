//! Seed lists every page starts from.
//!
//! The fixtures are embedded at compile time and parsed on demand, so each
//! page that mounts gets its own freshly built copy and nothing is shared
//! between pages.
//!
//! # CSV Formats
//!
//! - **Sensors** (has headers): `id,name,location,latitude,longitude,status,water_level,capacity,risk_percentage`
//! - **Alerts** (has headers): `id,sensor_id,sensor_name,location,latitude,longitude,severity,message,risk_percentage,minutes_ago,status`
//! - **Metrics / KPIs** (has headers): `name,value,unit,trend,change`

use crate::alert::{Alert, AlertStatus, Severity};
use crate::metric::{Metric, Trend};
use crate::sensor::{Coordinates, Sensor, SensorStatus};
use anyhow::bail;
use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;
use std::collections::HashSet;

/// Embedded seed sensors (S001-S006).
pub static SENSORS_CSV: &str = include_str!("../../fixtures/sensors.csv");

/// Embedded seed alerts (A001-A004). Timestamps are minutes before load.
pub static ALERTS_CSV: &str = include_str!("../../fixtures/alerts.csv");

/// Embedded dashboard headline metrics.
pub static METRICS_CSV: &str = include_str!("../../fixtures/metrics.csv");

/// Embedded analytics KPI cards. `change` is a percentage trend.
pub static KPIS_CSV: &str = include_str!("../../fixtures/kpis.csv");

#[derive(Debug, Deserialize)]
struct SensorRow {
    id: String,
    name: String,
    location: String,
    latitude: f64,
    longitude: f64,
    status: SensorStatus,
    water_level: f64,
    capacity: f64,
    risk_percentage: f64,
}

#[derive(Debug, Deserialize)]
struct AlertRow {
    id: String,
    sensor_id: String,
    sensor_name: String,
    location: String,
    latitude: f64,
    longitude: f64,
    severity: Severity,
    message: String,
    risk_percentage: f64,
    minutes_ago: i64,
    status: AlertStatus,
}

#[derive(Debug, Deserialize)]
struct MetricRow {
    name: String,
    value: f64,
    unit: String,
    trend: Trend,
    change: f64,
}

fn ensure_unique<'a>(kind: &str, ids: impl Iterator<Item = &'a str>) -> anyhow::Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            bail!("duplicate {} id '{}' in seed data", kind, id);
        }
    }
    Ok(())
}

/// Parse sensors from CSV, stamping every record as updated at `now`.
pub fn load_sensors(csv_data: &str, now: DateTime<Utc>) -> anyhow::Result<Vec<Sensor>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(csv_data.as_bytes());

    let mut sensors = Vec::new();
    for result in rdr.deserialize::<SensorRow>() {
        let r = result?;
        sensors.push(Sensor {
            id: r.id,
            name: r.name,
            location: r.location,
            coordinates: Coordinates {
                lat: r.latitude,
                lng: r.longitude,
            },
            status: r.status,
            water_level: r.water_level,
            capacity: r.capacity,
            last_updated: now,
            risk_percentage: r.risk_percentage,
        });
    }
    ensure_unique("sensor", sensors.iter().map(|s| s.id.as_str()))?;
    log::debug!("[FlowGuard] seed: loaded {} sensors", sensors.len());
    Ok(sensors)
}

/// Parse alerts from CSV, resolving `minutes_ago` against `now`.
pub fn load_alerts(csv_data: &str, now: DateTime<Utc>) -> anyhow::Result<Vec<Alert>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(csv_data.as_bytes());

    let mut alerts = Vec::new();
    for result in rdr.deserialize::<AlertRow>() {
        let r = result?;
        alerts.push(Alert {
            id: r.id,
            sensor_id: r.sensor_id,
            sensor_name: r.sensor_name,
            location: r.location,
            coordinates: Coordinates {
                lat: r.latitude,
                lng: r.longitude,
            },
            severity: r.severity,
            message: r.message,
            risk_percentage: r.risk_percentage,
            timestamp: now - Duration::minutes(r.minutes_ago),
            status: r.status,
        });
    }
    ensure_unique("alert", alerts.iter().map(|a| a.id.as_str()))?;
    log::debug!("[FlowGuard] seed: loaded {} alerts", alerts.len());
    Ok(alerts)
}

/// Parse metric cards from CSV.
pub fn load_metrics(csv_data: &str) -> anyhow::Result<Vec<Metric>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(csv_data.as_bytes());

    let mut metrics = Vec::new();
    for result in rdr.deserialize::<MetricRow>() {
        let r = result?;
        metrics.push(Metric {
            name: r.name,
            value: r.value,
            unit: r.unit,
            trend: r.trend,
            change: r.change,
        });
    }
    Ok(metrics)
}

pub fn seed_sensors(now: DateTime<Utc>) -> anyhow::Result<Vec<Sensor>> {
    load_sensors(SENSORS_CSV, now)
}

pub fn seed_alerts(now: DateTime<Utc>) -> anyhow::Result<Vec<Alert>> {
    load_alerts(ALERTS_CSV, now)
}

pub fn seed_metrics() -> anyhow::Result<Vec<Metric>> {
    load_metrics(METRICS_CSV)
}

pub fn seed_kpis() -> anyhow::Result<Vec<Metric>> {
    load_metrics(KPIS_CSV)
}
