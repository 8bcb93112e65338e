//! Timer periods and simulated latencies.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Refresh periods and simulated latencies, in milliseconds.
///
/// Missing fields fall back to the defaults, so a JSON override only needs
/// the values it changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RefreshConfig {
    pub dashboard_ms: u64,
    pub event_map_ms: u64,
    pub alerts_ms: u64,
    pub login_latency_ms: u64,
    pub contact_latency_ms: u64,
    pub signup_latency_ms: u64,
    pub contact_reset_ms: u64,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            dashboard_ms: 10_000,
            event_map_ms: 10_000,
            alerts_ms: 15_000,
            login_latency_ms: 1_000,
            contact_latency_ms: 1_500,
            signup_latency_ms: 1_500,
            contact_reset_ms: 5_000,
        }
    }
}

impl RefreshConfig {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        if [config.dashboard_ms, config.event_map_ms, config.alerts_ms].contains(&0) {
            anyhow::bail!("refresh periods must be greater than zero");
        }
        Ok(config)
    }

    pub fn dashboard(&self) -> Duration {
        Duration::from_millis(self.dashboard_ms)
    }

    pub fn event_map(&self) -> Duration {
        Duration::from_millis(self.event_map_ms)
    }

    pub fn alerts(&self) -> Duration {
        Duration::from_millis(self.alerts_ms)
    }

    pub fn login_latency(&self) -> Duration {
        Duration::from_millis(self.login_latency_ms)
    }

    pub fn contact_latency(&self) -> Duration {
        Duration::from_millis(self.contact_latency_ms)
    }

    pub fn signup_latency(&self) -> Duration {
        Duration::from_millis(self.signup_latency_ms)
    }

    pub fn contact_reset(&self) -> Duration {
        Duration::from_millis(self.contact_reset_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = RefreshConfig::from_json(r#"{ "alerts_ms": 500 }"#).unwrap();
        assert_eq!(config.alerts(), Duration::from_millis(500));
        assert_eq!(config.dashboard(), Duration::from_secs(10));
        assert_eq!(config.contact_reset(), Duration::from_secs(5));
    }

    #[test]
    fn zero_period_is_rejected() {
        assert!(RefreshConfig::from_json(r#"{ "dashboard_ms": 0 }"#).is_err());
        assert!(RefreshConfig::from_json("not json").is_err());
    }
}
