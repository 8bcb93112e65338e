use crate::ParseLabelError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Direction a headline metric is moving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

impl Trend {
    pub fn icon(&self) -> &'static str {
        match self {
            Trend::Up => "↗️",
            Trend::Down => "↘️",
            Trend::Stable => "→",
        }
    }
}

impl FromStr for Trend {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(Trend::Up),
            "down" => Ok(Trend::Down),
            "stable" => Ok(Trend::Stable),
            other => Err(ParseLabelError::new("trend", other)),
        }
    }
}

/// A headline number shown on a metric card. Static for the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub name: String,
    pub value: f64,
    pub unit: String,
    pub trend: Trend,
    pub change: f64,
}

impl Metric {
    /// "94.2%" style value.
    pub fn display_value(&self) -> String {
        format!("{}{}", self.value, self.unit)
    }

    /// Signed change with unit, e.g. "+2.1%" or "-5.2%".
    pub fn display_change(&self) -> String {
        let sign = if self.change > 0.0 { "+" } else { "" };
        format!("{}{}{}", sign, self.change, self.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metric(value: f64, change: f64) -> Metric {
        Metric {
            name: "Sensors Online".to_string(),
            value,
            unit: "%".to_string(),
            trend: Trend::Up,
            change,
        }
    }

    #[test]
    fn display_change_signs_positive_values() {
        assert_eq!(metric(98.7, 1.3).display_change(), "+1.3%");
        assert_eq!(metric(23.5, -5.2).display_change(), "-5.2%");
        assert_eq!(metric(98.7, 1.3).display_value(), "98.7%");
    }
}
