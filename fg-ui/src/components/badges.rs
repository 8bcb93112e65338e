//! Status and severity pills.

use dioxus::prelude::*;
use fg_core::{SensorStatus, Severity};

fn pill_style(color: &str) -> String {
    format!(
        "display: inline-block; padding: 2px 10px; border-radius: 999px; font-size: 12px; font-weight: 600; color: {color}; background: {color}22; border: 1px solid {color}66;"
    )
}

#[component]
pub fn StatusBadge(status: SensorStatus) -> Element {
    let style = pill_style(status.color());
    let label = status.label();
    rsx! {
        span { style: "{style}", "{label}" }
    }
}

#[component]
pub fn SeverityBadge(severity: Severity) -> Element {
    let style = pill_style(severity.color());
    let (icon, label) = (severity.icon(), severity.label());
    rsx! {
        span { style: "{style}", "{icon} {label}" }
    }
}
