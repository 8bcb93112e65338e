//! Headline metric card.

use dioxus::prelude::*;
use fg_core::{Metric, Trend};

#[derive(Props, Clone, PartialEq)]
pub struct MetricCardProps {
    pub metric: Metric,
    /// One-line description under the value
    #[props(default = String::new())]
    pub description: String,
}

#[component]
pub fn MetricCard(props: MetricCardProps) -> Element {
    let metric = &props.metric;
    let change_color = match metric.trend {
        Trend::Up => "#34d399",
        Trend::Down => "#f87171",
        Trend::Stable => "#9ca3af",
    };
    let value = metric.display_value();
    let change = format!("{} {}", metric.trend.icon(), metric.display_change());

    rsx! {
        div {
            style: "flex: 1 1 200px; padding: 16px; border-radius: 12px; background: #1f2937; border: 1px solid #374151;",
            p {
                style: "margin: 0; font-size: 13px; color: #9ca3af;",
                "{metric.name}"
            }
            p {
                style: "margin: 6px 0; font-size: 28px; font-weight: 700; color: #f9fafb;",
                "{value}"
            }
            p {
                style: "margin: 0; font-size: 12px; color: {change_color};",
                "{change}"
            }
            if !props.description.is_empty() {
                p {
                    style: "margin: 6px 0 0 0; font-size: 12px; color: #6b7280;",
                    "{props.description}"
                }
            }
        }
    }
}
