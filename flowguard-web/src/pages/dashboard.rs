use super::{use_page, Panel};
use chrono::Utc;
use dioxus::prelude::*;
use fg_core::view::percent_label;
use fg_core::SensorStatus;
use fg_pages::DashboardPage;
use fg_ui::components::{
    ChartHeader, ChartSeries, ErrorDisplay, LineChart, MetricCard, SeverityBadge, StatusBadge,
};
use fg_ui::state::page_rng;
use fg_utils::dates::{format_clock, time_ago};

#[component]
pub fn DashboardView() -> Element {
    let (page, _) = use_page(|ctx| DashboardPage::mount(ctx, page_rng()));
    let page = match page {
        Ok(page) => page,
        Err(message) => return rsx! { ErrorDisplay { message } },
    };
    let page = page.borrow();

    let snapshot = page.snapshot().clone();
    let updated = format_clock(&snapshot.updated_at);
    let counts = page.status_counts();
    let ranked = page.sensors_by_risk();
    let recent = page.recent_alerts();
    let metrics = page.metrics().to_vec();
    let now = Utc::now();

    let level_labels: Vec<String> = page.water_levels().iter().map(|p| format_clock(&p.timestamp)).collect();
    let level_series = vec![
        ChartSeries::solid("Water level", "#22d3ee", page.water_levels().iter().map(|p| p.level)),
        ChartSeries::solid("Capacity", "#6b7280", page.water_levels().iter().map(|p| p.capacity)).dashed(),
    ];

    let forecast_labels: Vec<String> = page.forecast().iter().map(|p| format_clock(&p.timestamp)).collect();
    let forecast_series = vec![
        ChartSeries::solid("Predicted", "#a78bfa", page.forecast().iter().map(|p| p.predicted_level)),
        ChartSeries {
            name: "Actual".to_string(),
            color: "#34d399".to_string(),
            values: page.forecast().iter().map(|p| p.actual_level).collect(),
            dashed: false,
        },
    ];

    rsx! {
        div {
            style: "display: flex; justify-content: space-between; align-items: baseline;",
            h1 { style: "margin: 8px 0;", "Dashboard" }
            span { style: "font-size: 12px; color: #9ca3af;", "Last updated {updated}" }
        }

        div {
            style: "display: flex; flex-wrap: wrap; gap: 12px;",
            for metric in metrics {
                MetricCard { key: "{metric.name}", metric: metric.clone() }
            }
        }

        div {
            style: "display: flex; gap: 12px; margin-top: 12px;",
            for status in SensorStatus::ALL {
                {
                    let count = counts.get(status);
                    rsx! {
                        div {
                            key: "{status}",
                            style: "flex: 1; padding: 12px; border-radius: 12px; background: #1f2937; text-align: center;",
                            StatusBadge { status }
                            p { style: "margin: 8px 0 0 0; font-size: 24px; font-weight: 700;", "{count}" }
                        }
                    }
                }
            }
        }

        Panel { title: "Water Level (24h)".to_string(),
            ChartHeader { title: "Average water level".to_string(), subtitle: "Percent of capacity".to_string() }
            LineChart { labels: level_labels, series: level_series, y_range: Some((0.0, 100.0)) }
        }

        Panel { title: "Overflow Prediction".to_string(),
            ChartHeader { title: "Next 6 hours".to_string(), subtitle: "Observed until now, predicted after".to_string() }
            LineChart { labels: forecast_labels, series: forecast_series, y_range: Some((0.0, 100.0)) }
        }

        Panel { title: "Sensors by Risk".to_string(),
            table {
                style: "width: 100%; border-collapse: collapse; font-size: 13px;",
                thead {
                    tr {
                        th { style: "text-align: left;", "Sensor" }
                        th { style: "text-align: left;", "Location" }
                        th { style: "text-align: left;", "Status" }
                        th { style: "text-align: right;", "Level" }
                        th { style: "text-align: right;", "Risk" }
                    }
                }
                tbody {
                    for sensor in ranked {
                        {
                            let level = percent_label(sensor.water_level);
                            let risk = percent_label(sensor.risk_percentage);
                            rsx! {
                                tr {
                                    key: "{sensor.id}",
                                    td { "{sensor.name}" }
                                    td { style: "color: #9ca3af;", "{sensor.location}" }
                                    td { StatusBadge { status: sensor.status } }
                                    td { style: "text-align: right;", "{level}" }
                                    td { style: "text-align: right;", "{risk}" }
                                }
                            }
                        }
                    }
                }
            }
        }

        Panel { title: "Recent Alerts".to_string(),
            for alert in recent {
                {
                    let age = time_ago(&alert.timestamp, &now);
                    rsx! {
                        div {
                            key: "{alert.id}",
                            style: "display: flex; gap: 12px; align-items: center; padding: 8px 0; border-bottom: 1px solid #1f2937;",
                            SeverityBadge { severity: alert.severity }
                            div {
                                style: "flex: 1;",
                                p { style: "margin: 0;", "{alert.sensor_name}: {alert.message}" }
                                p { style: "margin: 0; font-size: 12px; color: #9ca3af;", "{alert.location} · {age}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
