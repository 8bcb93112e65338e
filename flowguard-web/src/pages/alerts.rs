use super::{bump, use_page, Panel};
use dioxus::prelude::*;
use fg_core::view::{percent_label, AlertFilter, Filter};
use fg_core::{AlertStatus, Severity};
use fg_pages::AlertsPage;
use fg_ui::components::{ErrorDisplay, SelectField, SeverityBadge};
use fg_ui::state::page_rng;

fn filter_value<T: std::fmt::Display>(filter: Filter<T>) -> String {
    match filter {
        Filter::All => "all".to_string(),
        Filter::Only(value) => value.to_string(),
    }
}

#[component]
pub fn AlertsView() -> Element {
    let (page, revision) = use_page(|ctx| AlertsPage::mount(ctx, page_rng()));
    let page = match page {
        Ok(page) => page,
        Err(message) => return rsx! { ErrorDisplay { message } },
    };

    let (rows, summary, filter) = {
        let view = page.borrow();
        let rows: Vec<_> = view
            .visible()
            .into_iter()
            .map(|alert| {
                let age = view.age(&alert);
                (alert, age)
            })
            .collect();
        (rows, view.summary(), view.filter())
    };

    let severity_options: Vec<(String, String)> = std::iter::once(("all".to_string(), "All severities".to_string()))
        .chain(Severity::ALL.into_iter().map(|s| (s.to_string(), s.label().to_string())))
        .collect();
    let status_options: Vec<(String, String)> = std::iter::once(("all".to_string(), "All statuses".to_string()))
        .chain(AlertStatus::ALL.into_iter().map(|s| (s.to_string(), s.label().to_string())))
        .collect();

    let on_severity = {
        let page = page.clone();
        move |value: String| {
            let Ok(severity) = value.parse::<Filter<Severity>>() else {
                return;
            };
            let mut view = page.borrow_mut();
            let next = AlertFilter { severity, ..view.filter() };
            view.set_filter(next);
            drop(view);
            bump(revision);
        }
    };
    let on_status = {
        let page = page.clone();
        move |value: String| {
            let Ok(status) = value.parse::<Filter<AlertStatus>>() else {
                return;
            };
            let mut view = page.borrow_mut();
            let next = AlertFilter { status, ..view.filter() };
            view.set_filter(next);
            drop(view);
            bump(revision);
        }
    };

    rsx! {
        h1 { style: "margin: 8px 0;", "Alerts" }

        div {
            style: "display: flex; gap: 12px;",
            for (label, value, color) in [
                ("Active Alerts", summary.active, "#f59e0b"),
                ("Critical", summary.critical, "#ef4444"),
                ("Total", summary.total, "#22d3ee"),
            ] {
                div {
                    key: "{label}",
                    style: "flex: 1; padding: 16px; border-radius: 12px; background: #1f2937;",
                    p { style: "margin: 0; font-size: 13px; color: #9ca3af;", "{label}" }
                    p { style: "margin: 6px 0 0 0; font-size: 28px; font-weight: 700; color: {color};", "{value}" }
                }
            }
        }

        div {
            style: "display: flex; gap: 16px; margin: 12px 0;",
            SelectField {
                label: "Severity".to_string(),
                options: severity_options,
                selected: filter_value(filter.severity),
                onchange: on_severity,
            }
            SelectField {
                label: "Status".to_string(),
                options: status_options,
                selected: filter_value(filter.status),
                onchange: on_status,
            }
        }

        Panel { title: "Alert Log".to_string(),
            if rows.is_empty() {
                p { style: "color: #9ca3af;", "No alerts match the selected filters." }
            }
            for (alert, age) in rows {
                {
                    let risk = percent_label(alert.risk_percentage);
                    let status_color = if alert.is_active() { "#fbbf24" } else { "#6b7280" };
                    let status_label = alert.status.label();
                    rsx! {
                        div {
                            key: "{alert.id}",
                            style: "display: flex; gap: 12px; align-items: center; padding: 10px 0; border-bottom: 1px solid #1f2937;",
                            SeverityBadge { severity: alert.severity }
                            div {
                                style: "flex: 1;",
                                p { style: "margin: 0; font-weight: 600;", "{alert.sensor_name}" }
                                p { style: "margin: 2px 0;", "{alert.message}" }
                                p { style: "margin: 0; font-size: 12px; color: #9ca3af;", "{alert.location} · Risk {risk} · {age}" }
                            }
                            span { style: "font-size: 12px; color: {status_color};", "{status_label}" }
                        }
                    }
                }
            }
        }
    }
}
