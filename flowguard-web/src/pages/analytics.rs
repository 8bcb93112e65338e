use super::{bump, use_page, Panel};
use dioxus::prelude::*;
use fg_core::series::{ChartMetric, TimeRange};
use fg_core::view::percent_label;
use fg_pages::AnalyticsPage;
use fg_ui::components::{Bar, BarChart, ChartHeader, ChartSeries, ErrorDisplay, LineChart, MetricCard, SelectField};
use fg_ui::state::page_rng;
use fg_utils::dates::format_date;

#[component]
pub fn AnalyticsView() -> Element {
    let (page, revision) = use_page(|ctx| AnalyticsPage::mount(ctx, page_rng()));
    let page = match page {
        Ok(page) => page,
        Err(message) => return rsx! { ErrorDisplay { message } },
    };

    let view = page.borrow();
    let range = view.range();
    let metric = view.metric();
    let trend = view.trend();
    let labels: Vec<String> = trend.iter().map(|(date, _)| format_date(date)).collect();
    let series = vec![ChartSeries::solid(metric.label(), "#22d3ee", trend.iter().map(|(_, v)| *v))];
    let kpis = view.kpis().to_vec();

    let predictions: Vec<Bar> = view
        .predictions()
        .iter()
        .map(|p| Bar {
            label: format_date(&p.date),
            value: p.predicted,
            color: p.risk_level.color().to_string(),
            caption: format!("{} · {:.0}% conf.", p.risk_level.label(), p.confidence),
        })
        .collect();
    let distribution: Vec<Bar> = view
        .risk_distribution()
        .iter()
        .map(|(tier, share)| Bar {
            label: tier.label().to_string(),
            value: *share,
            color: tier.color().to_string(),
            caption: percent_label(*share),
        })
        .collect();
    let recommendations: Vec<(String, &'static str)> = view
        .predictions()
        .iter()
        .map(|p| (format_date(&p.date), p.risk_level.recommendation()))
        .collect();
    drop(view);

    let metric_options: Vec<(String, String)> = ChartMetric::ALL
        .into_iter()
        .map(|m| (m.key().to_string(), m.label().to_string()))
        .collect();
    let on_metric = {
        let page = page.clone();
        move |value: String| {
            if let Ok(metric) = value.parse::<ChartMetric>() {
                page.borrow_mut().set_metric(metric);
                bump(revision);
            }
        }
    };

    rsx! {
        h1 { style: "margin: 8px 0;", "Analytics" }

        div {
            style: "display: flex; flex-wrap: wrap; gap: 12px;",
            for kpi in kpis {
                MetricCard { key: "{kpi.name}", metric: kpi.clone() }
            }
        }

        div {
            style: "display: flex; gap: 12px; align-items: center; margin: 12px 0;",
            for option in TimeRange::ALL {
                {
                    let background = if option == range { "#0891b2" } else { "#1f2937" };
                    let page = page.clone();
                    let label = option.label();
                    rsx! {
                        button {
                            key: "{option}",
                            style: "padding: 6px 12px; border-radius: 8px; border: none; color: #f9fafb; cursor: pointer; background: {background};",
                            onclick: move |_| {
                                page.borrow_mut().set_range(option);
                                bump(revision);
                            },
                            "{label}"
                        }
                    }
                }
            }
            SelectField {
                label: "Metric".to_string(),
                options: metric_options,
                selected: metric.key().to_string(),
                onchange: on_metric,
            }
        }

        Panel { title: "Historical Trends".to_string(),
            ChartHeader { title: metric.label().to_string(), subtitle: range.label().to_string() }
            LineChart { labels, series }
        }

        div {
            style: "display: flex; gap: 12px;",
            div {
                style: "flex: 2;",
                Panel { title: "7-Day Forecast".to_string(),
                    BarChart { bars: predictions }
                }
            }
            div {
                style: "flex: 1;",
                Panel { title: "Event Severity".to_string(),
                    BarChart { bars: distribution }
                }
            }
        }

        Panel { title: "Recommendations".to_string(),
            for (date, text) in recommendations {
                p { key: "{date}", style: "margin: 4px 0; font-size: 13px;", "{date}: {text}" }
            }
        }
    }
}
