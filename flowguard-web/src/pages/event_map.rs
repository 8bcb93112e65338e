use super::{bump, use_page, Panel};
use dioxus::prelude::*;
use fg_core::view::{percent_label, Filter};
use fg_core::{Sensor, SensorStatus};
use fg_pages::EventMapPage;
use fg_ui::components::{ErrorDisplay, StatusBadge};
use fg_ui::state::page_rng;
use fg_utils::dates::format_clock;

const MAP_W: f64 = 600.0;
const MAP_H: f64 = 400.0;
const MAP_MARGIN: f64 = 40.0;

/// Place each sensor inside the map box, fitted to the sensors' extent.
fn marker_positions(sensors: &[Sensor]) -> Vec<(f64, f64)> {
    let lats = sensors.iter().map(|s| s.coordinates.lat);
    let lngs = sensors.iter().map(|s| s.coordinates.lng);
    let (lat_lo, lat_hi) = lats.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
    let (lng_lo, lng_hi) = lngs.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
    let lat_span = (lat_hi - lat_lo).max(1e-6);
    let lng_span = (lng_hi - lng_lo).max(1e-6);

    sensors
        .iter()
        .map(|s| {
            let x = MAP_MARGIN + (s.coordinates.lng - lng_lo) / lng_span * (MAP_W - 2.0 * MAP_MARGIN);
            let y = MAP_MARGIN + (lat_hi - s.coordinates.lat) / lat_span * (MAP_H - 2.0 * MAP_MARGIN);
            (x, y)
        })
        .collect()
}

#[component]
pub fn EventMapView() -> Element {
    let (page, revision) = use_page(|ctx| EventMapPage::mount(ctx, page_rng()));
    let page = match page {
        Ok(page) => page,
        Err(message) => return rsx! { ErrorDisplay { message } },
    };

    let (visible, counts, filter, selected, updated) = {
        let view = page.borrow();
        let updated = format_clock(&view.snapshot().updated_at);
        (view.visible(), view.counts(), view.filter(), view.selected(), updated)
    };
    let markers: Vec<(Sensor, (f64, f64))> = {
        let positions = marker_positions(&visible);
        visible.iter().cloned().zip(positions).collect()
    };
    let view_box = format!("0 0 {} {}", MAP_W, MAP_H);

    let filters: Vec<(Filter<SensorStatus>, String)> = std::iter::once((Filter::All, format!("All ({})", counts.total())))
        .chain(
            SensorStatus::ALL
                .into_iter()
                .map(|s| (Filter::Only(s), format!("{} ({})", s.label(), counts.get(s)))),
        )
        .collect();

    rsx! {
        div {
            style: "display: flex; justify-content: space-between; align-items: baseline;",
            h1 { style: "margin: 8px 0;", "Event Map" }
            span { style: "font-size: 12px; color: #9ca3af;", "Last updated {updated}" }
        }

        div {
            style: "display: flex; gap: 8px; margin-bottom: 8px;",
            for (option, label) in filters {
                {
                    let active = option == filter;
                    let background = if active { "#0891b2" } else { "#1f2937" };
                    let page = page.clone();
                    rsx! {
                        button {
                            key: "{label}",
                            style: "padding: 6px 12px; border-radius: 8px; border: none; color: #f9fafb; cursor: pointer; background: {background};",
                            onclick: move |_| {
                                page.borrow_mut().set_filter(option);
                                bump(revision);
                            },
                            "{label}"
                        }
                    }
                }
            }
        }

        div {
            style: "display: flex; gap: 12px; align-items: flex-start;",
            svg {
                view_box: "{view_box}",
                width: "70%",
                style: "background: #0f172a; border-radius: 12px; border: 1px solid #1f2937;",
                for (sensor, (x, y)) in markers {
                    {
                        let color = sensor.status.color();
                        let page = page.clone();
                        let id = sensor.id.clone();
                        let label_y = y - 16.0;
                        rsx! {
                            g {
                                key: "{sensor.id}",
                                style: "cursor: pointer;",
                                onclick: move |_| {
                                    page.borrow_mut().select(&id);
                                    bump(revision);
                                },
                                circle { cx: "{x}", cy: "{y}", r: "12", fill: "{color}", fill_opacity: "0.3" }
                                circle { cx: "{x}", cy: "{y}", r: "6", fill: "{color}" }
                                text { x: "{x}", y: "{label_y}", fill: "#d1d5db", font_size: "11", text_anchor: "middle", "{sensor.name}" }
                            }
                        }
                    }
                }
            }

            div {
                style: "flex: 1;",
                Panel { title: "Sensor Details".to_string(),
                    if let Some(sensor) = selected {
                        {
                            let level = percent_label(sensor.water_level);
                            let risk = percent_label(sensor.risk_percentage);
                            let seen = format_clock(&sensor.last_updated);
                            rsx! {
                                p { style: "margin: 0 0 4px 0; font-weight: 600;", "{sensor.name}" }
                                p { style: "margin: 0 0 8px 0; color: #9ca3af;", "{sensor.location}" }
                                StatusBadge { status: sensor.status }
                                p { "Water level: {level}" }
                                p { "Overflow risk: {risk}" }
                                p { style: "font-size: 12px; color: #9ca3af;", "Updated {seen}" }
                            }
                        }
                    } else {
                        p { style: "color: #9ca3af;", "Select a sensor on the map." }
                    }
                }
            }
        }
    }
}
