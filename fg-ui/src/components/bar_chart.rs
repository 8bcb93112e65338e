//! Horizontal bar chart rendered with plain divs.

use dioxus::prelude::*;

#[derive(Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    pub color: String,
    /// Text shown at the end of the bar
    pub caption: String,
}

#[derive(Props, Clone, PartialEq)]
pub struct BarChartProps {
    pub bars: Vec<Bar>,
    /// Value of a full-width bar
    #[props(default = 100.0)]
    pub max: f64,
}

#[component]
pub fn BarChart(props: BarChartProps) -> Element {
    let max = if props.max > 0.0 { props.max } else { 1.0 };
    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 8px;",
            for bar in props.bars.iter() {
                {
                    let width = format!("{:.1}%", (bar.value / max * 100.0).clamp(0.0, 100.0));
                    rsx! {
                        div {
                            key: "{bar.label}",
                            style: "display: flex; align-items: center; gap: 8px; font-size: 12px; color: #d1d5db;",
                            span { style: "width: 110px;", "{bar.label}" }
                            div {
                                style: "flex: 1; background: #1f2937; border-radius: 4px; height: 14px;",
                                div { style: "width: {width}; height: 100%; border-radius: 4px; background: {bar.color};" }
                            }
                            span { style: "width: 90px; text-align: right;", "{bar.caption}" }
                        }
                    }
                }
            }
        }
    }
}
