//! Inline SVG line chart.
//!
//! Draws one polyline per series over a shared x axis. Missing values
//! break the line, which is how the forecast chart stops its observed
//! series where the observations end.

use dioxus::prelude::*;

const WIDTH: f64 = 600.0;
const PADDING: f64 = 32.0;

#[derive(Clone, PartialEq)]
pub struct ChartSeries {
    pub name: String,
    pub color: String,
    pub values: Vec<Option<f64>>,
    pub dashed: bool,
}

impl ChartSeries {
    pub fn solid(name: &str, color: &str, values: impl IntoIterator<Item = f64>) -> Self {
        Self {
            name: name.to_string(),
            color: color.to_string(),
            values: values.into_iter().map(Some).collect(),
            dashed: false,
        }
    }

    pub fn dashed(mut self) -> Self {
        self.dashed = true;
        self
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct LineChartProps {
    /// X axis labels, one per value
    pub labels: Vec<String>,
    pub series: Vec<ChartSeries>,
    /// Fixed y range; derived from the data when absent
    #[props(default)]
    pub y_range: Option<(f64, f64)>,
    #[props(default = 260)]
    pub height: u32,
}

/// Y range covering every present value, padded so flat series still show.
pub(crate) fn value_range(series: &[ChartSeries]) -> (f64, f64) {
    let values = series.iter().flat_map(|s| s.values.iter().flatten().copied());
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if !min.is_finite() {
        return (0.0, 1.0);
    }
    if (max - min).abs() < f64::EPSILON {
        return (min - 1.0, max + 1.0);
    }
    (min, max)
}

/// SVG path data for `values`, starting a new segment after every gap.
pub(crate) fn path_data(values: &[Option<f64>], range: (f64, f64), height: f64) -> String {
    let (lo, hi) = range;
    let inner_w = WIDTH - 2.0 * PADDING;
    let inner_h = height - 2.0 * PADDING;
    let step = if values.len() > 1 {
        inner_w / (values.len() - 1) as f64
    } else {
        0.0
    };

    let mut d = String::new();
    let mut pen_down = false;
    for (i, value) in values.iter().enumerate() {
        let Some(v) = value else {
            pen_down = false;
            continue;
        };
        let x = PADDING + step * i as f64;
        let y = PADDING + inner_h * (1.0 - (v - lo) / (hi - lo));
        let cmd = if pen_down { 'L' } else { 'M' };
        if !d.is_empty() {
            d.push(' ');
        }
        d.push_str(&format!("{}{:.1},{:.1}", cmd, x, y));
        pen_down = true;
    }
    d
}

#[component]
pub fn LineChart(props: LineChartProps) -> Element {
    let height = props.height as f64;
    let range = props.y_range.unwrap_or_else(|| value_range(&props.series));
    let view_box = format!("0 0 {} {}", WIDTH, height);
    let (lo, hi) = range;
    let lo_label = format!("{:.0}", lo);
    let hi_label = format!("{:.0}", hi);
    let baseline = height - PADDING;
    let first = props.labels.first().cloned().unwrap_or_default();
    let last = props.labels.last().cloned().unwrap_or_default();
    let right = WIDTH - PADDING;
    let label_y = height - 8.0;

    let lines: Vec<(String, String, &'static str)> = props
        .series
        .iter()
        .map(|s| {
            let dash = if s.dashed { "6 4" } else { "" };
            (path_data(&s.values, range, height), s.color.clone(), dash)
        })
        .collect();

    rsx! {
        svg {
            view_box: "{view_box}",
            width: "100%",
            style: "background: #111827; border-radius: 8px;",
            line { x1: "{PADDING}", y1: "{baseline}", x2: "{right}", y2: "{baseline}", stroke: "#374151" }
            line { x1: "{PADDING}", y1: "{PADDING}", x2: "{PADDING}", y2: "{baseline}", stroke: "#374151" }
            text { x: "4", y: "{PADDING}", fill: "#9ca3af", font_size: "10", "{hi_label}" }
            text { x: "4", y: "{baseline}", fill: "#9ca3af", font_size: "10", "{lo_label}" }
            text { x: "{PADDING}", y: "{label_y}", fill: "#9ca3af", font_size: "10", "{first}" }
            text { x: "{right}", y: "{label_y}", fill: "#9ca3af", font_size: "10", text_anchor: "end", "{last}" }
            for (d, color, dash) in lines {
                path { d: "{d}", fill: "none", stroke: "{color}", stroke_width: "2", stroke_dasharray: "{dash}" }
            }
        }
        div {
            style: "display: flex; gap: 16px; margin-top: 6px; font-size: 12px; color: #d1d5db;",
            for s in props.series.iter() {
                span {
                    span { style: "display: inline-block; width: 10px; height: 10px; margin-right: 4px; background: {s.color};" }
                    "{s.name}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gaps_start_new_segments() {
        let d = path_data(&[Some(0.0), Some(1.0), None, Some(1.0)], (0.0, 1.0), 100.0);
        let moves = d.matches('M').count();
        let lines = d.matches('L').count();
        assert_eq!((moves, lines), (2, 1));
    }

    #[test]
    fn range_ignores_missing_values() {
        let series = vec![ChartSeries {
            name: "x".to_string(),
            color: "#fff".to_string(),
            values: vec![None, Some(30.0), Some(90.0)],
            dashed: false,
        }];
        assert_eq!(value_range(&series), (30.0, 90.0));
        assert_eq!(value_range(&[]), (0.0, 1.0));
    }
}
