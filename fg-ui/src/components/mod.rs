//! Reusable Dioxus RSX components for the FlowGuard pages.

mod badges;
mod bar_chart;
mod chart_header;
mod error_display;
mod line_chart;
mod loading_spinner;
mod metric_card;
mod navbar;
mod select_field;

pub use badges::{SeverityBadge, StatusBadge};
pub use bar_chart::{Bar, BarChart};
pub use chart_header::ChartHeader;
pub use error_display::ErrorDisplay;
pub use line_chart::{ChartSeries, LineChart};
pub use loading_spinner::LoadingSpinner;
pub use metric_card::MetricCard;
pub use navbar::Navbar;
pub use select_field::SelectField;
