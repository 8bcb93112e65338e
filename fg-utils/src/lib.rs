//! Shared utility functions for FlowGuard crates.

/// Date and time helpers used by the derived view state and the charts.
pub mod dates {
    use chrono::{DateTime, NaiveDate, Utc};

    /// Minutes in a day, the upper bound of the "hours ago" bucket.
    const MINUTES_PER_DAY: i64 = 1440;

    /// Render the elapsed time between `then` and `now` as a short label.
    ///
    /// Buckets on the floor of elapsed whole minutes:
    /// - under 1 minute: "Just now"
    /// - under 60 minutes: "Nm ago"
    /// - under 1440 minutes: "Nh ago"
    /// - otherwise: "Nd ago"
    ///
    /// Timestamps in the future count as "Just now".
    pub fn time_ago(then: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
        let minutes = (*now - *then).num_minutes();
        if minutes < 1 {
            "Just now".to_string()
        } else if minutes < 60 {
            format!("{}m ago", minutes)
        } else if minutes < MINUTES_PER_DAY {
            format!("{}h ago", minutes / 60)
        } else {
            format!("{}d ago", minutes / MINUTES_PER_DAY)
        }
    }

    /// Format a timestamp as "HH:MM" (24-hour, UTC) for axis labels.
    pub fn format_clock(ts: &DateTime<Utc>) -> String {
        ts.format("%H:%M").to_string()
    }

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }

    /// Milliseconds since the Unix epoch.
    pub fn epoch_millis(ts: &DateTime<Utc>) -> i64 {
        ts.timestamp_millis()
    }

}
