use chrono::{DateTime, Utc};
use usability_core::time::format_timestamp;

#[must_use]
pub fn format_datetime(value: DateTime<Utc>) -> String {
    format_timestamp(value)
}

#[must_use]
pub fn format_duration_secs(secs: f64) -> String {
    format!("{secs:.2} seconds")
}
