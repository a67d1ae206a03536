pub mod grid;
pub mod mock;
pub mod prefs;
pub mod stats;
pub mod suggest;
pub mod task;

use chrono::{DateTime, NaiveDate, Utc};
use slotwise_core::Priority;

/// Parse a priority name the way the forms offer them.
pub fn parse_priority(value: &str) -> Result<Priority, Box<dyn std::error::Error>> {
    match value {
        "low" => Ok(Priority::Low),
        "medium" => Ok(Priority::Medium),
        "high" => Ok(Priority::High),
        other => Err(format!("invalid priority '{other}' (expected low, medium or high)").into()),
    }
}

/// Parse a timestamp as RFC 3339, or a bare date as local midnight UTC.
pub fn parse_date(value: &str) -> Result<DateTime<Utc>, Box<dyn std::error::Error>> {
    if let Ok(timestamp) = value.parse::<DateTime<Utc>>() {
        return Ok(timestamp);
    }
    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| format!("invalid date '{value}' (expected RFC 3339 or YYYY-MM-DD)"))?;
    Ok(date
        .and_hms_opt(0, 0, 0)
        .ok_or("invalid date")?
        .and_utc())
}
