//! Wall-clock time arithmetic over "HH:MM" strings.
//!
//! Every value is a local time-of-day with no date or timezone attached.
//! All functions are pure; everything else in the crate builds on these
//! primitives. Validation beyond the format itself belongs to callers
//! ([`interval_length`] may legitimately go negative).

use chrono::{Datelike, Duration, NaiveDate};

use crate::error::TimeFormatError;

/// Minutes in one wall-clock day.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

const DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

const SHORT_DAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Parse "HH:MM" into minutes since midnight.
///
/// # Errors
/// Returns [`TimeFormatError`] if the string is not two numeric fields
/// separated by `:`, or if a field is outside the 24-hour clock.
pub fn to_minutes(time: &str) -> Result<u32, TimeFormatError> {
    let (hours, minutes) = time
        .split_once(':')
        .ok_or_else(|| TimeFormatError::Malformed(time.to_string()))?;
    let hours: u32 = hours
        .parse()
        .map_err(|_| TimeFormatError::Malformed(time.to_string()))?;
    let minutes: u32 = minutes
        .parse()
        .map_err(|_| TimeFormatError::Malformed(time.to_string()))?;

    if hours > 23 {
        return Err(TimeFormatError::HourOutOfRange(time.to_string()));
    }
    if minutes > 59 {
        return Err(TimeFormatError::MinuteOutOfRange(time.to_string()));
    }
    Ok(hours * 60 + minutes)
}

/// Format minutes since midnight back to zero-padded "HH:MM".
///
/// Values at or past midnight are reduced modulo one day, so this is the
/// exact inverse of [`to_minutes`] for all valid input.
pub fn format_minutes(total: u32) -> String {
    let total = total % MINUTES_PER_DAY;
    format!("{:02}:{:02}", total / 60, total % 60)
}

/// Add a (possibly negative) minute delta to a time, wrapping across
/// midnight silently. Callers that care about day rollover must detect it
/// themselves by comparing the result against the input.
pub fn add_minutes(time: &str, delta: i32) -> Result<String, TimeFormatError> {
    let total = to_minutes(time)? as i32 + delta;
    Ok(format_minutes(total.rem_euclid(MINUTES_PER_DAY as i32) as u32))
}

/// Signed length of the interval from `start` to `end` in minutes.
///
/// Negative when `end` precedes `start`; this layer does not validate
/// ordering.
pub fn interval_length(start: &str, end: &str) -> Result<i32, TimeFormatError> {
    Ok(to_minutes(end)? as i32 - to_minutes(start)? as i32)
}

/// Absolute difference between two times in minutes.
pub fn minutes_between(a: &str, b: &str) -> Result<u32, TimeFormatError> {
    Ok(interval_length(a, b)?.unsigned_abs())
}

/// Test whether two half-open intervals `[start, end)` intersect.
///
/// Touching edges do not overlap; the test is symmetric in its arguments.
pub fn overlaps(a: (&str, &str), b: (&str, &str)) -> Result<bool, TimeFormatError> {
    let (a_start, a_end) = (to_minutes(a.0)?, to_minutes(a.1)?);
    let (b_start, b_end) = (to_minutes(b.0)?, to_minutes(b.1)?);
    Ok(a_start < b_end && b_start < a_end)
}

/// Generate evenly spaced time labels from `start_hour:00` to
/// `end_hour:00` inclusive, stepping by `interval_minutes`.
///
/// Pure function of its arguments; an interval of zero yields no labels.
pub fn generate_slots(start_hour: u32, end_hour: u32, interval_minutes: u32) -> Vec<String> {
    let mut slots = Vec::new();
    if interval_minutes == 0 {
        return slots;
    }

    let mut current = start_hour * 60;
    let end = end_hour * 60;
    while current <= end {
        slots.push(format_minutes(current));
        current += interval_minutes;
    }
    slots
}

/// Render a time in 12-hour clock notation, e.g. "14:05" -> "2:05 PM".
pub fn format_12h(time: &str) -> Result<String, TimeFormatError> {
    let total = to_minutes(time)?;
    let (hours, minutes) = (total / 60, total % 60);
    let period = if hours >= 12 { "PM" } else { "AM" };
    let display_hours = match hours % 12 {
        0 => 12,
        h => h,
    };
    Ok(format!("{display_hours}:{minutes:02} {period}"))
}

/// Full day name for a day-of-week number (Sunday = 0).
///
/// # Panics
/// Panics if `day > 6`.
pub fn day_name(day: u8) -> &'static str {
    DAY_NAMES[day as usize]
}

/// Abbreviated day name for a day-of-week number (Sunday = 0).
///
/// # Panics
/// Panics if `day > 6`.
pub fn short_day_name(day: u8) -> &'static str {
    SHORT_DAY_NAMES[day as usize]
}

/// The seven dates of the week containing `today`, Sunday first.
pub fn week_dates(today: NaiveDate) -> Vec<NaiveDate> {
    let offset = today.weekday().num_days_from_sunday() as i64;
    (0..7)
        .map(|day| today + Duration::days(day - offset))
        .collect()
}
