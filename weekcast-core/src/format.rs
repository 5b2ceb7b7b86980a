//! Label helpers shared by the chart window and the range selection.
//!
//! Hour labels use the compact 12-hour form `"<1-12><AM|PM>"`, e.g. `"12AM"`, `"2PM"`.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};

/// Format a 0-based hour of day as a 12-hour label.
pub fn format_hour(hour: u32) -> String {
    let hour = hour % 24;
    let period = if hour >= 12 { "PM" } else { "AM" };
    let hour12 = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{hour12}{period}")
}

/// Format a provider hour timestamp (`"HH:MM:SS"` or a full date-time) as a 12-hour label.
pub fn format_hour_label(timestamp: &str) -> Option<String> {
    hour_of_timestamp(timestamp).map(format_hour)
}

/// Extract the hour of day from `"HH:MM:SS"`, `"HH:MM"` or `"YYYY-MM-DDTHH:MM:SS"`.
pub fn hour_of_timestamp(timestamp: &str) -> Option<u32> {
    let ts = timestamp.trim();

    if let Ok(time) = NaiveTime::parse_from_str(ts, "%H:%M:%S") {
        return Some(time.hour());
    }
    if let Ok(time) = NaiveTime::parse_from_str(ts, "%H:%M") {
        return Some(time.hour());
    }
    NaiveDateTime::parse_from_str(ts, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(ts, "%Y-%m-%d %H:%M:%S"))
        .ok()
        .map(|dt| dt.hour())
}

/// Convert an hour label back to a 0-based hour-of-day index.
///
/// `12AM` is 0, `1AM..11AM` are 1..11, `12PM` is 12 and `1PM..11PM` are 13..23.
/// A bare `0..=23` integer is accepted as-is. Anything else yields `None`.
pub fn parse_hour_label(label: &str) -> Option<usize> {
    let label = label.trim().to_ascii_uppercase();

    let (digits, pm) = if let Some(d) = label.strip_suffix("PM") {
        (d, true)
    } else if let Some(d) = label.strip_suffix("AM") {
        (d, false)
    } else {
        return label.parse::<usize>().ok().filter(|h| *h < 24);
    };

    let hour: usize = digits.trim().parse().ok()?;
    if !(1..=12).contains(&hour) {
        return None;
    }

    Some(match (hour, pm) {
        (12, false) => 0,
        (12, true) => 12,
        (h, false) => h,
        (h, true) => h + 12,
    })
}

/// Card heading for a forecast day, e.g. `"Friday, Oct 23"`.
pub fn format_day_heading(date: NaiveDate) -> String {
    date.format("%A, %b %-d").to_string()
}
