//! Picking the two calendar days to compare.

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::error::{ForecastError, Result};

/// Names indexed by `0 = Sunday .. 6 = Saturday`.
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Validate a `0..=6` weekday number (0 = Sunday).
pub fn weekday_from_number(n: u8) -> Result<Weekday> {
    match n {
        0 => Ok(Weekday::Sun),
        1 => Ok(Weekday::Mon),
        2 => Ok(Weekday::Tue),
        3 => Ok(Weekday::Wed),
        4 => Ok(Weekday::Thu),
        5 => Ok(Weekday::Fri),
        6 => Ok(Weekday::Sat),
        other => Err(ForecastError::InvalidWeekday(other)),
    }
}

pub fn weekday_number(day: Weekday) -> u8 {
    day.num_days_from_sunday() as u8
}

/// Returns the next occurrence of `target_weekday` on or after `today`, and the
/// same weekday seven days later.
///
/// Fails with [`ForecastError::DateOutOfRange`] when either date would fall past
/// the last date chrono can represent.
pub fn select_comparison_dates(
    today: NaiveDate,
    target_weekday: u8,
) -> Result<(NaiveDate, NaiveDate)> {
    weekday_from_number(target_weekday)?;

    let current = weekday_number(today.weekday()) as i64;
    let target = target_weekday as i64;

    let mut delta = target - current;
    if delta < 0 {
        delta += 7;
    }

    let first = today
        .checked_add_days(Days::new(delta as u64))
        .ok_or(ForecastError::DateOutOfRange(today))?;
    let second = first
        .checked_add_days(Days::new(7))
        .ok_or(ForecastError::DateOutOfRange(today))?;

    Ok((first, second))
}
