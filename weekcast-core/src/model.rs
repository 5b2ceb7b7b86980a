use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::format::format_hour;

/// One hour of forecast data, as shown on the chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourRecord {
    /// Provider time of day, usually `"HH:MM:SS"`.
    pub timestamp: String,
    pub temperature_f: f64,
    pub humidity_pct: f64,
    pub precip_prob_pct: f64,
    pub wind_speed_mph: f64,
}

/// Weather icon category of a day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionIcon {
    Clear,
    Cloudy,
    Rain,
    /// Any provider icon outside the three known categories; the raw value is kept.
    Other(String),
}

impl ConditionIcon {
    pub fn from_provider(icon: &str) -> Self {
        match icon.trim() {
            "clear-day" | "clear-night" => ConditionIcon::Clear,
            "rain" => ConditionIcon::Rain,
            "cloudy" | "partly-cloudy-day" | "partly-cloudy-night" => ConditionIcon::Cloudy,
            other => ConditionIcon::Other(other.to_string()),
        }
    }

    /// Three-way category used for cards. Unrecognised icons fall back to cloudy.
    pub fn card_category(&self) -> &'static str {
        match self {
            ConditionIcon::Clear => "sunny",
            ConditionIcon::Rain => "rainy",
            ConditionIcon::Cloudy | ConditionIcon::Other(_) => "cloudy",
        }
    }
}

/// A calendar day's aggregate plus its hourly series.
///
/// `hours` is chronological and index `i` is taken to be hour `i` of the day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayRecord {
    pub date: NaiveDate,
    pub temperature_f: f64,
    pub icon: ConditionIcon,
    pub hours: Vec<HourRecord>,
}

impl DayRecord {
    /// Highest rain probability across the whole day, 0 when there are no hours.
    pub fn max_rain_chance(&self) -> f64 {
        self.hours
            .iter()
            .map(|h| h.precip_prob_pct)
            .reduce(f64::max)
            .unwrap_or(0.0)
    }

    pub fn first_hour_humidity(&self) -> Option<f64> {
        self.hours.first().map(|h| h.humidity_pct)
    }
}

/// The two days being compared: the chosen weekday and the same weekday a week later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPair {
    pub first_day: DayRecord,
    pub second_day: DayRecord,
}

/// Hour range picked on a chart, as formatted hour labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedRange {
    pub start_label: String,
    pub end_label: String,
}

impl SelectedRange {
    pub fn new(start_label: impl Into<String>, end_label: impl Into<String>) -> Self {
        Self {
            start_label: start_label.into(),
            end_label: end_label.into(),
        }
    }

    /// Build a range from hour positions on a 24-hour axis.
    ///
    /// `end` may be 24 (end of day), which is labelled as the last hour.
    pub fn from_hours(start: usize, end: usize) -> Option<Self> {
        if start >= end || end > 24 {
            return None;
        }
        let end = end.min(23);
        Some(Self::new(format_hour(start as u32), format_hour(end as u32)))
    }
}
