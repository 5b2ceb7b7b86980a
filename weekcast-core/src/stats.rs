//! Min/max statistics over a user-selected hour range and the advice derived from them.

use serde::{Deserialize, Serialize};

use crate::format::parse_hour_label;
use crate::model::HourRecord;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeStats {
    pub max_temp: f64,
    pub min_temp: f64,
    pub max_humidity: f64,
    pub min_humidity: f64,
    pub max_rain_chance: f64,
    pub min_rain_chance: f64,
    pub max_wind: f64,
    pub min_wind: f64,
}

impl RangeStats {
    fn seed(hour: &HourRecord) -> Self {
        Self {
            max_temp: hour.temperature_f,
            min_temp: hour.temperature_f,
            max_humidity: hour.humidity_pct,
            min_humidity: hour.humidity_pct,
            max_rain_chance: hour.precip_prob_pct,
            min_rain_chance: hour.precip_prob_pct,
            max_wind: hour.wind_speed_mph,
            min_wind: hour.wind_speed_mph,
        }
    }

    fn absorb(mut self, hour: &HourRecord) -> Self {
        self.max_temp = self.max_temp.max(hour.temperature_f);
        self.min_temp = self.min_temp.min(hour.temperature_f);
        self.max_humidity = self.max_humidity.max(hour.humidity_pct);
        self.min_humidity = self.min_humidity.min(hour.humidity_pct);
        self.max_rain_chance = self.max_rain_chance.max(hour.precip_prob_pct);
        self.min_rain_chance = self.min_rain_chance.min(hour.precip_prob_pct);
        self.max_wind = self.max_wind.max(hour.wind_speed_mph);
        self.min_wind = self.min_wind.min(hour.wind_speed_mph);
        self
    }

    pub fn advice(&self) -> Advice {
        Advice {
            rain: RainOutlook::from_max(self.max_rain_chance),
            wind: WindOutlook::from_max(self.max_wind),
            temperature: TemperatureOutlook::from_range(self.min_temp, self.max_temp),
        }
    }
}

/// Aggregate the hours between two hour labels, both inclusive.
///
/// Labels index the full-day `hours` sequence, not the visible window.
/// Returns `None` when a label is unreadable or the range selects no hours.
pub fn compute_range_stats(
    hours: &[HourRecord],
    start_label: &str,
    end_label: &str,
) -> Option<RangeStats> {
    let start = parse_hour_label(start_label)?;
    let end = parse_hour_label(end_label)?;
    range_stats_by_index(hours, start, end)
}

pub fn range_stats_by_index(hours: &[HourRecord], start: usize, end: usize) -> Option<RangeStats> {
    if start > end || start >= hours.len() {
        return None;
    }
    let end = end.min(hours.len() - 1);

    let (first, rest) = hours[start..=end].split_first()?;
    Some(rest.iter().fold(RangeStats::seed(first), RangeStats::absorb))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RainOutlook {
    High,
    Moderate,
    Light,
    Clear,
}

impl RainOutlook {
    pub fn from_max(max_rain: f64) -> Self {
        if max_rain >= 50.0 {
            RainOutlook::High
        } else if max_rain >= 30.0 {
            RainOutlook::Moderate
        } else if max_rain > 0.0 {
            RainOutlook::Light
        } else {
            RainOutlook::Clear
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RainOutlook::High => "high",
            RainOutlook::Moderate => "moderate",
            RainOutlook::Light => "light",
            RainOutlook::Clear => "clear",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            RainOutlook::High => "High chance of rain - Consider rescheduling outdoor activities",
            RainOutlook::Moderate => "Moderate chance of rain - Bring an umbrella if going out",
            RainOutlook::Light => "Light chance of rain - Outdoor activities should be fine",
            RainOutlook::Clear => "Clear skies - Perfect for outdoor activities",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindOutlook {
    Strong,
    Moderate,
    Light,
    Calm,
}

impl WindOutlook {
    pub fn from_max(max_wind: f64) -> Self {
        if max_wind >= 25.0 {
            WindOutlook::Strong
        } else if max_wind >= 15.0 {
            WindOutlook::Moderate
        } else if max_wind > 0.0 {
            WindOutlook::Light
        } else {
            WindOutlook::Calm
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WindOutlook::Strong => "strong",
            WindOutlook::Moderate => "moderate",
            WindOutlook::Light => "light",
            WindOutlook::Calm => "calm",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            WindOutlook::Strong => "Strong winds - Consider rescheduling outdoor activities",
            WindOutlook::Moderate => "Moderate winds - Be cautious if going out",
            WindOutlook::Light => "Light winds",
            WindOutlook::Calm => "Calm winds - Perfect for outdoor activities",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemperatureOutlook {
    Favorable,
    Warm,
    Cool,
    Comfortable,
}

impl TemperatureOutlook {
    pub fn from_range(min_temp: f64, max_temp: f64) -> Self {
        if min_temp >= 60.0 && max_temp <= 75.0 {
            TemperatureOutlook::Favorable
        } else if max_temp > 75.0 {
            TemperatureOutlook::Warm
        } else if min_temp < 60.0 {
            TemperatureOutlook::Cool
        } else {
            TemperatureOutlook::Comfortable
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TemperatureOutlook::Favorable => "favorable",
            TemperatureOutlook::Warm => "warm",
            TemperatureOutlook::Cool => "cool",
            TemperatureOutlook::Comfortable => "comfortable",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            TemperatureOutlook::Favorable => "Temperatures are favorable",
            TemperatureOutlook::Warm => "It might be a bit warm - Stay hydrated if going out",
            TemperatureOutlook::Cool => "It might be a bit cool - Consider wearing layers",
            TemperatureOutlook::Comfortable => "Temperatures are within a comfortable range",
        }
    }
}

/// The three recommendation categories for a selected range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advice {
    pub rain: RainOutlook,
    pub wind: WindOutlook,
    pub temperature: TemperatureOutlook,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hour(i: usize, temp: f64, humidity: f64, rain: f64, wind: f64) -> HourRecord {
        HourRecord {
            timestamp: format!("{i:02}:00:00"),
            temperature_f: temp,
            humidity_pct: humidity,
            precip_prob_pct: rain,
            wind_speed_mph: wind,
        }
    }

    fn full_day() -> Vec<HourRecord> {
        (0..24)
            .map(|i| {
                let x = i as f64;
                hour(
                    i,
                    70.0 - (x - 14.0).abs() * 1.5,
                    90.0 - x * 2.0,
                    (x * 3.0) % 70.0,
                    4.0 + x / 2.0,
                )
            })
            .collect()
    }

    #[test]
    fn whole_day_matches_global_extremes() {
        let hours = full_day();
        let stats = compute_range_stats(&hours, "12AM", "11PM")
            .expect("full day selects hours");

        let temps = hours.iter().map(|h| h.temperature_f);
        let max = temps.clone().fold(f64::MIN, f64::max);
        let min = temps.fold(f64::MAX, f64::min);

        assert_eq!(stats.max_temp, max);
        assert_eq!(stats.min_temp, min);
        assert_eq!(stats.max_humidity, 90.0);
        assert_eq!(stats.min_humidity, 90.0 - 23.0 * 2.0);
    }

    #[test]
    fn range_is_inclusive_of_both_ends() {
        let hours = full_day();
        let stats = compute_range_stats(&hours, "2PM", "4PM").unwrap();

        assert_eq!(stats.min_wind, hours[14].wind_speed_mph);
        assert_eq!(stats.max_wind, hours[16].wind_speed_mph);
    }

    #[test]
    fn single_hour_range() {
        let hours = full_day();
        let stats = compute_range_stats(&hours, "9AM", "9AM").unwrap();

        assert_eq!(stats.max_temp, stats.min_temp);
        assert_eq!(stats.max_temp, hours[9].temperature_f);
    }

    #[test]
    fn reversed_range_is_absent() {
        let hours = full_day();
        assert_eq!(compute_range_stats(&hours, "6PM", "2PM"), None);
    }

    #[test]
    fn out_of_bounds_or_unreadable_labels_are_absent() {
        let short: Vec<_> = full_day().into_iter().take(6).collect();
        assert_eq!(compute_range_stats(&short, "8AM", "10AM"), None);
        assert_eq!(compute_range_stats(&short, "noon", "1PM"), None);
        assert_eq!(compute_range_stats(&[], "12AM", "11PM"), None);
    }

    #[test]
    fn end_past_the_last_hour_is_truncated() {
        let short: Vec<_> = full_day().into_iter().take(6).collect();
        let stats = compute_range_stats(&short, "2AM", "11PM").unwrap();
        assert_eq!(stats.max_humidity, short[2].humidity_pct);
        assert_eq!(stats.min_humidity, short[5].humidity_pct);
    }

    #[test]
    fn rain_thresholds() {
        assert_eq!(RainOutlook::from_max(50.0), RainOutlook::High);
        assert_eq!(RainOutlook::from_max(49.999), RainOutlook::Moderate);
        assert_eq!(RainOutlook::from_max(30.0), RainOutlook::Moderate);
        assert_eq!(RainOutlook::from_max(0.5), RainOutlook::Light);
        assert_eq!(RainOutlook::from_max(0.0), RainOutlook::Clear);
    }

    #[test]
    fn wind_thresholds() {
        assert_eq!(WindOutlook::from_max(25.0), WindOutlook::Strong);
        assert_eq!(WindOutlook::from_max(24.9), WindOutlook::Moderate);
        assert_eq!(WindOutlook::from_max(15.0), WindOutlook::Moderate);
        assert_eq!(WindOutlook::from_max(1.0), WindOutlook::Light);
        assert_eq!(WindOutlook::from_max(0.0), WindOutlook::Calm);
    }

    #[test]
    fn temperature_categories() {
        assert_eq!(
            TemperatureOutlook::from_range(60.0, 75.0),
            TemperatureOutlook::Favorable
        );
        assert_eq!(
            TemperatureOutlook::from_range(55.0, 80.0),
            TemperatureOutlook::Warm
        );
        assert_eq!(
            TemperatureOutlook::from_range(45.0, 58.0),
            TemperatureOutlook::Cool
        );
        assert_eq!(
            TemperatureOutlook::from_range(f64::NAN, f64::NAN),
            TemperatureOutlook::Comfortable
        );
    }

    #[test]
    fn advice_uses_range_maxima() {
        let hours = vec![
            hour(0, 62.0, 50.0, 10.0, 3.0),
            hour(1, 70.0, 55.0, 35.0, 16.0),
        ];
        let advice = range_stats_by_index(&hours, 0, 1).unwrap().advice();

        assert_eq!(advice.rain, RainOutlook::Moderate);
        assert_eq!(advice.wind, WindOutlook::Moderate);
        assert_eq!(advice.temperature, TemperatureOutlook::Favorable);
        assert_eq!(advice.rain.as_str(), "moderate");
    }
}
