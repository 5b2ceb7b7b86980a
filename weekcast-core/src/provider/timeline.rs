use async_trait::async_trait;
use chrono::NaiveDate;
use log::{debug, warn};
use reqwest::{Client, Url};
use serde::Deserialize;

use crate::{
    config::Endpoint,
    error::{ForecastError, Result},
    model::{ConditionIcon, DayRecord, HourRecord},
};

use super::DayProvider;

/// Client for the Visual Crossing style timeline API:
/// `GET {base}/{location}/{start}/{end}?unitGroup=us&include=hours&key=...`.
#[derive(Debug, Clone)]
pub struct TimelineProvider {
    endpoint: Endpoint,
    http: Client,
}

impl TimelineProvider {
    pub fn new(endpoint: Endpoint) -> Self {
        Self {
            endpoint,
            http: Client::new(),
        }
    }

    fn request_url(&self, location: &str, start: NaiveDate, end: NaiveDate) -> Result<Url> {
        let base = &self.endpoint.base_url;
        let mut url = Url::parse(base)
            .map_err(|e| ForecastError::Config(format!("Invalid API base URL '{base}': {e}")))?;

        url.path_segments_mut()
            .map_err(|_| {
                ForecastError::Config(format!("API base URL '{base}' cannot carry a path"))
            })?
            .pop_if_empty()
            .push(location)
            .push(&start.format("%Y-%m-%d").to_string())
            .push(&end.format("%Y-%m-%d").to_string());

        url.query_pairs_mut()
            .append_pair("unitGroup", "us")
            .append_pair("include", "hours")
            .append_pair("key", &self.endpoint.api_key);

        Ok(url)
    }
}

#[async_trait]
impl DayProvider for TimelineProvider {
    async fn fetch_days(
        &self,
        location: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<DayRecord>> {
        let url = self.request_url(location, start, end)?;
        debug!("GET {} ({location}, {start}..{end})", url.path());

        let res = self
            .http
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(ForecastError::transport)?;

        let status = res.status();
        let body = res.text().await.map_err(ForecastError::transport)?;

        if !status.is_success() {
            warn!("timeline request for {location} {start}..{end} failed with status {status}");
            return Err(ForecastError::status(status, &body));
        }

        let parsed: TlResponse = serde_json::from_str(&body)?;
        if parsed.days.is_empty() {
            warn!("timeline response for {location} {start}..{end} contained no days");
        }

        parsed.days.into_iter().map(normalize_day).collect()
    }
}

#[derive(Debug, Deserialize)]
struct TlResponse {
    #[serde(default)]
    days: Vec<TlDay>,
}

#[derive(Debug, Deserialize)]
struct TlDay {
    datetime: String,
    temp: Option<f64>,
    icon: Option<String>,
    hours: Option<Vec<TlHour>>,
}

#[derive(Debug, Deserialize)]
struct TlHour {
    datetime: String,
    temp: Option<f64>,
    humidity: Option<f64>,
    precipprob: Option<f64>,
    windspeed: Option<f64>,
}

fn normalize_day(day: TlDay) -> Result<DayRecord> {
    let date = NaiveDate::parse_from_str(&day.datetime, "%Y-%m-%d")
        .map_err(|_| ForecastError::InvalidDate(day.datetime.clone()))?;

    let icon = day
        .icon
        .as_deref()
        .map(ConditionIcon::from_provider)
        .unwrap_or(ConditionIcon::Cloudy);

    Ok(DayRecord {
        date,
        temperature_f: day.temp.unwrap_or_default(),
        icon,
        hours: day
            .hours
            .unwrap_or_default()
            .into_iter()
            .map(normalize_hour)
            .collect(),
    })
}

fn normalize_hour(hour: TlHour) -> HourRecord {
    HourRecord {
        timestamp: hour.datetime,
        temperature_f: hour.temp.unwrap_or_default(),
        humidity_pct: hour.humidity.unwrap_or_default(),
        precip_prob_pct: hour.precipprob.unwrap_or_default(),
        wind_speed_mph: hour.windspeed.unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider(base_url: &str) -> TimelineProvider {
        TimelineProvider::new(Endpoint {
            base_url: base_url.into(),
            api_key: "SECRET".into(),
        })
    }

    #[test]
    fn request_url_encodes_location_and_single_day_range() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 23).unwrap();
        let url = provider("https://example.test/rest/timeline")
            .request_url("New York, NY", date, date)
            .unwrap();

        assert_eq!(url.path(), "/rest/timeline/New%20York,%20NY/2026-10-23/2026-10-23");

        let query: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(
            query,
            vec![
                ("unitGroup".into(), "us".into()),
                ("include".into(), "hours".into()),
                ("key".into(), "SECRET".into()),
            ]
        );
    }

    #[test]
    fn request_url_tolerates_trailing_slash() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 23).unwrap();
        let url = provider("https://example.test/timeline/")
            .request_url("Paris", date, date)
            .unwrap();
        assert_eq!(url.path(), "/timeline/Paris/2026-10-23/2026-10-23");
    }

    #[test]
    fn invalid_base_url_is_a_config_error() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 23).unwrap();
        let err = provider("not a url")
            .request_url("Paris", date, date)
            .unwrap_err();
        assert!(matches!(err, ForecastError::Config(_)));
    }

    #[test]
    fn normalize_keeps_only_listed_fields() {
        let json = r#"{
            "address": "Paris",
            "days": [{
                "datetime": "2026-10-23",
                "temp": 58.4,
                "conditions": "Rain",
                "icon": "rain",
                "hours": [
                    {"datetime": "00:00:00", "temp": 55.1, "humidity": 80.2,
                     "precipprob": 40, "windspeed": 7.5, "icon": "rain"},
                    {"datetime": "01:00:00", "temp": 54.0, "humidity": null, "windspeed": 6.0}
                ]
            }]
        }"#;

        let parsed: TlResponse = serde_json::from_str(json).unwrap();
        let days: Vec<DayRecord> = parsed
            .days
            .into_iter()
            .map(normalize_day)
            .collect::<Result<_>>()
            .unwrap();

        assert_eq!(days.len(), 1);
        let day = &days[0];
        assert_eq!(day.date, NaiveDate::from_ymd_opt(2026, 10, 23).unwrap());
        assert_eq!(day.temperature_f, 58.4);
        assert_eq!(day.icon, ConditionIcon::Rain);
        assert_eq!(day.hours.len(), 2);
        assert_eq!(day.hours[0].precip_prob_pct, 40.0);
        assert_eq!(day.hours[1].humidity_pct, 0.0);
        assert_eq!(day.hours[1].precip_prob_pct, 0.0);
    }

    #[test]
    fn missing_days_array_is_empty() {
        let parsed: TlResponse = serde_json::from_str(r#"{"address": "Nowhere"}"#).unwrap();
        assert!(parsed.days.is_empty());
    }

    #[test]
    fn unreadable_day_date_is_rejected() {
        let day = TlDay {
            datetime: "23/10/2026".into(),
            temp: None,
            icon: None,
            hours: None,
        };
        assert!(matches!(normalize_day(day), Err(ForecastError::InvalidDate(_))));
    }
}
