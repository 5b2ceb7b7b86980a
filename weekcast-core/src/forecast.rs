use chrono::{Local, NaiveDate};
use log::debug;

use crate::{
    Config,
    dates::select_comparison_dates,
    error::{ForecastError, Result},
    model::{DayRecord, ForecastPair},
    provider::{DayProvider, provider_from_config},
    sequence::RequestTicket,
};

/// Fetches the two comparison days for a location.
#[derive(Debug)]
pub struct ForecastClient {
    provider: Box<dyn DayProvider>,
}

impl ForecastClient {
    pub fn new(provider: Box<dyn DayProvider>) -> Self {
        Self { provider }
    }

    /// Build a client against the configured timeline endpoint.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(provider_from_config(config)?))
    }

    /// Fetch this week's `target_weekday` and the same day next week, relative
    /// to today's local date.
    pub async fn fetch_forecast_pair(
        &self,
        location: &str,
        target_weekday: u8,
    ) -> Result<ForecastPair> {
        let today = Local::now().date_naive();
        self.fetch_forecast_pair_on(today, location, target_weekday)
            .await
    }

    /// Same as [`fetch_forecast_pair`](Self::fetch_forecast_pair) with an explicit "today".
    ///
    /// Both days are requested concurrently. The first failure wins and the
    /// other result is discarded; there is never a partial pair.
    pub async fn fetch_forecast_pair_on(
        &self,
        today: NaiveDate,
        location: &str,
        target_weekday: u8,
    ) -> Result<ForecastPair> {
        let (first, second) = select_comparison_dates(today, target_weekday)?;
        debug!("comparing {location} on {first} and {second}");

        let (first_day, second_day) = tokio::try_join!(
            self.fetch_single_day(location, first),
            self.fetch_single_day(location, second),
        )?;

        Ok(ForecastPair {
            first_day,
            second_day,
        })
    }

    /// Fetch a pair on behalf of `ticket`; resolves to `None` when a newer
    /// request was issued while this one was in flight.
    pub async fn fetch_forecast_pair_tracked(
        &self,
        ticket: &RequestTicket,
        location: &str,
        target_weekday: u8,
    ) -> Result<Option<ForecastPair>> {
        let result = self.fetch_forecast_pair(location, target_weekday).await;
        settle(ticket, result)
    }

    async fn fetch_single_day(&self, location: &str, date: NaiveDate) -> Result<DayRecord> {
        let days = self.provider.fetch_days(location, date, date).await?;
        days.into_iter().next().ok_or(ForecastError::Data { date })
    }
}

fn settle(ticket: &RequestTicket, result: Result<ForecastPair>) -> Result<Option<ForecastPair>> {
    if !ticket.is_current() {
        debug!("dropping stale forecast result for request #{}", ticket.seq());
        return Ok(None);
    }
    result.map(Some)
}
