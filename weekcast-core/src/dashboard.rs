//! Explicit application state for the comparison dashboard.
//!
//! Front-ends mutate a [`Dashboard`] through its methods and render whatever
//! [`Dashboard::day_views`] returns. Every derived value is recomputed from the
//! current state by the pure functions in `window` and `stats`.

use chrono::NaiveDate;
use log::debug;
use serde::Serialize;

use crate::{
    dates::weekday_from_number,
    error::{ErrorCategory, Result},
    forecast::ForecastClient,
    format::format_day_heading,
    model::{DayRecord, ForecastPair, HourRecord, SelectedRange},
    sequence::{RequestSequencer, RequestTicket},
    stats::{Advice, RangeStats, compute_range_stats},
    window::{DisplayWindow, TimePeriod, clamp_window_start, max_window_start},
};

/// Hours assumed on the slider before any forecast has loaded.
const DEFAULT_DAY_LENGTH: usize = 24;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading,
    Ready,
    Failed {
        category: ErrorCategory,
        message: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    Applied,
    /// A newer request was issued after this one; the result was dropped.
    Stale,
}

/// Everything a card and its chart need for one day.
#[derive(Debug, Clone, Serialize)]
pub struct DayView<'a> {
    pub heading: String,
    pub date: NaiveDate,
    pub icon: &'static str,
    pub temperature_f: f64,
    pub humidity_pct: Option<f64>,
    pub max_rain_chance: f64,
    pub window_start: usize,
    pub window: &'a [HourRecord],
    pub selected_range: Option<&'a SelectedRange>,
    pub stats: Option<RangeStats>,
    pub advice: Option<Advice>,
}

#[derive(Debug)]
pub struct Dashboard {
    location: String,
    weekday: u8,
    period: TimePeriod,
    window: DisplayWindow,
    selected_range: Option<SelectedRange>,
    forecast: Option<ForecastPair>,
    load_state: LoadState,
    sequencer: RequestSequencer,
}

impl Dashboard {
    pub fn new(location: impl Into<String>, weekday: u8) -> Result<Self> {
        weekday_from_number(weekday)?;
        let period = TimePeriod::default();
        let start = clamp_window_start(period.window_start(), DEFAULT_DAY_LENGTH);

        Ok(Self {
            location: location.into().trim().to_string(),
            weekday,
            period,
            window: DisplayWindow::new(start),
            selected_range: None,
            forecast: None,
            load_state: LoadState::Idle,
            sequencer: RequestSequencer::new(),
        })
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn weekday(&self) -> u8 {
        self.weekday
    }

    pub fn period(&self) -> TimePeriod {
        self.period
    }

    pub fn window_start(&self) -> usize {
        self.window.start_index
    }

    pub fn selected_range(&self) -> Option<&SelectedRange> {
        self.selected_range.as_ref()
    }

    pub fn forecast(&self) -> Option<&ForecastPair> {
        self.forecast.as_ref()
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    /// Change location. Blank input is ignored and returns `None`; otherwise a
    /// new fetch generation starts.
    pub fn set_location(&mut self, location: &str) -> Option<RequestTicket> {
        let location = location.trim();
        if location.is_empty() {
            return None;
        }
        self.location = location.to_string();
        Some(self.request_fetch())
    }

    pub fn set_weekday(&mut self, weekday: u8) -> Result<RequestTicket> {
        weekday_from_number(weekday)?;
        self.weekday = weekday;
        Ok(self.request_fetch())
    }

    /// Start a fetch generation. Results for older tickets will be dropped.
    pub fn request_fetch(&mut self) -> RequestTicket {
        self.load_state = LoadState::Loading;
        self.sequencer.issue()
    }

    /// Apply the outcome of the fetch started with `ticket`.
    ///
    /// Stale outcomes leave the state untouched. A failure clears the current
    /// pair and is returned to the caller after being recorded.
    pub fn apply_fetch(
        &mut self,
        ticket: &RequestTicket,
        result: Result<ForecastPair>,
    ) -> Result<FetchOutcome> {
        if !ticket.is_current() {
            debug!("ignoring forecast for superseded request #{}", ticket.seq());
            return Ok(FetchOutcome::Stale);
        }

        match result {
            Ok(pair) => {
                self.forecast = Some(pair);
                self.load_state = LoadState::Ready;
                self.window.start_index =
                    clamp_window_start(self.window.start_index, self.day_length());
                Ok(FetchOutcome::Applied)
            }
            Err(err) => {
                self.forecast = None;
                self.load_state = LoadState::Failed {
                    category: err.category(),
                    message: err.to_string(),
                };
                Err(err)
            }
        }
    }

    /// Run the fetch for `ticket` against the current location and weekday.
    pub async fn complete_fetch(
        &mut self,
        client: &ForecastClient,
        ticket: RequestTicket,
    ) -> Result<FetchOutcome> {
        let result = client
            .fetch_forecast_pair_tracked(&ticket, &self.location, self.weekday)
            .await;

        match result.transpose() {
            Some(result) => self.apply_fetch(&ticket, result),
            None => Ok(FetchOutcome::Stale),
        }
    }

    /// Fetch for the current location and weekday and apply the result.
    pub async fn refresh(&mut self, client: &ForecastClient) -> Result<FetchOutcome> {
        let ticket = self.request_fetch();
        self.complete_fetch(client, ticket).await
    }

    /// Jump the window to a period preset.
    pub fn set_period(&mut self, period: TimePeriod) {
        self.period = period;
        self.set_window_start(period.window_start());
    }

    /// Move the window, clamped to the slider range. Moving it clears the selected range.
    pub fn set_window_start(&mut self, start_index: usize) {
        let start = clamp_window_start(start_index, self.day_length());
        if start != self.window.start_index {
            self.window.start_index = start;
            self.selected_range = None;
        }
    }

    pub fn max_window_start(&self) -> usize {
        max_window_start(self.day_length())
    }

    pub fn select_range(&mut self, range: Option<SelectedRange>) {
        self.selected_range = range;
    }

    /// Card/chart views for both days, or `None` until a pair has loaded.
    pub fn day_views(&self) -> Option<[DayView<'_>; 2]> {
        let pair = self.forecast.as_ref()?;
        Some([
            self.day_view(&pair.first_day),
            self.day_view(&pair.second_day),
        ])
    }

    fn day_view<'a>(&'a self, day: &'a DayRecord) -> DayView<'a> {
        let selected_range = self.selected_range.as_ref();
        let stats = selected_range
            .and_then(|r| compute_range_stats(&day.hours, &r.start_label, &r.end_label));

        DayView {
            heading: format_day_heading(day.date),
            date: day.date,
            icon: day.icon.card_category(),
            temperature_f: day.temperature_f,
            humidity_pct: day.first_hour_humidity(),
            max_rain_chance: day.max_rain_chance(),
            window_start: self.window.start_index,
            window: self.window.slice(&day.hours),
            selected_range,
            stats,
            advice: stats.map(|s| s.advice()),
        }
    }

    /// Hours on the slider: the longer of the two loaded days.
    fn day_length(&self) -> usize {
        self.forecast.as_ref().map_or(DEFAULT_DAY_LENGTH, |pair| {
            pair.first_day.hours.len().max(pair.second_day.hours.len())
        })
    }
}
