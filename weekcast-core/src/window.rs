//! The 8-hour chart window and the time-of-day presets that position it.

use serde::{Deserialize, Serialize};

use crate::model::HourRecord;

pub const WINDOW_SIZE: usize = 8;

/// Up to [`WINDOW_SIZE`] hours starting at `start_index`; empty past the end.
pub fn visible_slice(hours: &[HourRecord], start_index: usize) -> &[HourRecord] {
    if start_index >= hours.len() {
        return &[];
    }
    let end = hours.len().min(start_index + WINDOW_SIZE);
    &hours[start_index..end]
}

/// Largest start index that still fills a whole window.
pub fn max_window_start(len: usize) -> usize {
    len.saturating_sub(WINDOW_SIZE)
}

pub fn clamp_window_start(start_index: usize, len: usize) -> usize {
    start_index.min(max_window_start(len))
}

/// Visible slice of an hours sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayWindow {
    pub start_index: usize,
    pub size: usize,
}

impl DisplayWindow {
    pub fn new(start_index: usize) -> Self {
        Self {
            start_index,
            size: WINDOW_SIZE,
        }
    }

    pub fn slice<'a>(&self, hours: &'a [HourRecord]) -> &'a [HourRecord] {
        visible_slice(hours, self.start_index)
    }
}

impl Default for DisplayWindow {
    fn default() -> Self {
        Self::new(0)
    }
}

/// Part of the day the chart window jumps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TimePeriod {
    EarlyMorning,
    Morning,
    #[default]
    Afternoon,
    Evening,
}

impl TimePeriod {
    pub const fn all() -> &'static [TimePeriod] {
        &[
            TimePeriod::EarlyMorning,
            TimePeriod::Morning,
            TimePeriod::Afternoon,
            TimePeriod::Evening,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimePeriod::EarlyMorning => "Early Morning",
            TimePeriod::Morning => "Morning",
            TimePeriod::Afternoon => "Afternoon",
            TimePeriod::Evening => "Evening",
        }
    }

    /// First hour shown when this period is selected.
    pub fn window_start(&self) -> usize {
        match self {
            TimePeriod::EarlyMorning => 0,
            TimePeriod::Morning => 6,
            TimePeriod::Afternoon => 12,
            TimePeriod::Evening => 18,
        }
    }
}

impl std::fmt::Display for TimePeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
