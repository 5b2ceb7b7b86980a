//! Core library for the `weekcast` CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - Selection of the two comparison dates (a weekday this week and next week)
//! - A client for the timeline forecast API, fetching both days concurrently
//! - The 8-hour chart window and min/max statistics over a selected hour range
//! - An explicit dashboard state that ties these together for a front-end
//!
//! It is used by `weekcast-cli`, but can also be reused by other front-ends.

pub mod config;
pub mod dashboard;
pub mod dates;
pub mod error;
pub mod forecast;
pub mod format;
pub mod model;
pub mod provider;
pub mod sequence;
pub mod stats;
pub mod window;

pub use config::{Config, Endpoint};
pub use dashboard::{Dashboard, DayView, FetchOutcome, LoadState};
pub use dates::select_comparison_dates;
pub use error::{ErrorCategory, ForecastError};
pub use forecast::ForecastClient;
pub use model::{ConditionIcon, DayRecord, ForecastPair, HourRecord, SelectedRange};
pub use provider::DayProvider;
pub use sequence::{RequestSequencer, RequestTicket};
pub use stats::{Advice, RangeStats, compute_range_stats};
pub use window::{DisplayWindow, TimePeriod, WINDOW_SIZE, visible_slice};
