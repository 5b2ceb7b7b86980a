use crate::{Config, error::Result, model::DayRecord, provider::timeline::TimelineProvider};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::fmt::Debug;

pub mod timeline;

/// Source of normalized day records for a location and an inclusive date range.
#[async_trait]
pub trait DayProvider: Send + Sync + Debug {
    /// Returns one entry per day the provider knows about; may be empty.
    async fn fetch_days(
        &self,
        location: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<DayRecord>>;
}

/// Construct the timeline provider from config.
///
/// Fails with a configuration error before any request is made when the
/// base URL or key is missing.
pub fn provider_from_config(config: &Config) -> Result<Box<dyn DayProvider>> {
    let endpoint = config.endpoint()?;
    Ok(Box::new(TimelineProvider::new(endpoint)))
}
