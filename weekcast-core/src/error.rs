use chrono::NaiveDate;
use reqwest::StatusCode;
use thiserror::Error;

/// Coarse classification used by front-ends to decide how to present a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Missing or unusable endpoint/credential; fix the configuration and retry.
    Config,
    /// Transport failure or non-success HTTP status.
    Network,
    /// The provider answered but the payload was empty or malformed.
    Data,
    /// The caller passed an argument outside its contract.
    Validation,
}

#[derive(Debug, Error)]
pub enum ForecastError {
    #[error("{0}")]
    Config(String),

    #[error("weather provider request failed with status {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// Never carries the request URL, which holds the API key.
    #[error("failed to reach weather provider: {0}")]
    Transport(reqwest::Error),

    #[error("weather provider returned no forecast data for {date}")]
    Data { date: NaiveDate },

    #[error("failed to parse weather provider JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("weather provider returned an unreadable date: {0}")]
    InvalidDate(String),

    #[error("weekday {0} is out of range, expected 0 (Sunday) through 6 (Saturday)")]
    InvalidWeekday(u8),

    #[error("comparison dates after {0} fall outside the supported calendar")]
    DateOutOfRange(NaiveDate),
}

impl ForecastError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ForecastError::Config(_) => ErrorCategory::Config,
            ForecastError::Status { .. } | ForecastError::Transport(_) => ErrorCategory::Network,
            ForecastError::Data { .. }
            | ForecastError::Parse(_)
            | ForecastError::InvalidDate(_) => ErrorCategory::Data,
            ForecastError::InvalidWeekday(_) | ForecastError::DateOutOfRange(_) => {
                ErrorCategory::Validation
            }
        }
    }

    pub(crate) fn status(status: StatusCode, body: &str) -> Self {
        ForecastError::Status {
            status,
            body: truncate_body(body),
        }
    }

    pub(crate) fn transport(err: reqwest::Error) -> Self {
        ForecastError::Transport(err.without_url())
    }
}

pub type Result<T> = std::result::Result<T, ForecastError>;

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        let mut cut = MAX;
        while !body.is_char_boundary(cut) {
            cut -= 1;
        }
        format!("{}...", &body[..cut])
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_follow_taxonomy() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 23).unwrap();

        assert_eq!(
            ForecastError::Config("x".into()).category(),
            ErrorCategory::Config
        );
        assert_eq!(
            ForecastError::status(StatusCode::UNAUTHORIZED, "bad key").category(),
            ErrorCategory::Network
        );
        assert_eq!(ForecastError::Data { date }.category(), ErrorCategory::Data);
        assert_eq!(
            ForecastError::InvalidWeekday(9).category(),
            ErrorCategory::Validation
        );
    }

    #[test]
    fn status_error_keeps_code_and_truncates_body() {
        let long = "x".repeat(500);
        let err = ForecastError::status(StatusCode::BAD_REQUEST, &long);

        let ForecastError::Status { status, body } = &err else {
            panic!("expected status error");
        };
        assert_eq!(*status, StatusCode::BAD_REQUEST);
        assert_eq!(body.len(), 203);
        assert!(err.to_string().contains("400"));
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let body = "é".repeat(150);
        let truncated = truncate_body(&body);
        assert!(truncated.ends_with("..."));
    }

    #[test]
    fn data_error_names_the_date() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 30).unwrap();
        let err = ForecastError::Data { date };
        assert!(err.to_string().contains("2026-10-30"));
    }
}
