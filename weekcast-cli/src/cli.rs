use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use weekcast_core::{
    Config, Dashboard, ForecastClient, SelectedRange, TimePeriod, format::parse_hour_label,
};

use crate::{interactive, render};

pub const DEFAULT_LOCATION: &str = "Manhattan, NYC";

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum DayArg {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl DayArg {
    /// `0 = Sunday .. 6 = Saturday`.
    pub fn number(self) -> u8 {
        self as u8
    }
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum PeriodArg {
    EarlyMorning,
    Morning,
    Afternoon,
    Evening,
}

impl From<PeriodArg> for TimePeriod {
    fn from(value: PeriodArg) -> Self {
        match value {
            PeriodArg::EarlyMorning => TimePeriod::EarlyMorning,
            PeriodArg::Morning => TimePeriod::Morning,
            PeriodArg::Afternoon => TimePeriod::Afternoon,
            PeriodArg::Evening => TimePeriod::Evening,
        }
    }
}

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "weekcast",
    version,
    about = "Compare a weekday's forecast with the same day next week"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Configure the weather provider endpoint and API key.
    Configure,

    /// Fetch and print both forecast days once.
    Show {
        /// Address or location name. Defaults to the configured location.
        location: Option<String>,

        /// Day of week to compare.
        #[arg(long, value_enum, default_value_t = DayArg::Friday)]
        day: DayArg,

        /// Part of the day the 8-hour window starts at.
        #[arg(long, value_enum, default_value_t = PeriodArg::Afternoon)]
        period: PeriodArg,

        /// Explicit window start hour; overrides --period.
        #[arg(long)]
        start: Option<usize>,

        /// Hour range for statistics, e.g. "2PM-6PM".
        #[arg(long, value_parser = parse_range)]
        range: Option<SelectedRange>,

        /// Print JSON instead of cards.
        #[arg(long)]
        json: bool,
    },

    /// Interactive dashboard: change location, day, period, window and range.
    Dashboard {
        /// Address or location name. Defaults to the configured location.
        location: Option<String>,

        /// Day of week to compare.
        #[arg(long, value_enum, default_value_t = DayArg::Friday)]
        day: DayArg,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => interactive::configure(),
            Command::Show {
                location,
                day,
                period,
                start,
                range,
                json,
            } => {
                let config = Config::load()?.with_env_overrides();
                let location = resolve_location(location, &config);
                let client = ForecastClient::from_config(&config)?;

                let mut dashboard = Dashboard::new(location.clone(), day.number())?;
                dashboard.set_period(period.into());
                dashboard
                    .refresh(&client)
                    .await
                    .map_err(|err| {
                        anyhow::anyhow!(render::failure_message(
                            err.category(),
                            &err.to_string()
                        ))
                    })
                    .with_context(|| format!("Failed to fetch forecast for '{location}'"))?;

                if let Some(start) = start {
                    dashboard.set_window_start(start);
                }
                dashboard.select_range(range);

                let Some(views) = dashboard.day_views() else {
                    anyhow::bail!("No data available");
                };

                if json {
                    println!("{}", serde_json::to_string_pretty(&views)?);
                } else {
                    println!("{}", render::render_views(&views));
                }
                Ok(())
            }
            Command::Dashboard { location, day } => {
                let mut config = Config::load()?.with_env_overrides();
                if !config.is_configured() {
                    println!("No weather provider is configured yet.");
                    interactive::configure()?;
                    config = Config::load()?.with_env_overrides();
                }

                let location = resolve_location(location, &config);
                interactive::dashboard(&config, location, day.number()).await
            }
        }
    }
}

pub fn resolve_location(location: Option<String>, config: &Config) -> String {
    location
        .filter(|l| !l.trim().is_empty())
        .or_else(|| config.default_location.clone())
        .unwrap_or_else(|| DEFAULT_LOCATION.to_string())
}

/// Parse `"<label>-<label>"`, e.g. `"2PM-6PM"`. The range must end after it starts.
pub fn parse_range(value: &str) -> Result<SelectedRange, String> {
    let (start, end) = value
        .split_once('-')
        .ok_or_else(|| format!("expected START-END, e.g. 2PM-6PM, got '{value}'"))?;

    let start = parse_label(start)?;
    let end = parse_label(end)?;

    SelectedRange::from_hours(start, end)
        .ok_or_else(|| format!("range '{value}' must end after it starts"))
}

fn parse_label(label: &str) -> Result<usize, String> {
    let label = label.trim();
    parse_hour_label(label)
        .ok_or_else(|| format!("'{label}' is not an hour label like 12AM, 9AM or 2PM"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_defaults() {
        let cli = Cli::parse_from(["weekcast", "show"]);
        let Command::Show {
            location,
            day,
            period,
            start,
            range,
            json,
        } = cli.command
        else {
            panic!("expected show");
        };
        assert_eq!(location, None);
        assert_eq!(day, DayArg::Friday);
        assert_eq!(period, PeriodArg::Afternoon);
        assert_eq!(start, None);
        assert_eq!(range, None);
        assert!(!json);
    }

    #[test]
    fn show_parses_all_flags() {
        let cli = Cli::parse_from([
            "weekcast",
            "show",
            "Paris",
            "--day",
            "sunday",
            "--period",
            "early-morning",
            "--start",
            "3",
            "--range",
            "2am-6am",
            "--json",
        ]);
        let Command::Show {
            location,
            day,
            period,
            start,
            range,
            json,
        } = cli.command
        else {
            panic!("expected show");
        };
        assert_eq!(location.as_deref(), Some("Paris"));
        assert_eq!(day.number(), 0);
        assert_eq!(TimePeriod::from(period), TimePeriod::EarlyMorning);
        assert_eq!(start, Some(3));
        assert_eq!(range, Some(SelectedRange::new("2AM", "6AM")));
        assert!(json);
    }

    #[test]
    fn rejects_bad_range() {
        let err = Cli::try_parse_from(["weekcast", "show", "--range", "noon-6PM"])
            .expect_err("bad label");
        assert!(err.to_string().contains("noon"));

        assert!(parse_range("2PM").is_err());
    }

    #[test]
    fn range_labels_are_normalized_and_ordered() {
        let range = parse_range(" 14 - 6pm ").unwrap();
        assert_eq!(range, SelectedRange::new("2PM", "6PM"));

        let err = parse_range("6PM-2PM").unwrap_err();
        assert!(err.contains("must end after it starts"));
        assert!(parse_range("3PM-3PM").is_err());
    }

    #[test]
    fn rejects_unknown_day() {
        let parsed = Cli::try_parse_from(["weekcast", "show", "--day", "funday"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn day_numbers_start_at_sunday() {
        assert_eq!(DayArg::Sunday.number(), 0);
        assert_eq!(DayArg::Wednesday.number(), 3);
        assert_eq!(DayArg::Saturday.number(), 6);
    }

    #[test]
    fn location_falls_back_to_config_then_default() {
        let mut config = Config::default();
        assert_eq!(resolve_location(None, &config), DEFAULT_LOCATION);
        let blank = Some("  ".to_string());
        assert_eq!(resolve_location(blank, &config), DEFAULT_LOCATION);

        config.default_location = Some("Oslo".into());
        assert_eq!(resolve_location(None, &config), "Oslo");
        assert_eq!(resolve_location(Some("Paris".into()), &config), "Paris");
    }
}
