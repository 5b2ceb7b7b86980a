//! Interactive flows: provider configuration and the dashboard loop.

use std::fmt;

use anyhow::Result;
use inquire::{CustomType, InquireError, Password, PasswordDisplayMode, Select, Text};
use log::info;
use weekcast_core::{
    Config, Dashboard, ForecastClient, LoadState, RequestTicket, TimePeriod,
    config::DEFAULT_BASE_URL, dates::WEEKDAY_NAMES,
};

use crate::{cli::parse_range, render};

/// Prompt for endpoint, key and default location, then persist them.
pub fn configure() -> Result<()> {
    let mut config = Config::load()?;

    let base_url = Text::new("API base URL:")
        .with_default(config.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL))
        .prompt()?;

    let api_key = Password::new("API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()?;

    let location = Text::new("Default location (optional):")
        .with_default(config.default_location.as_deref().unwrap_or(""))
        .prompt()?;

    config.set_endpoint(base_url, api_key);
    config.default_location = Some(location.trim().to_string()).filter(|l| !l.is_empty());

    // Reject blank values before saving.
    config.endpoint()?;
    config.save()?;

    println!(
        "Configuration saved to {}",
        Config::config_file_path()?.display()
    );
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Location,
    Day,
    Period,
    Scroll,
    SelectRange,
    ClearRange,
    Refresh,
    Quit,
}

impl Action {
    const ALL: [Action; 8] = [
        Action::Location,
        Action::Day,
        Action::Period,
        Action::Scroll,
        Action::SelectRange,
        Action::ClearRange,
        Action::Refresh,
        Action::Quit,
    ];
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Action::Location => "Change location",
            Action::Day => "Change day",
            Action::Period => "Change time period",
            Action::Scroll => "Scroll hours",
            Action::SelectRange => "Select time range",
            Action::ClearRange => "Clear time range",
            Action::Refresh => "Refresh",
            Action::Quit => "Quit",
        })
    }
}

/// Run the dashboard until the user quits or cancels a prompt.
pub async fn dashboard(config: &Config, location: String, weekday: u8) -> Result<()> {
    let client = ForecastClient::from_config(config)?;
    let mut dash = Dashboard::new(location, weekday)?;

    let ticket = dash.request_fetch();
    fetch(&mut dash, &client, ticket).await;

    loop {
        show(&dash);

        let action = match Select::new("What next?", Action::ALL.to_vec()).prompt() {
            Ok(action) => action,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(err) => return Err(err.into()),
        };

        match action {
            Action::Location => {
                let location = Text::new("Location:")
                    .with_default(dash.location())
                    .prompt()?;
                if let Some(ticket) = dash.set_location(&location) {
                    fetch(&mut dash, &client, ticket).await;
                }
            }
            Action::Day => {
                let choice = Select::new("Day:", WEEKDAY_NAMES.to_vec())
                    .with_starting_cursor(dash.weekday() as usize)
                    .raw_prompt()?;
                let ticket = dash.set_weekday(choice.index as u8)?;
                fetch(&mut dash, &client, ticket).await;
            }
            Action::Period => {
                let period = Select::new("Time period:", TimePeriod::all().to_vec())
                    .prompt()?;
                dash.set_period(period);
            }
            Action::Scroll => {
                let max = dash.max_window_start();
                let start = CustomType::<usize>::new(&format!("First hour to show (0-{max}):"))
                    .with_default(dash.window_start())
                    .prompt()?;
                dash.set_window_start(start);
            }
            Action::SelectRange => {
                let raw = Text::new("Time range (e.g. 2PM-6PM):").prompt()?;
                match parse_range(&raw) {
                    Ok(range) => dash.select_range(Some(range)),
                    Err(msg) => eprintln!("{msg}"),
                }
            }
            Action::ClearRange => dash.select_range(None),
            Action::Refresh => {
                let ticket = dash.request_fetch();
                fetch(&mut dash, &client, ticket).await;
            }
            Action::Quit => break,
        }
    }

    Ok(())
}

async fn fetch(dash: &mut Dashboard, client: &ForecastClient, ticket: RequestTicket) {
    info!(
        "fetching forecast for {} (weekday {})",
        dash.location(),
        dash.weekday()
    );
    // Failures are recorded in the load state and shown by `show`.
    let _ = dash.complete_fetch(client, ticket).await;
}

fn show(dash: &Dashboard) {
    println!();
    println!(
        "{} | {} | {} | hours from {}",
        dash.location(),
        WEEKDAY_NAMES[dash.weekday() as usize],
        dash.period(),
        dash.window_start()
    );

    match dash.load_state() {
        LoadState::Idle | LoadState::Loading => println!("Loading..."),
        LoadState::Failed { category, message } => {
            eprintln!("{}", render::failure_message(*category, message))
        }
        LoadState::Ready => match dash.day_views() {
            Some(views) => println!("{}", render::render_views(&views)),
            None => println!("No data available"),
        },
    }
}
