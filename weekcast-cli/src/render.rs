//! Plain-text day cards.

use std::fmt::Write;

use weekcast_core::{DayView, ErrorCategory, format::format_hour_label};

pub fn render_views(views: &[DayView<'_>]) -> String {
    views.iter().map(render_day).collect::<Vec<_>>().join("\n")
}

pub fn render_day(view: &DayView<'_>) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{} [{}] {:.0}°F",
        view.heading, view.icon, view.temperature_f
    );
    if let Some(humidity) = view.humidity_pct {
        let _ = writeln!(
            out,
            "  Humidity {humidity:.0}%  Max rain chance {:.0}%",
            view.max_rain_chance
        );
    }

    if view.window.is_empty() {
        let _ = writeln!(out, "  (no hourly data in this window)");
    }
    for hour in view.window {
        let label = format_hour_label(&hour.timestamp)
            .unwrap_or_else(|| hour.timestamp.clone());
        let _ = writeln!(
            out,
            "  {label:>5}  {:>5.1}°F  {:>3.0}% hum  {:>3.0}% rain  {:>4.1} mph",
            hour.temperature_f, hour.humidity_pct, hour.precip_prob_pct, hour.wind_speed_mph
        );
    }

    match (view.selected_range, view.stats, view.advice) {
        (Some(range), Some(stats), Some(advice)) => {
            let _ = writeln!(
                out,
                "  Selected Time Range ({} - {})",
                range.start_label, range.end_label
            );
            let _ = writeln!(out, "    {}°F - {}°F", stats.min_temp, stats.max_temp);
            let _ = writeln!(
                out,
                "    Humidity: {}% - {}%",
                stats.min_humidity, stats.max_humidity
            );
            let _ = writeln!(
                out,
                "    Rain Chance: {}% - {}%",
                stats.min_rain_chance, stats.max_rain_chance
            );
            let _ = writeln!(
                out,
                "    Wind Speed: {} mph - {} mph",
                stats.min_wind, stats.max_wind
            );
            let _ = writeln!(
                out,
                "    [{}] {}",
                advice.rain.as_str(),
                advice.rain.message()
            );
            let _ = writeln!(
                out,
                "    [{}] {}",
                advice.wind.as_str(),
                advice.wind.message()
            );
            let _ = writeln!(
                out,
                "    [{}] {}",
                advice.temperature.as_str(),
                advice.temperature.message()
            );
        }
        (Some(range), _, _) => {
            let _ = writeln!(
                out,
                "  No hours in {} - {}",
                range.start_label, range.end_label
            );
        }
        _ => {
            let _ = writeln!(
                out,
                "  Select a time range (e.g. --range 2PM-6PM) to see forecast details"
            );
        }
    }

    out
}

/// One-line description of a failed fetch, led by what kind of failure it was.
pub fn failure_message(category: ErrorCategory, message: &str) -> String {
    let heading = match category {
        ErrorCategory::Config => "Configuration problem",
        ErrorCategory::Network => "Could not reach the weather service",
        ErrorCategory::Data => "The weather service sent unusable data",
        ErrorCategory::Validation => "Invalid request",
    };
    format!("{heading}: {message}")
}
