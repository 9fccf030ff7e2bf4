//! Render pipeline
//!
//! Turns the current view model and the search history into the three text
//! panels of the page. Rendering is pure; printing is left to the caller.

use std::fmt;

use domain::{SearchHistory, WeatherSeries, WeatherViewModel};

/// Shown in the current panel before the first successful search
pub const NO_VIEW_PLACEHOLDER: &str = "Choose a location to view the weather";

/// Shown in the history panel while it is empty
pub const NO_HISTORY_PLACEHOLDER: &str = "No previous searches";

const HISTORY_HEADING: &str = "Previous Searches";

/// The three panels of the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    pub current: String,
    pub upcoming: String,
    pub history: String,
}

impl fmt::Display for RenderedPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.current)?;
        if !self.upcoming.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.upcoming)?;
        }
        writeln!(f)?;
        write!(f, "{}", self.history)
    }
}

/// Render every panel
#[must_use]
pub fn render(current: Option<&WeatherViewModel>, history: &SearchHistory) -> RenderedPage {
    RenderedPage {
        current: current.map_or_else(|| NO_VIEW_PLACEHOLDER.to_string(), render_current),
        upcoming: current.map(render_upcoming).unwrap_or_default(),
        history: render_history(history),
    }
}

/// Current conditions panel
#[must_use]
pub fn render_current(view: &WeatherViewModel) -> String {
    let mut lines = vec![
        view.query_location.clone(),
        format!("{}: {}", view.area_label, view.area_name),
        format!("[{}] {}", view.dominant.icon(), view.dominant.alt_text()),
        format!("Region: {}", view.region),
        format!("Country: {}", view.country),
        format!("Currently: Feels Like {}°F", view.feels_like_temp_f),
    ];
    lines.extend(WeatherSeries::ALL.iter().map(|series| {
        format!(
            "Chance of {}: {}",
            series.label(),
            view.chances.get(*series)
        )
    }));
    lines.join("\n")
}

/// Three-day forecast panel
#[must_use]
pub fn render_upcoming(view: &WeatherViewModel) -> String {
    view.days
        .iter()
        .map(|day| {
            format!(
                "{}\nAverage Temperature: {}°F\nMax Temperature: {}°F\nMinimum Temperature: {}°F",
                day.name, day.average_temp_f, day.max_temp_f, day.min_temp_f
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// History sidebar, numbered from 1
#[must_use]
pub fn render_history(history: &SearchHistory) -> String {
    if history.is_empty() {
        return format!("{HISTORY_HEADING}\n{NO_HISTORY_PLACEHOLDER}");
    }

    let entries = history
        .list()
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            format!(
                "{}. {} - {}°F",
                i + 1,
                entry.display_label,
                entry.feels_like_temp_f
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    format!("{HISTORY_HEADING}\n{entries}")
}
