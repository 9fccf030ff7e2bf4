//! Weather view model - the render-ready result of one lookup

use serde::{Deserialize, Serialize};

use crate::entities::{DayForecast, HistoryEntry};
use crate::value_objects::{AreaLabel, ConditionChances, DominantCondition};

/// Normalized weather data for one query
///
/// Always carries exactly three forecast days: today, tomorrow and the day
/// after, in that order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherViewModel {
    /// Location exactly as the user typed it
    pub query_location: String,
    /// "Area" or "Nearest Area", depending on how the query resolved
    pub area_label: AreaLabel,
    pub area_name: String,
    pub region: String,
    pub country: String,
    /// Current feels-like temperature in Fahrenheit
    pub feels_like_temp_f: i32,
    /// Today's average chances
    pub chances: ConditionChances,
    pub dominant: DominantCondition,
    pub days: [DayForecast; 3],
    /// URL the data was fetched from
    pub request_url: String,
}

impl WeatherViewModel {
    /// History entry recorded when this view is displayed
    #[must_use]
    pub fn history_entry(&self) -> HistoryEntry {
        HistoryEntry {
            display_label: self.query_location.clone(),
            request_url: self.request_url.clone(),
            feels_like_temp_f: self.feels_like_temp_f,
        }
    }
}
