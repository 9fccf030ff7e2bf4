//! Domain entities - Objects with identity and lifecycle

mod day_forecast;
mod search_history;
mod weather_query;
mod weather_view_model;

pub use day_forecast::DayForecast;
pub use search_history::{HistoryEntry, HistoryState, SearchHistory};
pub use weather_query::{LocationEncoding, WeatherQuery};
pub use weather_view_model::WeatherViewModel;
