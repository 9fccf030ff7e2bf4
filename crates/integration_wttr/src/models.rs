//! wttr.in response models
//!
//! Mirrors the parts of the `format=j1` payload that the view model needs.
//! wttr.in encodes every scalar as a string. Fields are optional and arrays
//! default to empty so that a short or partial payload still deserializes
//! and is rejected by the builder with a precise message.

use serde::Deserialize;

/// `{ "value": "..." }` wrapper used for names and descriptions
#[derive(Debug, Clone, Deserialize)]
pub struct NamedValue {
    pub value: String,
}

/// Entry of `current_condition`
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentCondition {
    #[serde(rename = "FeelsLikeF", default)]
    pub feels_like_f: Option<String>,
}

/// Entry of `nearest_area`
#[derive(Debug, Clone, Deserialize)]
pub struct NearestArea {
    #[serde(rename = "areaName", default)]
    pub area_name: Vec<NamedValue>,
    #[serde(default)]
    pub region: Vec<NamedValue>,
    #[serde(default)]
    pub country: Vec<NamedValue>,
}

/// Entry of `weather`, one per forecast day
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherDay {
    #[serde(rename = "avgtempF", default)]
    pub avg_temp_f: Option<String>,
    #[serde(rename = "maxtempF", default)]
    pub max_temp_f: Option<String>,
    #[serde(rename = "mintempF", default)]
    pub min_temp_f: Option<String>,
    #[serde(default)]
    pub hourly: Vec<HourlyData>,
}

/// Entry of `weather[].hourly`
#[derive(Debug, Clone, Deserialize)]
pub struct HourlyData {
    #[serde(rename = "chanceofsunshine", default)]
    pub chance_of_sunshine: Option<String>,
    #[serde(rename = "chanceofrain", default)]
    pub chance_of_rain: Option<String>,
    #[serde(rename = "chanceofsnow", default)]
    pub chance_of_snow: Option<String>,
}

/// Raw API response
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse {
    #[serde(default)]
    pub current_condition: Vec<CurrentCondition>,
    #[serde(default)]
    pub nearest_area: Vec<NearestArea>,
    #[serde(default)]
    pub weather: Vec<WeatherDay>,
}
