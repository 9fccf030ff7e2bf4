//! View model builder
//!
//! Normalizes a `format=j1` response into a [`WeatherViewModel`].

use domain::{AreaLabel, DayForecast, DayName, HourlySample, WeatherViewModel, classify};

use crate::client::WttrError;
use crate::models::{ApiResponse, HourlyData, NamedValue, WeatherDay};

/// Build the view model for one lookup
///
/// Only the first element of `current_condition` and `nearest_area` is
/// read, and only the first three `weather` days. Extra days are ignored.
///
/// # Errors
///
/// Returns `MalformedResponse` if a required array is empty, a field is
/// missing, or a number does not parse.
pub fn build_view_model(
    response: &ApiResponse,
    query_location: &str,
    request_url: &str,
) -> Result<WeatherViewModel, WttrError> {
    let current = first(&response.current_condition, "current_condition")?;
    let area = first(&response.nearest_area, "nearest_area")?;

    let area_name = first_value(&area.area_name, "nearest_area[0].areaName")?;
    let region = first_value(&area.region, "nearest_area[0].region")?;
    let country = first_value(&area.country, "nearest_area[0].country")?;
    let feels_like_temp_f = parse_temp(
        current.feels_like_f.as_deref(),
        "current_condition[0].FeelsLikeF",
    )?;

    let [today, tomorrow, day_after, ..] = response.weather.as_slice() else {
        return Err(WttrError::MalformedResponse(format!(
            "expected at least 3 forecast days, got {}",
            response.weather.len()
        )));
    };

    let samples = hourly_samples(&today.hourly)?;
    let (chances, dominant) = classify(&samples)?;

    let [today_name, tomorrow_name, day_after_name] = DayName::ORDER;
    let days = [
        day_forecast(today_name, today, 0)?,
        day_forecast(tomorrow_name, tomorrow, 1)?,
        day_forecast(day_after_name, day_after, 2)?,
    ];

    Ok(WeatherViewModel {
        query_location: query_location.to_string(),
        area_label: AreaLabel::for_query(query_location, area_name),
        area_name: area_name.to_string(),
        region: region.to_string(),
        country: country.to_string(),
        feels_like_temp_f,
        chances,
        dominant,
        days,
        request_url: request_url.to_string(),
    })
}

fn first<'a, T>(items: &'a [T], field: &str) -> Result<&'a T, WttrError> {
    items
        .first()
        .ok_or_else(|| WttrError::MalformedResponse(format!("{field} is empty")))
}

fn first_value<'a>(items: &'a [NamedValue], field: &str) -> Result<&'a str, WttrError> {
    first(items, field).map(|named| named.value.as_str())
}

fn parse_temp(value: Option<&str>, field: &str) -> Result<i32, WttrError> {
    let raw = value.ok_or_else(|| WttrError::MalformedResponse(format!("{field} is missing")))?;
    raw.trim().parse().map_err(|_| {
        WttrError::MalformedResponse(format!("{field} is not a whole number: {raw:?}"))
    })
}

fn parse_chance(value: Option<&str>, field: &str) -> Result<u8, WttrError> {
    let raw = value.ok_or_else(|| WttrError::MalformedResponse(format!("{field} is missing")))?;
    raw.trim().parse().map_err(|_| {
        WttrError::MalformedResponse(format!("{field} is not a percentage: {raw:?}"))
    })
}

fn hourly_samples(hourly: &[HourlyData]) -> Result<Vec<HourlySample>, WttrError> {
    if hourly.is_empty() {
        return Err(WttrError::MalformedResponse(
            "weather[0].hourly is empty".to_string(),
        ));
    }

    hourly
        .iter()
        .enumerate()
        .map(|(i, hour)| {
            let sunshine = parse_chance(
                hour.chance_of_sunshine.as_deref(),
                &format!("weather[0].hourly[{i}].chanceofsunshine"),
            )?;
            let rain = parse_chance(
                hour.chance_of_rain.as_deref(),
                &format!("weather[0].hourly[{i}].chanceofrain"),
            )?;
            let snow = parse_chance(
                hour.chance_of_snow.as_deref(),
                &format!("weather[0].hourly[{i}].chanceofsnow"),
            )?;
            HourlySample::new(sunshine, rain, snow)
                .map_err(|e| WttrError::MalformedResponse(format!("weather[0].hourly[{i}]: {e}")))
        })
        .collect()
}

fn day_forecast(name: DayName, day: &WeatherDay, index: usize) -> Result<DayForecast, WttrError> {
    Ok(DayForecast {
        name,
        average_temp_f: parse_temp(
            day.avg_temp_f.as_deref(),
            &format!("weather[{index}].avgtempF"),
        )?,
        max_temp_f: parse_temp(
            day.max_temp_f.as_deref(),
            &format!("weather[{index}].maxtempF"),
        )?,
        min_temp_f: parse_temp(
            day.min_temp_f.as_deref(),
            &format!("weather[{index}].mintempF"),
        )?,
    })
}
