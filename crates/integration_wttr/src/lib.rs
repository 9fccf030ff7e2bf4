//! wttr.in weather integration
//!
//! Client for the wttr.in JSON API (<https://wttr.in>) and the builder that
//! turns its `format=j1` response into a [`domain::WeatherViewModel`].

pub mod client;
mod models;
mod view_model;

pub use client::{WeatherClient, WttrClient, WttrConfig, WttrError};
pub use models::{ApiResponse, CurrentCondition, HourlyData, NamedValue, NearestArea, WeatherDay};
pub use view_model::build_view_model;
