//! Weather service port
//!
//! Defines the interface for weather data retrieval.

use async_trait::async_trait;
use domain::{WeatherQuery, WeatherViewModel};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for weather service operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherPort: Send + Sync {
    /// Build the query for a location as typed by the user
    fn query_for(&self, location: &str) -> Result<WeatherQuery, ApplicationError>;

    /// Fetch the weather for a query and normalize it into a view model
    ///
    /// Transport failures map to `NetworkFailure`, unusable payloads to
    /// `MalformedResponse`.
    async fn fetch_weather(
        &self,
        query: &WeatherQuery,
    ) -> Result<WeatherViewModel, ApplicationError>;
}
