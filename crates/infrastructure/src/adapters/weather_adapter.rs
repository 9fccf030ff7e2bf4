//! Weather adapter - Implements WeatherPort using integration_wttr

use application::error::ApplicationError;
use application::ports::WeatherPort;
use async_trait::async_trait;
use domain::{WeatherQuery, WeatherViewModel};
use integration_wttr::{WeatherClient, WttrClient, WttrConfig, WttrError};
use tracing::{debug, instrument};

/// Adapter for the wttr.in JSON API
pub struct WttrWeatherAdapter {
    client: WttrClient,
}

impl std::fmt::Debug for WttrWeatherAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WttrWeatherAdapter")
            .field("client", &"WttrClient")
            .field("base_url", &self.client.config().base_url)
            .finish()
    }
}

impl WttrWeatherAdapter {
    /// Create a new adapter with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new() -> Result<Self, ApplicationError> {
        Self::with_config(WttrConfig::default())
    }

    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: WttrConfig) -> Result<Self, ApplicationError> {
        let client = WttrClient::new(config).map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }

    /// Map integration weather error to application error
    fn map_error(err: WttrError) -> ApplicationError {
        match err {
            WttrError::ConnectionFailed(e)
            | WttrError::RequestFailed(e)
            | WttrError::ServiceUnavailable(e) => ApplicationError::NetworkFailure(e),
            WttrError::RateLimitExceeded => {
                ApplicationError::NetworkFailure("rate limit exceeded".into())
            },
            WttrError::ParseError(e) | WttrError::MalformedResponse(e) => {
                ApplicationError::MalformedResponse(e)
            },
            WttrError::ClientInit(e) => ApplicationError::Internal(e),
            WttrError::Domain(e) => ApplicationError::Domain(e),
        }
    }
}

#[async_trait]
impl WeatherPort for WttrWeatherAdapter {
    fn query_for(&self, location: &str) -> Result<WeatherQuery, ApplicationError> {
        self.client.query_for(location).map_err(Self::map_error)
    }

    #[instrument(skip(self, query), fields(url = %query.request_url()))]
    async fn fetch_weather(
        &self,
        query: &WeatherQuery,
    ) -> Result<WeatherViewModel, ApplicationError> {
        let result = self.client.get_weather(query).await.map_err(Self::map_error);

        match &result {
            Ok(view) => {
                debug!(
                    area = %view.area_name,
                    dominant = %view.dominant,
                    "Retrieved weather"
                );
            },
            Err(e) => {
                debug!(error = %e, "Failed to get weather");
            },
        }

        result
    }
}
