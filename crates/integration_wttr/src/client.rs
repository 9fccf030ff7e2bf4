//! wttr.in weather client
//!
//! HTTP client for the wttr.in JSON API.

use async_trait::async_trait;
use domain::{DomainError, LocationEncoding, WeatherQuery, WeatherViewModel};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::ApiResponse;
use crate::view_model::build_view_model;

/// Weather client errors
#[derive(Debug, Error)]
pub enum WttrError {
    /// HTTP client could not be built
    #[error("Client initialization failed: {0}")]
    ClientInit(String),

    /// Connection to the weather service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the weather service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Response body is not valid JSON
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Response is JSON but lacks required data
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Domain rule violated while building the view model
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Weather service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WttrConfig {
    /// wttr.in base URL (default: <https://wttr.in>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds (default: 10)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Percent-encode the location in the request path (default: false)
    #[serde(default)]
    pub encode_location: bool,
}

fn default_base_url() -> String {
    "https://wttr.in".to_string()
}

const fn default_timeout() -> u64 {
    10
}

impl Default for WttrConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            encode_location: false,
        }
    }
}

impl WttrConfig {
    /// Encoding applied to the location in request URLs
    #[must_use]
    pub const fn location_encoding(&self) -> LocationEncoding {
        if self.encode_location {
            LocationEncoding::Percent
        } else {
            LocationEncoding::Raw
        }
    }
}

/// Weather client trait for fetching weather data
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Build the query for a location typed by the user
    fn query_for(&self, location: &str) -> Result<WeatherQuery, WttrError>;

    /// Fetch the raw `format=j1` report from a fully-qualified URL
    async fn fetch_report(&self, request_url: &str) -> Result<ApiResponse, WttrError>;

    /// Fetch and normalize the weather for a query
    async fn get_weather(&self, query: &WeatherQuery) -> Result<WeatherViewModel, WttrError> {
        let report = self.fetch_report(query.request_url()).await?;
        build_view_model(&report, query.location(), query.request_url())
    }
}

/// wttr.in HTTP client implementation
#[derive(Debug)]
pub struct WttrClient {
    client: Client,
    config: WttrConfig,
}

impl WttrClient {
    /// Create a new wttr.in client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: WttrConfig) -> Result<Self, WttrError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WttrError::ClientInit(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Create a new client with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_defaults() -> Result<Self, WttrError> {
        Self::new(WttrConfig::default())
    }

    #[must_use]
    pub const fn config(&self) -> &WttrConfig {
        &self.config
    }
}

#[async_trait]
impl WeatherClient for WttrClient {
    fn query_for(&self, location: &str) -> Result<WeatherQuery, WttrError> {
        Ok(WeatherQuery::new(
            &self.config.base_url,
            location,
            self.config.location_encoding(),
        )?)
    }

    #[instrument(skip(self))]
    async fn fetch_report(&self, request_url: &str) -> Result<ApiResponse, WttrError> {
        debug!(url = %request_url, "Fetching weather report");

        let response = self
            .client
            .get(request_url)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    WttrError::ConnectionFailed(e.to_string())
                } else {
                    WttrError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(WttrError::RateLimitExceeded);
        }
        if status.is_server_error() {
            return Err(WttrError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(WttrError::RequestFailed(format!("HTTP {status}")));
        }

        response
            .json()
            .await
            .map_err(|e| WttrError::ParseError(e.to_string()))
    }
}
