//! Weather query - one location search and the request URL built from it

use serde::{Deserialize, Serialize};

use crate::entities::HistoryEntry;
use crate::errors::DomainError;

/// How the location is placed into the request path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationEncoding {
    /// Interpolate the input as typed
    #[default]
    Raw,
    /// Percent-encode the input
    Percent,
}

/// A single location search
///
/// Immutable once built. The request URL doubles as the history key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeatherQuery {
    location: String,
    request_url: String,
}

impl WeatherQuery {
    /// Response format requested from wttr.in
    pub const FORMAT: &'static str = "j1";

    /// Build a query for `location` against `base_url`
    ///
    /// The location is kept exactly as typed for display and for the area
    /// label comparison; only the URL form depends on `encoding`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the location is blank.
    pub fn new(
        base_url: &str,
        location: impl Into<String>,
        encoding: LocationEncoding,
    ) -> Result<Self, DomainError> {
        let location = location.into();
        if location.trim().is_empty() {
            return Err(DomainError::ValidationError(
                "location must not be empty".to_string(),
            ));
        }

        let path = match encoding {
            LocationEncoding::Raw => location.clone(),
            LocationEncoding::Percent => urlencoding::encode(&location).into_owned(),
        };
        let request_url = format!(
            "{}/{path}?format={}",
            base_url.trim_end_matches('/'),
            Self::FORMAT
        );

        Ok(Self {
            location,
            request_url,
        })
    }

    /// Rebuild the query a history entry was recorded from
    #[must_use]
    pub fn from_history(entry: &HistoryEntry) -> Self {
        Self {
            location: entry.display_label.clone(),
            request_url: entry.request_url.clone(),
        }
    }

    /// Location as the user typed it
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Fully-qualified request URL
    #[must_use]
    pub fn request_url(&self) -> &str {
        &self.request_url
    }
}
