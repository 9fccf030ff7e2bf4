//! Weather lookup service
//!
//! Runs the search -> fetch -> display cycle, keeps the search history and
//! the currently displayed view. Every lookup takes a sequence token before
//! it fetches; a response whose token is older than the displayed view is
//! recorded in the history but not displayed.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use domain::{HistoryState, SearchHistory, WeatherQuery, WeatherViewModel};
use parking_lot::Mutex;
use tracing::{debug, info, instrument, warn};

use crate::error::ApplicationError;
use crate::ports::WeatherPort;

/// Result of one lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    /// The view is now on screen
    Displayed(WeatherViewModel),
    /// A newer lookup finished first; this view was discarded
    Stale(WeatherViewModel),
    /// The lookup failed externally; the previous view stays on screen
    Unchanged,
}

/// Copy of everything the renderer needs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageSnapshot {
    pub current: Option<WeatherViewModel>,
    pub history: SearchHistory,
}

#[derive(Debug)]
struct DisplayedView {
    token: u64,
    view: WeatherViewModel,
}

#[derive(Debug, Default)]
struct PageState {
    history: SearchHistory,
    current: Option<DisplayedView>,
}

/// Weather lookup use case
pub struct WeatherLookupService {
    weather: Arc<dyn WeatherPort>,
    state: Mutex<PageState>,
    last_token: AtomicU64,
}

impl std::fmt::Debug for WeatherLookupService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherLookupService")
            .field("weather", &"WeatherPort")
            .field("last_token", &self.last_token.load(Ordering::SeqCst))
            .finish_non_exhaustive()
    }
}

impl WeatherLookupService {
    pub fn new(weather: Arc<dyn WeatherPort>) -> Self {
        Self {
            weather,
            state: Mutex::new(PageState::default()),
            last_token: AtomicU64::new(0),
        }
    }

    /// Search for a location typed by the user
    ///
    /// # Errors
    ///
    /// Returns a validation error for a blank location and any error that is
    /// not an external failure (see [`ApplicationError::is_external`]).
    #[instrument(skip(self))]
    pub async fn search(&self, location: &str) -> Result<LookupOutcome, ApplicationError> {
        let query = self.weather.query_for(location)?;
        self.run(query).await
    }

    /// Replay the history entry stored under `key`
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no entry has that key.
    #[instrument(skip(self))]
    pub async fn replay(&self, key: &str) -> Result<LookupOutcome, ApplicationError> {
        let query = {
            let state = self.state.lock();
            WeatherQuery::from_history(state.history.select(key)?)
        };
        self.run(query).await
    }

    /// Replay the history entry at a 1-based sidebar position
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the position is out of range.
    pub async fn replay_at(&self, position: usize) -> Result<LookupOutcome, ApplicationError> {
        let key = {
            let state = self.state.lock();
            state.history.entry_at(position)?.key().to_string()
        };
        self.replay(&key).await
    }

    /// Currently displayed view, if any
    pub fn current(&self) -> Option<WeatherViewModel> {
        self.state
            .lock()
            .current
            .as_ref()
            .map(|displayed| displayed.view.clone())
    }

    /// Snapshot of the search history
    pub fn history(&self) -> SearchHistory {
        self.state.lock().history.clone()
    }

    pub fn history_state(&self) -> HistoryState {
        self.state.lock().history.state()
    }

    /// Consistent copy of the current view and the history
    pub fn snapshot(&self) -> PageSnapshot {
        let state = self.state.lock();
        PageSnapshot {
            current: state.current.as_ref().map(|displayed| displayed.view.clone()),
            history: state.history.clone(),
        }
    }

    async fn run(&self, query: WeatherQuery) -> Result<LookupOutcome, ApplicationError> {
        let token = self.last_token.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(token, url = %query.request_url(), "Starting weather lookup");

        match self.weather.fetch_weather(&query).await {
            Ok(view) => Ok(self.apply(token, view)),
            Err(e) if e.is_external() => {
                warn!(
                    token,
                    url = %query.request_url(),
                    error = %e,
                    "Weather lookup failed, keeping previous view"
                );
                Ok(LookupOutcome::Unchanged)
            },
            Err(e) => Err(e),
        }
    }

    fn apply(&self, token: u64, view: WeatherViewModel) -> LookupOutcome {
        let mut state = self.state.lock();

        if state.history.append(view.history_entry()) {
            debug!(label = %view.query_location, "Added search to history");
        }

        if let Some(displayed) = &state.current
            && displayed.token > token
        {
            debug!(
                token,
                displayed = displayed.token,
                "Discarding stale weather response"
            );
            return LookupOutcome::Stale(view);
        }

        info!(
            token,
            location = %view.query_location,
            area = %view.area_name,
            feels_like_f = view.feels_like_temp_f,
            "Displaying weather"
        );
        state.current = Some(DisplayedView {
            token,
            view: view.clone(),
        });
        LookupOutcome::Displayed(view)
    }
}
