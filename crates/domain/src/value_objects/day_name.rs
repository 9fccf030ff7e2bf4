//! Names of the three forecast days

use serde::{Deserialize, Serialize};

/// Position of a day in the short-range forecast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayName {
    Today,
    Tomorrow,
    DayAfterTomorrow,
}

impl DayName {
    /// Forecast days in display order
    pub const ORDER: [Self; 3] = [Self::Today, Self::Tomorrow, Self::DayAfterTomorrow];

    /// Heading shown above the day's forecast
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Today => "Today",
            Self::Tomorrow => "Tomorrow",
            Self::DayAfterTomorrow => "Day After Tomorrow",
        }
    }
}

impl std::fmt::Display for DayName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
