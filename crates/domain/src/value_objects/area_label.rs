//! Area label shown next to the resolved area name

use serde::{Deserialize, Serialize};

/// Whether the resolved area is the one the user typed or only the nearest match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AreaLabel {
    /// The query matches the resolved area name exactly
    Area,
    /// The API resolved the query to a differently named area
    NearestArea,
}

impl AreaLabel {
    /// Compare the raw query with the resolved area name
    ///
    /// The comparison is exact and case-sensitive, so "seattle" resolving to
    /// "Seattle" is labelled [`AreaLabel::NearestArea`].
    #[must_use]
    pub fn for_query(query_location: &str, area_name: &str) -> Self {
        if query_location == area_name {
            Self::Area
        } else {
            Self::NearestArea
        }
    }

    /// Display text
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Area => "Area",
            Self::NearestArea => "Nearest Area",
        }
    }
}

impl std::fmt::Display for AreaLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
