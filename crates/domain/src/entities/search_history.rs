//! Search history - previously displayed lookups, replayable by selection

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A remembered search
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub display_label: String,
    pub request_url: String,
    pub feels_like_temp_f: i32,
}

impl HistoryEntry {
    /// Uniqueness key within a [`SearchHistory`]
    #[must_use]
    pub fn key(&self) -> &str {
        &self.request_url
    }
}

/// Externally visible state of the history sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HistoryState {
    /// Nothing searched yet; the placeholder is shown
    Empty,
    /// At least one entry; the placeholder is hidden
    NonEmpty,
}

/// Ordered, deduplicated list of past searches
///
/// Entries are only ever appended. Once non-empty the history stays
/// non-empty for the rest of the session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHistory {
    entries: Vec<HistoryEntry>,
}

impl SearchHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `entry` unless an entry with the same key already exists
    ///
    /// Returns `true` if the entry was inserted. A duplicate leaves the
    /// existing entry untouched and in place.
    pub fn append(&mut self, entry: HistoryEntry) -> bool {
        if self.contains(entry.key()) {
            return false;
        }
        self.entries.push(entry);
        true
    }

    /// Look up an entry by key without removing it
    pub fn select(&self, key: &str) -> Result<&HistoryEntry, DomainError> {
        self.entries
            .iter()
            .find(|entry| entry.key() == key)
            .ok_or_else(|| DomainError::not_found("History entry", key))
    }

    /// Look up an entry by its 1-based position in the sidebar
    pub fn entry_at(&self, position: usize) -> Result<&HistoryEntry, DomainError> {
        position
            .checked_sub(1)
            .and_then(|index| self.entries.get(index))
            .ok_or_else(|| DomainError::not_found("History entry", position.to_string()))
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.iter().any(|entry| entry.key() == key)
    }

    /// Entries in insertion order
    #[must_use]
    pub fn list(&self) -> &[HistoryEntry] {
        &self.entries
    }

    #[must_use]
    pub fn state(&self) -> HistoryState {
        if self.entries.is_empty() {
            HistoryState::Empty
        } else {
            HistoryState::NonEmpty
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(label: &str, feels_like: i32) -> HistoryEntry {
        HistoryEntry {
            display_label: label.to_string(),
            request_url: format!("https://wttr.in/{label}?format=j1"),
            feels_like_temp_f: feels_like,
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history = SearchHistory::new();
        assert_eq!(history.state(), HistoryState::Empty);
        assert!(history.list().is_empty());
    }

    #[test]
    fn first_append_makes_history_non_empty() {
        let mut history = SearchHistory::new();
        assert!(history.append(entry("Melbourne", 47)));
        assert_eq!(history.state(), HistoryState::NonEmpty);
    }

    #[test]
    fn duplicate_key_keeps_first_entry() {
        let mut history = SearchHistory::new();
        assert!(history.append(entry("Melbourne", 47)));
        assert!(!history.append(entry("Melbourne", 52)));

        assert_eq!(history.len(), 1);
        assert_eq!(history.list()[0].feels_like_temp_f, 47);
    }

    #[test]
    fn duplicate_does_not_reorder() {
        let mut history = SearchHistory::new();
        history.append(entry("Melbourne", 47));
        history.append(entry("Seattle", 56));
        history.append(entry("Melbourne", 47));

        let labels: Vec<_> = history
            .list()
            .iter()
            .map(|e| e.display_label.as_str())
            .collect();
        assert_eq!(labels, ["Melbourne", "Seattle"]);
    }

    #[test]
    fn select_returns_entry_without_removing() {
        let mut history = SearchHistory::new();
        history.append(entry("Seattle", 56));

        let selected = history.select("https://wttr.in/Seattle?format=j1").unwrap();
        assert_eq!(selected.display_label, "Seattle");
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn select_missing_key_is_not_found() {
        let history = SearchHistory::new();
        let err = history.select("https://wttr.in/Nowhere?format=j1").unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[test]
    fn entry_at_is_one_based() {
        let mut history = SearchHistory::new();
        history.append(entry("Melbourne", 47));
        history.append(entry("Seattle", 56));

        assert_eq!(history.entry_at(1).unwrap().display_label, "Melbourne");
        assert_eq!(history.entry_at(2).unwrap().display_label, "Seattle");
        assert!(history.entry_at(0).is_err());
        assert!(history.entry_at(3).is_err());
    }

    #[test]
    fn keys_differ_by_url_not_label() {
        let mut history = SearchHistory::new();
        history.append(entry("Seattle", 56));
        history.append(HistoryEntry {
            display_label: "Seattle".to_string(),
            request_url: "https://wttr.in/Seattle,WA?format=j1".to_string(),
            feels_like_temp_f: 56,
        });
        assert_eq!(history.len(), 2);
    }
}
