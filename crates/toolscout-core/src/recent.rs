//! Recent search history

use serde::{Deserialize, Serialize};

/// Bounded, most-recent-first list of past search queries
///
/// Recording a query that is already in the history is a no-op; the list
/// never grows beyond [`RecentSearches::MAX_ENTRIES`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentSearches {
    entries: Vec<String>,
}

impl RecentSearches {
    /// Maximum number of remembered queries
    pub const MAX_ENTRIES: usize = 5;

    /// Create an empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a history seeded with initial queries (most recent first)
    pub fn with_entries(entries: impl IntoIterator<Item = String>) -> Self {
        let mut history = Self::new();
        let seeded: Vec<String> = entries.into_iter().collect();
        // Seed in reverse so the first seeded entry ends up most recent
        for entry in seeded.into_iter().rev() {
            history.record(&entry);
        }
        history
    }

    /// Record a search query
    ///
    /// Whitespace is trimmed; blank queries and queries already present
    /// are ignored. The oldest entry is evicted beyond capacity.
    pub fn record(&mut self, query: &str) {
        let query = query.trim();
        if query.is_empty() || self.entries.iter().any(|e| e == query) {
            return;
        }
        self.entries.insert(0, query.to_string());
        self.entries.truncate(Self::MAX_ENTRIES);
    }

    /// Remembered queries, most recent first
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Forget all remembered queries
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
