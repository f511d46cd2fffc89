//! Sort keys and ordering rules

use std::cmp::Ordering;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::Tool;

use super::EngineError;

/// Requested result ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Preserve the input order (the default, "relevance" ordering)
    Relevance,
    /// Highest rated first
    Rating,
    /// Most recently released first; missing or malformed dates last
    Newest,
    /// Most popular first
    Popularity,
}

impl SortKey {
    /// String form of the key, as used by UI sort chips
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Relevance => "relevance",
            SortKey::Rating => "rating",
            SortKey::Newest => "newest",
            SortKey::Popularity => "popularity",
        }
    }
}

impl Default for SortKey {
    fn default() -> Self {
        SortKey::Relevance
    }
}

impl FromStr for SortKey {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "relevance" => Ok(SortKey::Relevance),
            "rating" => Ok(SortKey::Rating),
            "newest" => Ok(SortKey::Newest),
            "popularity" => Ok(SortKey::Popularity),
            other => Err(EngineError::UnknownSortKey(other.to_string())),
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Reorder tools in place according to the sort key
///
/// All sorts are stable: ties keep their relative input order, so a sorted
/// result is always a permutation of the input obtainable without
/// reordering equal elements.
pub fn sort_tools(tools: &mut [Tool], key: SortKey) {
    match key {
        SortKey::Relevance => {}
        SortKey::Rating => tools.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortKey::Popularity => tools.sort_by(|a, b| b.popularity.total_cmp(&a.popularity)),
        SortKey::Newest => tools.sort_by(cmp_newest),
    }
}

// Descending by parsed release date; tools without a parseable date sort
// last, stable among themselves.
fn cmp_newest(a: &Tool, b: &Tool) -> Ordering {
    match (a.parsed_release_date(), b.parsed_release_date()) {
        (Some(da), Some(db)) => db.cmp(&da),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
