//! Bounded multi-select for tool comparison
//!
//! The compare screen and the saved-tools batch actions share one
//! selection model: an ordered, duplicate-free set of at most
//! [`CompareSelection::MAX_TOOLS`] tool ids. The state is owned by the
//! caller and mutated only through [`toggle`](CompareSelection::toggle)
//! and [`clear`](CompareSelection::clear).

use serde::{Deserialize, Serialize};

use crate::types::ToolId;

/// Ordered set of up to four tool ids picked for comparison
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompareSelection {
    ids: Vec<ToolId>,
}

impl CompareSelection {
    /// Maximum number of tools that can be compared at once
    pub const MAX_TOOLS: usize = 4;

    /// Minimum number of selected tools for the compare action
    pub const MIN_COMPARE: usize = 2;

    /// Create an empty selection
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle a tool in the selection
    ///
    /// Removes the id if present; otherwise appends it, unless the
    /// selection is already full, in which case nothing changes. A
    /// rejected add is a defined no-op, not an error. Returns whether the
    /// selection changed.
    pub fn toggle(&mut self, id: ToolId) -> bool {
        if let Some(pos) = self.ids.iter().position(|&existing| existing == id) {
            self.ids.remove(pos);
            return true;
        }
        if self.ids.len() < Self::MAX_TOOLS {
            self.ids.push(id);
            return true;
        }
        false
    }

    /// Empty the selection
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Whether a tool is currently selected
    pub fn contains(&self, id: ToolId) -> bool {
        self.ids.contains(&id)
    }

    /// Number of selected tools
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether nothing is selected
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Whether the selection is at capacity
    pub fn is_full(&self) -> bool {
        self.ids.len() >= Self::MAX_TOOLS
    }

    /// Whether the compare action should be enabled
    ///
    /// Comparison needs at least two tools; the UI disables the control
    /// below that rather than surfacing a runtime fault.
    pub fn can_compare(&self) -> bool {
        self.ids.len() >= Self::MIN_COMPARE
    }

    /// Selected ids in insertion order
    pub fn ids(&self) -> &[ToolId] {
        &self.ids
    }

    /// Encode the selection as a comma-separated route parameter
    pub fn to_param(&self) -> String {
        self.ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Decode a selection from a comma-separated route parameter
    ///
    /// Unparseable segments are skipped; duplicates and ids beyond
    /// capacity are dropped, so the result always satisfies the selection
    /// invariants.
    pub fn from_param(param: &str) -> Self {
        let mut selection = Self::new();
        for segment in param.split(',') {
            if let Ok(id) = segment.trim().parse::<ToolId>() {
                if !selection.contains(id) {
                    selection.toggle(id);
                }
            }
        }
        selection
    }
}
