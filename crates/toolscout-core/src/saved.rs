//! Saved-tools store
//!
//! Each user keeps a bookmark list of tools; the saved screen lists them
//! in the order they were saved and feeds batch selection for comparison.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::types::ToolId;

/// Errors that can occur when saving or unsaving tools
#[derive(Debug, thiserror::Error)]
pub enum SavedError {
    #[error("tool {tool_id} is already saved for user {user_id}")]
    AlreadySaved { user_id: String, tool_id: ToolId },

    #[error("tool {tool_id} is not saved for user {user_id}")]
    NotSaved { user_id: String, tool_id: ToolId },

    #[error("saved-tools error: {0}")]
    Other(String),
}

pub type SavedResult<T> = Result<T, SavedError>;

/// Per-user saved-tools store abstraction
///
/// Implementations:
/// - `MemorySavedStore`: In-memory for testing
/// - Host adapters: remote `saved_tools` table clients
#[async_trait]
pub trait SavedToolsStore: Send + Sync {
    /// Saved tool ids for a user, in the order they were saved
    async fn list(&self, user_id: &str) -> Vec<ToolId>;

    /// Save a tool for a user
    async fn save(&self, user_id: &str, tool_id: ToolId) -> SavedResult<()>;

    /// Remove a saved tool for a user
    async fn unsave(&self, user_id: &str, tool_id: ToolId) -> SavedResult<()>;

    /// Whether a tool is saved for a user
    async fn is_saved(&self, user_id: &str, tool_id: ToolId) -> bool;

    /// Number of tools the user has saved
    async fn count(&self, user_id: &str) -> usize;
}

/// In-memory saved-tools store
#[derive(Debug, Default)]
pub struct MemorySavedStore {
    entries: RwLock<HashMap<String, Vec<ToolId>>>,
}

impl MemorySavedStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SavedToolsStore for MemorySavedStore {
    async fn list(&self, user_id: &str) -> Vec<ToolId> {
        let guard = self.entries.read().unwrap();
        guard.get(user_id).cloned().unwrap_or_default()
    }

    async fn save(&self, user_id: &str, tool_id: ToolId) -> SavedResult<()> {
        let mut guard = self.entries.write().unwrap();
        let saved = guard.entry(user_id.to_string()).or_default();

        if saved.contains(&tool_id) {
            return Err(SavedError::AlreadySaved {
                user_id: user_id.to_string(),
                tool_id,
            });
        }

        saved.push(tool_id);
        Ok(())
    }

    async fn unsave(&self, user_id: &str, tool_id: ToolId) -> SavedResult<()> {
        let mut guard = self.entries.write().unwrap();
        let saved = guard.entry(user_id.to_string()).or_default();

        if let Some(pos) = saved.iter().position(|&id| id == tool_id) {
            saved.remove(pos);
            Ok(())
        } else {
            Err(SavedError::NotSaved {
                user_id: user_id.to_string(),
                tool_id,
            })
        }
    }

    async fn is_saved(&self, user_id: &str, tool_id: ToolId) -> bool {
        let guard = self.entries.read().unwrap();
        guard
            .get(user_id)
            .map(|saved| saved.contains(&tool_id))
            .unwrap_or(false)
    }

    async fn count(&self, user_id: &str) -> usize {
        let guard = self.entries.read().unwrap();
        guard.get(user_id).map(|saved| saved.len()).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_and_list_in_order() {
        let store = MemorySavedStore::new();

        store.save("user-1", 3).await.unwrap();
        store.save("user-1", 1).await.unwrap();
        store.save("user-2", 9).await.unwrap();

        assert_eq!(store.list("user-1").await, vec![3, 1]);
        assert_eq!(store.list("user-2").await, vec![9]);
        assert_eq!(store.count("user-1").await, 2);
    }

    #[tokio::test]
    async fn test_duplicate_save_is_an_error() {
        let store = MemorySavedStore::new();

        store.save("user-1", 3).await.unwrap();
        assert!(matches!(
            store.save("user-1", 3).await,
            Err(SavedError::AlreadySaved { tool_id: 3, .. })
        ));
    }

    #[tokio::test]
    async fn test_unsave() {
        let store = MemorySavedStore::new();

        store.save("user-1", 3).await.unwrap();
        assert!(store.is_saved("user-1", 3).await);

        store.unsave("user-1", 3).await.unwrap();
        assert!(!store.is_saved("user-1", 3).await);

        assert!(matches!(
            store.unsave("user-1", 3).await,
            Err(SavedError::NotSaved { tool_id: 3, .. })
        ));
    }

    #[tokio::test]
    async fn test_unknown_user_has_nothing_saved() {
        let store = MemorySavedStore::new();
        assert!(store.list("nobody").await.is_empty());
        assert_eq!(store.count("nobody").await, 0);
        assert!(!store.is_saved("nobody", 1).await);
    }
}
