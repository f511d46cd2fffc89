//! User review types

use serde::{Deserialize, Serialize};

use super::tool::ToolId;

/// A user review of a catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    /// Unique identifier for this review
    pub id: u64,
    /// The tool being reviewed
    pub tool_id: ToolId,
    /// Identifier of the reviewing user
    pub user_id: String,
    /// Star rating, 1 to 5
    pub rating: u8,
    /// Review text
    #[serde(default)]
    pub comment: String,
    /// Creation timestamp as an ISO-8601 string
    #[serde(default)]
    pub created_at: String,
}

impl Review {
    /// Create a new review
    pub fn new(id: u64, tool_id: ToolId, user_id: impl Into<String>, rating: u8) -> Self {
        Self {
            id,
            tool_id,
            user_id: user_id.into(),
            rating,
            comment: String::new(),
            created_at: String::new(),
        }
    }

    /// Set the review text
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    /// Set the creation timestamp
    pub fn with_created_at(mut self, created_at: impl Into<String>) -> Self {
        self.created_at = created_at.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_review_builder() {
        let review = Review::new(1, 42, "user-1", 5)
            .with_comment("Indispensable")
            .with_created_at("2023-09-15T10:00:00Z");

        assert_eq!(review.tool_id, 42);
        assert_eq!(review.rating, 5);
        assert_eq!(review.comment, "Indispensable");
    }
}
