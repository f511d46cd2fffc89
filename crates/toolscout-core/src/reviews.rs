//! Review store and rating aggregation
//!
//! Submitting a review recomputes the tool's aggregate rating; the
//! catalog facade pushes the new mean and count back into the catalog
//! source so every surface shows consistent numbers.

use std::sync::RwLock;

use async_trait::async_trait;

use crate::types::{Review, ToolId};

/// Aggregate rating derived from a tool's reviews
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingSummary {
    /// Mean of all review ratings; 0.0 when there are no reviews
    pub average: f64,
    /// Number of reviews
    pub count: u32,
}

/// Compute the aggregate rating for a set of reviews
pub fn summarize(reviews: &[Review]) -> RatingSummary {
    if reviews.is_empty() {
        return RatingSummary {
            average: 0.0,
            count: 0,
        };
    }
    let total: u32 = reviews.iter().map(|r| u32::from(r.rating)).sum();
    RatingSummary {
        average: f64::from(total) / reviews.len() as f64,
        count: reviews.len() as u32,
    }
}

/// Errors that can occur during review operations
#[derive(Debug, thiserror::Error)]
pub enum ReviewError {
    #[error("review already exists: {0}")]
    ReviewExists(u64),

    #[error("review error: {0}")]
    Other(String),
}

pub type ReviewResult<T> = Result<T, ReviewError>;

/// Review store abstraction
///
/// Implementations:
/// - `MemoryReviewStore`: In-memory for testing
/// - Host adapters: remote `reviews` table clients
#[async_trait]
pub trait ReviewStore: Send + Sync {
    /// Add a review
    async fn add(&self, review: Review) -> ReviewResult<()>;

    /// Reviews for a tool, newest first
    async fn for_tool(&self, tool_id: ToolId) -> Vec<Review>;

    /// Number of reviews written by a user
    async fn count_by_user(&self, user_id: &str) -> usize;

    /// Aggregate rating for a tool
    async fn rating_summary(&self, tool_id: ToolId) -> RatingSummary {
        summarize(&self.for_tool(tool_id).await)
    }
}

/// In-memory review store
#[derive(Debug, Default)]
pub struct MemoryReviewStore {
    reviews: RwLock<Vec<Review>>,
}

impl MemoryReviewStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with initial reviews
    pub fn with_reviews(reviews: Vec<Review>) -> Self {
        Self {
            reviews: RwLock::new(reviews),
        }
    }
}

#[async_trait]
impl ReviewStore for MemoryReviewStore {
    async fn add(&self, review: Review) -> ReviewResult<()> {
        let mut guard = self.reviews.write().unwrap();

        if guard.iter().any(|r| r.id == review.id) {
            return Err(ReviewError::ReviewExists(review.id));
        }

        guard.push(review);
        Ok(())
    }

    async fn for_tool(&self, tool_id: ToolId) -> Vec<Review> {
        let guard = self.reviews.read().unwrap();
        let mut reviews: Vec<Review> = guard
            .iter()
            .filter(|r| r.tool_id == tool_id)
            .cloned()
            .collect();
        // ISO-8601 timestamps compare lexicographically; stable sort keeps
        // same-instant reviews in insertion order
        reviews.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        reviews
    }

    async fn count_by_user(&self, user_id: &str) -> usize {
        let guard = self.reviews.read().unwrap();
        guard.iter().filter(|r| r.user_id == user_id).count()
    }
}
