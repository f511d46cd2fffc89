//! Catalog source trait

use async_trait::async_trait;

use crate::engine::{self, FilterCriteria, SortKey};
use crate::types::{Tool, ToolId};

/// Options for a catalog listing, mirroring the remote query surface
/// (equality filters, ordering, range pagination)
#[derive(Debug, Clone, PartialEq)]
pub struct ToolQuery {
    /// Only tools in this category
    pub category: Option<String>,
    /// Only tools with this pricing model
    pub pricing_model: Option<String>,
    /// Only tools with at least one of these features
    pub features: Vec<String>,
    /// Result ordering
    pub sort: SortKey,
    /// Page size
    pub limit: usize,
    /// Zero-based page index
    pub page: usize,
}

impl Default for ToolQuery {
    fn default() -> Self {
        Self {
            category: None,
            pricing_model: None,
            features: vec![],
            sort: SortKey::Relevance,
            limit: Self::DEFAULT_LIMIT,
            page: 0,
        }
    }
}

impl ToolQuery {
    /// Default page size
    pub const DEFAULT_LIMIT: usize = 20;

    /// Create a query with the default page size
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an unpaged query returning every matching tool
    pub fn all() -> Self {
        Self {
            limit: usize::MAX,
            ..Self::default()
        }
    }

    /// Restrict to a category
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Restrict to a pricing model
    pub fn with_pricing_model(mut self, model: impl Into<String>) -> Self {
        self.pricing_model = Some(model.into());
        self
    }

    /// Restrict to tools carrying at least one of the given features
    pub fn with_features(mut self, features: impl IntoIterator<Item = String>) -> Self {
        self.features = features.into_iter().collect();
        self
    }

    /// Set the result ordering
    pub fn sorted_by(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Set the page size
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Set the page index
    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    /// Equivalent engine criteria for the query's filter groups
    pub fn to_criteria(&self) -> FilterCriteria {
        let mut criteria = FilterCriteria::new().with_features(self.features.clone());
        if let Some(category) = &self.category {
            criteria.categories.push(category.clone());
        }
        if let Some(model) = &self.pricing_model {
            criteria.pricing_models.push(model.clone());
        }
        criteria
    }

    /// Run the query against an in-memory snapshot of tools
    ///
    /// In-memory sources share this one path so filtering, ordering, and
    /// pagination behave identically regardless of where the tools came
    /// from.
    pub fn run(&self, tools: &[Tool]) -> Vec<Tool> {
        let mut results = engine::apply(tools, &self.to_criteria(), self.sort);
        let start = self.page.saturating_mul(self.limit).min(results.len());
        let end = start.saturating_add(self.limit).min(results.len());
        results.drain(..start);
        results.truncate(end - start);
        results
    }
}

/// Catalog source abstraction
///
/// Implementations:
/// - `MemoryCatalog`: In-memory for tests and static fixtures
/// - `FileCatalog`: YAML file (~/.config/toolscout/catalog.yaml)
/// - Host adapters: remote database clients owned by the application
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// List tools matching a query
    async fn get_tools(&self, query: &ToolQuery) -> Vec<Tool>;

    /// Fetch a single tool by id
    async fn get_tool(&self, id: ToolId) -> Option<Tool>;

    /// Add a new tool
    async fn add_tool(&self, tool: Tool) -> CatalogResult<()>;

    /// Replace an existing tool
    async fn update_tool(&self, id: ToolId, tool: Tool) -> CatalogResult<()>;

    /// Remove a tool
    async fn remove_tool(&self, id: ToolId) -> CatalogResult<()>;
}

/// Errors that can occur during catalog operations
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("tool not found: {0}")]
    ToolNotFound(ToolId),

    #[error("tool already exists: {0}")]
    ToolExists(ToolId),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("catalog error: {0}")]
    Other(String),
}

pub type CatalogResult<T> = Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Vec<Tool> {
        vec![
            Tool::new(1, "ChatGPT", "Chatbots")
                .with_popularity(98.0)
                .with_pricing_model("Freemium"),
            Tool::new(2, "DALL-E", "Image Generation")
                .with_popularity(92.0)
                .with_pricing_model("Paid"),
            Tool::new(3, "Midjourney", "Image Generation")
                .with_popularity(95.0)
                .with_pricing_model("Subscription"),
        ]
    }

    #[test]
    fn test_query_filters_and_sorts() {
        let query = ToolQuery::all()
            .with_category("Image Generation")
            .sorted_by(SortKey::Popularity);
        let ids: Vec<_> = query.run(&fixture()).iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![3, 2]);
    }

    #[test]
    fn test_query_pagination() {
        let page0 = ToolQuery::new().with_limit(2).run(&fixture());
        assert_eq!(page0.len(), 2);
        assert_eq!(page0[0].id, 1);

        let page1 = ToolQuery::new().with_limit(2).with_page(1).run(&fixture());
        assert_eq!(page1.len(), 1);
        assert_eq!(page1[0].id, 3);

        let past_end = ToolQuery::new().with_limit(2).with_page(5).run(&fixture());
        assert!(past_end.is_empty());
    }

    #[test]
    fn test_unpaged_query_returns_everything() {
        assert_eq!(ToolQuery::all().run(&fixture()).len(), 3);
    }
}
