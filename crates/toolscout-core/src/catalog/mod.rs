//! Catalog access and discovery queries
//!
//! The [`Catalog`] facade is the application-facing entry point: it wraps
//! a [`CatalogSource`] (memory, file, or a host-registered remote
//! adapter) and derives the discovery rails the UI renders (featured,
//! trending, newest, top rated, similar) plus the facet listings that
//! drive filter chips.

mod file;
mod memory;
mod registry;
mod traits;

pub use file::{CatalogFile, FileCatalog};
pub use memory::MemoryCatalog;
pub use registry::{
    create_catalog_source, has_catalog_source, list_catalog_sources, register_catalog_source,
    unregister_catalog_source, SourceDefinition, SourceFactory,
};
pub use traits::{CatalogError, CatalogResult, CatalogSource, ToolQuery};

use std::sync::Arc;

use parking_lot::RwLock;

use crate::engine::{self, FilterCriteria, SortKey};
use crate::logging::Logger;
use crate::reviews::{RatingSummary, ReviewStore};
use crate::saved::SavedToolsStore;
use crate::types::{Category, Tool, ToolId};
use crate::{log_info, log_warn};

/// Distinct filter values derived from the tool set
#[derive(Debug, Clone, Default)]
struct Facets {
    categories: Vec<Category>,
    pricing_models: Vec<String>,
    features: Vec<String>,
}

/// Application-facing catalog facade
pub struct Catalog {
    source: Arc<dyn CatalogSource>,
    facets: RwLock<Option<Facets>>,
    logger: Arc<dyn Logger>,
}

impl Catalog {
    /// How many featured tools the discover screen shows
    pub const FEATURED_LIMIT: usize = 5;

    /// Create a catalog over a source
    pub fn new(source: Arc<dyn CatalogSource>, logger: Arc<dyn Logger>) -> Self {
        Self {
            source,
            facets: RwLock::new(None),
            logger,
        }
    }

    /// List tools matching a query
    pub async fn tools(&self, query: &ToolQuery) -> Vec<Tool> {
        self.source.get_tools(query).await
    }

    /// Fetch a single tool by id
    pub async fn tool(&self, id: ToolId) -> Option<Tool> {
        self.source.get_tool(id).await
    }

    /// Featured tools for the discover screen
    pub async fn featured(&self) -> Vec<Tool> {
        let mut tools = self.all_tools().await;
        tools.retain(|t| t.featured);
        tools.truncate(Self::FEATURED_LIMIT);
        tools
    }

    /// Most popular tools first
    pub async fn trending(&self, limit: usize) -> Vec<Tool> {
        self.source
            .get_tools(&ToolQuery::all().sorted_by(SortKey::Popularity).with_limit(limit))
            .await
    }

    /// Most recently released tools first
    pub async fn newest(&self, limit: usize) -> Vec<Tool> {
        self.source
            .get_tools(&ToolQuery::all().sorted_by(SortKey::Newest).with_limit(limit))
            .await
    }

    /// Highest rated tools first
    pub async fn top_rated(&self, limit: usize) -> Vec<Tool> {
        self.source
            .get_tools(&ToolQuery::all().sorted_by(SortKey::Rating).with_limit(limit))
            .await
    }

    /// Tools in a category; "All" lists everything
    pub async fn by_category(&self, category: &str) -> Vec<Tool> {
        let query = if category == "All" {
            ToolQuery::all()
        } else {
            ToolQuery::all().with_category(category)
        };
        self.source.get_tools(&query).await
    }

    /// Tools similar to the given one: same category, the tool itself
    /// excluded
    pub async fn similar(&self, id: ToolId, limit: usize) -> Vec<Tool> {
        let Some(tool) = self.source.get_tool(id).await else {
            log_warn!(self.logger, "[Catalog] similar({id}): tool not found");
            return vec![];
        };

        let criteria = FilterCriteria::new()
            .with_categories([tool.category.clone()])
            .excluding([id]);
        let mut results = engine::apply(&self.all_tools().await, &criteria, SortKey::Relevance);
        results.truncate(limit);
        results
    }

    /// Filter and order the full catalog through the engine
    pub async fn search(&self, criteria: &FilterCriteria, sort: SortKey) -> Vec<Tool> {
        let results = engine::apply(&self.all_tools().await, criteria, sort);
        log_info!(
            self.logger,
            "[Catalog] search matched {} tools",
            results.len()
        );
        results
    }

    /// Text-only search over name and description, input order preserved
    pub async fn search_text(&self, text: &str) -> Vec<Tool> {
        if text.trim().is_empty() {
            return vec![];
        }
        self.search(&FilterCriteria::new().with_text(text), SortKey::Relevance)
            .await
    }

    /// Distinct categories, sorted by name
    pub async fn categories(&self) -> Vec<Category> {
        self.facets().await.categories
    }

    /// Distinct pricing model labels, sorted
    pub async fn pricing_models(&self) -> Vec<String> {
        self.facets().await.pricing_models
    }

    /// Distinct feature labels, in first-seen order
    pub async fn feature_labels(&self) -> Vec<String> {
        self.facets().await.features
    }

    /// Drop the cached facet listings (call after the source changes)
    pub fn invalidate_facets(&self) {
        *self.facets.write() = None;
    }

    /// Resolve a user's saved tools to full records, in saved order
    ///
    /// Ids whose tool has since been removed from the catalog are
    /// skipped.
    pub async fn saved_tools(&self, store: &dyn SavedToolsStore, user_id: &str) -> Vec<Tool> {
        let mut tools = Vec::new();
        for id in store.list(user_id).await {
            match self.source.get_tool(id).await {
                Some(tool) => tools.push(tool),
                None => log_warn!(
                    self.logger,
                    "[Catalog] saved tool {id} missing from catalog"
                ),
            }
        }
        tools
    }

    /// Submit a review and push the recomputed aggregate rating into the
    /// catalog source
    pub async fn submit_review(
        &self,
        store: &dyn ReviewStore,
        review: crate::types::Review,
    ) -> CatalogResult<RatingSummary> {
        let tool_id = review.tool_id;
        let mut tool = self
            .source
            .get_tool(tool_id)
            .await
            .ok_or(CatalogError::ToolNotFound(tool_id))?;

        store
            .add(review)
            .await
            .map_err(|e| CatalogError::Other(e.to_string()))?;

        let summary = store.rating_summary(tool_id).await;
        tool.rating = summary.average;
        tool.review_count = summary.count;
        self.source.update_tool(tool_id, tool).await?;

        log_info!(
            self.logger,
            "[Catalog] tool {tool_id} now rated {:.2} over {} reviews",
            summary.average,
            summary.count
        );
        Ok(summary)
    }

    async fn all_tools(&self) -> Vec<Tool> {
        self.source.get_tools(&ToolQuery::all()).await
    }

    async fn facets(&self) -> Facets {
        if let Some(facets) = self.facets.read().as_ref() {
            return facets.clone();
        }

        let tools = self.all_tools().await;

        let mut category_names: Vec<String> = Vec::new();
        let mut pricing_models: Vec<String> = Vec::new();
        let mut features: Vec<String> = Vec::new();
        for tool in &tools {
            if !tool.category.is_empty() && !category_names.contains(&tool.category) {
                category_names.push(tool.category.clone());
            }
            if !tool.pricing_model.is_empty() && !pricing_models.contains(&tool.pricing_model) {
                pricing_models.push(tool.pricing_model.clone());
            }
            for feature in &tool.features {
                if !features.contains(feature) {
                    features.push(feature.clone());
                }
            }
        }
        category_names.sort();
        pricing_models.sort();

        let facets = Facets {
            categories: category_names.into_iter().map(Category::from_name).collect(),
            pricing_models,
            features,
        };
        *self.facets.write() = Some(facets.clone());
        facets
    }
}

impl std::fmt::Debug for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Catalog").finish_non_exhaustive()
    }
}
