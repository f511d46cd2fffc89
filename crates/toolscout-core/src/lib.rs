//! ToolScout Core
//!
//! Runtime-agnostic catalog, search, and comparison logic for the
//! ToolScout AI tool directory. This crate provides the decision core a
//! UI shell (mobile, desktop, CLI) composes over: the shell owns
//! rendering, navigation, auth, and network I/O; this crate owns what to
//! show and in what order.
//!
//! ## Filtering and sorting
//!
//! The `engine` module is a pure view pipeline over an in-memory tool
//! snapshot:
//!
//! ```rust
//! use toolscout_core::engine::{apply, FilterCriteria, SortKey};
//! use toolscout_core::types::Tool;
//!
//! let tools = vec![
//!     Tool::new(1, "ChatGPT", "Chatbots").with_rating(4.8),
//!     Tool::new(2, "Midjourney", "Image Generation").with_rating(4.9),
//! ];
//!
//! let criteria = FilterCriteria::new().with_text("chat");
//! let results = apply(&tools, &criteria, SortKey::Rating);
//! assert_eq!(results.len(), 1);
//! ```
//!
//! ## Comparison selection
//!
//! `CompareSelection` is the caller-owned state behind the compare screen
//! and saved-tools batch actions: an ordered set of at most four tool
//! ids, with the compare action gated on two or more.
//!
//! ## Catalog access
//!
//! The `catalog` module is the data-access seam: a `CatalogSource` trait
//! with in-memory and YAML-file implementations, a source registry for
//! host adapters, and the `Catalog` facade deriving the discovery rails
//! (featured, trending, newest, top rated, similar).

pub mod catalog;
pub mod engine;
pub mod logging;
pub mod recent;
pub mod reviews;
pub mod saved;
pub mod selection;
pub mod types;

// Re-export commonly used types
pub use types::{Category, PricingTier, Review, Tool, ToolId};

pub use engine::{apply, apply_str, sort_tools, EngineError, FilterCriteria, SortKey};

pub use selection::CompareSelection;

pub use recent::RecentSearches;

pub use catalog::{
    create_catalog_source, list_catalog_sources, register_catalog_source, Catalog, CatalogError,
    CatalogResult, CatalogSource, FileCatalog, MemoryCatalog, ToolQuery,
};

pub use saved::{MemorySavedStore, SavedError, SavedResult, SavedToolsStore};

pub use reviews::{
    summarize, MemoryReviewStore, RatingSummary, ReviewError, ReviewResult, ReviewStore,
};

pub use logging::{ConsoleLogger, Logger, LoggerExt, NoOpLogger, SharedLogger};
