//! Catalog source registry for discovering and creating sources by name

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use once_cell::sync::Lazy;

use super::file::FileCatalog;
use super::memory::MemoryCatalog;
use super::traits::CatalogSource;

/// Factory function type for creating catalog sources
pub type SourceFactory = Box<dyn Fn() -> Arc<dyn CatalogSource> + Send + Sync>;

/// Definition of a registered catalog source
pub struct SourceDefinition {
    /// Unique name for this source
    pub name: String,
    /// Human-readable description
    pub description: String,
    /// Factory function to create instances
    pub factory: SourceFactory,
}

impl std::fmt::Debug for SourceDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceDefinition")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish()
    }
}

/// Global registry of catalog sources
static REGISTRY: Lazy<RwLock<HashMap<String, SourceDefinition>>> = Lazy::new(|| {
    let mut map = HashMap::new();

    // Register built-in sources
    map.insert(
        "memory".to_string(),
        SourceDefinition {
            name: "memory".to_string(),
            description: "In-memory catalog for testing".to_string(),
            factory: Box::new(|| Arc::new(MemoryCatalog::new())),
        },
    );

    map.insert(
        "file".to_string(),
        SourceDefinition {
            name: "file".to_string(),
            description: "User-level YAML catalog file".to_string(),
            factory: Box::new(|| Arc::new(FileCatalog::user())),
        },
    );

    RwLock::new(map)
});

/// Register a new catalog source type
///
/// Host applications use this to plug in their remote database adapters
/// alongside the built-in `memory` and `file` sources.
pub fn register_catalog_source(name: &str, description: &str, factory: SourceFactory) {
    let mut registry = REGISTRY.write().unwrap();
    registry.insert(
        name.to_string(),
        SourceDefinition {
            name: name.to_string(),
            description: description.to_string(),
            factory,
        },
    );
}

/// Create a catalog source by name
///
/// Returns the created source, or None if the name is not registered.
pub fn create_catalog_source(name: &str) -> Option<Arc<dyn CatalogSource>> {
    let registry = REGISTRY.read().unwrap();
    registry.get(name).map(|def| (def.factory)())
}

/// List all registered catalog sources as (name, description) pairs
pub fn list_catalog_sources() -> Vec<(String, String)> {
    let registry = REGISTRY.read().unwrap();
    registry
        .values()
        .map(|def| (def.name.clone(), def.description.clone()))
        .collect()
}

/// Check if a source is registered
pub fn has_catalog_source(name: &str) -> bool {
    let registry = REGISTRY.read().unwrap();
    registry.contains_key(name)
}

/// Unregister a catalog source (mainly for testing)
pub fn unregister_catalog_source(name: &str) -> bool {
    let mut registry = REGISTRY.write().unwrap();
    registry.remove(name).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_sources_registered() {
        assert!(has_catalog_source("memory"));
        assert!(has_catalog_source("file"));
    }

    #[test]
    fn test_create_memory_source() {
        let source = create_catalog_source("memory");
        assert!(source.is_some());
    }

    #[test]
    fn test_create_unknown_source() {
        assert!(create_catalog_source("nonexistent_xyz").is_none());
    }

    #[test]
    fn test_list_sources() {
        let sources = list_catalog_sources();

        let names: Vec<_> = sources.iter().map(|(n, _)| n.as_str()).collect();
        assert!(names.contains(&"memory"));
        assert!(names.contains(&"file"));
    }

    #[test]
    fn test_register_custom_source() {
        register_catalog_source(
            "test_custom_source",
            "A test source",
            Box::new(|| Arc::new(MemoryCatalog::new())),
        );

        assert!(has_catalog_source("test_custom_source"));
        assert!(create_catalog_source("test_custom_source").is_some());

        // Clean up
        unregister_catalog_source("test_custom_source");
    }
}
