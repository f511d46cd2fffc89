//! In-memory catalog source

use std::sync::RwLock;

use async_trait::async_trait;

use crate::types::{Tool, ToolId};

use super::traits::{CatalogError, CatalogResult, CatalogSource, ToolQuery};

/// In-memory catalog source for tests and static fixtures
#[derive(Debug, Default)]
pub struct MemoryCatalog {
    tools: RwLock<Vec<Tool>>,
}

impl MemoryCatalog {
    /// Create a new empty memory catalog
    pub fn new() -> Self {
        Self {
            tools: RwLock::new(Vec::new()),
        }
    }

    /// Create a memory catalog with initial tools
    pub fn with_tools(tools: Vec<Tool>) -> Self {
        Self {
            tools: RwLock::new(tools),
        }
    }

    /// Replace all tools (useful for testing)
    pub fn set_tools(&self, tools: Vec<Tool>) {
        let mut guard = self.tools.write().unwrap();
        *guard = tools;
    }

    /// Remove all tools
    pub fn clear(&self) {
        let mut guard = self.tools.write().unwrap();
        guard.clear();
    }

    /// Number of tools in the catalog
    pub fn len(&self) -> usize {
        self.tools.read().unwrap().len()
    }

    /// Whether the catalog holds no tools
    pub fn is_empty(&self) -> bool {
        self.tools.read().unwrap().is_empty()
    }
}

#[async_trait]
impl CatalogSource for MemoryCatalog {
    async fn get_tools(&self, query: &ToolQuery) -> Vec<Tool> {
        let guard = self.tools.read().unwrap();
        query.run(&guard)
    }

    async fn get_tool(&self, id: ToolId) -> Option<Tool> {
        let guard = self.tools.read().unwrap();
        guard.iter().find(|t| t.id == id).cloned()
    }

    async fn add_tool(&self, tool: Tool) -> CatalogResult<()> {
        let mut guard = self.tools.write().unwrap();

        if guard.iter().any(|t| t.id == tool.id) {
            return Err(CatalogError::ToolExists(tool.id));
        }

        guard.push(tool);
        Ok(())
    }

    async fn update_tool(&self, id: ToolId, tool: Tool) -> CatalogResult<()> {
        let mut guard = self.tools.write().unwrap();

        if let Some(pos) = guard.iter().position(|t| t.id == id) {
            guard[pos] = tool;
            Ok(())
        } else {
            Err(CatalogError::ToolNotFound(id))
        }
    }

    async fn remove_tool(&self, id: ToolId) -> CatalogResult<()> {
        let mut guard = self.tools.write().unwrap();

        let original_len = guard.len();
        guard.retain(|t| t.id != id);

        if guard.len() == original_len {
            Err(CatalogError::ToolNotFound(id))
        } else {
            Ok(())
        }
    }
}
