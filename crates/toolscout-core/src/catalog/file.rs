//! File-backed catalog source (YAML)
//!
//! Serves a tool catalog from a local YAML file, e.g. a bundled fixture
//! or an offline snapshot of the hosted database
//! (~/.config/toolscout/catalog.yaml by default).

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::types::{Tool, ToolId};

use super::traits::{CatalogError, CatalogResult, CatalogSource, ToolQuery};

/// Catalog file structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CatalogFile {
    /// Catalog entries
    #[serde(default)]
    pub tools: Vec<Tool>,
}

/// File-backed catalog source
///
/// Reads and writes the catalog from a YAML file, caching the parsed
/// contents until [`reload`](FileCatalog::reload).
///
/// # Example
///
/// ```no_run
/// use toolscout_core::catalog::FileCatalog;
///
/// // Default user-level catalog
/// let catalog = FileCatalog::user();
///
/// // Explicit fixture path
/// let fixture = FileCatalog::new("fixtures/catalog.yaml");
/// ```
pub struct FileCatalog {
    path: PathBuf,
    cache: RwLock<Option<CatalogFile>>,
}

impl FileCatalog {
    /// Create a file catalog for a specific path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: RwLock::new(None),
        }
    }

    /// Create the default user-level catalog
    /// (~/.config/toolscout/catalog.yaml)
    pub fn user() -> Self {
        // XDG config directory (~/.config on Linux, ~/Library/Application Support on macOS)
        let config_dir = dirs::config_dir().unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config")
        });
        Self::new(config_dir.join("toolscout").join("catalog.yaml"))
    }

    /// Get the catalog file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check if the catalog file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the catalog from file
    fn load(&self) -> CatalogResult<CatalogFile> {
        if !self.path.exists() {
            return Ok(CatalogFile::default());
        }

        let content = fs::read_to_string(&self.path)?;
        let catalog: CatalogFile = serde_yaml::from_str(&content)
            .map_err(|e| CatalogError::Other(format!("Failed to parse YAML: {}", e)))?;

        Ok(catalog)
    }

    /// Save the catalog to file
    fn save(&self, catalog: &CatalogFile) -> CatalogResult<()> {
        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_yaml::to_string(catalog)
            .map_err(|e| CatalogError::Other(format!("Failed to serialize YAML: {}", e)))?;

        fs::write(&self.path, content)?;

        // Update cache
        let mut cache = self.cache.write().unwrap();
        *cache = Some(catalog.clone());

        Ok(())
    }

    /// Get cached or load the catalog
    fn get_catalog(&self) -> CatalogResult<CatalogFile> {
        let cache = self.cache.read().unwrap();
        if let Some(catalog) = cache.as_ref() {
            return Ok(catalog.clone());
        }
        drop(cache);

        let catalog = self.load()?;
        let mut cache = self.cache.write().unwrap();
        *cache = Some(catalog.clone());
        Ok(catalog)
    }

    /// Reload the catalog from disk (invalidate cache)
    pub fn reload(&self) -> CatalogResult<CatalogFile> {
        let catalog = self.load()?;
        let mut cache = self.cache.write().unwrap();
        *cache = Some(catalog.clone());
        Ok(catalog)
    }

    /// Create a backup of the current catalog file
    pub fn backup(&self) -> CatalogResult<Option<PathBuf>> {
        if !self.exists() {
            return Ok(None);
        }

        let backup_path = self.path.with_extension("yaml.backup");
        fs::copy(&self.path, &backup_path)?;
        Ok(Some(backup_path))
    }

    /// Import tools wholesale (e.g. from a downloaded snapshot)
    pub fn import_tools(&self, tools: Vec<Tool>) -> CatalogResult<()> {
        let mut catalog = self.get_catalog()?;
        catalog.tools = tools;
        self.save(&catalog)
    }

    /// Export the catalog as pretty JSON (for migration)
    pub fn export_json(&self) -> CatalogResult<String> {
        let catalog = self.get_catalog()?;
        Ok(serde_json::to_string_pretty(&catalog)?)
    }
}

impl std::fmt::Debug for FileCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileCatalog")
            .field("path", &self.path)
            .field("exists", &self.exists())
            .finish()
    }
}

#[async_trait]
impl CatalogSource for FileCatalog {
    async fn get_tools(&self, query: &ToolQuery) -> Vec<Tool> {
        self.get_catalog()
            .map(|c| query.run(&c.tools))
            .unwrap_or_default()
    }

    async fn get_tool(&self, id: ToolId) -> Option<Tool> {
        self.get_catalog()
            .ok()
            .and_then(|c| c.tools.into_iter().find(|t| t.id == id))
    }

    async fn add_tool(&self, tool: Tool) -> CatalogResult<()> {
        let mut catalog = self.get_catalog()?;

        if catalog.tools.iter().any(|t| t.id == tool.id) {
            return Err(CatalogError::ToolExists(tool.id));
        }

        catalog.tools.push(tool);
        self.save(&catalog)
    }

    async fn update_tool(&self, id: ToolId, tool: Tool) -> CatalogResult<()> {
        let mut catalog = self.get_catalog()?;

        if let Some(pos) = catalog.tools.iter().position(|t| t.id == id) {
            catalog.tools[pos] = tool;
            self.save(&catalog)
        } else {
            Err(CatalogError::ToolNotFound(id))
        }
    }

    async fn remove_tool(&self, id: ToolId) -> CatalogResult<()> {
        let mut catalog = self.get_catalog()?;

        let original_len = catalog.tools.len();
        catalog.tools.retain(|t| t.id != id);

        if catalog.tools.len() == original_len {
            Err(CatalogError::ToolNotFound(id))
        } else {
            self.save(&catalog)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_file_catalog() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("catalog.yaml");
        let catalog = FileCatalog::new(&path);

        // Initially empty
        assert!(!catalog.exists());
        assert!(catalog.get_tools(&ToolQuery::all()).await.is_empty());

        // Add a tool
        let chatgpt = Tool::new(1, "ChatGPT", "Chatbots").with_rating(4.8);
        catalog.add_tool(chatgpt).await.unwrap();

        // File should exist now
        assert!(catalog.exists());
        assert_eq!(catalog.get_tools(&ToolQuery::all()).await.len(), 1);

        // Reload and verify persistence
        catalog.reload().unwrap();
        assert_eq!(catalog.get_tool(1).await.unwrap().name, "ChatGPT");
    }

    #[tokio::test]
    async fn test_yaml_format() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("catalog.yaml");
        let catalog = FileCatalog::new(&path);

        catalog
            .add_tool(
                Tool::new(1, "ChatGPT", "Chatbots")
                    .with_pricing_model("Freemium")
                    .with_release_date("2022-11-30"),
            )
            .await
            .unwrap();
        catalog
            .add_tool(Tool::new(2, "Midjourney", "Image Generation"))
            .await
            .unwrap();

        // Check YAML content is readable
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("ChatGPT"));
        assert!(content.contains("Freemium"));
        assert!(content.contains("Midjourney"));
    }

    #[test]
    fn test_backup() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("catalog.yaml");
        let catalog = FileCatalog::new(&path);

        // No backup if file doesn't exist
        assert!(catalog.backup().unwrap().is_none());

        // Create file
        fs::write(&path, "tools: []").unwrap();

        // Backup should work
        let backup_path = catalog.backup().unwrap().unwrap();
        assert!(backup_path.exists());
        assert!(backup_path.to_string_lossy().contains("backup"));
    }

    #[tokio::test]
    async fn test_import_tools_replaces_contents() {
        let dir = tempdir().unwrap();
        let catalog = FileCatalog::new(dir.path().join("catalog.yaml"));

        catalog
            .add_tool(Tool::new(1, "ChatGPT", "Chatbots"))
            .await
            .unwrap();
        catalog
            .import_tools(vec![
                Tool::new(10, "Runway", "Video"),
                Tool::new(11, "Suno", "Music"),
            ])
            .unwrap();

        let tools = catalog.get_tools(&ToolQuery::all()).await;
        let ids: Vec<_> = tools.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![10, 11]);
    }
}
