//! Category types

use serde::{Deserialize, Serialize};

/// A browsable tool category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Slug identifier (e.g. "image-generation")
    pub id: String,
    /// Display name (e.g. "Image Generation")
    pub name: String,
}

impl Category {
    /// Create a category from a display name, deriving the slug id
    pub fn from_name(name: impl Into<String>) -> Self {
        let name = name.into();
        let id = name
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-");
        Self { id, name }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_derivation() {
        let category = Category::from_name("Image Generation");
        assert_eq!(category.id, "image-generation");
        assert_eq!(category.name, "Image Generation");

        let single = Category::from_name("Chatbots");
        assert_eq!(single.id, "chatbots");
    }
}
