//! Filter criteria for narrowing a tool list

use std::collections::HashSet;

use crate::types::{Tool, ToolId};

use super::EngineError;

/// A conjunction of independent predicate groups
///
/// Groups are ANDed together; within a group, membership tests are ORed.
/// An empty group matches every tool, which is the default, unfiltered
/// state. The criteria are owned by the caller and passed by reference
/// into [`apply`](super::apply), with no hidden state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    /// Case-insensitive substring matched against name and description
    pub text: String,
    /// Any-of category membership
    pub categories: Vec<String>,
    /// Any-of pricing model membership
    pub pricing_models: Vec<String>,
    /// Any-of feature membership (a tool matches if it has at least one)
    pub features: Vec<String>,
    /// Tool ids to exclude (e.g. tools already picked for comparison)
    pub exclude: HashSet<ToolId>,
}

impl FilterCriteria {
    /// Create empty criteria (matches every tool)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the text query
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Set the category filter
    pub fn with_categories(mut self, categories: impl IntoIterator<Item = String>) -> Self {
        self.categories = categories.into_iter().collect();
        self
    }

    /// Set the pricing model filter
    pub fn with_pricing_models(mut self, models: impl IntoIterator<Item = String>) -> Self {
        self.pricing_models = models.into_iter().collect();
        self
    }

    /// Set the feature filter
    pub fn with_features(mut self, features: impl IntoIterator<Item = String>) -> Self {
        self.features = features.into_iter().collect();
        self
    }

    /// Exclude specific tool ids from the results
    pub fn excluding(mut self, ids: impl IntoIterator<Item = ToolId>) -> Self {
        self.exclude = ids.into_iter().collect();
        self
    }

    /// Toggle a value in a named filter group, chip-style
    ///
    /// Recognized groups are `"categories"`, `"pricing"`, and
    /// `"features"`. An unrecognized group name is a caller programming
    /// error and fails fast rather than silently doing nothing.
    pub fn toggle_group(&mut self, group: &str, value: &str) -> Result<(), EngineError> {
        let entries = match group {
            "categories" => &mut self.categories,
            "pricing" => &mut self.pricing_models,
            "features" => &mut self.features,
            other => return Err(EngineError::UnknownFilterGroup(other.to_string())),
        };

        if let Some(pos) = entries.iter().position(|v| v == value) {
            entries.remove(pos);
        } else {
            entries.push(value.to_string());
        }
        Ok(())
    }

    /// Reset all groups to the unfiltered state
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether every group is empty (criteria match all tools)
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
            && self.categories.is_empty()
            && self.pricing_models.is_empty()
            && self.features.is_empty()
            && self.exclude.is_empty()
    }

    /// Check whether a tool satisfies every predicate group
    pub fn matches(&self, tool: &Tool) -> bool {
        if self.exclude.contains(&tool.id) {
            return false;
        }

        if !self.text.is_empty() {
            let needle = self.text.to_lowercase();
            let in_name = tool.name.to_lowercase().contains(&needle);
            let in_description = tool.description.to_lowercase().contains(&needle);
            if !in_name && !in_description {
                return false;
            }
        }

        if !self.categories.is_empty() && !self.categories.contains(&tool.category) {
            return false;
        }

        if !self.pricing_models.is_empty() && !self.pricing_models.contains(&tool.pricing_model) {
            return false;
        }

        if !self.features.is_empty()
            && !self.features.iter().any(|f| tool.features.contains(f))
        {
            return false;
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chatbot() -> Tool {
        Tool::new(1, "ChatGPT", "Chatbots")
            .with_description("AI-powered conversational assistant")
            .with_pricing_model("Freemium")
            .with_features(vec![
                "API Access".to_string(),
                "Mobile App".to_string(),
            ])
    }

    #[test]
    fn test_empty_criteria_match_everything() {
        let criteria = FilterCriteria::new();
        assert!(criteria.is_empty());
        assert!(criteria.matches(&chatbot()));
    }

    #[test]
    fn test_text_match_is_case_insensitive_over_name_and_description() {
        let tool = chatbot();

        assert!(FilterCriteria::new().with_text("chatgpt").matches(&tool));
        assert!(FilterCriteria::new().with_text("CONVERSATIONAL").matches(&tool));
        assert!(!FilterCriteria::new().with_text("midjourney").matches(&tool));
    }

    #[test]
    fn test_groups_are_anded_and_values_ored() {
        let tool = chatbot();

        // Matching category OR list
        let criteria = FilterCriteria::new()
            .with_categories(["Writing".to_string(), "Chatbots".to_string()]);
        assert!(criteria.matches(&tool));

        // Category matches but pricing does not: groups are ANDed
        let criteria = FilterCriteria::new()
            .with_categories(["Chatbots".to_string()])
            .with_pricing_models(["Paid".to_string()]);
        assert!(!criteria.matches(&tool));
    }

    #[test]
    fn test_feature_group_matches_on_any_requested_feature() {
        let tool = chatbot();

        let criteria = FilterCriteria::new()
            .with_features(["Offline Mode".to_string(), "Mobile App".to_string()]);
        assert!(criteria.matches(&tool));

        let criteria = FilterCriteria::new().with_features(["Offline Mode".to_string()]);
        assert!(!criteria.matches(&tool));
    }

    #[test]
    fn test_excluded_ids_never_match() {
        let criteria = FilterCriteria::new().excluding([1]);
        assert!(!criteria.matches(&chatbot()));
    }

    #[test]
    fn test_toggle_group_adds_then_removes() {
        let mut criteria = FilterCriteria::new();
        criteria.toggle_group("categories", "Chatbots").unwrap();
        assert_eq!(criteria.categories, vec!["Chatbots"]);

        criteria.toggle_group("categories", "Chatbots").unwrap();
        assert!(criteria.categories.is_empty());

        criteria.toggle_group("pricing", "Free").unwrap();
        criteria.toggle_group("features", "API Access").unwrap();
        assert_eq!(criteria.pricing_models, vec!["Free"]);
        assert_eq!(criteria.features, vec!["API Access"]);
    }

    #[test]
    fn test_toggle_unknown_group_fails_fast() {
        let mut criteria = FilterCriteria::new();
        let err = criteria.toggle_group("price_range", "Free").unwrap_err();
        assert!(matches!(err, EngineError::UnknownFilterGroup(g) if g == "price_range"));
    }

    #[test]
    fn test_clear_resets_to_unfiltered() {
        let mut criteria = FilterCriteria::new()
            .with_text("chat")
            .with_categories(["Chatbots".to_string()])
            .excluding([3]);
        criteria.clear();
        assert!(criteria.is_empty());
    }
}
