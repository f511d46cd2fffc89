//! Filter/sort engine
//!
//! A pure, synchronous view pipeline: given a snapshot of tools, a set of
//! filter criteria, and a sort key, [`apply`] produces the filtered,
//! ordered view the UI renders. The engine never performs I/O, never
//! mutates its inputs, and is deterministic for identical arguments.

mod criteria;
mod sort;

pub use criteria::FilterCriteria;
pub use sort::{sort_tools, SortKey};

use thiserror::Error;

use crate::types::Tool;

/// Caller programming errors raised by the engine
#[derive(Debug, Error)]
pub enum EngineError {
    /// The sort key string is not one of the recognized keys
    #[error("unknown sort key: {0}")]
    UnknownSortKey(String),

    /// The filter group name is not one of the recognized groups
    #[error("unknown filter group: {0}")]
    UnknownFilterGroup(String),
}

/// Filter and order a tool list
///
/// The result is always a subsequence permutation of `tools`: no record is
/// fabricated or altered, and every sort is stable. Empty criteria with
/// [`SortKey::Relevance`] return the input unchanged.
pub fn apply(tools: &[Tool], criteria: &FilterCriteria, sort: SortKey) -> Vec<Tool> {
    let mut results: Vec<Tool> = tools
        .iter()
        .filter(|t| criteria.matches(t))
        .cloned()
        .collect();
    sort_tools(&mut results, sort);
    results
}

/// [`apply`] with a string sort key, as delivered by UI sort chips
///
/// Fails fast with [`EngineError::UnknownSortKey`] rather than silently
/// falling back to relevance.
pub fn apply_str(
    tools: &[Tool],
    criteria: &FilterCriteria,
    sort: &str,
) -> Result<Vec<Tool>, EngineError> {
    Ok(apply(tools, criteria, sort.parse()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Vec<Tool> {
        vec![
            Tool::new(1, "ChatGPT", "Chatbots")
                .with_description("Conversational AI by OpenAI")
                .with_rating(4.8)
                .with_popularity(98.0)
                .with_pricing_model("Freemium")
                .with_release_date("2022-11-30"),
            Tool::new(2, "DALL-E", "Image Generation")
                .with_description("Text-to-image generation")
                .with_rating(4.7)
                .with_popularity(92.0)
                .with_pricing_model("Paid")
                .with_release_date("2022-04-06"),
            Tool::new(3, "Midjourney", "Image Generation")
                .with_description("AI art generation")
                .with_rating(4.9)
                .with_popularity(95.0)
                .with_pricing_model("Subscription")
                .with_release_date("2022-07-12"),
        ]
    }

    #[test]
    fn test_identity_on_empty_criteria_and_relevance() {
        let tools = fixture();
        let results = apply(&tools, &FilterCriteria::new(), SortKey::Relevance);
        assert_eq!(results, tools);
    }

    #[test]
    fn test_result_is_a_subsequence_of_the_input() {
        let tools = fixture();
        let criteria = FilterCriteria::new().with_categories(["Image Generation".to_string()]);
        let results = apply(&tools, &criteria, SortKey::Relevance);

        assert_eq!(results.len(), 2);
        let mut remaining = results.iter();
        let mut next = remaining.next();
        for tool in &tools {
            if Some(tool) == next {
                next = remaining.next();
            }
        }
        assert!(next.is_none(), "result order not a subsequence of input");
    }

    #[test]
    fn test_rating_sort_orders_highest_first() {
        // tools = [ChatGPT 4.8, DALL-E 4.7, Midjourney 4.9], sort by rating
        let tools = fixture();
        let results = apply(&tools, &FilterCriteria::new(), SortKey::Rating);
        let ids: Vec<_> = results.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_apply_is_idempotent() {
        let tools = fixture();
        let criteria = FilterCriteria::new().with_text("ai");
        let once = apply(&tools, &criteria, SortKey::Rating);
        let twice = apply(&once, &criteria, SortKey::Rating);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_apply_is_deterministic() {
        let tools = fixture();
        let criteria = FilterCriteria::new().with_text("generation");
        let first = apply(&tools, &criteria, SortKey::Popularity);
        let second = apply(&tools, &criteria, SortKey::Popularity);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        let results = apply(&[], &FilterCriteria::new(), SortKey::Rating);
        assert!(results.is_empty());
    }

    #[test]
    fn test_text_and_category_filters_combine() {
        let tools = fixture();
        let criteria = FilterCriteria::new()
            .with_text("generation")
            .with_categories(["Image Generation".to_string()]);
        let results = apply(&tools, &criteria, SortKey::Popularity);
        let ids: Vec<_> = results.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![3, 2]);
    }

    #[test]
    fn test_apply_str_rejects_unknown_keys() {
        let tools = fixture();
        let err = apply_str(&tools, &FilterCriteria::new(), "best").unwrap_err();
        assert!(matches!(err, EngineError::UnknownSortKey(_)));

        let ok = apply_str(&tools, &FilterCriteria::new(), "newest").unwrap();
        assert_eq!(ok[0].id, 1);
    }
}
