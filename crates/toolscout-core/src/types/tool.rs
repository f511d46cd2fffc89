//! Catalog entry types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Unique, stable identifier for a catalog entry
pub type ToolId = u64;

/// A catalog entry describing one AI product or service
///
/// Tools are read-only from the perspective of the filter/sort engine:
/// the engine copies and reorders them but never mutates fields. The only
/// mutation path is through a catalog source (e.g. when a new review
/// changes the aggregate rating).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tool {
    /// Unique identifier for this tool
    pub id: ToolId,
    /// Display name
    pub name: String,
    /// Category label (open set, e.g. "Chatbots", "Image Generation")
    pub category: String,
    /// Long-form description
    #[serde(default)]
    pub description: String,
    /// Average user rating, 0.0 to 5.0
    #[serde(default)]
    pub rating: f64,
    /// Popularity score (higher is more popular)
    #[serde(default)]
    pub popularity: f64,
    /// Pricing model label (e.g. "Free", "Freemium", "Subscription")
    #[serde(default)]
    pub pricing_model: String,
    /// Free-text pricing description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pricing: Option<String>,
    /// Release date as an ISO-8601 date string (may be absent or malformed)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    /// Last update date as an ISO-8601 date string
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
    /// Developer / vendor name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub developer: Option<String>,
    /// Product website URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    /// Logo image URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    /// Banner image URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner: Option<String>,
    /// Ease-of-use score, 0 to 10
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ease_of_use: Option<u8>,
    /// Feature list, ordered for display
    #[serde(default)]
    pub features: Vec<String>,
    /// Typical use cases
    #[serde(default)]
    pub use_cases: Vec<String>,
    /// Available integrations
    #[serde(default)]
    pub integrations: Vec<String>,
    /// Security notes
    #[serde(default)]
    pub security: Vec<String>,
    /// Pricing tiers
    #[serde(default)]
    pub pricing_tiers: Vec<PricingTier>,
    /// Number of user reviews backing the rating
    #[serde(default)]
    pub review_count: u32,
    /// Whether this tool is featured on the discover screen
    #[serde(default)]
    pub featured: bool,
}

impl Tool {
    /// Create a new tool with the required fields
    pub fn new(id: ToolId, name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            category: category.into(),
            description: String::new(),
            rating: 0.0,
            popularity: 0.0,
            pricing_model: String::new(),
            pricing: None,
            release_date: None,
            last_updated: None,
            developer: None,
            website: None,
            logo: None,
            banner: None,
            ease_of_use: None,
            features: vec![],
            use_cases: vec![],
            integrations: vec![],
            security: vec![],
            pricing_tiers: vec![],
            review_count: 0,
            featured: false,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the average rating
    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }

    /// Set the popularity score
    pub fn with_popularity(mut self, popularity: f64) -> Self {
        self.popularity = popularity;
        self
    }

    /// Set the pricing model label
    pub fn with_pricing_model(mut self, model: impl Into<String>) -> Self {
        self.pricing_model = model.into();
        self
    }

    /// Set the free-text pricing description
    pub fn with_pricing(mut self, pricing: impl Into<String>) -> Self {
        self.pricing = Some(pricing.into());
        self
    }

    /// Set the release date (ISO-8601, YYYY-MM-DD)
    pub fn with_release_date(mut self, date: impl Into<String>) -> Self {
        self.release_date = Some(date.into());
        self
    }

    /// Set the developer name
    pub fn with_developer(mut self, developer: impl Into<String>) -> Self {
        self.developer = Some(developer.into());
        self
    }

    /// Set the feature list
    pub fn with_features(mut self, features: Vec<String>) -> Self {
        self.features = features;
        self
    }

    /// Set the ease-of-use score
    pub fn with_ease_of_use(mut self, score: u8) -> Self {
        self.ease_of_use = Some(score);
        self
    }

    /// Set the review count
    pub fn with_review_count(mut self, count: u32) -> Self {
        self.review_count = count;
        self
    }

    /// Mark the tool as featured
    pub fn featured(mut self) -> Self {
        self.featured = true;
        self
    }

    /// Parse the release date, if present and well-formed
    ///
    /// Malformed dates are treated the same as missing dates: callers that
    /// sort by recency place them last rather than guessing an order.
    pub fn parsed_release_date(&self) -> Option<NaiveDate> {
        self.release_date
            .as_deref()
            .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
    }
}

/// One tier of a tool's pricing ladder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingTier {
    /// Tier name (e.g. "Free", "Plus", "Enterprise")
    pub name: String,
    /// Price label (e.g. "$20/mo", "Custom")
    pub price: String,
    /// What the tier includes
    #[serde(default)]
    pub features: Vec<String>,
}

impl PricingTier {
    /// Create a new pricing tier
    pub fn new(name: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
            features: vec![],
        }
    }

    /// Set the tier's feature list
    pub fn with_features(mut self, features: Vec<String>) -> Self {
        self.features = features;
        self
    }
}
