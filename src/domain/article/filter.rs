//! Read-side selection criteria for article listings.

use crate::domain::article::entity::Article;

/// Inclusive price bounds. A missing bound leaves that side open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PriceRange {
    pub min: Option<i64>,
    pub max: Option<i64>,
}

impl PriceRange {
    pub fn new(min: Option<i64>, max: Option<i64>) -> Self {
        Self { min, max }
    }

    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    pub fn contains(&self, price: i64) -> bool {
        self.min.is_none_or(|min| price >= min) && self.max.is_none_or(|max| price <= max)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ArticleFilter {
    #[default]
    All,
    Price(PriceRange),
    /// Raw provider key; ids that were never assigned simply match nothing.
    Provider(i64),
}

impl ArticleFilter {
    pub fn matches(&self, article: &Article) -> bool {
        match self {
            Self::All => true,
            Self::Price(range) => range.contains(i64::from(article.price.value())),
            Self::Provider(provider_id) => i64::from(article.provider_id) == *provider_id,
        }
    }
}
