// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleId, ArticleName, Price};
use crate::domain::provider::ProviderId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: ArticleId,
    pub name: ArticleName,
    pub price: Price,
    pub provider_id: ProviderId,
}

impl Article {
    pub fn combination(&self) -> ArticleCombination {
        ArticleCombination {
            name: self.name.clone(),
            price: self.price,
            provider_id: self.provider_id,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub name: ArticleName,
    pub price: Price,
    pub provider_id: ProviderId,
}

impl NewArticle {
    pub fn combination(&self) -> ArticleCombination {
        ArticleCombination {
            name: self.name.clone(),
            price: self.price,
            provider_id: self.provider_id,
        }
    }
}

/// The `(name, price, provider)` triple that must be unique when an article
/// is created.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArticleCombination {
    pub name: ArticleName,
    pub price: Price,
    pub provider_id: ProviderId,
}

#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub name: Option<ArticleName>,
    pub price: Option<Price>,
    pub provider_id: Option<ProviderId>,
}

impl ArticleUpdate {
    pub fn new(id: ArticleId) -> Self {
        Self {
            id,
            name: None,
            price: None,
            provider_id: None,
        }
    }

    pub fn with_name(mut self, name: ArticleName) -> Self {
        self.name = Some(name);
        self
    }

    pub fn with_price(mut self, price: Price) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_provider(mut self, provider_id: ProviderId) -> Self {
        self.provider_id = Some(provider_id);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none() && self.provider_id.is_none()
    }

    /// Apply the set fields to `article` in place.
    pub fn apply_to(&self, article: &mut Article) {
        if let Some(name) = &self.name {
            article.name = name.clone();
        }
        if let Some(price) = self.price {
            article.price = price;
        }
        if let Some(provider_id) = self.provider_id {
            article.provider_id = provider_id;
        }
    }
}
