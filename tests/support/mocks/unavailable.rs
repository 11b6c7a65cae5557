// tests/support/mocks/unavailable.rs
use async_trait::async_trait;
use provider_catalog::domain::article::{
    Article, ArticleCombination, ArticleFilter, ArticleId, ArticleReadRepository, ArticleUpdate,
    ArticleWriteRepository, NewArticle,
};
use provider_catalog::domain::errors::{DomainError, DomainResult};
use provider_catalog::domain::provider::{
    NewProvider, Provider, ProviderId, ProviderName, ProviderRepository, ProviderUpdate,
};

/// Every call fails the way a lost database connection would.
pub struct UnavailableCatalog;

fn down<T>() -> DomainResult<T> {
    Err(DomainError::Persistence("connection refused".into()))
}

#[async_trait]
impl ProviderRepository for UnavailableCatalog {
    async fn insert(&self, _provider: NewProvider) -> DomainResult<Provider> {
        down()
    }

    async fn update(&self, _update: ProviderUpdate) -> DomainResult<Provider> {
        down()
    }

    async fn delete(&self, _id: ProviderId) -> DomainResult<()> {
        down()
    }

    async fn find_by_id(&self, _id: ProviderId) -> DomainResult<Option<Provider>> {
        down()
    }

    async fn list(&self) -> DomainResult<Vec<Provider>> {
        down()
    }

    async fn exists_by_name(
        &self,
        _name: &ProviderName,
        _exclude: Option<ProviderId>,
    ) -> DomainResult<bool> {
        down()
    }
}

#[async_trait]
impl ArticleWriteRepository for UnavailableCatalog {
    async fn insert(&self, _article: NewArticle) -> DomainResult<Article> {
        down()
    }

    async fn update(&self, _update: ArticleUpdate) -> DomainResult<Article> {
        down()
    }

    async fn delete(&self, _id: ArticleId) -> DomainResult<()> {
        down()
    }
}

#[async_trait]
impl ArticleReadRepository for UnavailableCatalog {
    async fn find_by_id(&self, _id: ArticleId) -> DomainResult<Option<Article>> {
        down()
    }

    async fn list(&self, _filter: &ArticleFilter) -> DomainResult<Vec<Article>> {
        down()
    }

    async fn exists_by_combination(
        &self,
        _combination: &ArticleCombination,
    ) -> DomainResult<bool> {
        down()
    }
}
