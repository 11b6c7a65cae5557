use crate::domain::article::entity::{Article, ArticleCombination, ArticleUpdate, NewArticle};
use crate::domain::article::filter::ArticleFilter;
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article>;
    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;

    /// Matching articles, most recently created first.
    async fn list(&self, filter: &ArticleFilter) -> DomainResult<Vec<Article>>;

    async fn exists_by_combination(&self, combination: &ArticleCombination)
    -> DomainResult<bool>;
}
