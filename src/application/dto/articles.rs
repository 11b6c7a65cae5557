use crate::domain::article::Article;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub article_no: i64,
    pub article_name: String,
    pub price: i32,
    /// Id of the provider this article belongs to.
    pub provider_no: i64,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            article_no: article.id.into(),
            article_name: article.name.into_inner(),
            price: article.price.into(),
            provider_no: article.provider_id.into(),
        }
    }
}
