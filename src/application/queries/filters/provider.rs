use super::{FilterQueryService, parse_filter_value};
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::article::ArticleFilter,
};

#[derive(Debug, Default)]
pub struct FilterArticlesByProviderQuery {
    pub pid: Option<String>,
}

impl FilterArticlesByProviderQuery {
    pub fn to_filter(&self) -> ArticleFilter {
        parse_filter_value(self.pid.as_deref()).map_or(ArticleFilter::All, ArticleFilter::Provider)
    }
}

impl FilterQueryService {
    pub async fn filter_by_provider(
        &self,
        query: FilterArticlesByProviderQuery,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        self.run(query.to_filter()).await
    }
}
