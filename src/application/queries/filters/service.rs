use std::sync::Arc;

use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::article::{ArticleFilter, ArticleReadRepository},
};

pub struct FilterQueryService {
    read_repo: Arc<dyn ArticleReadRepository>,
}

impl FilterQueryService {
    pub fn new(read_repo: Arc<dyn ArticleReadRepository>) -> Self {
        Self { read_repo }
    }

    pub(super) async fn run(&self, filter: ArticleFilter) -> ApplicationResult<Vec<ArticleDto>> {
        tracing::debug!(?filter, "filtering articles");
        let records = self.read_repo.list(&filter).await?;
        Ok(records.into_iter().map(Into::into).collect())
    }
}
