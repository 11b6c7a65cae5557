// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository},
        provider::{ProviderId, ProviderRepository},
    },
};

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) provider_repo: Arc<dyn ProviderRepository>,
}

impl ArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        read_repo: Arc<dyn ArticleReadRepository>,
        provider_repo: Arc<dyn ProviderRepository>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            provider_repo,
        }
    }

    /// A dangling provider reference is a validation failure of the article,
    /// not a missing article.
    pub(super) async fn resolve_provider(&self, raw_id: i64) -> ApplicationResult<ProviderId> {
        let invalid =
            || ApplicationError::validation(format!("provider {raw_id} does not exist"));

        let id = ProviderId::new(raw_id).map_err(|_| invalid())?;
        match self.provider_repo.find_by_id(id).await? {
            Some(provider) => Ok(provider.id),
            None => Err(invalid()),
        }
    }
}
