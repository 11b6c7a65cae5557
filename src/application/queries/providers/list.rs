use super::ProviderQueryService;
use crate::application::{dto::ProviderDto, error::ApplicationResult};

impl ProviderQueryService {
    /// Every provider, newest first.
    pub async fn list_providers(&self) -> ApplicationResult<Vec<ProviderDto>> {
        let providers = self.repo.list().await?;
        Ok(providers.into_iter().map(Into::into).collect())
    }
}
