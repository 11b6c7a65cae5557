// src/application/commands/providers/service.rs
use std::sync::Arc;

use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::provider::{ProviderId, ProviderName, ProviderRepository},
};

pub struct ProviderCommandService {
    pub(super) repo: Arc<dyn ProviderRepository>,
}

impl ProviderCommandService {
    pub fn new(repo: Arc<dyn ProviderRepository>) -> Self {
        Self { repo }
    }

    pub(super) async fn ensure_name_available(
        &self,
        name: &ProviderName,
        exclude: Option<ProviderId>,
    ) -> ApplicationResult<()> {
        if self.repo.exists_by_name(name, exclude).await? {
            return Err(ApplicationError::validation(
                "provider with this provider name already exists",
            ));
        }
        Ok(())
    }
}
