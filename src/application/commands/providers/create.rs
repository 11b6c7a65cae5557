use super::ProviderCommandService;
use crate::{
    application::{dto::ProviderDto, error::ApplicationResult},
    domain::provider::{NewProvider, ProviderName},
};

pub struct CreateProviderCommand {
    pub name: String,
}

impl ProviderCommandService {
    pub async fn create_provider(
        &self,
        command: CreateProviderCommand,
    ) -> ApplicationResult<ProviderDto> {
        let name = ProviderName::new(command.name)?;
        self.ensure_name_available(&name, None).await?;

        let created = self.repo.insert(NewProvider { name }).await?;
        tracing::info!(provider_id = %created.id, "provider created");
        Ok(created.into())
    }
}
