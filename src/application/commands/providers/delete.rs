use super::ProviderCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult, lookup_id},
    domain::provider::ProviderId,
};

pub struct DeleteProviderCommand {
    pub id: i64,
}

impl ProviderCommandService {
    /// Deletes the provider; its articles go with it.
    pub async fn delete_provider(&self, command: DeleteProviderCommand) -> ApplicationResult<()> {
        let id = lookup_id(command.id, ProviderId::new, "provider")?;
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("provider not found"))?;

        self.repo.delete(id).await?;
        tracing::info!(provider_id = %id, "provider deleted with its articles");
        Ok(())
    }
}
