use super::ProviderCommandService;
use crate::{
    application::{
        commands::UpdateMode,
        dto::ProviderDto,
        error::{ApplicationError, ApplicationResult, lookup_id},
    },
    domain::provider::{ProviderId, ProviderName, ProviderUpdate},
};

pub struct UpdateProviderCommand {
    pub id: i64,
    pub name: Option<String>,
    pub mode: UpdateMode,
}

impl ProviderCommandService {
    pub async fn update_provider(
        &self,
        command: UpdateProviderCommand,
    ) -> ApplicationResult<ProviderDto> {
        let id = lookup_id(command.id, ProviderId::new, "provider")?;
        let current = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("provider not found"))?;

        if command.mode.is_full() && command.name.is_none() {
            return Err(ApplicationError::validation("provider_name is required"));
        }

        let mut update = ProviderUpdate::new(id);
        if let Some(raw) = command.name {
            let name = ProviderName::new(raw)?;
            if name != current.name {
                self.ensure_name_available(&name, Some(id)).await?;
            }
            update = update.with_name(name);
        }

        if update.is_empty() {
            return Ok(current.into());
        }

        let updated = self.repo.update(update).await?;
        tracing::info!(provider_id = %updated.id, "provider updated");
        Ok(updated.into())
    }
}
