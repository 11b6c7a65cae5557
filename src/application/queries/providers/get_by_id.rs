use super::ProviderQueryService;
use crate::{
    application::{
        dto::ProviderDto,
        error::{ApplicationError, ApplicationResult, lookup_id},
    },
    domain::provider::ProviderId,
};

pub struct GetProviderByIdQuery {
    pub id: i64,
}

impl ProviderQueryService {
    pub async fn get_provider_by_id(
        &self,
        query: GetProviderByIdQuery,
    ) -> ApplicationResult<ProviderDto> {
        let id = lookup_id(query.id, ProviderId::new, "provider")?;
        let provider = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("provider not found"))?;
        Ok(provider.into())
    }
}
