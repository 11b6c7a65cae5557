use crate::domain::provider::Provider;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProviderDto {
    pub provider_id: i64,
    pub provider_name: String,
}

impl From<Provider> for ProviderDto {
    fn from(provider: Provider) -> Self {
        Self {
            provider_id: provider.id.into(),
            provider_name: provider.name.into_inner(),
        }
    }
}
