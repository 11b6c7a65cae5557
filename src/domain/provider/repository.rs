use crate::domain::errors::DomainResult;
use crate::domain::provider::entity::{NewProvider, Provider, ProviderUpdate};
use crate::domain::provider::value_objects::{ProviderId, ProviderName};
use async_trait::async_trait;

#[async_trait]
pub trait ProviderRepository: Send + Sync {
    async fn insert(&self, provider: NewProvider) -> DomainResult<Provider>;

    /// Applies the set fields. An empty update returns the stored record.
    async fn update(&self, update: ProviderUpdate) -> DomainResult<Provider>;

    /// Removes the provider together with every article referencing it.
    async fn delete(&self, id: ProviderId) -> DomainResult<()>;

    async fn find_by_id(&self, id: ProviderId) -> DomainResult<Option<Provider>>;

    /// All providers, most recently created first.
    async fn list(&self) -> DomainResult<Vec<Provider>>;

    async fn exists_by_name(
        &self,
        name: &ProviderName,
        exclude: Option<ProviderId>,
    ) -> DomainResult<bool>;
}
