// src/domain/provider/entity.rs
use crate::domain::provider::value_objects::{ProviderId, ProviderName};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Provider {
    pub id: ProviderId,
    pub name: ProviderName,
}

#[derive(Debug, Clone)]
pub struct NewProvider {
    pub name: ProviderName,
}

#[derive(Debug, Clone)]
pub struct ProviderUpdate {
    pub id: ProviderId,
    pub name: Option<ProviderName>,
}

impl ProviderUpdate {
    pub fn new(id: ProviderId) -> Self {
        Self { id, name: None }
    }

    pub fn with_name(mut self, name: ProviderName) -> Self {
        self.name = Some(name);
        self
    }

    /// True when no column would change.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
    }
}
