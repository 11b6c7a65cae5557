use std::sync::Arc;

use crate::domain::provider::ProviderRepository;

pub struct ProviderQueryService {
    pub(super) repo: Arc<dyn ProviderRepository>,
}

impl ProviderQueryService {
    pub fn new(repo: Arc<dyn ProviderRepository>) -> Self {
        Self { repo }
    }
}
