// tests/support/mocks/catalog.rs
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use provider_catalog::domain::article::{
    Article, ArticleCombination, ArticleFilter, ArticleId, ArticleReadRepository, ArticleUpdate,
    ArticleWriteRepository, NewArticle,
};
use provider_catalog::domain::errors::{DomainError, DomainResult};
use provider_catalog::domain::provider::{
    NewProvider, Provider, ProviderId, ProviderName, ProviderRepository, ProviderUpdate,
};

#[derive(Default)]
struct CatalogState {
    providers: BTreeMap<i64, Provider>,
    articles: BTreeMap<i64, Article>,
    last_provider_id: i64,
    last_article_id: i64,
}

impl CatalogState {
    fn name_taken(&self, name: &ProviderName, exclude: Option<ProviderId>) -> bool {
        self.providers
            .values()
            .any(|p| &p.name == name && Some(p.id) != exclude)
    }

    fn ensure_provider(&self, id: ProviderId) -> DomainResult<()> {
        if self.providers.contains_key(&i64::from(id)) {
            Ok(())
        } else {
            Err(DomainError::Validation("provider does not exist".into()))
        }
    }
}

/// In-memory stand-in for the PostgreSQL schema: unique provider names,
/// the article -> provider foreign key and the cascading provider delete
/// are all emulated. Ids are never reused, like a sequence.
#[derive(Clone, Default)]
pub struct InMemoryCatalog {
    inner: Arc<Mutex<CatalogState>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn provider_count(&self) -> usize {
        self.inner.lock().unwrap().providers.len()
    }

    pub fn article_count(&self) -> usize {
        self.inner.lock().unwrap().articles.len()
    }

    pub fn article(&self, id: i64) -> Option<Article> {
        self.inner.lock().unwrap().articles.get(&id).cloned()
    }

    pub fn provider(&self, id: i64) -> Option<Provider> {
        self.inner.lock().unwrap().providers.get(&id).cloned()
    }
}

#[async_trait]
impl ProviderRepository for InMemoryCatalog {
    async fn insert(&self, provider: NewProvider) -> DomainResult<Provider> {
        let mut state = self.inner.lock().unwrap();
        if state.name_taken(&provider.name, None) {
            return Err(DomainError::Validation(
                "provider with this provider name already exists".into(),
            ));
        }
        state.last_provider_id += 1;
        let id = state.last_provider_id;
        let created = Provider {
            id: ProviderId::new(id)?,
            name: provider.name,
        };
        state.providers.insert(id, created.clone());
        Ok(created)
    }

    async fn update(&self, update: ProviderUpdate) -> DomainResult<Provider> {
        let mut state = self.inner.lock().unwrap();
        if let Some(name) = &update.name
            && state.name_taken(name, Some(update.id))
        {
            return Err(DomainError::Validation(
                "provider with this provider name already exists".into(),
            ));
        }
        let provider = state
            .providers
            .get_mut(&i64::from(update.id))
            .ok_or_else(|| DomainError::NotFound("provider not found".into()))?;
        if let Some(name) = update.name {
            provider.name = name;
        }
        Ok(provider.clone())
    }

    async fn delete(&self, id: ProviderId) -> DomainResult<()> {
        let mut state = self.inner.lock().unwrap();
        if state.providers.remove(&i64::from(id)).is_none() {
            return Err(DomainError::NotFound("provider not found".into()));
        }
        state.articles.retain(|_, article| article.provider_id != id);
        Ok(())
    }

    async fn find_by_id(&self, id: ProviderId) -> DomainResult<Option<Provider>> {
        Ok(self.provider(i64::from(id)))
    }

    async fn list(&self) -> DomainResult<Vec<Provider>> {
        let state = self.inner.lock().unwrap();
        Ok(state.providers.values().rev().cloned().collect())
    }

    async fn exists_by_name(
        &self,
        name: &ProviderName,
        exclude: Option<ProviderId>,
    ) -> DomainResult<bool> {
        Ok(self.inner.lock().unwrap().name_taken(name, exclude))
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryCatalog {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut state = self.inner.lock().unwrap();
        state.ensure_provider(article.provider_id)?;
        state.last_article_id += 1;
        let id = state.last_article_id;
        let created = Article {
            id: ArticleId::new(id)?,
            name: article.name,
            price: article.price,
            provider_id: article.provider_id,
        };
        state.articles.insert(id, created.clone());
        Ok(created)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let mut state = self.inner.lock().unwrap();
        if let Some(provider_id) = update.provider_id {
            state.ensure_provider(provider_id)?;
        }
        let article = state
            .articles
            .get_mut(&i64::from(update.id))
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        update.apply_to(article);
        Ok(article.clone())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let mut state = self.inner.lock().unwrap();
        state
            .articles
            .remove(&i64::from(id))
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("article not found".into()))
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryCatalog {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(self.article(i64::from(id)))
    }

    async fn list(&self, filter: &ArticleFilter) -> DomainResult<Vec<Article>> {
        let state = self.inner.lock().unwrap();
        Ok(state
            .articles
            .values()
            .rev()
            .filter(|article| filter.matches(article))
            .cloned()
            .collect())
    }

    async fn exists_by_combination(
        &self,
        combination: &ArticleCombination,
    ) -> DomainResult<bool> {
        let state = self.inner.lock().unwrap();
        Ok(state
            .articles
            .values()
            .any(|article| &article.combination() == combination))
    }
}
