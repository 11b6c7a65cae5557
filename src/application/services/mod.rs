// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{articles::ArticleCommandService, providers::ProviderCommandService},
        queries::{
            articles::ArticleQueryService, filters::FilterQueryService,
            providers::ProviderQueryService,
        },
    },
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository},
        provider::ProviderRepository,
    },
};

pub struct ApplicationServices {
    pub provider_commands: Arc<ProviderCommandService>,
    pub provider_queries: Arc<ProviderQueryService>,
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub filter_queries: Arc<FilterQueryService>,
}

impl ApplicationServices {
    pub fn new(
        provider_repo: Arc<dyn ProviderRepository>,
        article_write_repo: Arc<dyn ArticleWriteRepository>,
        article_read_repo: Arc<dyn ArticleReadRepository>,
    ) -> Self {
        let provider_commands = Arc::new(ProviderCommandService::new(Arc::clone(&provider_repo)));
        let provider_queries = Arc::new(ProviderQueryService::new(Arc::clone(&provider_repo)));

        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&article_write_repo),
            Arc::clone(&article_read_repo),
            Arc::clone(&provider_repo),
        ));
        let article_queries = Arc::new(ArticleQueryService::new(Arc::clone(&article_read_repo)));
        let filter_queries = Arc::new(FilterQueryService::new(Arc::clone(&article_read_repo)));

        Self {
            provider_commands,
            provider_queries,
            article_commands,
            article_queries,
            filter_queries,
        }
    }
}
