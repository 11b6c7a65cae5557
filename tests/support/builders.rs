// tests/support/builders.rs
use provider_catalog::application::commands::articles::CreateArticleCommand;
use provider_catalog::application::commands::providers::CreateProviderCommand;
use provider_catalog::application::dto::{ArticleDto, ProviderDto};
use provider_catalog::application::services::ApplicationServices;

pub async fn create_provider(services: &ApplicationServices, name: &str) -> ProviderDto {
    services
        .provider_commands
        .create_provider(CreateProviderCommand { name: name.into() })
        .await
        .expect("create provider")
}

pub async fn create_article(
    services: &ApplicationServices,
    name: &str,
    price: i32,
    provider_id: i64,
) -> ArticleDto {
    let command = CreateArticleCommand::builder()
        .name(name)
        .price(price)
        .provider_id(provider_id)
        .build()
        .unwrap();
    services
        .article_commands
        .create_article(command)
        .await
        .expect("create article")
}

/// `Article0..ArticleN-1` priced 100, 200, ... for one provider.
pub async fn create_many_articles(
    services: &ApplicationServices,
    provider_id: i64,
    count: i32,
) -> Vec<ArticleDto> {
    let mut created = Vec::new();
    for i in 0..count {
        created.push(create_article(services, &format!("Article{i}"), 100 * (i + 1), provider_id).await);
    }
    created
}
