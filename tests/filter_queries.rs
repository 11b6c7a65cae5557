use provider_catalog::application::queries::filters::{
    FilterArticlesByPriceQuery, FilterArticlesByProviderQuery,
};
use provider_catalog::application::services::ApplicationServices;

mod support;

use support::{InMemoryCatalog, build_services, create_article, create_many_articles, create_provider};

/// Five articles priced 100..=500 for a single provider.
async fn priced_catalog() -> (ApplicationServices, i64) {
    let catalog = InMemoryCatalog::new();
    let services = build_services(&catalog);
    let provider = create_provider(&services, "Provider1").await;
    create_many_articles(&services, provider.provider_id, 5).await;
    (services, provider.provider_id)
}

async fn by_price(services: &ApplicationServices, min: Option<&str>, max: Option<&str>) -> Vec<i32> {
    services
        .filter_queries
        .filter_by_price(FilterArticlesByPriceQuery {
            min: min.map(str::to_string),
            max: max.map(str::to_string),
        })
        .await
        .unwrap()
        .into_iter()
        .map(|article| article.price)
        .collect()
}

#[tokio::test]
async fn closed_range_is_inclusive_and_newest_first() {
    let (services, _) = priced_catalog().await;
    assert_eq!(by_price(&services, Some("200"), Some("450")).await, vec![400, 300, 200]);
    assert_eq!(by_price(&services, Some("200"), Some("200")).await, vec![200]);
}

#[tokio::test]
async fn single_bounds_are_open_ended() {
    let (services, _) = priced_catalog().await;
    assert_eq!(by_price(&services, Some("200"), None).await, vec![500, 400, 300, 200]);
    assert_eq!(by_price(&services, None, Some("250")).await, vec![200, 100]);
}

#[tokio::test]
async fn inverted_range_is_empty() {
    let (services, _) = priced_catalog().await;
    assert!(by_price(&services, Some("450"), Some("200")).await.is_empty());
}

#[tokio::test]
async fn zero_missing_or_garbage_bounds_return_everything() {
    let (services, _) = priced_catalog().await;
    let everything = vec![500, 400, 300, 200, 100];
    assert_eq!(by_price(&services, None, None).await, everything);
    assert_eq!(by_price(&services, Some("0"), Some("0")).await, everything);
    assert_eq!(by_price(&services, Some("abc"), Some("")).await, everything);
    assert_eq!(by_price(&services, Some("0"), Some("250")).await, vec![200, 100]);
}

async fn by_provider(services: &ApplicationServices, pid: Option<String>) -> Vec<i64> {
    services
        .filter_queries
        .filter_by_provider(FilterArticlesByProviderQuery { pid })
        .await
        .unwrap()
        .into_iter()
        .map(|article| article.article_no)
        .collect()
}

#[tokio::test]
async fn provider_filter_matches_exactly() {
    let catalog = InMemoryCatalog::new();
    let services = build_services(&catalog);
    let p1 = create_provider(&services, "Provider1").await;
    let p2 = create_provider(&services, "Provider2").await;
    let a = create_article(&services, "Article1", 100, p1.provider_id).await;
    let b = create_article(&services, "Article2", 200, p2.provider_id).await;
    let c = create_article(&services, "Article3", 300, p1.provider_id).await;

    assert_eq!(
        by_provider(&services, Some(p1.provider_id.to_string())).await,
        vec![c.article_no, a.article_no]
    );
    assert_eq!(by_provider(&services, Some(p2.provider_id.to_string())).await, vec![b.article_no]);
    assert!(by_provider(&services, Some("9999".into())).await.is_empty());

    let everything = vec![c.article_no, b.article_no, a.article_no];
    assert_eq!(by_provider(&services, None).await, everything);
    assert_eq!(by_provider(&services, Some("0".into())).await, everything);
    assert_eq!(by_provider(&services, Some("p1".into())).await, everything);
}
