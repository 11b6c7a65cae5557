use crate::application::{
    dto::ArticleDto,
    queries::filters::{FilterArticlesByPriceQuery, FilterArticlesByProviderQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Query};

/// Query pairs are taken raw so that a malformed value can never reject the
/// request. When a key repeats, the last occurrence wins.
type RawParams = Vec<(String, String)>;

fn last_value(params: &RawParams, key: &str) -> Option<String> {
    params
        .iter()
        .rev()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.clone())
}

#[utoipa::path(
    get,
    path = "/articles/filter/",
    params(
        ("min" = Option<i64>, Query, description = "Minimum price of the article, inclusive."),
        ("max" = Option<i64>, Query, description = "Maximum price of the article, inclusive.")
    ),
    responses(
        (status = 200, description = "Articles within the price range, newest first.", body = [ArticleDto])
    ),
    tag = "Articles"
)]
pub async fn filter_by_price(
    Extension(state): Extension<HttpState>,
    Query(params): Query<RawParams>,
) -> HttpResult<Json<Vec<ArticleDto>>> {
    let query = FilterArticlesByPriceQuery {
        min: last_value(&params, "min"),
        max: last_value(&params, "max"),
    };

    state
        .services
        .filter_queries
        .filter_by_price(query)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/articles/provider/",
    params(
        ("pid" = Option<i64>, Query, description = "Id of the provider.")
    ),
    responses(
        (status = 200, description = "Articles of the provider, newest first.", body = [ArticleDto])
    ),
    tag = "Articles"
)]
pub async fn filter_by_provider(
    Extension(state): Extension<HttpState>,
    Query(params): Query<RawParams>,
) -> HttpResult<Json<Vec<ArticleDto>>> {
    let query = FilterArticlesByProviderQuery {
        pid: last_value(&params, "pid"),
    };

    state
        .services
        .filter_queries
        .filter_by_provider(query)
        .await
        .into_http()
        .map(Json)
}
