// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{articles, filters, providers},
    openapi::{self, HealthResponse},
};
use axum::{Extension, Router, http::Method, routing::get};
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn build_router(state: HttpState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .merge(openapi::docs_router())
        .route("/health/", get(health))
        .route(
            "/providers/",
            get(providers::list_providers).post(providers::create_provider),
        )
        .route(
            "/providers/{id}/",
            get(providers::get_provider)
                .put(providers::replace_provider)
                .patch(providers::patch_provider)
                .delete(providers::delete_provider),
        )
        .route(
            "/articles/",
            get(articles::list_articles).post(articles::create_article),
        )
        .route("/articles/filter/", get(filters::filter_by_price))
        .route("/articles/provider/", get(filters::filter_by_provider))
        .route(
            "/articles/{id}/",
            get(articles::get_article)
                .put(articles::replace_article)
                .patch(articles::patch_article)
                .delete(articles::delete_article),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

#[utoipa::path(
    get,
    path = "/health/",
    responses(
        (status = 200, description = "Service health check.", body = HealthResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<HealthResponse> {
    axum::Json(HealthResponse { healthy: true })
}
