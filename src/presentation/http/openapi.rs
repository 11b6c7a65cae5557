// src/presentation/http/openapi.rs
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use std::{env, fs::File, io::BufWriter, path::Path};
use utoipa::{OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub healthy: bool,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::providers::list_providers,
        crate::presentation::http::controllers::providers::create_provider,
        crate::presentation::http::controllers::providers::get_provider,
        crate::presentation::http::controllers::providers::replace_provider,
        crate::presentation::http::controllers::providers::patch_provider,
        crate::presentation::http::controllers::providers::delete_provider,
        crate::presentation::http::controllers::articles::list_articles,
        crate::presentation::http::controllers::articles::create_article,
        crate::presentation::http::controllers::articles::get_article,
        crate::presentation::http::controllers::articles::replace_article,
        crate::presentation::http::controllers::articles::patch_article,
        crate::presentation::http::controllers::articles::delete_article,
        crate::presentation::http::controllers::filters::filter_by_price,
        crate::presentation::http::controllers::filters::filter_by_provider,
        super::routes::health
    ),
    components(
        schemas(
            HealthResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::providers::CreateProviderRequest,
            crate::presentation::http::controllers::providers::UpdateProviderRequest,
            crate::presentation::http::controllers::articles::CreateArticleRequest,
            crate::presentation::http::controllers::articles::UpdateArticleRequest,
            crate::application::dto::ProviderDto,
            crate::application::dto::ArticleDto
        )
    ),
    tags(
        (name = "Providers", description = "Provider management endpoints"),
        (name = "Articles", description = "Article management and filtering endpoints"),
        (name = "System", description = "System level endpoints")
    ),
    info(
        title = "Provider Catalog API",
        description = "Providers and the articles they supply",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url(OPENAPI_JSON_PATH, openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new()
        .merge(swagger)
        .merge(redoc)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

pub fn write_openapi_snapshot() -> std::io::Result<String> {
    let document = ApiDoc::openapi();
    let output_path =
        env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| "docs/openapi.json".to_string());
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &document)?;
    Ok(output_path)
}
