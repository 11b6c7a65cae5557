// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::{
        UpdateMode,
        articles::{CreateArticleCommand, DeleteArticleCommand, UpdateArticleCommand},
    },
    dto::ArticleDto,
    queries::articles::GetArticleByIdQuery,
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{JsonBody, ResourceId, non_null};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateArticleRequest {
    pub article_name: String,
    pub price: i32,
    pub provider_no: i64,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateArticleRequest {
    #[serde(default, deserialize_with = "non_null")]
    pub article_name: Option<String>,
    #[serde(default, deserialize_with = "non_null")]
    pub price: Option<i32>,
    #[serde(default, deserialize_with = "non_null")]
    pub provider_no: Option<i64>,
}

#[utoipa::path(
    get,
    path = "/articles/",
    responses(
        (status = 200, description = "All articles, newest first.", body = [ArticleDto])
    ),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<ArticleDto>>> {
    state
        .services
        .article_queries
        .list_articles()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/articles/",
    request_body = CreateArticleRequest,
    responses(
        (status = 201, description = "Article created.", body = ArticleDto),
        (status = 400, description = "Invalid payload, unknown provider or duplicate combination.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    JsonBody(payload): JsonBody<CreateArticleRequest>,
) -> HttpResult<(StatusCode, Json<ArticleDto>)> {
    let command = CreateArticleCommand {
        name: payload.article_name,
        price: payload.price,
        provider_id: payload.provider_no,
    };

    let created = state
        .services
        .article_commands
        .create_article(command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get,
    path = "/articles/{id}/",
    params(("id" = i64, Path, description = "Article number")),
    responses(
        (status = 200, description = "The article.", body = ArticleDto),
        (status = 404, description = "Unknown article.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    ResourceId(id): ResourceId,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/articles/{id}/",
    params(("id" = i64, Path, description = "Article number")),
    request_body = UpdateArticleRequest,
    responses(
        (status = 200, description = "Article replaced.", body = ArticleDto),
        (status = 400, description = "Missing or invalid fields.", body = ErrorResponse),
        (status = 404, description = "Unknown article.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn replace_article(
    Extension(state): Extension<HttpState>,
    ResourceId(id): ResourceId,
    JsonBody(payload): JsonBody<UpdateArticleRequest>,
) -> HttpResult<Json<ArticleDto>> {
    update_article(state, id, payload, UpdateMode::Full).await
}

#[utoipa::path(
    patch,
    path = "/articles/{id}/",
    params(("id" = i64, Path, description = "Article number")),
    request_body = UpdateArticleRequest,
    responses(
        (status = 200, description = "Article updated.", body = ArticleDto),
        (status = 400, description = "Invalid fields.", body = ErrorResponse),
        (status = 404, description = "Unknown article.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn patch_article(
    Extension(state): Extension<HttpState>,
    ResourceId(id): ResourceId,
    JsonBody(payload): JsonBody<UpdateArticleRequest>,
) -> HttpResult<Json<ArticleDto>> {
    update_article(state, id, payload, UpdateMode::Partial).await
}

async fn update_article(
    state: HttpState,
    id: i64,
    payload: UpdateArticleRequest,
    mode: UpdateMode,
) -> HttpResult<Json<ArticleDto>> {
    let command = UpdateArticleCommand {
        id,
        name: payload.article_name,
        price: payload.price,
        provider_id: payload.provider_no,
        mode,
    };

    state
        .services
        .article_commands
        .update_article(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/articles/{id}/",
    params(("id" = i64, Path, description = "Article number")),
    responses(
        (status = 204, description = "Article deleted."),
        (status = 404, description = "Unknown article.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    ResourceId(id): ResourceId,
) -> HttpResult<StatusCode> {
    state
        .services
        .article_commands
        .delete_article(DeleteArticleCommand { id })
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}
