// src/presentation/http/controllers/providers.rs
use crate::application::{
    commands::{
        UpdateMode,
        providers::{CreateProviderCommand, DeleteProviderCommand, UpdateProviderCommand},
    },
    dto::ProviderDto,
    queries::providers::GetProviderByIdQuery,
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{JsonBody, ResourceId, non_null};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateProviderRequest {
    pub provider_name: String,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateProviderRequest {
    #[serde(default, deserialize_with = "non_null")]
    pub provider_name: Option<String>,
}

#[utoipa::path(
    get,
    path = "/providers/",
    responses(
        (status = 200, description = "All providers, newest first.", body = [ProviderDto])
    ),
    tag = "Providers"
)]
pub async fn list_providers(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<ProviderDto>>> {
    state
        .services
        .provider_queries
        .list_providers()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/providers/",
    request_body = CreateProviderRequest,
    responses(
        (status = 201, description = "Provider created.", body = ProviderDto),
        (status = 400, description = "Empty or duplicate name.", body = ErrorResponse)
    ),
    tag = "Providers"
)]
pub async fn create_provider(
    Extension(state): Extension<HttpState>,
    JsonBody(payload): JsonBody<CreateProviderRequest>,
) -> HttpResult<(StatusCode, Json<ProviderDto>)> {
    let command = CreateProviderCommand {
        name: payload.provider_name,
    };

    let created = state
        .services
        .provider_commands
        .create_provider(command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get,
    path = "/providers/{id}/",
    params(("id" = i64, Path, description = "Provider id")),
    responses(
        (status = 200, description = "The provider.", body = ProviderDto),
        (status = 404, description = "Unknown provider.", body = ErrorResponse)
    ),
    tag = "Providers"
)]
pub async fn get_provider(
    Extension(state): Extension<HttpState>,
    ResourceId(id): ResourceId,
) -> HttpResult<Json<ProviderDto>> {
    state
        .services
        .provider_queries
        .get_provider_by_id(GetProviderByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/providers/{id}/",
    params(("id" = i64, Path, description = "Provider id")),
    request_body = UpdateProviderRequest,
    responses(
        (status = 200, description = "Provider replaced.", body = ProviderDto),
        (status = 400, description = "Missing, empty or duplicate name.", body = ErrorResponse),
        (status = 404, description = "Unknown provider.", body = ErrorResponse)
    ),
    tag = "Providers"
)]
pub async fn replace_provider(
    Extension(state): Extension<HttpState>,
    ResourceId(id): ResourceId,
    JsonBody(payload): JsonBody<UpdateProviderRequest>,
) -> HttpResult<Json<ProviderDto>> {
    update_provider(state, id, payload, UpdateMode::Full).await
}

#[utoipa::path(
    patch,
    path = "/providers/{id}/",
    params(("id" = i64, Path, description = "Provider id")),
    request_body = UpdateProviderRequest,
    responses(
        (status = 200, description = "Provider updated.", body = ProviderDto),
        (status = 400, description = "Empty or duplicate name.", body = ErrorResponse),
        (status = 404, description = "Unknown provider.", body = ErrorResponse)
    ),
    tag = "Providers"
)]
pub async fn patch_provider(
    Extension(state): Extension<HttpState>,
    ResourceId(id): ResourceId,
    JsonBody(payload): JsonBody<UpdateProviderRequest>,
) -> HttpResult<Json<ProviderDto>> {
    update_provider(state, id, payload, UpdateMode::Partial).await
}

async fn update_provider(
    state: HttpState,
    id: i64,
    payload: UpdateProviderRequest,
    mode: UpdateMode,
) -> HttpResult<Json<ProviderDto>> {
    let command = UpdateProviderCommand {
        id,
        name: payload.provider_name,
        mode,
    };

    state
        .services
        .provider_commands
        .update_provider(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/providers/{id}/",
    params(("id" = i64, Path, description = "Provider id")),
    responses(
        (status = 204, description = "Provider and its articles deleted."),
        (status = 404, description = "Unknown provider.", body = ErrorResponse)
    ),
    tag = "Providers"
)]
pub async fn delete_provider(
    Extension(state): Extension<HttpState>,
    ResourceId(id): ResourceId,
) -> HttpResult<StatusCode> {
    state
        .services
        .provider_commands
        .delete_provider(DeleteProviderCommand { id })
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}
