// src/handlers/catalog.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::tenancy::OrganizationContext,
    models::catalog::{Developer, Project},
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDeveloperPayload {
    #[validate(length(min = 2, message = "O nome deve ter no mínimo 2 caracteres"))]
    #[schema(example = "Construtora Horizonte")]
    pub name: String,

    pub contact_name: Option<String>,

    #[validate(email(message = "invalid_email"))]
    pub email: Option<String>,
    pub phone: Option<String>,
}

// POST /api/catalog/developers
#[utoipa::path(
    post,
    path = "/api/catalog/developers",
    tag = "Catalog",
    request_body = CreateDeveloperPayload,
    responses(
        (status = 201, description = "Construtora criada", body = Developer),
        (status = 409, description = "Construtora já cadastrada")
    ),
    params(
        ("x-organization-id" = Uuid, Header, description = "ID da Organização")
    )
)]
pub async fn create_developer(
    State(app_state): State<AppState>,
    org: OrganizationContext,
    Json(payload): Json<CreateDeveloperPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let developer = app_state
        .catalog_service
        .create_developer(
            org.organization_id,
            &payload.name,
            payload.contact_name.as_deref(),
            payload.email.as_deref(),
            payload.phone.as_deref(),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(developer)))
}

// GET /api/catalog/developers
#[utoipa::path(
    get,
    path = "/api/catalog/developers",
    tag = "Catalog",
    responses(
        (status = 200, description = "Lista de construtoras", body = Vec<Developer>)
    ),
    params(
        ("x-organization-id" = Uuid, Header, description = "ID da Organização")
    )
)]
pub async fn list_developers(
    State(app_state): State<AppState>,
    org: OrganizationContext,
) -> Result<impl IntoResponse, AppError> {
    let developers = app_state
        .catalog_service
        .list_developers(org.organization_id)
        .await?;

    Ok((StatusCode::OK, Json(developers)))
}

// GET /api/catalog/projects
// Não há POST: empreendimentos nascem pela resolução na criação de vendas.
#[utoipa::path(
    get,
    path = "/api/catalog/projects",
    tag = "Catalog",
    responses(
        (status = 200, description = "Lista de empreendimentos", body = Vec<Project>)
    ),
    params(
        ("x-organization-id" = Uuid, Header, description = "ID da Organização")
    )
)]
pub async fn list_projects(
    State(app_state): State<AppState>,
    org: OrganizationContext,
) -> Result<impl IntoResponse, AppError> {
    let projects = app_state
        .catalog_service
        .list_projects(org.organization_id)
        .await?;

    Ok((StatusCode::OK, Json(projects)))
}
