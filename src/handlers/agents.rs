// src/handlers/agents.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::tenancy::OrganizationContext,
    models::agent::{Agent, AgentStatus},
    services::crm_service::UpdateAgentInput,
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAgentPayload {
    #[validate(length(min = 2, message = "O nome deve ter no mínimo 2 caracteres"))]
    #[schema(example = "Ana Beatriz Souza")]
    pub full_name: String,

    #[validate(email(message = "invalid_email"))]
    pub email: Option<String>,
    pub phone: Option<String>,

    #[schema(example = "CRECI-SP 123456-F")]
    pub creci: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAgentPayload {
    #[validate(length(min = 2, message = "O nome deve ter no mínimo 2 caracteres"))]
    pub full_name: Option<String>,

    #[validate(email(message = "invalid_email"))]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub creci: Option<String>,
    pub status: Option<AgentStatus>,

    #[validate(custom(function = crate::common::validation::non_negative))]
    pub total_commission_earned: Option<Decimal>,
}

// POST /api/agents
#[utoipa::path(
    post,
    path = "/api/agents",
    tag = "Agents",
    request_body = CreateAgentPayload,
    responses(
        (status = 201, description = "Corretor criado", body = Agent),
        (status = 400, description = "Dados inválidos")
    ),
    params(
        ("x-organization-id" = Uuid, Header, description = "ID da Organização")
    )
)]
pub async fn create_agent(
    State(app_state): State<AppState>,
    org: OrganizationContext,
    Json(payload): Json<CreateAgentPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let agent = app_state
        .crm_service
        .create_agent(
            org.organization_id,
            &payload.full_name,
            payload.email.as_deref(),
            payload.phone.as_deref(),
            payload.creci.as_deref(),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(agent)))
}

// GET /api/agents
#[utoipa::path(
    get,
    path = "/api/agents",
    tag = "Agents",
    responses(
        (status = 200, description = "Lista de corretores", body = Vec<Agent>)
    ),
    params(
        ("x-organization-id" = Uuid, Header, description = "ID da Organização")
    )
)]
pub async fn list_agents(
    State(app_state): State<AppState>,
    org: OrganizationContext,
) -> Result<impl IntoResponse, AppError> {
    let agents = app_state.crm_service.list_agents(org.organization_id).await?;

    Ok((StatusCode::OK, Json(agents)))
}

// GET /api/agents/{id}
#[utoipa::path(
    get,
    path = "/api/agents/{id}",
    tag = "Agents",
    responses(
        (status = 200, description = "Corretor", body = Agent),
        (status = 404, description = "Não encontrado")
    ),
    params(
        ("id" = Uuid, Path, description = "ID do corretor"),
        ("x-organization-id" = Uuid, Header, description = "ID da Organização")
    )
)]
pub async fn get_agent(
    State(app_state): State<AppState>,
    org: OrganizationContext,
    Path(agent_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let agent = app_state
        .crm_service
        .get_agent(org.organization_id, agent_id)
        .await?;

    Ok((StatusCode::OK, Json(agent)))
}

// PUT /api/agents/{id}
#[utoipa::path(
    put,
    path = "/api/agents/{id}",
    tag = "Agents",
    request_body = UpdateAgentPayload,
    responses(
        (status = 200, description = "Corretor atualizado", body = Agent),
        (status = 404, description = "Não encontrado")
    ),
    params(
        ("id" = Uuid, Path, description = "ID do corretor"),
        ("x-organization-id" = Uuid, Header, description = "ID da Organização")
    )
)]
pub async fn update_agent(
    State(app_state): State<AppState>,
    org: OrganizationContext,
    Path(agent_id): Path<Uuid>,
    Json(payload): Json<UpdateAgentPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let agent = app_state
        .crm_service
        .update_agent(
            org.organization_id,
            agent_id,
            UpdateAgentInput {
                full_name: payload.full_name,
                email: payload.email,
                phone: payload.phone,
                creci: payload.creci,
                status: payload.status,
                total_commission_earned: payload.total_commission_earned,
            },
        )
        .await?;

    Ok((StatusCode::OK, Json(agent)))
}

// DELETE /api/agents/{id}
#[utoipa::path(
    delete,
    path = "/api/agents/{id}",
    tag = "Agents",
    responses(
        (status = 204, description = "Corretor removido"),
        (status = 404, description = "Não encontrado")
    ),
    params(
        ("id" = Uuid, Path, description = "ID do corretor"),
        ("x-organization-id" = Uuid, Header, description = "ID da Organização")
    )
)]
pub async fn delete_agent(
    State(app_state): State<AppState>,
    org: OrganizationContext,
    Path(agent_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state
        .crm_service
        .delete_agent(org.organization_id, agent_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
