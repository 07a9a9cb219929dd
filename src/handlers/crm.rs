// src/handlers/crm.rs

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
    models::crm::{Client, Deal, DealStage, Lead, LeadStatus},
    services::crm_service::{UpdateDealInput, UpdateLeadInput},
};

// =============================================================================
//  ÁREA 1: CLIENTES
// =============================================================================

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateClientPayload {
    #[validate(length(min = 2, message = "O nome deve ter no mínimo 2 caracteres"))]
    #[schema(example = "Maria da Silva")]
    pub full_name: String,

    #[schema(example = "12345678900")]
    pub document_number: Option<String>,

    #[validate(email(message = "invalid_email"))]
    pub email: Option<String>,
    pub phone: Option<String>,
}

// POST /api/crm/clients
#[utoipa::path(
    post,
    path = "/api/crm/clients",
    tag = "CRM",
    request_body = CreateClientPayload,
    responses(
        (status = 201, description = "Cliente criado", body = Client),
        (status = 409, description = "Documento já cadastrado")
    ),
    params(
        ("x-organization-id" = Uuid, Header, description = "ID da Organização")
    )
)]
pub async fn create_client(
    State(app_state): State<AppState>,
    org: OrganizationContext,
    Json(payload): Json<CreateClientPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let client = app_state
        .crm_service
        .create_client(
            org.organization_id,
            &payload.full_name,
            payload.document_number.as_deref(),
            payload.email.as_deref(),
            payload.phone.as_deref(),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(client)))
}

// GET /api/crm/clients
#[utoipa::path(
    get,
    path = "/api/crm/clients",
    tag = "CRM",
    responses(
        (status = 200, description = "Lista de clientes", body = Vec<Client>)
    ),
    params(
        ("x-organization-id" = Uuid, Header, description = "ID da Organização")
    )
)]
pub async fn list_clients(
    State(app_state): State<AppState>,
    org: OrganizationContext,
) -> Result<impl IntoResponse, AppError> {
    let clients = app_state.crm_service.list_clients(org.organization_id).await?;

    Ok((StatusCode::OK, Json(clients)))
}

// =============================================================================
//  ÁREA 2: LEADS
// =============================================================================

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateLeadPayload {
    #[validate(length(min = 2, message = "O nome deve ter no mínimo 2 caracteres"))]
    pub name: String,

    #[validate(email(message = "invalid_email"))]
    pub email: Option<String>,
    pub phone: Option<String>,

    #[schema(example = "Portal Zap")]
    pub source: Option<String>,

    pub agent_id: Option<Uuid>,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLeadPayload {
    #[validate(length(min = 2, message = "O nome deve ter no mínimo 2 caracteres"))]
    pub name: Option<String>,

    #[validate(email(message = "invalid_email"))]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub source: Option<String>,
    pub status: Option<LeadStatus>,
    pub agent_id: Option<Uuid>,
    pub notes: Option<String>,
}

// POST /api/crm/leads
#[utoipa::path(
    post,
    path = "/api/crm/leads",
    tag = "CRM",
    request_body = CreateLeadPayload,
    responses(
        (status = 201, description = "Lead criado", body = Lead)
    ),
    params(
        ("x-organization-id" = Uuid, Header, description = "ID da Organização")
    )
)]
pub async fn create_lead(
    State(app_state): State<AppState>,
    org: OrganizationContext,
    Json(payload): Json<CreateLeadPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let lead = app_state
        .crm_service
        .create_lead(
            org.organization_id,
            org.user_id,
            &payload.name,
            payload.email.as_deref(),
            payload.phone.as_deref(),
            payload.source.as_deref(),
            payload.agent_id,
            payload.notes.as_deref(),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(lead)))
}

// GET /api/crm/leads
#[utoipa::path(
    get,
    path = "/api/crm/leads",
    tag = "CRM",
    responses(
        (status = 200, description = "Lista de leads", body = Vec<Lead>)
    ),
    params(
        ("x-organization-id" = Uuid, Header, description = "ID da Organização")
    )
)]
pub async fn list_leads(
    State(app_state): State<AppState>,
    org: OrganizationContext,
) -> Result<impl IntoResponse, AppError> {
    let leads = app_state.crm_service.list_leads(org.organization_id).await?;

    Ok((StatusCode::OK, Json(leads)))
}

// PUT /api/crm/leads/{id}
#[utoipa::path(
    put,
    path = "/api/crm/leads/{id}",
    tag = "CRM",
    request_body = UpdateLeadPayload,
    responses(
        (status = 200, description = "Lead atualizado", body = Lead),
        (status = 404, description = "Não encontrado")
    ),
    params(
        ("id" = Uuid, Path, description = "ID do lead"),
        ("x-organization-id" = Uuid, Header, description = "ID da Organização")
    )
)]
pub async fn update_lead(
    State(app_state): State<AppState>,
    org: OrganizationContext,
    Path(lead_id): Path<Uuid>,
    Json(payload): Json<UpdateLeadPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let lead = app_state
        .crm_service
        .update_lead(
            org.organization_id,
            org.user_id,
            lead_id,
            UpdateLeadInput {
                name: payload.name,
                email: payload.email,
                phone: payload.phone,
                source: payload.source,
                status: payload.status,
                agent_id: payload.agent_id,
                notes: payload.notes,
            },
        )
        .await?;

    Ok((StatusCode::OK, Json(lead)))
}

// DELETE /api/crm/leads/{id}
#[utoipa::path(
    delete,
    path = "/api/crm/leads/{id}",
    tag = "CRM",
    responses(
        (status = 204, description = "Lead removido"),
        (status = 404, description = "Não encontrado")
    ),
    params(
        ("id" = Uuid, Path, description = "ID do lead"),
        ("x-organization-id" = Uuid, Header, description = "ID da Organização")
    )
)]
pub async fn delete_lead(
    State(app_state): State<AppState>,
    org: OrganizationContext,
    Path(lead_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state
        .crm_service
        .delete_lead(org.organization_id, org.user_id, lead_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
//  ÁREA 3: NEGÓCIOS
// =============================================================================

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDealPayload {
    #[validate(length(min = 2, message = "O título deve ter no mínimo 2 caracteres"))]
    #[schema(example = "Apto 104 - Residencial Jardim das Flores")]
    pub title: String,

    pub lead_id: Option<Uuid>,
    pub client_id: Option<Uuid>,
    pub agent_id: Option<Uuid>,
    pub project_id: Option<Uuid>,

    #[validate(custom(function = crate::common::validation::non_negative))]
    pub expected_value: Option<Decimal>,

    pub notes: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDealPayload {
    #[validate(length(min = 2, message = "O título deve ter no mínimo 2 caracteres"))]
    pub title: Option<String>,

    pub client_id: Option<Uuid>,
    pub agent_id: Option<Uuid>,
    pub project_id: Option<Uuid>,
    pub stage: Option<DealStage>,

    #[validate(custom(function = crate::common::validation::non_negative))]
    pub expected_value: Option<Decimal>,

    pub notes: Option<String>,
}

// POST /api/crm/deals
#[utoipa::path(
    post,
    path = "/api/crm/deals",
    tag = "CRM",
    request_body = CreateDealPayload,
    responses(
        (status = 201, description = "Negócio criado", body = Deal)
    ),
    params(
        ("x-organization-id" = Uuid, Header, description = "ID da Organização")
    )
)]
pub async fn create_deal(
    State(app_state): State<AppState>,
    org: OrganizationContext,
    Json(payload): Json<CreateDealPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let deal = app_state
        .crm_service
        .create_deal(
            org.organization_id,
            org.user_id,
            &payload.title,
            payload.lead_id,
            payload.client_id,
            payload.agent_id,
            payload.project_id,
            payload.expected_value,
            payload.notes.as_deref(),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(deal)))
}

// GET /api/crm/deals
#[utoipa::path(
    get,
    path = "/api/crm/deals",
    tag = "CRM",
    responses(
        (status = 200, description = "Lista de negócios", body = Vec<Deal>)
    ),
    params(
        ("x-organization-id" = Uuid, Header, description = "ID da Organização")
    )
)]
pub async fn list_deals(
    State(app_state): State<AppState>,
    org: OrganizationContext,
) -> Result<impl IntoResponse, AppError> {
    let deals = app_state.crm_service.list_deals(org.organization_id).await?;

    Ok((StatusCode::OK, Json(deals)))
}

// PUT /api/crm/deals/{id}
#[utoipa::path(
    put,
    path = "/api/crm/deals/{id}",
    tag = "CRM",
    request_body = UpdateDealPayload,
    responses(
        (status = 200, description = "Negócio atualizado", body = Deal),
        (status = 404, description = "Não encontrado")
    ),
    params(
        ("id" = Uuid, Path, description = "ID do negócio"),
        ("x-organization-id" = Uuid, Header, description = "ID da Organização")
    )
)]
pub async fn update_deal(
    State(app_state): State<AppState>,
    org: OrganizationContext,
    Path(deal_id): Path<Uuid>,
    Json(payload): Json<UpdateDealPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let deal = app_state
        .crm_service
        .update_deal(
            org.organization_id,
            org.user_id,
            deal_id,
            UpdateDealInput {
                title: payload.title,
                client_id: payload.client_id,
                agent_id: payload.agent_id,
                project_id: payload.project_id,
                stage: payload.stage,
                expected_value: payload.expected_value,
                notes: payload.notes,
            },
        )
        .await?;

    Ok((StatusCode::OK, Json(deal)))
}

// DELETE /api/crm/deals/{id}
#[utoipa::path(
    delete,
    path = "/api/crm/deals/{id}",
    tag = "CRM",
    responses(
        (status = 204, description = "Negócio removido"),
        (status = 404, description = "Não encontrado")
    ),
    params(
        ("id" = Uuid, Path, description = "ID do negócio"),
        ("x-organization-id" = Uuid, Header, description = "ID da Organização")
    )
)]
pub async fn delete_deal(
    State(app_state): State<AppState>,
    org: OrganizationContext,
    Path(deal_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state
        .crm_service
        .delete_deal(org.organization_id, org.user_id, deal_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
