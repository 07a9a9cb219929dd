// src/handlers/finance.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::tenancy::OrganizationContext,
    models::finance::{FinancialCategory, FinancialRecord, RecordStatus, RecordType},
    services::finance_service::{CreateRecordInput, UpdateRecordInput},
};

// =============================================================================
//  ÁREA 1: CATEGORIAS
// =============================================================================

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryPayload {
    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "Comissão")]
    pub name: String,

    #[schema(example = "expense")]
    pub kind: RecordType,
}

// POST /api/finance/categories
#[utoipa::path(
    post,
    path = "/api/finance/categories",
    tag = "Finance",
    request_body = CreateCategoryPayload,
    responses(
        (status = 201, description = "Categoria criada", body = FinancialCategory),
        (status = 409, description = "Categoria já existe")
    ),
    params(
        ("x-organization-id" = Uuid, Header, description = "ID da Organização")
    )
)]
pub async fn create_category(
    State(app_state): State<AppState>,
    org: OrganizationContext,
    Json(payload): Json<CreateCategoryPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let category = app_state
        .finance_service
        .create_category(org.organization_id, &payload.name, payload.kind)
        .await?;

    Ok((StatusCode::CREATED, Json(category)))
}

// GET /api/finance/categories
#[utoipa::path(
    get,
    path = "/api/finance/categories",
    tag = "Finance",
    responses(
        (status = 200, description = "Lista de categorias", body = Vec<FinancialCategory>)
    ),
    params(
        ("x-organization-id" = Uuid, Header, description = "ID da Organização")
    )
)]
pub async fn list_categories(
    State(app_state): State<AppState>,
    org: OrganizationContext,
) -> Result<impl IntoResponse, AppError> {
    let categories = app_state
        .finance_service
        .list_categories(org.organization_id)
        .await?;

    Ok((StatusCode::OK, Json(categories)))
}

// =============================================================================
//  ÁREA 2: REGISTROS FINANCEIROS
// =============================================================================

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecordPayload {
    pub record_type: RecordType,

    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "Comissão venda Apto 104")]
    pub description: String,

    #[validate(custom(function = crate::common::validation::non_negative))]
    #[schema(example = "500.00")]
    pub amount: Decimal,

    #[serde(default = "default_record_status")]
    pub status: RecordStatus,

    // Nome de categoria (legado) ou id (normalizado); as duas formas valem.
    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "Comissão")]
    pub category: String,

    // Corretor beneficiário, quando a categoria é comissão.
    pub related_entity_id: Option<Uuid>,

    pub sale_id: Option<Uuid>,

    #[schema(value_type = Option<String>, format = Date)]
    pub due_date: Option<NaiveDate>,
}

fn default_record_status() -> RecordStatus {
    RecordStatus::Pending
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRecordPayload {
    pub record_type: Option<RecordType>,

    #[validate(length(min = 1, message = "required"))]
    pub description: Option<String>,

    #[validate(custom(function = crate::common::validation::non_negative))]
    pub amount: Option<Decimal>,

    pub status: Option<RecordStatus>,

    #[validate(length(min = 1, message = "required"))]
    pub category: Option<String>,

    pub related_entity_id: Option<Uuid>,

    #[schema(value_type = Option<String>, format = Date)]
    pub due_date: Option<NaiveDate>,
}

// POST /api/finance/records
#[utoipa::path(
    post,
    path = "/api/finance/records",
    tag = "Finance",
    request_body = CreateRecordPayload,
    responses(
        (status = 201, description = "Registro criado", body = FinancialRecord),
        (status = 400, description = "Dados inválidos")
    ),
    params(
        ("x-organization-id" = Uuid, Header, description = "ID da Organização")
    )
)]
pub async fn create_record(
    State(app_state): State<AppState>,
    org: OrganizationContext,
    Json(payload): Json<CreateRecordPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let record = app_state
        .finance_service
        .create_record(
            org.organization_id,
            org.user_id,
            CreateRecordInput {
                record_type: payload.record_type,
                description: payload.description,
                amount: payload.amount,
                status: payload.status,
                category: payload.category,
                related_entity_id: payload.related_entity_id,
                sale_id: payload.sale_id,
                due_date: payload.due_date,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(record)))
}

// GET /api/finance/records
#[utoipa::path(
    get,
    path = "/api/finance/records",
    tag = "Finance",
    responses(
        (status = 200, description = "Lista de registros", body = Vec<FinancialRecord>)
    ),
    params(
        ("x-organization-id" = Uuid, Header, description = "ID da Organização")
    )
)]
pub async fn list_records(
    State(app_state): State<AppState>,
    org: OrganizationContext,
) -> Result<impl IntoResponse, AppError> {
    let records = app_state
        .finance_service
        .list_records(org.organization_id)
        .await?;

    Ok((StatusCode::OK, Json(records)))
}

// PUT /api/finance/records/{id}
#[utoipa::path(
    put,
    path = "/api/finance/records/{id}",
    tag = "Finance",
    request_body = UpdateRecordPayload,
    responses(
        (status = 200, description = "Registro atualizado (ledger reconciliado)", body = FinancialRecord),
        (status = 404, description = "Não encontrado")
    ),
    params(
        ("id" = Uuid, Path, description = "ID do registro"),
        ("x-organization-id" = Uuid, Header, description = "ID da Organização")
    )
)]
pub async fn update_record(
    State(app_state): State<AppState>,
    org: OrganizationContext,
    Path(record_id): Path<Uuid>,
    Json(payload): Json<UpdateRecordPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let record = app_state
        .finance_service
        .update_record(
            org.organization_id,
            org.user_id,
            record_id,
            UpdateRecordInput {
                record_type: payload.record_type,
                description: payload.description,
                amount: payload.amount,
                status: payload.status,
                category: payload.category,
                related_entity_id: payload.related_entity_id,
                due_date: payload.due_date,
            },
        )
        .await?;

    Ok((StatusCode::OK, Json(record)))
}

// DELETE /api/finance/records/{id}
#[utoipa::path(
    delete,
    path = "/api/finance/records/{id}",
    tag = "Finance",
    responses(
        (status = 204, description = "Registro removido (sem estorno de ledger)"),
        (status = 404, description = "Não encontrado")
    ),
    params(
        ("id" = Uuid, Path, description = "ID do registro"),
        ("x-organization-id" = Uuid, Header, description = "ID da Organização")
    )
)]
pub async fn delete_record(
    State(app_state): State<AppState>,
    org: OrganizationContext,
    Path(record_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state
        .finance_service
        .delete_record(org.organization_id, org.user_id, record_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
