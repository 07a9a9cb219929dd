// src/handlers/sales.rs

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
    models::sale::{Sale, SaleStatus},
    services::sales_service::{CreateSaleInput, UpdateSaleInput},
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSalePayload {
    pub developer_id: Uuid,

    // UUID de um empreendimento existente OU o nome digitado à mão
    // (o resolver cria a linha do catálogo quando for nome novo).
    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "Residencial Jardim das Flores")]
    pub project_id: String,

    pub agent_id: Uuid,
    pub client_id: Uuid,

    #[schema(example = "Torre A - Apto 104")]
    pub unit_label: Option<String>,

    #[schema(value_type = String, format = Date, example = "2025-03-15")]
    pub sale_date: NaiveDate,

    #[validate(custom(function = crate::common::validation::non_negative))]
    #[schema(example = "450000.00")]
    pub unit_value: Decimal,

    #[validate(custom(function = crate::common::validation::percent_range))]
    #[schema(example = "5.00")]
    pub commission_percent: Decimal,

    #[validate(custom(function = crate::common::validation::non_negative))]
    pub gross_commission: Decimal,

    #[validate(custom(function = crate::common::validation::percent_range))]
    pub tax_percent: Decimal,

    #[validate(custom(function = crate::common::validation::non_negative))]
    pub tax_value: Decimal,

    #[validate(custom(function = crate::common::validation::non_negative))]
    pub misc_expenses_value: Decimal,

    #[validate(custom(function = crate::common::validation::percent_range))]
    pub agent_split_percent: Decimal,

    #[validate(custom(function = crate::common::validation::non_negative))]
    pub agent_commission: Decimal,

    #[validate(custom(function = crate::common::validation::non_negative))]
    pub agency_commission: Decimal,

    #[serde(default = "default_sale_status")]
    pub status: SaleStatus,

    pub notes: Option<String>,
}

fn default_sale_status() -> SaleStatus {
    SaleStatus::Pending
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSalePayload {
    pub unit_label: Option<String>,

    #[schema(value_type = Option<String>, format = Date)]
    pub sale_date: Option<NaiveDate>,

    #[validate(custom(function = crate::common::validation::non_negative))]
    pub unit_value: Option<Decimal>,

    #[validate(custom(function = crate::common::validation::percent_range))]
    pub commission_percent: Option<Decimal>,

    #[validate(custom(function = crate::common::validation::non_negative))]
    pub gross_commission: Option<Decimal>,

    #[validate(custom(function = crate::common::validation::percent_range))]
    pub tax_percent: Option<Decimal>,

    #[validate(custom(function = crate::common::validation::non_negative))]
    pub tax_value: Option<Decimal>,

    #[validate(custom(function = crate::common::validation::non_negative))]
    pub misc_expenses_value: Option<Decimal>,

    #[validate(custom(function = crate::common::validation::percent_range))]
    pub agent_split_percent: Option<Decimal>,

    #[validate(custom(function = crate::common::validation::non_negative))]
    pub agent_commission: Option<Decimal>,

    #[validate(custom(function = crate::common::validation::non_negative))]
    pub agency_commission: Option<Decimal>,

    pub status: Option<SaleStatus>,
    pub notes: Option<String>,
}

// POST /api/sales
#[utoipa::path(
    post,
    path = "/api/sales",
    tag = "Sales",
    request_body = CreateSalePayload,
    responses(
        (status = 201, description = "Venda criada", body = Sale),
        (status = 400, description = "Dados inválidos")
    ),
    params(
        ("x-organization-id" = Uuid, Header, description = "ID da Organização")
    )
)]
pub async fn create_sale(
    State(app_state): State<AppState>,
    org: OrganizationContext,
    Json(payload): Json<CreateSalePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let sale = app_state
        .sales_service
        .create_sale(
            org.organization_id,
            org.user_id,
            CreateSaleInput {
                developer_id: payload.developer_id,
                project_reference: payload.project_id,
                agent_id: payload.agent_id,
                client_id: payload.client_id,
                unit_label: payload.unit_label,
                sale_date: payload.sale_date,
                unit_value: payload.unit_value,
                commission_percent: payload.commission_percent,
                gross_commission: payload.gross_commission,
                tax_percent: payload.tax_percent,
                tax_value: payload.tax_value,
                misc_expenses_value: payload.misc_expenses_value,
                agent_split_percent: payload.agent_split_percent,
                agent_commission: payload.agent_commission,
                agency_commission: payload.agency_commission,
                status: payload.status,
                notes: payload.notes,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(sale)))
}

// GET /api/sales
#[utoipa::path(
    get,
    path = "/api/sales",
    tag = "Sales",
    responses(
        (status = 200, description = "Lista de vendas", body = Vec<Sale>)
    ),
    params(
        ("x-organization-id" = Uuid, Header, description = "ID da Organização")
    )
)]
pub async fn list_sales(
    State(app_state): State<AppState>,
    org: OrganizationContext,
) -> Result<impl IntoResponse, AppError> {
    let sales = app_state.sales_service.list_sales(org.organization_id).await?;

    Ok((StatusCode::OK, Json(sales)))
}

// GET /api/sales/{id}
#[utoipa::path(
    get,
    path = "/api/sales/{id}",
    tag = "Sales",
    responses(
        (status = 200, description = "Venda", body = Sale),
        (status = 404, description = "Não encontrada")
    ),
    params(
        ("id" = Uuid, Path, description = "ID da venda"),
        ("x-organization-id" = Uuid, Header, description = "ID da Organização")
    )
)]
pub async fn get_sale(
    State(app_state): State<AppState>,
    org: OrganizationContext,
    Path(sale_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let sale = app_state
        .sales_service
        .get_sale(org.organization_id, sale_id)
        .await?;

    Ok((StatusCode::OK, Json(sale)))
}

// PUT /api/sales/{id}
#[utoipa::path(
    put,
    path = "/api/sales/{id}",
    tag = "Sales",
    request_body = UpdateSalePayload,
    responses(
        (status = 200, description = "Venda atualizada", body = Sale),
        (status = 404, description = "Não encontrada")
    ),
    params(
        ("id" = Uuid, Path, description = "ID da venda"),
        ("x-organization-id" = Uuid, Header, description = "ID da Organização")
    )
)]
pub async fn update_sale(
    State(app_state): State<AppState>,
    org: OrganizationContext,
    Path(sale_id): Path<Uuid>,
    Json(payload): Json<UpdateSalePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let sale = app_state
        .sales_service
        .update_sale(
            org.organization_id,
            org.user_id,
            sale_id,
            UpdateSaleInput {
                unit_label: payload.unit_label,
                sale_date: payload.sale_date,
                unit_value: payload.unit_value,
                commission_percent: payload.commission_percent,
                gross_commission: payload.gross_commission,
                tax_percent: payload.tax_percent,
                tax_value: payload.tax_value,
                misc_expenses_value: payload.misc_expenses_value,
                agent_split_percent: payload.agent_split_percent,
                agent_commission: payload.agent_commission,
                agency_commission: payload.agency_commission,
                status: payload.status,
                notes: payload.notes,
            },
        )
        .await?;

    Ok((StatusCode::OK, Json(sale)))
}

// DELETE /api/sales/{id}
#[utoipa::path(
    delete,
    path = "/api/sales/{id}",
    tag = "Sales",
    responses(
        (status = 204, description = "Venda removida"),
        (status = 404, description = "Não encontrada")
    ),
    params(
        ("id" = Uuid, Path, description = "ID da venda"),
        ("x-organization-id" = Uuid, Header, description = "ID da Organização")
    )
)]
pub async fn delete_sale(
    State(app_state): State<AppState>,
    org: OrganizationContext,
    Path(sale_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state
        .sales_service
        .delete_sale(org.organization_id, org.user_id, sale_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_payload() -> CreateSalePayload {
        serde_json::from_value(serde_json::json!({
            "developerId": "550e8400-e29b-41d4-a716-446655440000",
            "projectId": "Residencial Jardim das Flores",
            "agentId": "550e8400-e29b-41d4-a716-446655440001",
            "clientId": "550e8400-e29b-41d4-a716-446655440002",
            "saleDate": "2025-03-15",
            "unitValue": 450000.0,
            "commissionPercent": 5.0,
            "grossCommission": 22500.0,
            "taxPercent": 6.0,
            "taxValue": 1350.0,
            "miscExpensesValue": 150.0,
            "agentSplitPercent": 50.0,
            "agentCommission": 10500.0,
            "agencyCommission": 10500.0
        }))
        .unwrap()
    }

    #[test]
    fn payload_valido_passa_e_assume_status_pendente() {
        let payload = base_payload();
        assert!(payload.validate().is_ok());
        assert_eq!(payload.status, SaleStatus::Pending);
    }

    #[test]
    fn percentual_acima_de_cem_e_rejeitado() {
        let mut payload = base_payload();
        payload.commission_percent = Decimal::from(101);
        assert!(payload.validate().is_err());
    }

    #[test]
    fn valor_monetario_negativo_e_rejeitado() {
        let mut payload = base_payload();
        payload.tax_value = Decimal::from(-1);
        assert!(payload.validate().is_err());
    }
}
