// src/services/sales_service.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{
        sales_repo::{NewSale, SaleChanges},
        SalesRepository,
    },
    models::{
        audit::AuditAction,
        sale::{Sale, SaleStatus},
    },
    services::{AuditService, CatalogService},
};

const RESOURCE_TYPE: &str = "sale";

pub struct CreateSaleInput {
    pub developer_id: Uuid,
    /// Referência crua do formulário: UUID de empreendimento ou nome.
    pub project_reference: String,
    pub agent_id: Uuid,
    pub client_id: Uuid,
    pub unit_label: Option<String>,
    pub sale_date: NaiveDate,
    pub unit_value: Decimal,
    pub commission_percent: Decimal,
    pub gross_commission: Decimal,
    pub tax_percent: Decimal,
    pub tax_value: Decimal,
    pub misc_expenses_value: Decimal,
    pub agent_split_percent: Decimal,
    pub agent_commission: Decimal,
    pub agency_commission: Decimal,
    pub status: SaleStatus,
    pub notes: Option<String>,
}

pub struct UpdateSaleInput {
    pub unit_label: Option<String>,
    pub sale_date: Option<NaiveDate>,
    pub unit_value: Option<Decimal>,
    pub commission_percent: Option<Decimal>,
    pub gross_commission: Option<Decimal>,
    pub tax_percent: Option<Decimal>,
    pub tax_value: Option<Decimal>,
    pub misc_expenses_value: Option<Decimal>,
    pub agent_split_percent: Option<Decimal>,
    pub agent_commission: Option<Decimal>,
    pub agency_commission: Option<Decimal>,
    pub status: Option<SaleStatus>,
    pub notes: Option<String>,
}

#[derive(Clone)]
pub struct SalesService {
    repo: SalesRepository,
    catalog_service: CatalogService,
    audit: AuditService,
}

impl SalesService {
    pub fn new(repo: SalesRepository, catalog_service: CatalogService, audit: AuditService) -> Self {
        Self {
            repo,
            catalog_service,
            audit,
        }
    }

    /// Cria uma venda resolvendo antes o empreendimento referenciado.
    ///
    /// Resolução e insert são duas requisições independentes: se o insert
    /// falhar depois de um empreendimento recém-criado, a linha do catálogo
    /// fica (inofensiva, será reaproveitada na próxima tentativa).
    pub async fn create_sale(
        &self,
        organization_id: Uuid,
        user_id: Option<Uuid>,
        input: CreateSaleInput,
    ) -> Result<Sale, AppError> {
        let project_id = self
            .catalog_service
            .resolve_project_id(organization_id, input.developer_id, &input.project_reference)
            .await?;

        let sale = self
            .repo
            .create_sale(
                organization_id,
                NewSale {
                    developer_id: input.developer_id,
                    project_id,
                    agent_id: input.agent_id,
                    client_id: input.client_id,
                    unit_label: input.unit_label.as_deref(),
                    sale_date: input.sale_date,
                    unit_value: input.unit_value,
                    commission_percent: input.commission_percent,
                    gross_commission: input.gross_commission,
                    tax_percent: input.tax_percent,
                    tax_value: input.tax_value,
                    misc_expenses_value: input.misc_expenses_value,
                    agent_split_percent: input.agent_split_percent,
                    agent_commission: input.agent_commission,
                    agency_commission: input.agency_commission,
                    status: input.status,
                    notes: input.notes.as_deref(),
                },
            )
            .await?;

        self.audit
            .record(
                organization_id,
                user_id,
                AuditAction::Create,
                RESOURCE_TYPE,
                sale.id,
                None,
                serde_json::to_value(&sale).ok(),
            )
            .await;

        Ok(sale)
    }

    pub async fn list_sales(&self, organization_id: Uuid) -> Result<Vec<Sale>, AppError> {
        self.repo.list_sales(organization_id).await
    }

    pub async fn get_sale(&self, organization_id: Uuid, sale_id: Uuid) -> Result<Sale, AppError> {
        self.repo
            .get_sale(organization_id, sale_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Venda".to_string()))
    }

    pub async fn update_sale(
        &self,
        organization_id: Uuid,
        user_id: Option<Uuid>,
        sale_id: Uuid,
        input: UpdateSaleInput,
    ) -> Result<Sale, AppError> {
        let previous = self
            .repo
            .get_sale(organization_id, sale_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Venda".to_string()))?;

        let updated = self
            .repo
            .update_sale(
                organization_id,
                sale_id,
                SaleChanges {
                    unit_label: input.unit_label.as_deref(),
                    sale_date: input.sale_date,
                    unit_value: input.unit_value,
                    commission_percent: input.commission_percent,
                    gross_commission: input.gross_commission,
                    tax_percent: input.tax_percent,
                    tax_value: input.tax_value,
                    misc_expenses_value: input.misc_expenses_value,
                    agent_split_percent: input.agent_split_percent,
                    agent_commission: input.agent_commission,
                    agency_commission: input.agency_commission,
                    status: input.status,
                    notes: input.notes.as_deref(),
                },
            )
            .await?
            .ok_or_else(|| AppError::NotFound("Venda".to_string()))?;

        self.audit
            .record(
                organization_id,
                user_id,
                AuditAction::Update,
                RESOURCE_TYPE,
                updated.id,
                serde_json::to_value(&previous).ok(),
                serde_json::to_value(&updated).ok(),
            )
            .await;

        Ok(updated)
    }

    pub async fn delete_sale(
        &self,
        organization_id: Uuid,
        user_id: Option<Uuid>,
        sale_id: Uuid,
    ) -> Result<(), AppError> {
        let previous = self
            .repo
            .get_sale(organization_id, sale_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Venda".to_string()))?;

        self.repo.delete_sale(organization_id, sale_id).await?;

        self.audit
            .record(
                organization_id,
                user_id,
                AuditAction::Delete,
                RESOURCE_TYPE,
                previous.id,
                serde_json::to_value(&previous).ok(),
                None,
            )
            .await;

        Ok(())
    }
}
