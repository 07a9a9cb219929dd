// src/db/sales_repo.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::sale::{Sale, SaleStatus},
};

#[derive(Clone)]
pub struct SalesRepository {
    pool: PgPool,
}

/// Dados de uma venda já com o empreendimento resolvido para um id.
pub struct NewSale<'a> {
    pub developer_id: Uuid,
    pub project_id: Uuid,
    pub agent_id: Uuid,
    pub client_id: Uuid,
    pub unit_label: Option<&'a str>,
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
    pub notes: Option<&'a str>,
}

pub struct SaleChanges<'a> {
    pub unit_label: Option<&'a str>,
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
    pub notes: Option<&'a str>,
}

impl SalesRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create_sale(
        &self,
        organization_id: Uuid,
        input: NewSale<'_>,
    ) -> Result<Sale, AppError> {
        let sale = sqlx::query_as::<_, Sale>(
            r#"
            INSERT INTO sales (
                organization_id, developer_id, project_id, agent_id, client_id,
                unit_label, sale_date,
                unit_value, commission_percent, gross_commission,
                tax_percent, tax_value, misc_expenses_value,
                agent_split_percent, agent_commission, agency_commission,
                status, notes
            )
            VALUES (
                $1, $2, $3, $4, $5,
                $6, $7,
                $8, $9, $10,
                $11, $12, $13,
                $14, $15, $16,
                $17, $18
            )
            RETURNING *
            "#,
        )
        .bind(organization_id)
        .bind(input.developer_id)
        .bind(input.project_id)
        .bind(input.agent_id)
        .bind(input.client_id)
        .bind(input.unit_label)
        .bind(input.sale_date)
        .bind(input.unit_value)
        .bind(input.commission_percent)
        .bind(input.gross_commission)
        .bind(input.tax_percent)
        .bind(input.tax_value)
        .bind(input.misc_expenses_value)
        .bind(input.agent_split_percent)
        .bind(input.agent_commission)
        .bind(input.agency_commission)
        .bind(input.status)
        .bind(input.notes)
        .fetch_one(&self.pool)
        .await?;

        Ok(sale)
    }

    pub async fn list_sales(&self, organization_id: Uuid) -> Result<Vec<Sale>, AppError> {
        let sales = sqlx::query_as::<_, Sale>(
            "SELECT * FROM sales WHERE organization_id = $1 ORDER BY sale_date DESC",
        )
        .bind(organization_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(sales)
    }

    pub async fn get_sale(
        &self,
        organization_id: Uuid,
        sale_id: Uuid,
    ) -> Result<Option<Sale>, AppError> {
        let sale =
            sqlx::query_as::<_, Sale>("SELECT * FROM sales WHERE id = $1 AND organization_id = $2")
                .bind(sale_id)
                .bind(organization_id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(sale)
    }

    pub async fn update_sale(
        &self,
        organization_id: Uuid,
        sale_id: Uuid,
        changes: SaleChanges<'_>,
    ) -> Result<Option<Sale>, AppError> {
        let sale = sqlx::query_as::<_, Sale>(
            r#"
            UPDATE sales
            SET
                unit_label = COALESCE($3, unit_label),
                sale_date = COALESCE($4, sale_date),
                unit_value = COALESCE($5, unit_value),
                commission_percent = COALESCE($6, commission_percent),
                gross_commission = COALESCE($7, gross_commission),
                tax_percent = COALESCE($8, tax_percent),
                tax_value = COALESCE($9, tax_value),
                misc_expenses_value = COALESCE($10, misc_expenses_value),
                agent_split_percent = COALESCE($11, agent_split_percent),
                agent_commission = COALESCE($12, agent_commission),
                agency_commission = COALESCE($13, agency_commission),
                status = COALESCE($14, status),
                notes = COALESCE($15, notes),
                updated_at = NOW()
            WHERE id = $1 AND organization_id = $2
            RETURNING *
            "#,
        )
        .bind(sale_id)
        .bind(organization_id)
        .bind(changes.unit_label)
        .bind(changes.sale_date)
        .bind(changes.unit_value)
        .bind(changes.commission_percent)
        .bind(changes.gross_commission)
        .bind(changes.tax_percent)
        .bind(changes.tax_value)
        .bind(changes.misc_expenses_value)
        .bind(changes.agent_split_percent)
        .bind(changes.agent_commission)
        .bind(changes.agency_commission)
        .bind(changes.status)
        .bind(changes.notes)
        .fetch_optional(&self.pool)
        .await?;

        Ok(sale)
    }

    pub async fn delete_sale(
        &self,
        organization_id: Uuid,
        sale_id: Uuid,
    ) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM sales WHERE id = $1 AND organization_id = $2")
            .bind(sale_id)
            .bind(organization_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
