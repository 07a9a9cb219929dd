// src/db/finance_repo.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::finance::{FinancialCategory, FinancialRecord, RecordStatus, RecordType},
};

#[derive(Clone)]
pub struct FinanceRepository {
    pool: PgPool,
}

/// Registro financeiro com a categoria já na forma de armazenamento
/// (id quando o nome foi resolvido, texto livre caso contrário).
pub struct NewRecord<'a> {
    pub record_type: RecordType,
    pub description: &'a str,
    pub amount: Decimal,
    pub status: RecordStatus,
    pub category: &'a str,
    pub related_entity_id: Option<Uuid>,
    pub sale_id: Option<Uuid>,
    pub due_date: Option<NaiveDate>,
}

pub struct RecordChanges<'a> {
    pub record_type: Option<RecordType>,
    pub description: Option<&'a str>,
    pub amount: Option<Decimal>,
    pub status: Option<RecordStatus>,
    pub category: Option<&'a str>,
    pub related_entity_id: Option<Uuid>,
    pub due_date: Option<NaiveDate>,
}

impl FinanceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // =========================================================================
    //  CATEGORIAS (Plano de Contas)
    // =========================================================================

    pub async fn create_category(
        &self,
        organization_id: Uuid,
        name: &str,
        kind: RecordType,
    ) -> Result<FinancialCategory, AppError> {
        let category = sqlx::query_as::<_, FinancialCategory>(
            r#"
            INSERT INTO financial_categories (organization_id, name, kind)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(organization_id)
        .bind(name)
        .bind(kind)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return AppError::UniqueConstraintViolation(format!(
                        "A categoria '{}' já existe.",
                        name
                    ));
                }
            }
            e.into()
        })?;

        Ok(category)
    }

    pub async fn list_categories(
        &self,
        organization_id: Uuid,
    ) -> Result<Vec<FinancialCategory>, AppError> {
        let categories = sqlx::query_as::<_, FinancialCategory>(
            "SELECT * FROM financial_categories WHERE organization_id = $1 ORDER BY name ASC",
        )
        .bind(organization_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(categories)
    }

    // =========================================================================
    //  REGISTROS FINANCEIROS
    // =========================================================================

    pub async fn create_record(
        &self,
        organization_id: Uuid,
        input: NewRecord<'_>,
    ) -> Result<FinancialRecord, AppError> {
        let record = sqlx::query_as::<_, FinancialRecord>(
            r#"
            INSERT INTO financial_records (
                organization_id, record_type, description, amount,
                status, category, related_entity_id, sale_id, due_date
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(organization_id)
        .bind(input.record_type)
        .bind(input.description)
        .bind(input.amount)
        .bind(input.status)
        .bind(input.category)
        .bind(input.related_entity_id)
        .bind(input.sale_id)
        .bind(input.due_date)
        .fetch_one(&self.pool)
        .await?;

        Ok(record)
    }

    pub async fn list_records(
        &self,
        organization_id: Uuid,
    ) -> Result<Vec<FinancialRecord>, AppError> {
        let records = sqlx::query_as::<_, FinancialRecord>(
            "SELECT * FROM financial_records WHERE organization_id = $1 ORDER BY created_at DESC",
        )
        .bind(organization_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    pub async fn get_record(
        &self,
        organization_id: Uuid,
        record_id: Uuid,
    ) -> Result<Option<FinancialRecord>, AppError> {
        let record = sqlx::query_as::<_, FinancialRecord>(
            "SELECT * FROM financial_records WHERE id = $1 AND organization_id = $2",
        )
        .bind(record_id)
        .bind(organization_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    pub async fn update_record(
        &self,
        organization_id: Uuid,
        record_id: Uuid,
        changes: RecordChanges<'_>,
    ) -> Result<Option<FinancialRecord>, AppError> {
        let record = sqlx::query_as::<_, FinancialRecord>(
            r#"
            UPDATE financial_records
            SET
                record_type = COALESCE($3, record_type),
                description = COALESCE($4, description),
                amount = COALESCE($5, amount),
                status = COALESCE($6, status),
                category = COALESCE($7, category),
                related_entity_id = COALESCE($8, related_entity_id),
                due_date = COALESCE($9, due_date),
                updated_at = NOW()
            WHERE id = $1 AND organization_id = $2
            RETURNING *
            "#,
        )
        .bind(record_id)
        .bind(organization_id)
        .bind(changes.record_type)
        .bind(changes.description)
        .bind(changes.amount)
        .bind(changes.status)
        .bind(changes.category)
        .bind(changes.related_entity_id)
        .bind(changes.due_date)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    pub async fn delete_record(
        &self,
        organization_id: Uuid,
        record_id: Uuid,
    ) -> Result<u64, AppError> {
        let result =
            sqlx::query("DELETE FROM financial_records WHERE id = $1 AND organization_id = $2")
                .bind(record_id)
                .bind(organization_id)
                .execute(&self.pool)
                .await?;

        Ok(result.rows_affected())
    }
}
