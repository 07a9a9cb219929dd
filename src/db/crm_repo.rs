// src/db/crm_repo.rs

use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::crm::{Client, Deal, DealStage, Lead, LeadStatus},
};

#[derive(Clone)]
pub struct CrmRepository {
    pool: PgPool,
}

pub struct LeadChanges<'a> {
    pub name: Option<&'a str>,
    pub email: Option<&'a str>,
    pub phone: Option<&'a str>,
    pub source: Option<&'a str>,
    pub status: Option<LeadStatus>,
    pub agent_id: Option<Uuid>,
    pub notes: Option<&'a str>,
}

pub struct DealChanges<'a> {
    pub title: Option<&'a str>,
    pub client_id: Option<Uuid>,
    pub agent_id: Option<Uuid>,
    pub project_id: Option<Uuid>,
    pub stage: Option<DealStage>,
    pub expected_value: Option<Decimal>,
    pub notes: Option<&'a str>,
}

impl CrmRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // =========================================================================
    //  CLIENTES
    // =========================================================================

    pub async fn create_client(
        &self,
        organization_id: Uuid,
        full_name: &str,
        document_number: Option<&str>,
        email: Option<&str>,
        phone: Option<&str>,
    ) -> Result<Client, AppError> {
        let client = sqlx::query_as::<_, Client>(
            r#"
            INSERT INTO clients (organization_id, full_name, document_number, email, phone)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(organization_id)
        .bind(full_name)
        .bind(document_number)
        .bind(email)
        .bind(phone)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return AppError::UniqueConstraintViolation(format!(
                        "Documento '{}' já cadastrado.",
                        document_number.unwrap_or("?")
                    ));
                }
            }
            e.into()
        })?;

        Ok(client)
    }

    pub async fn list_clients(&self, organization_id: Uuid) -> Result<Vec<Client>, AppError> {
        let clients = sqlx::query_as::<_, Client>(
            "SELECT * FROM clients WHERE organization_id = $1 ORDER BY full_name ASC",
        )
        .bind(organization_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(clients)
    }

    // =========================================================================
    //  LEADS
    // =========================================================================

    pub async fn create_lead(
        &self,
        organization_id: Uuid,
        name: &str,
        email: Option<&str>,
        phone: Option<&str>,
        source: Option<&str>,
        agent_id: Option<Uuid>,
        notes: Option<&str>,
    ) -> Result<Lead, AppError> {
        let lead = sqlx::query_as::<_, Lead>(
            r#"
            INSERT INTO leads (organization_id, name, email, phone, source, agent_id, notes)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(organization_id)
        .bind(name)
        .bind(email)
        .bind(phone)
        .bind(source)
        .bind(agent_id)
        .bind(notes)
        .fetch_one(&self.pool)
        .await?;

        Ok(lead)
    }

    pub async fn list_leads(&self, organization_id: Uuid) -> Result<Vec<Lead>, AppError> {
        let leads = sqlx::query_as::<_, Lead>(
            "SELECT * FROM leads WHERE organization_id = $1 ORDER BY created_at DESC",
        )
        .bind(organization_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(leads)
    }

    pub async fn get_lead(
        &self,
        organization_id: Uuid,
        lead_id: Uuid,
    ) -> Result<Option<Lead>, AppError> {
        let lead =
            sqlx::query_as::<_, Lead>("SELECT * FROM leads WHERE id = $1 AND organization_id = $2")
                .bind(lead_id)
                .bind(organization_id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(lead)
    }

    pub async fn update_lead(
        &self,
        organization_id: Uuid,
        lead_id: Uuid,
        changes: LeadChanges<'_>,
    ) -> Result<Option<Lead>, AppError> {
        let lead = sqlx::query_as::<_, Lead>(
            r#"
            UPDATE leads
            SET
                name = COALESCE($3, name),
                email = COALESCE($4, email),
                phone = COALESCE($5, phone),
                source = COALESCE($6, source),
                status = COALESCE($7, status),
                agent_id = COALESCE($8, agent_id),
                notes = COALESCE($9, notes),
                updated_at = NOW()
            WHERE id = $1 AND organization_id = $2
            RETURNING *
            "#,
        )
        .bind(lead_id)
        .bind(organization_id)
        .bind(changes.name)
        .bind(changes.email)
        .bind(changes.phone)
        .bind(changes.source)
        .bind(changes.status)
        .bind(changes.agent_id)
        .bind(changes.notes)
        .fetch_optional(&self.pool)
        .await?;

        Ok(lead)
    }

    pub async fn delete_lead(
        &self,
        organization_id: Uuid,
        lead_id: Uuid,
    ) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM leads WHERE id = $1 AND organization_id = $2")
            .bind(lead_id)
            .bind(organization_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    // =========================================================================
    //  NEGÓCIOS
    // =========================================================================

    pub async fn create_deal(
        &self,
        organization_id: Uuid,
        title: &str,
        lead_id: Option<Uuid>,
        client_id: Option<Uuid>,
        agent_id: Option<Uuid>,
        project_id: Option<Uuid>,
        expected_value: Option<Decimal>,
        notes: Option<&str>,
    ) -> Result<Deal, AppError> {
        let deal = sqlx::query_as::<_, Deal>(
            r#"
            INSERT INTO deals (
                organization_id, title, lead_id, client_id,
                agent_id, project_id, expected_value, notes
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(organization_id)
        .bind(title)
        .bind(lead_id)
        .bind(client_id)
        .bind(agent_id)
        .bind(project_id)
        .bind(expected_value)
        .bind(notes)
        .fetch_one(&self.pool)
        .await?;

        Ok(deal)
    }

    pub async fn list_deals(&self, organization_id: Uuid) -> Result<Vec<Deal>, AppError> {
        let deals = sqlx::query_as::<_, Deal>(
            "SELECT * FROM deals WHERE organization_id = $1 ORDER BY created_at DESC",
        )
        .bind(organization_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(deals)
    }

    pub async fn get_deal(
        &self,
        organization_id: Uuid,
        deal_id: Uuid,
    ) -> Result<Option<Deal>, AppError> {
        let deal =
            sqlx::query_as::<_, Deal>("SELECT * FROM deals WHERE id = $1 AND organization_id = $2")
                .bind(deal_id)
                .bind(organization_id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(deal)
    }

    pub async fn update_deal(
        &self,
        organization_id: Uuid,
        deal_id: Uuid,
        changes: DealChanges<'_>,
    ) -> Result<Option<Deal>, AppError> {
        let deal = sqlx::query_as::<_, Deal>(
            r#"
            UPDATE deals
            SET
                title = COALESCE($3, title),
                client_id = COALESCE($4, client_id),
                agent_id = COALESCE($5, agent_id),
                project_id = COALESCE($6, project_id),
                stage = COALESCE($7, stage),
                expected_value = COALESCE($8, expected_value),
                notes = COALESCE($9, notes),
                updated_at = NOW()
            WHERE id = $1 AND organization_id = $2
            RETURNING *
            "#,
        )
        .bind(deal_id)
        .bind(organization_id)
        .bind(changes.title)
        .bind(changes.client_id)
        .bind(changes.agent_id)
        .bind(changes.project_id)
        .bind(changes.stage)
        .bind(changes.expected_value)
        .bind(changes.notes)
        .fetch_optional(&self.pool)
        .await?;

        Ok(deal)
    }

    pub async fn delete_deal(
        &self,
        organization_id: Uuid,
        deal_id: Uuid,
    ) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM deals WHERE id = $1 AND organization_id = $2")
            .bind(deal_id)
            .bind(organization_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
