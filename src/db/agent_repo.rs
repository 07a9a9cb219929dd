// src/db/agent_repo.rs

use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::agent::{Agent, AgentStatus},
};

#[derive(Clone)]
pub struct AgentRepository {
    pool: PgPool,
}

pub struct NewAgent<'a> {
    pub full_name: &'a str,
    pub email: Option<&'a str>,
    pub phone: Option<&'a str>,
    pub creci: Option<&'a str>,
}

pub struct AgentChanges<'a> {
    pub full_name: Option<&'a str>,
    pub email: Option<&'a str>,
    pub phone: Option<&'a str>,
    pub creci: Option<&'a str>,
    pub status: Option<AgentStatus>,
    pub total_commission_earned: Option<Decimal>,
}

impl AgentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create_agent(
        &self,
        organization_id: Uuid,
        input: NewAgent<'_>,
    ) -> Result<Agent, AppError> {
        let agent = sqlx::query_as::<_, Agent>(
            r#"
            INSERT INTO agents (organization_id, full_name, email, phone, creci)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(organization_id)
        .bind(input.full_name)
        .bind(input.email)
        .bind(input.phone)
        .bind(input.creci)
        .fetch_one(&self.pool)
        .await?;

        Ok(agent)
    }

    pub async fn list_agents(&self, organization_id: Uuid) -> Result<Vec<Agent>, AppError> {
        let agents = sqlx::query_as::<_, Agent>(
            "SELECT * FROM agents WHERE organization_id = $1 ORDER BY full_name ASC",
        )
        .bind(organization_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(agents)
    }

    pub async fn get_agent(
        &self,
        organization_id: Uuid,
        agent_id: Uuid,
    ) -> Result<Option<Agent>, AppError> {
        let agent = sqlx::query_as::<_, Agent>(
            "SELECT * FROM agents WHERE id = $1 AND organization_id = $2",
        )
        .bind(agent_id)
        .bind(organization_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(agent)
    }

    pub async fn update_agent(
        &self,
        organization_id: Uuid,
        agent_id: Uuid,
        changes: AgentChanges<'_>,
    ) -> Result<Option<Agent>, AppError> {
        let agent = sqlx::query_as::<_, Agent>(
            r#"
            UPDATE agents
            SET
                full_name = COALESCE($3, full_name),
                email = COALESCE($4, email),
                phone = COALESCE($5, phone),
                creci = COALESCE($6, creci),
                status = COALESCE($7, status),
                total_commission_earned = COALESCE($8, total_commission_earned),
                updated_at = NOW()
            WHERE id = $1 AND organization_id = $2
            RETURNING *
            "#,
        )
        .bind(agent_id)
        .bind(organization_id)
        .bind(changes.full_name)
        .bind(changes.email)
        .bind(changes.phone)
        .bind(changes.creci)
        .bind(changes.status)
        .bind(changes.total_commission_earned)
        .fetch_optional(&self.pool)
        .await?;

        Ok(agent)
    }

    /// Único caminho de escrita do agregado `total_commission_paid`.
    /// O valor já chega calculado (e com o piso em zero) pelo ajustador.
    pub async fn set_paid_commission_total(
        &self,
        organization_id: Uuid,
        agent_id: Uuid,
        new_total: Decimal,
    ) -> Result<Agent, AppError> {
        let agent = sqlx::query_as::<_, Agent>(
            r#"
            UPDATE agents
            SET total_commission_paid = $3, updated_at = NOW()
            WHERE id = $1 AND organization_id = $2
            RETURNING *
            "#,
        )
        .bind(agent_id)
        .bind(organization_id)
        .bind(new_total)
        .fetch_optional(&self.pool)
        .await?;

        agent.ok_or_else(|| AppError::NotFound("Corretor".to_string()))
    }

    pub async fn delete_agent(
        &self,
        organization_id: Uuid,
        agent_id: Uuid,
    ) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM agents WHERE id = $1 AND organization_id = $2")
            .bind(agent_id)
            .bind(organization_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
