// src/db/audit_repo.rs

use serde_json::Value;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::audit::{AuditAction, AuditEntry},
};

#[derive(Clone)]
pub struct AuditRepository {
    pool: PgPool,
}

impl AuditRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn insert_entry(
        &self,
        organization_id: Uuid,
        user_id: Option<Uuid>,
        action: AuditAction,
        resource_type: &str,
        resource_id: Uuid,
        old_data: Option<&Value>,
        new_data: Option<&Value>,
    ) -> Result<AuditEntry, AppError> {
        let entry = sqlx::query_as::<_, AuditEntry>(
            r#"
            INSERT INTO audit_log (
                organization_id, user_id, action,
                resource_type, resource_id, old_data, new_data
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(organization_id)
        .bind(user_id)
        .bind(action)
        .bind(resource_type)
        .bind(resource_id)
        .bind(old_data)
        .bind(new_data)
        .fetch_one(&self.pool)
        .await?;

        Ok(entry)
    }
}
