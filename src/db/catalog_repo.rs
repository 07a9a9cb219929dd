// src/db/catalog_repo.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::catalog::{Developer, Project},
};

#[derive(Clone)]
pub struct CatalogRepository {
    pool: PgPool,
}

impl CatalogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // =========================================================================
    //  CONSTRUTORAS
    // =========================================================================

    pub async fn create_developer(
        &self,
        organization_id: Uuid,
        name: &str,
        contact_name: Option<&str>,
        email: Option<&str>,
        phone: Option<&str>,
    ) -> Result<Developer, AppError> {
        let developer = sqlx::query_as::<_, Developer>(
            r#"
            INSERT INTO developers (organization_id, name, contact_name, email, phone)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(organization_id)
        .bind(name)
        .bind(contact_name)
        .bind(email)
        .bind(phone)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return AppError::UniqueConstraintViolation(format!(
                        "A construtora '{}' já está cadastrada.",
                        name
                    ));
                }
            }
            e.into()
        })?;

        Ok(developer)
    }

    pub async fn list_developers(
        &self,
        organization_id: Uuid,
    ) -> Result<Vec<Developer>, AppError> {
        let developers = sqlx::query_as::<_, Developer>(
            "SELECT * FROM developers WHERE organization_id = $1 ORDER BY name ASC",
        )
        .bind(organization_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(developers)
    }

    // =========================================================================
    //  EMPREENDIMENTOS
    // =========================================================================

    /// Busca pela tupla conceitualmente única (nome, construtora, organização).
    /// Não há índice único: o resolver tolera duplicatas criadas em corrida.
    pub async fn find_project_by_name(
        &self,
        organization_id: Uuid,
        developer_id: Uuid,
        name: &str,
    ) -> Result<Option<Project>, AppError> {
        let project = sqlx::query_as::<_, Project>(
            r#"
            SELECT * FROM projects
            WHERE organization_id = $1 AND developer_id = $2 AND name = $3
            ORDER BY created_at ASC
            LIMIT 1
            "#,
        )
        .bind(organization_id)
        .bind(developer_id)
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(project)
    }

    pub async fn create_project(
        &self,
        organization_id: Uuid,
        developer_id: Uuid,
        name: &str,
    ) -> Result<Project, AppError> {
        let project = sqlx::query_as::<_, Project>(
            r#"
            INSERT INTO projects (organization_id, developer_id, name)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(organization_id)
        .bind(developer_id)
        .bind(name)
        .fetch_one(&self.pool)
        .await?;

        Ok(project)
    }

    pub async fn list_projects(&self, organization_id: Uuid) -> Result<Vec<Project>, AppError> {
        let projects = sqlx::query_as::<_, Project>(
            "SELECT * FROM projects WHERE organization_id = $1 ORDER BY name ASC",
        )
        .bind(organization_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(projects)
    }
}
