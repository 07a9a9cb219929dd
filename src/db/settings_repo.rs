// src/db/settings_repo.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::settings::{OrganizationSettings, UpdateSettingsRequest},
};

#[derive(Clone)]
pub struct SettingsRepository {
    pool: PgPool,
}

impl SettingsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn get_settings(
        &self,
        organization_id: Uuid,
    ) -> Result<OrganizationSettings, AppError> {
        let settings = sqlx::query_as::<_, OrganizationSettings>(
            "SELECT * FROM organization_settings WHERE organization_id = $1",
        )
        .bind(organization_id)
        .fetch_optional(&self.pool)
        .await?;

        // Organização recém-criada ainda não tem linha de configuração:
        // tratamos "não encontrado" como "vazio".
        match settings {
            Some(s) => Ok(s),
            None => Ok(OrganizationSettings {
                organization_id,
                company_name: None,
                document_number: None,
                logo_url: None,
                primary_color: None,
                address: None,
                phone: None,
                email: None,
                updated_at: None,
            }),
        }
    }

    pub async fn update_settings(
        &self,
        organization_id: Uuid,
        input: UpdateSettingsRequest,
    ) -> Result<OrganizationSettings, AppError> {
        // UPSERT (Insert or Update)
        let settings = sqlx::query_as::<_, OrganizationSettings>(
            r#"
            INSERT INTO organization_settings (
                organization_id, company_name, document_number,
                logo_url, primary_color, address, phone, email
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (organization_id)
            DO UPDATE SET
                company_name = COALESCE(EXCLUDED.company_name, organization_settings.company_name),
                document_number = COALESCE(EXCLUDED.document_number, organization_settings.document_number),
                logo_url = COALESCE(EXCLUDED.logo_url, organization_settings.logo_url),
                primary_color = COALESCE(EXCLUDED.primary_color, organization_settings.primary_color),
                address = COALESCE(EXCLUDED.address, organization_settings.address),
                phone = COALESCE(EXCLUDED.phone, organization_settings.phone),
                email = COALESCE(EXCLUDED.email, organization_settings.email),
                updated_at = NOW()
            RETURNING *
            "#,
        )
        .bind(organization_id)
        .bind(input.company_name)
        .bind(input.document_number)
        .bind(input.logo_url)
        .bind(input.primary_color)
        .bind(input.address)
        .bind(input.phone)
        .bind(input.email)
        .fetch_one(&self.pool)
        .await?;

        Ok(settings)
    }
}
