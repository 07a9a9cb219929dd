// src/models/settings.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationSettings {
    #[schema(ignore)] // O contexto (Header) já define a organização
    pub organization_id: Uuid,

    #[schema(example = "Imobiliária Horizonte Ltda")]
    pub company_name: Option<String>,

    #[schema(example = "12.345.678/0001-99")]
    pub document_number: Option<String>,

    #[schema(example = "https://horizonte.com/assets/logo.png")]
    pub logo_url: Option<String>,

    #[schema(example = "#1A3C6E")]
    pub primary_color: Option<String>,

    #[schema(example = "Av. Paulista, 1000 - Bela Vista")]
    pub address: Option<String>,

    #[schema(example = "(11) 99999-8888")]
    pub phone: Option<String>,

    #[schema(example = "contato@horizonte.com")]
    pub email: Option<String>,

    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSettingsRequest {
    #[schema(example = "Imobiliária Horizonte Ltda")]
    pub company_name: Option<String>,

    #[schema(example = "12.345.678/0001-99")]
    pub document_number: Option<String>,

    pub logo_url: Option<String>,
    pub primary_color: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}
