// src/models/crm.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

// --- ENUMS ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "lead_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum LeadStatus {
    New,
    Contacted,
    Qualified,
    Converted,
    Lost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "deal_stage", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum DealStage {
    Prospecting,
    Proposal,
    Negotiation,
    Won,
    Lost,
}

// --- CLIENTE ---

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: Uuid,

    #[schema(ignore)]
    pub organization_id: Uuid,

    pub full_name: String,
    pub document_number: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,

    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

// --- LEAD ---

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: Uuid,

    #[schema(ignore)]
    pub organization_id: Uuid,

    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,

    // De onde veio o lead (portal, indicação, plantão...)
    pub source: Option<String>,

    pub status: LeadStatus,

    // Corretor responsável
    pub agent_id: Option<Uuid>,

    pub notes: Option<String>,

    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

// --- NEGÓCIO (PIPELINE DE VENDAS) ---

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Deal {
    pub id: Uuid,

    #[schema(ignore)]
    pub organization_id: Uuid,

    pub title: String,

    pub lead_id: Option<Uuid>,
    pub client_id: Option<Uuid>,
    pub agent_id: Option<Uuid>,
    pub project_id: Option<Uuid>,

    pub stage: DealStage,

    pub expected_value: Option<Decimal>,

    pub notes: Option<String>,

    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}
