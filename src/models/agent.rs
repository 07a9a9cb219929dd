// src/models/agent.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

// Mapeia o CREATE TYPE agent_status do banco
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "agent_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AgentStatus {
    Active,
    Inactive,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    pub id: Uuid,

    #[schema(ignore)]
    pub organization_id: Uuid,

    #[schema(example = "Ana Beatriz Souza")]
    pub full_name: String,

    pub email: Option<String>,
    pub phone: Option<String>,

    // Registro profissional do corretor
    #[schema(example = "CRECI-SP 123456-F")]
    pub creci: Option<String>,

    pub status: AgentStatus,

    // Agregados financeiros do corretor.
    // `total_commission_paid` é derivado: deve bater com a soma dos
    // registros financeiros de comissão pagos vinculados a ele.
    // O único caminho de escrita é o ajustador de ledger do financeiro.
    #[schema(example = "12500.00")]
    pub total_commission_earned: Decimal,
    #[schema(example = "8000.00")]
    pub total_commission_paid: Decimal,

    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}
