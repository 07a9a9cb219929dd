// src/models/audit.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "audit_action", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuditAction {
    Create,
    Update,
    Delete,
}

// Trilha de auditoria das mutações de Venda, Registro Financeiro,
// Negócio e Lead. Escrita em melhor esforço: falha aqui nunca derruba
// a operação principal.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct AuditEntry {
    pub id: Uuid,
    pub organization_id: Uuid,

    pub user_id: Option<Uuid>,

    pub action: AuditAction,

    // Ex: "sale", "financial_record", "deal", "lead"
    pub resource_type: String,
    pub resource_id: Uuid,

    // Fotos do registro antes/depois, quando fizer sentido para a ação.
    pub old_data: Option<Value>,
    pub new_data: Option<Value>,

    pub created_at: Option<DateTime<Utc>>,
}
