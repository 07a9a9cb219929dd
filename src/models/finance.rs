// src/models/finance.rs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Nome da categoria que marca um registro como comissão de corretor.
/// Registros legados guardam o nome literal; os normalizados guardam o id.
pub const COMMISSION_CATEGORY: &str = "Comissão";

// --- Enums (Mapeando o Postgres) ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "record_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum RecordType {
    Income,  // Entrada
    Expense, // Saída
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "record_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    Pending, // Em aberto
    Paid,    // Quitado
}

// --- Structs ---

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FinancialCategory {
    #[schema(example = "550e8400-e29b-41d4-a716-446655440001")]
    pub id: Uuid,

    #[schema(ignore)]
    pub organization_id: Uuid,

    #[schema(example = "Comissão")]
    pub name: String,

    pub kind: RecordType,

    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FinancialRecord {
    pub id: Uuid,

    #[schema(ignore)]
    pub organization_id: Uuid,

    pub record_type: RecordType,

    #[schema(example = "Comissão venda Apto 104")]
    pub description: String,

    #[schema(example = "500.00")]
    pub amount: Decimal,

    pub status: RecordStatus,

    // Categoria em forma dual: id de `financial_categories` (normalizado)
    // ou texto livre (legado). As duas formas são aceitas na entrada e
    // o serviço devolve sempre o nome de exibição.
    #[schema(example = "Comissão")]
    pub category: String,

    // Quando a categoria é comissão, aponta para o corretor beneficiário.
    pub related_entity_id: Option<Uuid>,

    // Venda que originou o lançamento, se houver.
    pub sale_id: Option<Uuid>,

    #[schema(value_type = Option<String>, format = Date, example = "2025-04-10")]
    pub due_date: Option<NaiveDate>,

    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}
