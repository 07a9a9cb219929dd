// src/models/sale.rs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "sale_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SaleStatus {
    Pending,
    Approved,
    Cancelled,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    pub id: Uuid,

    #[schema(ignore)]
    pub organization_id: Uuid,

    // Vínculos
    pub developer_id: Uuid,
    pub project_id: Uuid,
    pub agent_id: Uuid,
    pub client_id: Uuid,

    // Unidade vendida (Ex: "Torre A - Apto 104")
    pub unit_label: Option<String>,

    #[schema(value_type = String, format = Date, example = "2025-03-15")]
    pub sale_date: NaiveDate,

    // Decomposição monetária. Os valores chegam pré-calculados do
    // formulário; o servidor não recalcula as parcelas.
    // `agent_commission + agency_commission` deve se aproximar de
    // `gross_commission - tax_value - misc_expenses_value`, mas a
    // relação é consultiva, não imposta.
    #[schema(example = "450000.00")]
    pub unit_value: Decimal,
    #[schema(example = "5.00")]
    pub commission_percent: Decimal,
    #[schema(example = "22500.00")]
    pub gross_commission: Decimal,
    #[schema(example = "6.00")]
    pub tax_percent: Decimal,
    #[schema(example = "1350.00")]
    pub tax_value: Decimal,
    #[schema(example = "150.00")]
    pub misc_expenses_value: Decimal,
    #[schema(example = "50.00")]
    pub agent_split_percent: Decimal,
    #[schema(example = "10500.00")]
    pub agent_commission: Decimal,
    #[schema(example = "10500.00")]
    pub agency_commission: Decimal,

    pub status: SaleStatus,

    pub notes: Option<String>,

    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}
