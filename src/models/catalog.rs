// src/models/catalog.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

// --- CONSTRUTORA ---

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Developer {
    pub id: Uuid,

    #[schema(ignore)]
    pub organization_id: Uuid,

    #[schema(example = "Construtora Horizonte")]
    pub name: String,

    pub contact_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,

    pub created_at: Option<DateTime<Utc>>,
}

// --- EMPREENDIMENTO ---

// Criado preguiçosamente: a primeira venda que referenciar o
// empreendimento pelo nome materializa a linha no catálogo.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Uuid,

    #[schema(ignore)]
    pub organization_id: Uuid,

    pub developer_id: Uuid,

    #[schema(example = "Residencial Jardim das Flores")]
    pub name: String,

    pub created_at: Option<DateTime<Utc>>,
}

// --- REFERÊNCIA DE EMPREENDIMENTO ---

/// O campo `projectId` de uma venda chega cru do formulário: pode ser o
/// UUID de um empreendimento já cadastrado ou o nome digitado à mão.
/// Este tipo separa os dois casos antes de qualquer ida ao banco.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectReference {
    Id(Uuid),
    Name(String),
}

impl ProjectReference {
    pub fn parse(raw: &str) -> Self {
        match Uuid::parse_str(raw) {
            Ok(id) => ProjectReference::Id(id),
            Err(_) => ProjectReference::Name(raw.trim().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uuid_vira_referencia_por_id() {
        let raw = "550e8400-e29b-41d4-a716-446655440000";
        let parsed = ProjectReference::parse(raw);
        assert_eq!(parsed, ProjectReference::Id(Uuid::parse_str(raw).unwrap()));
    }

    #[test]
    fn nome_digitado_vira_referencia_por_nome() {
        let parsed = ProjectReference::parse("Residencial Jardim das Flores");
        assert_eq!(
            parsed,
            ProjectReference::Name("Residencial Jardim das Flores".to_string())
        );
    }

    #[test]
    fn nome_com_espacos_nas_pontas_e_normalizado() {
        let parsed = ProjectReference::parse("  Torre Norte ");
        assert_eq!(parsed, ProjectReference::Name("Torre Norte".to_string()));
    }
}
