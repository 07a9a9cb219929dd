// src/services/finance_service.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{
        finance_repo::{NewRecord, RecordChanges},
        AgentRepository, FinanceRepository,
    },
    models::{
        agent::Agent,
        audit::AuditAction,
        finance::{FinancialCategory, FinancialRecord, RecordStatus, RecordType, COMMISSION_CATEGORY},
    },
    services::{ledger, AuditService},
};

const RESOURCE_TYPE: &str = "financial_record";

// =============================================================================
//  DUALIDADE NOME/ID DE CATEGORIA
// =============================================================================
// A coluna `category` aceita duas formas: o id de `financial_categories`
// (registros normalizados) ou texto livre (registros legados). Na escrita,
// nome conhecido vira id; na leitura, id conhecido volta como nome.

fn storage_category_value(categories: &[FinancialCategory], input: &str) -> String {
    categories
        .iter()
        .find(|c| c.name == input)
        .map(|c| c.id.to_string())
        .unwrap_or_else(|| input.to_string())
}

fn display_category_value(categories: &[FinancialCategory], stored: &str) -> String {
    match Uuid::parse_str(stored) {
        Ok(id) => categories
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.name.clone())
            .unwrap_or_else(|| stored.to_string()),
        Err(_) => stored.to_string(),
    }
}

fn is_commission_category(categories: &[FinancialCategory], stored: &str) -> bool {
    display_category_value(categories, stored) == COMMISSION_CATEGORY
}

/// Corretor beneficiário de um registro, se o registro for de comissão.
/// Categoria não-comissão (ainda que com `related_entity_id` preenchido)
/// nunca toca o ledger.
fn commission_agent(categories: &[FinancialCategory], record: &FinancialRecord) -> Option<Uuid> {
    if is_commission_category(categories, &record.category) {
        record.related_entity_id
    } else {
        None
    }
}

// =============================================================================
//  ENTRADAS DO SERVIÇO
// =============================================================================

pub struct CreateRecordInput {
    pub record_type: RecordType,
    pub description: String,
    pub amount: Decimal,
    pub status: RecordStatus,
    pub category: String,
    pub related_entity_id: Option<Uuid>,
    pub sale_id: Option<Uuid>,
    pub due_date: Option<NaiveDate>,
}

/// Update esparso: só os campos presentes são aplicados; campos
/// desconhecidos nem chegam aqui (o payload é fechado).
pub struct UpdateRecordInput {
    pub record_type: Option<RecordType>,
    pub description: Option<String>,
    pub amount: Option<Decimal>,
    pub status: Option<RecordStatus>,
    pub category: Option<String>,
    pub related_entity_id: Option<Uuid>,
    pub due_date: Option<NaiveDate>,
}

// =============================================================================
//  SERVIÇO
// =============================================================================

#[derive(Clone)]
pub struct FinanceService {
    repo: FinanceRepository,
    agent_repo: AgentRepository,
    audit: AuditService,
}

impl FinanceService {
    pub fn new(repo: FinanceRepository, agent_repo: AgentRepository, audit: AuditService) -> Self {
        Self {
            repo,
            agent_repo,
            audit,
        }
    }

    // --- CATEGORIAS ---

    pub async fn create_category(
        &self,
        organization_id: Uuid,
        name: &str,
        kind: RecordType,
    ) -> Result<FinancialCategory, AppError> {
        self.repo.create_category(organization_id, name, kind).await
    }

    pub async fn list_categories(
        &self,
        organization_id: Uuid,
    ) -> Result<Vec<FinancialCategory>, AppError> {
        self.repo.list_categories(organization_id).await
    }

    // --- REGISTROS ---

    /// Cria um registro financeiro. Nome de categoria conhecido é
    /// normalizado para id antes de persistir, mas o retorno preserva o
    /// nome de exibição que o chamador enviou.
    ///
    /// Registro de comissão criado já como pago ajusta o ledger do
    /// corretor na hora, simétrico ao caminho de update pendente->pago.
    pub async fn create_record(
        &self,
        organization_id: Uuid,
        user_id: Option<Uuid>,
        input: CreateRecordInput,
    ) -> Result<FinancialRecord, AppError> {
        let categories = self.repo.list_categories(organization_id).await?;
        let stored_category = storage_category_value(&categories, &input.category);

        let mut record = self
            .repo
            .create_record(
                organization_id,
                NewRecord {
                    record_type: input.record_type,
                    description: &input.description,
                    amount: input.amount,
                    status: input.status,
                    category: &stored_category,
                    related_entity_id: input.related_entity_id,
                    sale_id: input.sale_id,
                    due_date: input.due_date,
                },
            )
            .await?;

        if record.status == RecordStatus::Paid
            && is_commission_category(&categories, &record.category)
        {
            if let Some(agent_id) = record.related_entity_id {
                self.adjust_agent_paid_commission(organization_id, agent_id, record.amount)
                    .await?;
            }
        }

        self.audit
            .record(
                organization_id,
                user_id,
                AuditAction::Create,
                RESOURCE_TYPE,
                record.id,
                None,
                serde_json::to_value(&record).ok(),
            )
            .await;

        record.category = display_category_value(&categories, &record.category);
        Ok(record)
    }

    pub async fn list_records(
        &self,
        organization_id: Uuid,
    ) -> Result<Vec<FinancialRecord>, AppError> {
        let categories = self.repo.list_categories(organization_id).await?;
        let mut records = self.repo.list_records(organization_id).await?;
        for record in &mut records {
            record.category = display_category_value(&categories, &record.category);
        }
        Ok(records)
    }

    /// Atualiza um registro e reconcilia o ledger do corretor quando a
    /// mudança de status de um registro de comissão exige. O registro
    /// anterior é a base da transição; os campos do update fornecem os
    /// valores novos.
    ///
    /// As duas escritas (registro e ledger) são requisições independentes:
    /// falha entre elas deixa estado parcial, sem rollback automático.
    pub async fn update_record(
        &self,
        organization_id: Uuid,
        user_id: Option<Uuid>,
        record_id: Uuid,
        input: UpdateRecordInput,
    ) -> Result<FinancialRecord, AppError> {
        let previous = self
            .repo
            .get_record(organization_id, record_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Registro financeiro".to_string()))?;

        let categories = self.repo.list_categories(organization_id).await?;
        let stored_category = input
            .category
            .as_deref()
            .map(|c| storage_category_value(&categories, c));

        let mut updated = self
            .repo
            .update_record(
                organization_id,
                record_id,
                RecordChanges {
                    record_type: input.record_type,
                    description: input.description.as_deref(),
                    amount: input.amount,
                    status: input.status,
                    category: stored_category.as_deref(),
                    related_entity_id: input.related_entity_id,
                    due_date: input.due_date,
                },
            )
            .await?
            .ok_or_else(|| AppError::NotFound("Registro financeiro".to_string()))?;

        // O lado da transição decide qual versão do registro governa a
        // marcação de comissão: crédito (pendente -> pago) olha o registro
        // atualizado; estorno (pago -> pendente) olha o anterior, que foi o
        // creditado. Recategorizar para fora de comissão no mesmo update
        // não escapa do estorno.
        let ledger_agent = match (previous.status, updated.status) {
            (RecordStatus::Pending, RecordStatus::Paid) => {
                commission_agent(&categories, &updated)
            }
            (RecordStatus::Paid, RecordStatus::Pending) => {
                commission_agent(&categories, &previous)
            }
            _ => None,
        };

        if let Some(agent_id) = ledger_agent {
            let delta = ledger::commission_delta(
                previous.status,
                previous.amount,
                updated.status,
                updated.amount,
            );
            if let Some(delta) = delta {
                self.adjust_agent_paid_commission(organization_id, agent_id, delta)
                    .await?;
            }
        }

        self.audit
            .record(
                organization_id,
                user_id,
                AuditAction::Update,
                RESOURCE_TYPE,
                updated.id,
                serde_json::to_value(&previous).ok(),
                serde_json::to_value(&updated).ok(),
            )
            .await;

        updated.category = display_category_value(&categories, &updated.category);
        Ok(updated)
    }

    /// Remove um registro financeiro.
    /// A exclusão NÃO estorna o ledger do corretor, mesmo para comissão
    /// paga: reconciliação disso é externa.
    pub async fn delete_record(
        &self,
        organization_id: Uuid,
        user_id: Option<Uuid>,
        record_id: Uuid,
    ) -> Result<(), AppError> {
        let previous = self
            .repo
            .get_record(organization_id, record_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Registro financeiro".to_string()))?;

        self.repo.delete_record(organization_id, record_id).await?;

        self.audit
            .record(
                organization_id,
                user_id,
                AuditAction::Delete,
                RESOURCE_TYPE,
                previous.id,
                serde_json::to_value(&previous).ok(),
                None,
            )
            .await;

        Ok(())
    }

    // --- LEDGER DO CORRETOR ---

    /// Ajusta `total_commission_paid` do corretor com leitura-modificação-
    /// escrita e piso em zero. Sem token de concorrência otimista: ajustes
    /// simultâneos do mesmo corretor podem se perder (modelo assumido).
    pub async fn adjust_agent_paid_commission(
        &self,
        organization_id: Uuid,
        agent_id: Uuid,
        delta: Decimal,
    ) -> Result<Agent, AppError> {
        let agent = self
            .agent_repo
            .get_agent(organization_id, agent_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Corretor".to_string()))?;

        let new_total = ledger::apply_delta(agent.total_commission_paid, delta);

        tracing::debug!(
            "Ajustando comissão paga do corretor {}: {} -> {}",
            agent_id,
            agent.total_commission_paid,
            new_total
        );

        self.agent_repo
            .set_paid_commission_total(organization_id, agent_id, new_total)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn category(name: &str, kind: RecordType) -> FinancialCategory {
        FinancialCategory {
            id: Uuid::new_v4(),
            organization_id: Uuid::new_v4(),
            name: name.to_string(),
            kind,
            created_at: Some(Utc::now()),
        }
    }

    #[test]
    fn nome_conhecido_e_armazenado_como_id() {
        let marketing = category("Marketing", RecordType::Expense);
        let categories = vec![marketing.clone(), category("Comissão", RecordType::Expense)];

        let stored = storage_category_value(&categories, "Marketing");
        assert_eq!(stored, marketing.id.to_string());

        // E o caminho de leitura devolve o nome, não o id cru.
        assert_eq!(display_category_value(&categories, &stored), "Marketing");
    }

    #[test]
    fn texto_livre_passa_intacto_nas_duas_direcoes() {
        let categories = vec![category("Marketing", RecordType::Expense)];

        assert_eq!(
            storage_category_value(&categories, "Despesa avulsa"),
            "Despesa avulsa"
        );
        assert_eq!(
            display_category_value(&categories, "Despesa avulsa"),
            "Despesa avulsa"
        );
    }

    #[test]
    fn id_de_categoria_apagada_e_exibido_cru() {
        let categories = vec![category("Marketing", RecordType::Expense)];
        let orphan = Uuid::new_v4().to_string();
        assert_eq!(display_category_value(&categories, &orphan), orphan);
    }

    fn record(category: &str, related: Option<Uuid>) -> FinancialRecord {
        FinancialRecord {
            id: Uuid::new_v4(),
            organization_id: Uuid::new_v4(),
            record_type: RecordType::Expense,
            description: "Lançamento de teste".to_string(),
            amount: Decimal::from(500),
            status: RecordStatus::Pending,
            category: category.to_string(),
            related_entity_id: related,
            sale_id: None,
            due_date: None,
            created_at: Some(Utc::now()),
            updated_at: None,
        }
    }

    #[test]
    fn so_registro_de_comissao_com_corretor_indica_alvo_de_ledger() {
        let categories = vec![category("Marketing", RecordType::Expense)];
        let agent = Uuid::new_v4();

        // Categoria não-comissão com corretor vinculado: ledger fora.
        assert_eq!(
            commission_agent(&categories, &record("Marketing", Some(agent))),
            None
        );
        // Comissão sem corretor vinculado: nada a ajustar.
        assert_eq!(commission_agent(&categories, &record("Comissão", None)), None);
        // Comissão com corretor: alvo do ajuste.
        assert_eq!(
            commission_agent(&categories, &record("Comissão", Some(agent))),
            Some(agent)
        );
    }

    #[test]
    fn comissao_e_reconhecida_por_nome_e_por_id() {
        let commission = category("Comissão", RecordType::Expense);
        let categories = vec![category("Marketing", RecordType::Expense), commission.clone()];

        assert!(is_commission_category(&categories, "Comissão"));
        assert!(is_commission_category(&categories, &commission.id.to_string()));
        assert!(!is_commission_category(&categories, "Marketing"));
        assert!(!is_commission_category(&categories, "Aluguel"));
    }
}
