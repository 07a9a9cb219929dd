// src/services/crm_service.rs

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{
        agent_repo::{AgentChanges, NewAgent},
        crm_repo::{DealChanges, LeadChanges},
        AgentRepository, CrmRepository,
    },
    models::{
        agent::{Agent, AgentStatus},
        audit::AuditAction,
        crm::{Client, Deal, DealStage, Lead, LeadStatus},
    },
    services::AuditService,
};

pub struct UpdateLeadInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub source: Option<String>,
    pub status: Option<LeadStatus>,
    pub agent_id: Option<Uuid>,
    pub notes: Option<String>,
}

pub struct UpdateDealInput {
    pub title: Option<String>,
    pub client_id: Option<Uuid>,
    pub agent_id: Option<Uuid>,
    pub project_id: Option<Uuid>,
    pub stage: Option<DealStage>,
    pub expected_value: Option<Decimal>,
    pub notes: Option<String>,
}

pub struct UpdateAgentInput {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub creci: Option<String>,
    pub status: Option<AgentStatus>,
    pub total_commission_earned: Option<Decimal>,
}

#[derive(Clone)]
pub struct CrmService {
    repo: CrmRepository,
    agent_repo: AgentRepository,
    audit: AuditService,
}

impl CrmService {
    pub fn new(repo: CrmRepository, agent_repo: AgentRepository, audit: AuditService) -> Self {
        Self {
            repo,
            agent_repo,
            audit,
        }
    }

    // =========================================================================
    //  CORRETORES
    // =========================================================================

    pub async fn create_agent(
        &self,
        organization_id: Uuid,
        full_name: &str,
        email: Option<&str>,
        phone: Option<&str>,
        creci: Option<&str>,
    ) -> Result<Agent, AppError> {
        self.agent_repo
            .create_agent(
                organization_id,
                NewAgent {
                    full_name,
                    email,
                    phone,
                    creci,
                },
            )
            .await
    }

    pub async fn list_agents(&self, organization_id: Uuid) -> Result<Vec<Agent>, AppError> {
        self.agent_repo.list_agents(organization_id).await
    }

    pub async fn get_agent(
        &self,
        organization_id: Uuid,
        agent_id: Uuid,
    ) -> Result<Agent, AppError> {
        self.agent_repo
            .get_agent(organization_id, agent_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Corretor".to_string()))
    }

    /// Update esparso do cadastro do corretor. O agregado
    /// `total_commission_paid` fica de fora de propósito: só o ajustador
    /// de ledger do financeiro escreve nele.
    pub async fn update_agent(
        &self,
        organization_id: Uuid,
        agent_id: Uuid,
        input: UpdateAgentInput,
    ) -> Result<Agent, AppError> {
        self.agent_repo
            .update_agent(
                organization_id,
                agent_id,
                AgentChanges {
                    full_name: input.full_name.as_deref(),
                    email: input.email.as_deref(),
                    phone: input.phone.as_deref(),
                    creci: input.creci.as_deref(),
                    status: input.status,
                    total_commission_earned: input.total_commission_earned,
                },
            )
            .await?
            .ok_or_else(|| AppError::NotFound("Corretor".to_string()))
    }

    pub async fn delete_agent(
        &self,
        organization_id: Uuid,
        agent_id: Uuid,
    ) -> Result<(), AppError> {
        let deleted = self.agent_repo.delete_agent(organization_id, agent_id).await?;
        if deleted == 0 {
            return Err(AppError::NotFound("Corretor".to_string()));
        }
        Ok(())
    }

    // =========================================================================
    //  CLIENTES
    // =========================================================================

    pub async fn create_client(
        &self,
        organization_id: Uuid,
        full_name: &str,
        document_number: Option<&str>,
        email: Option<&str>,
        phone: Option<&str>,
    ) -> Result<Client, AppError> {
        self.repo
            .create_client(organization_id, full_name, document_number, email, phone)
            .await
    }

    pub async fn list_clients(&self, organization_id: Uuid) -> Result<Vec<Client>, AppError> {
        self.repo.list_clients(organization_id).await
    }

    // =========================================================================
    //  LEADS
    // =========================================================================

    pub async fn create_lead(
        &self,
        organization_id: Uuid,
        user_id: Option<Uuid>,
        name: &str,
        email: Option<&str>,
        phone: Option<&str>,
        source: Option<&str>,
        agent_id: Option<Uuid>,
        notes: Option<&str>,
    ) -> Result<Lead, AppError> {
        let lead = self
            .repo
            .create_lead(organization_id, name, email, phone, source, agent_id, notes)
            .await?;

        self.audit
            .record(
                organization_id,
                user_id,
                AuditAction::Create,
                "lead",
                lead.id,
                None,
                serde_json::to_value(&lead).ok(),
            )
            .await;

        Ok(lead)
    }

    pub async fn list_leads(&self, organization_id: Uuid) -> Result<Vec<Lead>, AppError> {
        self.repo.list_leads(organization_id).await
    }

    pub async fn update_lead(
        &self,
        organization_id: Uuid,
        user_id: Option<Uuid>,
        lead_id: Uuid,
        input: UpdateLeadInput,
    ) -> Result<Lead, AppError> {
        let previous = self
            .repo
            .get_lead(organization_id, lead_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Lead".to_string()))?;

        let updated = self
            .repo
            .update_lead(
                organization_id,
                lead_id,
                LeadChanges {
                    name: input.name.as_deref(),
                    email: input.email.as_deref(),
                    phone: input.phone.as_deref(),
                    source: input.source.as_deref(),
                    status: input.status,
                    agent_id: input.agent_id,
                    notes: input.notes.as_deref(),
                },
            )
            .await?
            .ok_or_else(|| AppError::NotFound("Lead".to_string()))?;

        self.audit
            .record(
                organization_id,
                user_id,
                AuditAction::Update,
                "lead",
                updated.id,
                serde_json::to_value(&previous).ok(),
                serde_json::to_value(&updated).ok(),
            )
            .await;

        Ok(updated)
    }

    pub async fn delete_lead(
        &self,
        organization_id: Uuid,
        user_id: Option<Uuid>,
        lead_id: Uuid,
    ) -> Result<(), AppError> {
        let previous = self
            .repo
            .get_lead(organization_id, lead_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Lead".to_string()))?;

        self.repo.delete_lead(organization_id, lead_id).await?;

        self.audit
            .record(
                organization_id,
                user_id,
                AuditAction::Delete,
                "lead",
                previous.id,
                serde_json::to_value(&previous).ok(),
                None,
            )
            .await;

        Ok(())
    }

    // =========================================================================
    //  NEGÓCIOS
    // =========================================================================

    pub async fn create_deal(
        &self,
        organization_id: Uuid,
        user_id: Option<Uuid>,
        title: &str,
        lead_id: Option<Uuid>,
        client_id: Option<Uuid>,
        agent_id: Option<Uuid>,
        project_id: Option<Uuid>,
        expected_value: Option<Decimal>,
        notes: Option<&str>,
    ) -> Result<Deal, AppError> {
        let deal = self
            .repo
            .create_deal(
                organization_id,
                title,
                lead_id,
                client_id,
                agent_id,
                project_id,
                expected_value,
                notes,
            )
            .await?;

        self.audit
            .record(
                organization_id,
                user_id,
                AuditAction::Create,
                "deal",
                deal.id,
                None,
                serde_json::to_value(&deal).ok(),
            )
            .await;

        Ok(deal)
    }

    pub async fn list_deals(&self, organization_id: Uuid) -> Result<Vec<Deal>, AppError> {
        self.repo.list_deals(organization_id).await
    }

    pub async fn update_deal(
        &self,
        organization_id: Uuid,
        user_id: Option<Uuid>,
        deal_id: Uuid,
        input: UpdateDealInput,
    ) -> Result<Deal, AppError> {
        let previous = self
            .repo
            .get_deal(organization_id, deal_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Negócio".to_string()))?;

        let updated = self
            .repo
            .update_deal(
                organization_id,
                deal_id,
                DealChanges {
                    title: input.title.as_deref(),
                    client_id: input.client_id,
                    agent_id: input.agent_id,
                    project_id: input.project_id,
                    stage: input.stage,
                    expected_value: input.expected_value,
                    notes: input.notes.as_deref(),
                },
            )
            .await?
            .ok_or_else(|| AppError::NotFound("Negócio".to_string()))?;

        self.audit
            .record(
                organization_id,
                user_id,
                AuditAction::Update,
                "deal",
                updated.id,
                serde_json::to_value(&previous).ok(),
                serde_json::to_value(&updated).ok(),
            )
            .await;

        Ok(updated)
    }

    pub async fn delete_deal(
        &self,
        organization_id: Uuid,
        user_id: Option<Uuid>,
        deal_id: Uuid,
    ) -> Result<(), AppError> {
        let previous = self
            .repo
            .get_deal(organization_id, deal_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Negócio".to_string()))?;

        self.repo.delete_deal(organization_id, deal_id).await?;

        self.audit
            .record(
                organization_id,
                user_id,
                AuditAction::Delete,
                "deal",
                previous.id,
                serde_json::to_value(&previous).ok(),
                None,
            )
            .await;

        Ok(())
    }
}
