// src/docs.rs

use utoipa::OpenApi;

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Settings ---
        handlers::settings::get_settings,
        handlers::settings::update_settings,

        // --- Agents ---
        handlers::agents::create_agent,
        handlers::agents::list_agents,
        handlers::agents::get_agent,
        handlers::agents::update_agent,
        handlers::agents::delete_agent,

        // --- Catalog ---
        handlers::catalog::create_developer,
        handlers::catalog::list_developers,
        handlers::catalog::list_projects,

        // --- CRM ---
        handlers::crm::create_client,
        handlers::crm::list_clients,
        handlers::crm::create_lead,
        handlers::crm::list_leads,
        handlers::crm::update_lead,
        handlers::crm::delete_lead,
        handlers::crm::create_deal,
        handlers::crm::list_deals,
        handlers::crm::update_deal,
        handlers::crm::delete_deal,

        // --- Sales ---
        handlers::sales::create_sale,
        handlers::sales::list_sales,
        handlers::sales::get_sale,
        handlers::sales::update_sale,
        handlers::sales::delete_sale,

        // --- Finance ---
        handlers::finance::create_category,
        handlers::finance::list_categories,
        handlers::finance::create_record,
        handlers::finance::list_records,
        handlers::finance::update_record,
        handlers::finance::delete_record,
    ),
    components(
        schemas(
            // --- Agents ---
            models::agent::AgentStatus,
            models::agent::Agent,
            handlers::agents::CreateAgentPayload,
            handlers::agents::UpdateAgentPayload,

            // --- Catalog ---
            models::catalog::Developer,
            models::catalog::Project,
            handlers::catalog::CreateDeveloperPayload,

            // --- CRM ---
            models::crm::LeadStatus,
            models::crm::DealStage,
            models::crm::Client,
            models::crm::Lead,
            models::crm::Deal,
            handlers::crm::CreateClientPayload,
            handlers::crm::CreateLeadPayload,
            handlers::crm::UpdateLeadPayload,
            handlers::crm::CreateDealPayload,
            handlers::crm::UpdateDealPayload,

            // --- Sales ---
            models::sale::SaleStatus,
            models::sale::Sale,
            handlers::sales::CreateSalePayload,
            handlers::sales::UpdateSalePayload,

            // --- Finance ---
            models::finance::RecordType,
            models::finance::RecordStatus,
            models::finance::FinancialCategory,
            models::finance::FinancialRecord,
            handlers::finance::CreateCategoryPayload,
            handlers::finance::CreateRecordPayload,
            handlers::finance::UpdateRecordPayload,

            // --- Settings ---
            models::settings::OrganizationSettings,
            models::settings::UpdateSettingsRequest,
        )
    ),
    tags(
        (name = "Settings", description = "Configurações da Organização"),
        (name = "Agents", description = "Gestão de Corretores"),
        (name = "Catalog", description = "Construtoras e Empreendimentos"),
        (name = "CRM", description = "Clientes, Leads e Negócios"),
        (name = "Sales", description = "Gestão de Vendas e Comissões"),
        (name = "Finance", description = "Financeiro e Ledger de Comissões")
    )
)]
pub struct ApiDoc;
