pub mod agent_repo;
pub use agent_repo::AgentRepository;
pub mod catalog_repo;
pub use catalog_repo::CatalogRepository;
pub mod crm_repo;
pub use crm_repo::CrmRepository;
pub mod sales_repo;
pub use sales_repo::SalesRepository;
pub mod finance_repo;
pub use finance_repo::FinanceRepository;
pub mod audit_repo;
pub use audit_repo::AuditRepository;
pub mod settings_repo;
pub use settings_repo::SettingsRepository;
