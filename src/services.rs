pub mod audit_service;
pub use audit_service::AuditService;
pub mod catalog_service;
pub use catalog_service::CatalogService;
pub mod crm_service;
pub use crm_service::CrmService;
pub mod finance_service;
pub use finance_service::FinanceService;
pub mod ledger;
pub mod sales_service;
pub use sales_service::SalesService;
