pub mod agent;
pub mod audit;
pub mod catalog;
pub mod crm;
pub mod finance;
pub mod sale;
pub mod settings;
