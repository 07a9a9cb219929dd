pub mod agents;
pub mod catalog;
pub mod crm;
pub mod finance;
pub mod sales;
pub mod settings;
