// src/config.rs

use sqlx::{postgres::PgPoolOptions, PgPool};
use std::{env, time::Duration};

use crate::{
    db::{
        AgentRepository, AuditRepository, CatalogRepository, CrmRepository, FinanceRepository,
        SalesRepository, SettingsRepository,
    },
    services::{AuditService, CatalogService, CrmService, FinanceService, SalesService},
};

#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub catalog_service: CatalogService,
    pub crm_service: CrmService,
    pub sales_service: SalesService,
    pub finance_service: FinanceService,
    pub settings_repo: SettingsRepository,
}

impl AppState {
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL deve ser definida");

        // Conecta ao banco de dados, usando '?' para propagar erros
        let db_pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&database_url)
            .await?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        // --- Monta o gráfico de dependências ---
        let audit_service = AuditService::new(AuditRepository::new(db_pool.clone()));
        let agent_repo = AgentRepository::new(db_pool.clone());

        let catalog_service = CatalogService::new(CatalogRepository::new(db_pool.clone()));
        let crm_service = CrmService::new(
            CrmRepository::new(db_pool.clone()),
            agent_repo.clone(),
            audit_service.clone(),
        );
        let sales_service = SalesService::new(
            SalesRepository::new(db_pool.clone()),
            catalog_service.clone(),
            audit_service.clone(),
        );
        let finance_service = FinanceService::new(
            FinanceRepository::new(db_pool.clone()),
            agent_repo,
            audit_service,
        );
        let settings_repo = SettingsRepository::new(db_pool.clone());

        Ok(Self {
            db_pool,
            catalog_service,
            crm_service,
            sales_service,
            finance_service,
            settings_repo,
        })
    }
}
