// src/services/catalog_service.rs

use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::CatalogRepository,
    models::catalog::{Developer, Project, ProjectReference},
};

#[derive(Clone)]
pub struct CatalogService {
    repo: CatalogRepository,
}

impl CatalogService {
    pub fn new(repo: CatalogRepository) -> Self {
        Self { repo }
    }

    // =========================================================================
    //  RESOLUÇÃO DE EMPREENDIMENTO
    // =========================================================================

    /// Converte a referência crua de empreendimento de uma venda em um id
    /// canônico, criando a linha no catálogo na primeira menção pelo nome.
    ///
    /// - Referência com cara de UUID passa direto, sem consulta.
    /// - Nome conhecido para a (construtora, organização) reaproveita o id.
    /// - Nome inédito insere e devolve o id gerado.
    ///
    /// Duas resoluções simultâneas do mesmo nome novo podem inserir em
    /// dobro; a duplicata é tolerada como problema de qualidade de dados,
    /// não serializamos a resolução.
    pub async fn resolve_project_id(
        &self,
        organization_id: Uuid,
        developer_id: Uuid,
        raw_reference: &str,
    ) -> Result<Uuid, AppError> {
        match ProjectReference::parse(raw_reference) {
            ProjectReference::Id(id) => Ok(id),
            ProjectReference::Name(name) => {
                if let Some(existing) = self
                    .repo
                    .find_project_by_name(organization_id, developer_id, &name)
                    .await?
                {
                    return Ok(existing.id);
                }

                tracing::info!(
                    "Criando empreendimento '{}' para a construtora {}",
                    name,
                    developer_id
                );
                let created = self
                    .repo
                    .create_project(organization_id, developer_id, &name)
                    .await?;
                Ok(created.id)
            }
        }
    }

    // =========================================================================
    //  CATÁLOGO
    // =========================================================================

    pub async fn create_developer(
        &self,
        organization_id: Uuid,
        name: &str,
        contact_name: Option<&str>,
        email: Option<&str>,
        phone: Option<&str>,
    ) -> Result<Developer, AppError> {
        self.repo
            .create_developer(organization_id, name, contact_name, email, phone)
            .await
    }

    pub async fn list_developers(
        &self,
        organization_id: Uuid,
    ) -> Result<Vec<Developer>, AppError> {
        self.repo.list_developers(organization_id).await
    }

    pub async fn list_projects(&self, organization_id: Uuid) -> Result<Vec<Project>, AppError> {
        self.repo.list_projects(organization_id).await
    }
}
