// src/services/audit_service.rs

use serde_json::Value;
use uuid::Uuid;

use crate::{db::AuditRepository, models::audit::AuditAction};

#[derive(Clone)]
pub struct AuditService {
    repo: AuditRepository,
}

impl AuditService {
    pub fn new(repo: AuditRepository) -> Self {
        Self { repo }
    }

    /// Grava uma entrada de auditoria em melhor esforço: falha é logada
    /// e engolida, nunca propaga para a operação principal.
    pub async fn record(
        &self,
        organization_id: Uuid,
        user_id: Option<Uuid>,
        action: AuditAction,
        resource_type: &str,
        resource_id: Uuid,
        old_data: Option<Value>,
        new_data: Option<Value>,
    ) {
        let result = self
            .repo
            .insert_entry(
                organization_id,
                user_id,
                action,
                resource_type,
                resource_id,
                old_data.as_ref(),
                new_data.as_ref(),
            )
            .await;

        if let Err(e) = result {
            tracing::warn!(
                "Falha ao gravar auditoria ({:?} {} {}): {}",
                action,
                resource_type,
                resource_id,
                e
            );
        }
    }
}
