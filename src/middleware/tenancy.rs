// src/middleware/tenancy.rs

use axum::{
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
};
use uuid::Uuid;

use crate::common::error::ApiError; // Usamos o nosso ApiError para rejeição

// Os nomes dos nossos cabeçalhos HTTP customizados.
// A autenticação em si é externa: aqui só recebemos o contexto já resolvido.
const ORGANIZATION_ID_HEADER: &str = "x-organization-id";
const USER_ID_HEADER: &str = "x-user-id";

// O nosso extrator de tenancy.
// Toda entidade pertence a exatamente uma organização (imobiliária),
// então nenhuma rota de dados funciona sem esse contexto.
#[derive(Debug, Clone)]
pub struct OrganizationContext {
    pub organization_id: Uuid,
    // Quem está operando, quando o gateway informa. Usado só para auditoria.
    pub user_id: Option<Uuid>,
}

impl<S> FromRequestParts<S> for OrganizationContext
where
    S: Send + Sync,
{
    // ApiError como rejeição, pois ele já implementa IntoResponse
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        let header_value = parts.headers.get(ORGANIZATION_ID_HEADER).ok_or(ApiError {
            status: StatusCode::BAD_REQUEST,
            message: "O cabeçalho X-Organization-ID é obrigatório.".to_string(),
        })?;

        let value_str = header_value.to_str().map_err(|_| ApiError {
            status: StatusCode::BAD_REQUEST,
            message: "Cabeçalho X-Organization-ID contém caracteres inválidos.".to_string(),
        })?;

        let organization_id = Uuid::parse_str(value_str).map_err(|_| ApiError {
            status: StatusCode::BAD_REQUEST,
            message: "Cabeçalho X-Organization-ID inválido (não é um UUID).".to_string(),
        })?;

        // O usuário é opcional; se o cabeçalho vier malformado, ignoramos.
        let user_id = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| Uuid::parse_str(v).ok());

        Ok(OrganizationContext {
            organization_id,
            user_id,
        })
    }
}
