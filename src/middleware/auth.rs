//! Autenticación JWT
//!
//! Extractor que valida el header `Authorization: Bearer` y entrega al
//! handler el usuario del token. Sustituye al estado global de sesión.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::{header, request::Parts},
};
use uuid::Uuid;

use crate::{
    state::AppState,
    utils::{
        errors::AppError,
        jwt::{extract_token_from_header, verify_token, JwtConfig},
    },
};

/// Usuario autenticado que se inyecta en las requests
#[derive(Debug, Clone, PartialEq)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub username: String,
}

impl AuthenticatedUser {
    /// Validar el valor del header Authorization
    pub fn from_header(auth_header: &str, config: &JwtConfig) -> Result<Self, AppError> {
        let token = extract_token_from_header(auth_header)?;
        let claims = verify_token(token, config)?;

        Ok(Self {
            user_id: claims.user_id()?,
            username: claims.username,
        })
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthenticatedUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::Unauthorized("Authorization token required".to_string()))?;

        let state = AppState::from_ref(state);
        Self::from_header(auth_header, &state.jwt)
    }
}
