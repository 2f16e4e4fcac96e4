//! Extractor de autenticación
//!
//! Resuelve al llamante desde el header Authorization. Los handlers que
//! declaran `AuthUser` exigen un token válido; las rutas públicas del
//! catálogo simplemente no lo declaran.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use uuid::Uuid;

use crate::models::user::UserRole;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::{extract_token_from_header, verify_token, JwtConfig};

/// Identidad autenticada del request actual
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub user_id: Uuid,
    pub role: UserRole,
}

impl AuthUser {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| {
                AppError::Unauthorized("Falta el header Authorization".to_string())
            })?;

        let token = extract_token_from_header(auth_header)?;
        let claims = verify_token(token, &JwtConfig::from(&state.config))?;

        let user_id = Uuid::parse_str(&claims.sub)
            .map_err(|_| AppError::Jwt("El claim sub no es un UUID válido".to_string()))?;

        Ok(AuthUser {
            user_id,
            role: claims.role,
        })
    }
}
