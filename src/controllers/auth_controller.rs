//! Controller de autenticación
//!
//! Registro y login. Las contraseñas se guardan con bcrypt y nunca se
//! devuelven; el login emite un JWT con el id y el rol del usuario.

use std::sync::Arc;

use bcrypt::{hash, verify, DEFAULT_COST};
use validator::Validate;

use crate::dto::auth_dto::{LoginRequest, LoginResponse, RegisterRequest, UserResponse};
use crate::dto::ApiResponse;
use crate::middleware::auth::AuthUser;
use crate::models::user::{User, UserRole};
use crate::repositories::user_repository::UserRepository;
use crate::utils::errors::AppError;
use crate::utils::jwt::{generate_token, JwtConfig};

pub struct AuthController {
    users: Arc<dyn UserRepository>,
    jwt_config: JwtConfig,
}

impl AuthController {
    pub fn new(users: Arc<dyn UserRepository>, jwt_config: JwtConfig) -> Self {
        Self { users, jwt_config }
    }

    pub async fn register(
        &self,
        request: RegisterRequest,
    ) -> Result<ApiResponse<UserResponse>, AppError> {
        // Validar campos
        request.validate()?;

        // Verificar que el email no exista
        if self.users.email_exists(&request.email).await? {
            return Err(AppError::Conflict("El email ya está registrado".to_string()));
        }

        // Hash de la contraseña
        let password_hash = hash(&request.password, DEFAULT_COST)
            .map_err(|e| AppError::Hash(format!("Error hashing password: {}", e)))?;

        // El registro siempre crea usuarios normales; el admin semilla
        // viene de la base de datos
        let user = User::new(
            request.name,
            request.email,
            request.phone,
            UserRole::User,
            password_hash,
        );

        let saved = self.users.create(&user).await?;

        Ok(ApiResponse::success_with_message(
            UserResponse::from(saved),
            "Usuario registrado exitosamente".to_string(),
        ))
    }

    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, AppError> {
        // Mismo mensaje para email desconocido y contraseña incorrecta
        let user = self
            .users
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Credenciales inválidas".to_string()))?;

        let valid = verify(&request.password, &user.password_hash)
            .map_err(|e| AppError::Hash(format!("Error verifying password: {}", e)))?;

        if !valid {
            return Err(AppError::Unauthorized("Credenciales inválidas".to_string()));
        }

        let token = generate_token(user.id, user.role, &self.jwt_config)?;

        Ok(LoginResponse::success(token, UserResponse::from(user)))
    }

    /// Resolver la identidad del llamante a partir de su token
    pub async fn me(&self, caller: &AuthUser) -> Result<UserResponse, AppError> {
        let user = self
            .users
            .find_by_id(caller.user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Usuario no encontrado".to_string()))?;

        Ok(UserResponse::from(user))
    }
}
