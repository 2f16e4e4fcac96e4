//! Política de acceso
//!
//! Chequeos de capacidad puros sobre (rol, identidad, propietario del
//! recurso). Las rutas resuelven al llamante con el extractor de auth y
//! los controllers aplican estas reglas antes de mutar nada.

use uuid::Uuid;

use crate::middleware::auth::AuthUser;
use crate::models::user::UserRole;
use crate::utils::errors::{forbidden_error, AppError};

/// Mutaciones de catálogo y listado global: solo administradores
pub fn require_admin(caller: &AuthUser, operation: &str) -> Result<(), AppError> {
    if caller.role != UserRole::Admin {
        return Err(forbidden_error(operation, "admin role required"));
    }
    Ok(())
}

/// Operaciones sobre una reserva: el usuario propietario o un admin
pub fn require_owner_or_admin(
    caller: &AuthUser,
    owner_id: Uuid,
    operation: &str,
) -> Result<(), AppError> {
    if caller.role == UserRole::Admin || caller.user_id == owner_id {
        return Ok(());
    }
    Err(forbidden_error(operation, "caller does not own this resource"))
}
