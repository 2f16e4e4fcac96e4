//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum. Los controllers solo ven los traits de
//! repositorio, nunca la tecnología de almacenamiento concreta.

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::environment::EnvironmentConfig;
use crate::repositories::booking_repository::{BookingRepository, PgBookingRepository};
use crate::repositories::car_repository::{CarRepository, PgCarRepository};
use crate::repositories::memory::{
    InMemoryBookingRepository, InMemoryCarRepository, InMemoryUserRepository,
};
use crate::repositories::user_repository::{PgUserRepository, UserRepository};

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub cars: Arc<dyn CarRepository>,
    pub bookings: Arc<dyn BookingRepository>,
    pub config: EnvironmentConfig,
}

impl AppState {
    /// Estado respaldado por PostgreSQL
    pub fn new(pool: PgPool, config: EnvironmentConfig) -> Self {
        Self {
            users: Arc::new(PgUserRepository::new(pool.clone())),
            cars: Arc::new(PgCarRepository::new(pool.clone())),
            bookings: Arc::new(PgBookingRepository::new(pool)),
            config,
        }
    }

    /// Estado en memoria, para correr sin base de datos
    pub fn in_memory(config: EnvironmentConfig) -> Self {
        Self {
            users: Arc::new(InMemoryUserRepository::new()),
            cars: Arc::new(InMemoryCarRepository::new()),
            bookings: Arc::new(InMemoryBookingRepository::new()),
            config,
        }
    }
}
