//! Modelo de Car
//!
//! Este módulo contiene el struct Car y sus variantes para CRUD operations.
//! Mapea exactamente al schema PostgreSQL con primary key 'id'.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use uuid::Uuid;

/// Disponibilidad del coche - mapea al ENUM car_status
///
/// Es un flag manual del administrador, nunca se deriva de las reservas
/// activas (limitación conocida, ver DESIGN.md).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "car_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum CarStatus {
    Available,
    Unavailable,
}

/// Car principal - mapea exactamente a la tabla cars
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Car {
    pub id: Uuid,
    pub name: String,
    pub brand: String,
    pub category: String,
    pub seats: i32,
    pub fuel_type: String,
    pub transmission: String,
    pub price_per_day: Decimal,
    pub image_url: String,
    pub availability_status: CarStatus,
    pub location: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Car {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: String,
        brand: String,
        category: String,
        seats: i32,
        fuel_type: String,
        transmission: String,
        price_per_day: Decimal,
        image_url: String,
        availability_status: CarStatus,
        location: String,
        description: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            brand,
            category,
            seats,
            fuel_type,
            transmission,
            price_per_day,
            image_url,
            availability_status,
            location,
            description,
            created_at: Utc::now(),
        }
    }
}
