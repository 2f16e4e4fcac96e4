use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::car::{Car, CarStatus};

/// Filtros para búsqueda de coches (query params públicos)
#[derive(Debug, Default, Deserialize)]
pub struct CarFilters {
    /// Substring de marca, case-insensitive
    pub brand: Option<String>,
    /// Categoría exacta, case-insensitive
    pub category: Option<String>,
    /// Tarifa diaria mínima, inclusive
    pub min_price: Option<Decimal>,
    /// Tarifa diaria máxima, inclusive
    pub max_price: Option<Decimal>,
}

/// Request para dar de alta un coche (solo admin)
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCarRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate(length(min = 1, max = 100))]
    pub brand: String,

    #[validate(length(min = 1, max = 50))]
    pub category: String,

    #[validate(range(min = 1, max = 20))]
    pub seats: i32,

    #[validate(length(min = 1, max = 20))]
    pub fuel_type: String,

    #[validate(length(min = 1, max = 20))]
    pub transmission: String,

    pub price_per_day: Decimal,

    #[validate(length(min = 1, max = 500))]
    pub image_url: String,

    pub availability_status: Option<CarStatus>,

    #[validate(length(min = 1, max = 100))]
    pub location: String,

    pub description: Option<String>,
}

/// Request para actualizar un coche existente; solo los campos presentes
/// se aplican sobre el registro actual
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateCarRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub brand: Option<String>,

    #[validate(length(min = 1, max = 50))]
    pub category: Option<String>,

    #[validate(range(min = 1, max = 20))]
    pub seats: Option<i32>,

    #[validate(length(min = 1, max = 20))]
    pub fuel_type: Option<String>,

    #[validate(length(min = 1, max = 20))]
    pub transmission: Option<String>,

    pub price_per_day: Option<Decimal>,

    #[validate(length(min = 1, max = 500))]
    pub image_url: Option<String>,

    pub availability_status: Option<CarStatus>,

    #[validate(length(min = 1, max = 100))]
    pub location: Option<String>,

    pub description: Option<String>,
}

/// Response de coche para la API
#[derive(Debug, Serialize)]
pub struct CarResponse {
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

impl From<Car> for CarResponse {
    fn from(car: Car) -> Self {
        Self {
            id: car.id,
            name: car.name,
            brand: car.brand,
            category: car.category,
            seats: car.seats,
            fuel_type: car.fuel_type,
            transmission: car.transmission,
            price_per_day: car.price_per_day,
            image_url: car.image_url,
            availability_status: car.availability_status,
            location: car.location,
            description: car.description,
            created_at: car.created_at,
        }
    }
}
