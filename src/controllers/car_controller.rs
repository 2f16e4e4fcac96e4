//! Controller del catálogo de flota
//!
//! Lectura pública; toda mutación pasa por la política de acceso
//! (solo admin).

use std::sync::Arc;

use uuid::Uuid;
use validator::Validate;

use crate::dto::car_dto::{CarFilters, CarResponse, CreateCarRequest, UpdateCarRequest};
use crate::dto::ApiResponse;
use crate::middleware::auth::AuthUser;
use crate::models::car::{Car, CarStatus};
use crate::repositories::car_repository::CarRepository;
use crate::utils::errors::{not_found_error, validation_error, AppError};
use crate::utils::policy::require_admin;
use crate::utils::validation::validate_positive;

pub struct CarController {
    cars: Arc<dyn CarRepository>,
}

impl CarController {
    pub fn new(cars: Arc<dyn CarRepository>) -> Self {
        Self { cars }
    }

    pub async fn list(&self, filters: CarFilters) -> Result<Vec<CarResponse>, AppError> {
        let cars = self.cars.find_all(&filters).await?;
        Ok(cars.into_iter().map(CarResponse::from).collect())
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<CarResponse, AppError> {
        let car = self
            .cars
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Car", &id.to_string()))?;

        Ok(CarResponse::from(car))
    }

    pub async fn create(
        &self,
        caller: &AuthUser,
        request: CreateCarRequest,
    ) -> Result<ApiResponse<CarResponse>, AppError> {
        require_admin(caller, "create car")?;

        // Validar campos
        request.validate()?;
        if validate_positive(request.price_per_day).is_err() {
            return Err(validation_error("price_per_day", "must be a positive amount"));
        }

        let car = Car::new(
            request.name,
            request.brand,
            request.category,
            request.seats,
            request.fuel_type,
            request.transmission,
            request.price_per_day,
            request.image_url,
            request.availability_status.unwrap_or(CarStatus::Available),
            request.location,
            request.description,
        );

        let saved = self.cars.create(&car).await?;

        Ok(ApiResponse::success_with_message(
            CarResponse::from(saved),
            "Coche creado exitosamente".to_string(),
        ))
    }

    pub async fn update(
        &self,
        caller: &AuthUser,
        id: Uuid,
        request: UpdateCarRequest,
    ) -> Result<ApiResponse<CarResponse>, AppError> {
        require_admin(caller, "update car")?;

        request.validate()?;
        if let Some(price) = request.price_per_day {
            if validate_positive(price).is_err() {
                return Err(validation_error("price_per_day", "must be a positive amount"));
            }
        }

        // Obtener coche actual y fusionar solo los campos presentes
        let current = self
            .cars
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Car", &id.to_string()))?;

        let merged = Car {
            id: current.id,
            name: request.name.unwrap_or(current.name),
            brand: request.brand.unwrap_or(current.brand),
            category: request.category.unwrap_or(current.category),
            seats: request.seats.unwrap_or(current.seats),
            fuel_type: request.fuel_type.unwrap_or(current.fuel_type),
            transmission: request.transmission.unwrap_or(current.transmission),
            price_per_day: request.price_per_day.unwrap_or(current.price_per_day),
            image_url: request.image_url.unwrap_or(current.image_url),
            availability_status: request
                .availability_status
                .unwrap_or(current.availability_status),
            location: request.location.unwrap_or(current.location),
            description: request.description.or(current.description),
            created_at: current.created_at,
        };

        let updated = self.cars.update(&merged).await?;

        Ok(ApiResponse::success_with_message(
            CarResponse::from(updated),
            "Coche actualizado exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, caller: &AuthUser, id: Uuid) -> Result<(), AppError> {
        require_admin(caller, "delete car")?;

        // Borrar un id inexistente reporta not-found (decisión documentada
        // en DESIGN.md)
        let deleted = self.cars.delete(id).await?;
        if !deleted {
            return Err(not_found_error("Car", &id.to_string()));
        }

        Ok(())
    }
}
