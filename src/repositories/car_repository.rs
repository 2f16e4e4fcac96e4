//! Repositorio de coches

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::car_dto::CarFilters;
use crate::models::car::Car;
use crate::utils::errors::AppError;

#[async_trait]
pub trait CarRepository: Send + Sync {
    async fn create(&self, car: &Car) -> Result<Car, AppError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Car>, AppError>;
    /// Listado filtrado en orden de inserción
    async fn find_all(&self, filters: &CarFilters) -> Result<Vec<Car>, AppError>;
    /// Escribe el registro completo ya fusionado por el controller
    async fn update(&self, car: &Car) -> Result<Car, AppError>;
    /// Devuelve false si el id no existía
    async fn delete(&self, id: Uuid) -> Result<bool, AppError>;
}

pub struct PgCarRepository {
    pool: PgPool,
}

impl PgCarRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CarRepository for PgCarRepository {
    async fn create(&self, car: &Car) -> Result<Car, AppError> {
        let saved = sqlx::query_as::<_, Car>(
            r#"
            INSERT INTO cars (id, name, brand, category, seats, fuel_type, transmission,
                              price_per_day, image_url, availability_status, location,
                              description, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING *
            "#,
        )
        .bind(car.id)
        .bind(&car.name)
        .bind(&car.brand)
        .bind(&car.category)
        .bind(car.seats)
        .bind(&car.fuel_type)
        .bind(&car.transmission)
        .bind(car.price_per_day)
        .bind(&car.image_url)
        .bind(car.availability_status)
        .bind(&car.location)
        .bind(&car.description)
        .bind(car.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(saved)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Car>, AppError> {
        let car = sqlx::query_as::<_, Car>("SELECT * FROM cars WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(car)
    }

    async fn find_all(&self, filters: &CarFilters) -> Result<Vec<Car>, AppError> {
        // Filtros opcionales resueltos en SQL: marca por substring
        // case-insensitive, categoría exacta, precio por rango inclusivo
        let cars = sqlx::query_as::<_, Car>(
            r#"
            SELECT * FROM cars
            WHERE ($1::text IS NULL OR brand ILIKE '%' || $1 || '%')
              AND ($2::text IS NULL OR LOWER(category) = LOWER($2))
              AND ($3::numeric IS NULL OR price_per_day >= $3)
              AND ($4::numeric IS NULL OR price_per_day <= $4)
            ORDER BY created_at ASC
            "#,
        )
        .bind(&filters.brand)
        .bind(&filters.category)
        .bind(filters.min_price)
        .bind(filters.max_price)
        .fetch_all(&self.pool)
        .await?;

        Ok(cars)
    }

    async fn update(&self, car: &Car) -> Result<Car, AppError> {
        let updated = sqlx::query_as::<_, Car>(
            r#"
            UPDATE cars
            SET name = $2, brand = $3, category = $4, seats = $5, fuel_type = $6,
                transmission = $7, price_per_day = $8, image_url = $9,
                availability_status = $10, location = $11, description = $12
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(car.id)
        .bind(&car.name)
        .bind(&car.brand)
        .bind(&car.category)
        .bind(car.seats)
        .bind(&car.fuel_type)
        .bind(&car.transmission)
        .bind(car.price_per_day)
        .bind(&car.image_url)
        .bind(car.availability_status)
        .bind(&car.location)
        .bind(&car.description)
        .fetch_one(&self.pool)
        .await?;

        Ok(updated)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM cars WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
