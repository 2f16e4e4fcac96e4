//! Almacenamiento en memoria
//!
//! Implementación de los repositorios sobre Vec + RwLock. Sirve como
//! backend sin DATABASE_URL (igual que el mock sobre localStorage del
//! frontend original) y como arnés de los tests de integración. Cada
//! mutación toma el write lock durante todo su read-modify-write, así
//! que las operaciones por registro son atómicas.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::dto::car_dto::CarFilters;
use crate::models::booking::{Booking, BookingStatus};
use crate::models::car::Car;
use crate::models::user::User;
use crate::repositories::booking_repository::BookingRepository;
use crate::repositories::car_repository::CarRepository;
use crate::repositories::user_repository::UserRepository;
use crate::utils::errors::{conflict_error, AppError};

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<Vec<User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: &User) -> Result<User, AppError> {
        let mut users = self.users.write().await;
        // Misma garantía que el UNIQUE de la tabla users
        if users.iter().any(|u| u.email == user.email) {
            return Err(conflict_error("User", "email", &user.email));
        }
        users.push(user.clone());
        Ok(user.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AppError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn email_exists(&self, email: &str) -> Result<bool, AppError> {
        let users = self.users.read().await;
        Ok(users.iter().any(|u| u.email == email))
    }
}

#[derive(Default)]
pub struct InMemoryCarRepository {
    cars: Arc<RwLock<Vec<Car>>>,
}

impl InMemoryCarRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn matches_filters(car: &Car, filters: &CarFilters) -> bool {
    if let Some(ref brand) = filters.brand {
        if !car.brand.to_lowercase().contains(&brand.to_lowercase()) {
            return false;
        }
    }
    if let Some(ref category) = filters.category {
        if !car.category.eq_ignore_ascii_case(category) {
            return false;
        }
    }
    if let Some(min) = filters.min_price {
        if car.price_per_day < min {
            return false;
        }
    }
    if let Some(max) = filters.max_price {
        if car.price_per_day > max {
            return false;
        }
    }
    true
}

#[async_trait]
impl CarRepository for InMemoryCarRepository {
    async fn create(&self, car: &Car) -> Result<Car, AppError> {
        let mut cars = self.cars.write().await;
        cars.push(car.clone());
        Ok(car.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Car>, AppError> {
        let cars = self.cars.read().await;
        Ok(cars.iter().find(|c| c.id == id).cloned())
    }

    async fn find_all(&self, filters: &CarFilters) -> Result<Vec<Car>, AppError> {
        let cars = self.cars.read().await;
        Ok(cars
            .iter()
            .filter(|c| matches_filters(c, filters))
            .cloned()
            .collect())
    }

    async fn update(&self, car: &Car) -> Result<Car, AppError> {
        let mut cars = self.cars.write().await;
        let slot = cars
            .iter_mut()
            .find(|c| c.id == car.id)
            .ok_or_else(|| AppError::NotFound("Car not found".to_string()))?;
        *slot = car.clone();
        Ok(car.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let mut cars = self.cars.write().await;
        let before = cars.len();
        cars.retain(|c| c.id != id);
        Ok(cars.len() < before)
    }
}

#[derive(Default)]
pub struct InMemoryBookingRepository {
    bookings: Arc<RwLock<Vec<Booking>>>,
}

impl InMemoryBookingRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookingRepository for InMemoryBookingRepository {
    async fn create(&self, booking: &Booking) -> Result<Booking, AppError> {
        let mut bookings = self.bookings.write().await;
        bookings.push(booking.clone());
        Ok(booking.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Booking>, AppError> {
        let bookings = self.bookings.read().await;
        Ok(bookings.iter().find(|b| b.id == id).cloned())
    }

    async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<Booking>, AppError> {
        let bookings = self.bookings.read().await;
        // Orden de inserción invertido = más reciente primero
        Ok(bookings
            .iter()
            .filter(|b| b.user_id == user_id)
            .rev()
            .cloned()
            .collect())
    }

    async fn find_all(&self) -> Result<Vec<Booking>, AppError> {
        let bookings = self.bookings.read().await;
        Ok(bookings.clone())
    }

    async fn update_status(
        &self,
        id: Uuid,
        status: BookingStatus,
    ) -> Result<Option<Booking>, AppError> {
        let mut bookings = self.bookings.write().await;
        match bookings.iter_mut().find(|b| b.id == id) {
            Some(booking) => {
                booking.status = status;
                Ok(Some(booking.clone()))
            }
            None => Ok(None),
        }
    }
}
