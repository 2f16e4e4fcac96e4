//! Helpers compartidos por los tests de integración.
//!
//! Los tests ejercen los controllers directamente sobre el
//! almacenamiento en memoria, sin capa HTTP ni base de datos.

// No todos los binarios de test usan todos los helpers
#![allow(dead_code)]

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use car_rental::controllers::auth_controller::AuthController;
use car_rental::controllers::booking_controller::BookingController;
use car_rental::controllers::car_controller::CarController;
use car_rental::dto::car_dto::CreateCarRequest;
use car_rental::middleware::auth::AuthUser;
use car_rental::models::user::{User, UserRole};
use car_rental::repositories::booking_repository::BookingRepository;
use car_rental::repositories::car_repository::CarRepository;
use car_rental::repositories::memory::{
    InMemoryBookingRepository, InMemoryCarRepository, InMemoryUserRepository,
};
use car_rental::repositories::user_repository::UserRepository;
use car_rental::utils::jwt::JwtConfig;

pub struct TestEnv {
    pub users: Arc<dyn UserRepository>,
    pub cars: Arc<dyn CarRepository>,
    pub bookings: Arc<dyn BookingRepository>,
}

pub fn test_env() -> TestEnv {
    TestEnv {
        users: Arc::new(InMemoryUserRepository::new()),
        cars: Arc::new(InMemoryCarRepository::new()),
        bookings: Arc::new(InMemoryBookingRepository::new()),
    }
}

pub fn jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "secreto-de-test".to_string(),
        expiration: 3600,
    }
}

pub fn auth_controller(env: &TestEnv) -> AuthController {
    AuthController::new(env.users.clone(), jwt_config())
}

pub fn car_controller(env: &TestEnv) -> CarController {
    CarController::new(env.cars.clone())
}

pub fn booking_controller(env: &TestEnv) -> BookingController {
    BookingController::new(env.bookings.clone(), env.cars.clone(), env.users.clone())
}

/// Inserta un usuario directamente en el repositorio y devuelve su
/// identidad autenticada. El hash no importa salvo en los tests de login.
pub async fn seed_user(env: &TestEnv, email: &str, role: UserRole) -> AuthUser {
    let user = User::new(
        "Usuario de Test".to_string(),
        email.to_string(),
        "600123456".to_string(),
        role,
        "$2b$12$hashdummyhashdummyhashdu".to_string(),
    );
    let saved = env.users.create(&user).await.unwrap();
    AuthUser {
        user_id: saved.id,
        role: saved.role,
    }
}

pub fn car_request(name: &str, brand: &str, category: &str, price: i64) -> CreateCarRequest {
    CreateCarRequest {
        name: name.to_string(),
        brand: brand.to_string(),
        category: category.to_string(),
        seats: 5,
        fuel_type: "gasolina".to_string(),
        transmission: "manual".to_string(),
        price_per_day: Decimal::from(price),
        image_url: "https://example.com/car.jpg".to_string(),
        availability_status: None,
        location: "Madrid".to_string(),
        description: Some("Coche de test".to_string()),
    }
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}
