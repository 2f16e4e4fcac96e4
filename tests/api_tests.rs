//! Tests de identidad y catálogo: registro, login y CRUD de flota.

mod common;

use common::*;

use rust_decimal::Decimal;
use uuid::Uuid;

use car_rental::dto::auth_dto::{LoginRequest, RegisterRequest};
use car_rental::dto::car_dto::{CarFilters, UpdateCarRequest};
use car_rental::models::car::CarStatus;
use car_rental::models::user::UserRole;
use car_rental::utils::errors::AppError;
use car_rental::utils::jwt::verify_token;

fn register_request(email: &str) -> RegisterRequest {
    RegisterRequest {
        name: "Laura Gómez".to_string(),
        email: email.to_string(),
        phone: "600123456".to_string(),
        password: "contraseña-segura".to_string(),
    }
}

#[tokio::test]
async fn test_register_creates_plain_user() {
    let env = test_env();
    let auth = auth_controller(&env);

    let response = auth.register(register_request("laura@example.com")).await.unwrap();
    let user = response.data.unwrap();

    assert_eq!(user.role, UserRole::User);
    assert_eq!(user.email, "laura@example.com");
}

#[tokio::test]
async fn test_register_duplicate_email_conflicts() {
    let env = test_env();
    let auth = auth_controller(&env);

    auth.register(register_request("laura@example.com")).await.unwrap();
    let second = auth.register(register_request("laura@example.com")).await;

    assert!(matches!(second, Err(AppError::Conflict(_))));

    // El primer registro sigue intacto y puede loguearse
    let login = auth
        .login(LoginRequest {
            email: "laura@example.com".to_string(),
            password: "contraseña-segura".to_string(),
        })
        .await
        .unwrap();
    assert!(login.success);
}

#[tokio::test]
async fn test_register_rejects_short_password() {
    let env = test_env();
    let auth = auth_controller(&env);

    let mut request = register_request("laura@example.com");
    request.password = "corta".to_string();

    assert!(matches!(auth.register(request).await, Err(AppError::Validation(_))));
}

#[tokio::test]
async fn test_login_issues_verifiable_token() {
    let env = test_env();
    let auth = auth_controller(&env);

    let registered = auth
        .register(register_request("laura@example.com"))
        .await
        .unwrap()
        .data
        .unwrap();

    let login = auth
        .login(LoginRequest {
            email: "laura@example.com".to_string(),
            password: "contraseña-segura".to_string(),
        })
        .await
        .unwrap();

    let claims = verify_token(&login.token.unwrap(), &jwt_config()).unwrap();
    assert_eq!(claims.sub, registered.id.to_string());
    assert_eq!(claims.role, UserRole::User);
}

#[tokio::test]
async fn test_login_rejects_bad_credentials() {
    let env = test_env();
    let auth = auth_controller(&env);

    auth.register(register_request("laura@example.com")).await.unwrap();

    let wrong_password = auth
        .login(LoginRequest {
            email: "laura@example.com".to_string(),
            password: "incorrecta-123".to_string(),
        })
        .await;
    assert!(matches!(wrong_password, Err(AppError::Unauthorized(_))));

    let unknown_email = auth
        .login(LoginRequest {
            email: "nadie@example.com".to_string(),
            password: "contraseña-segura".to_string(),
        })
        .await;
    assert!(matches!(unknown_email, Err(AppError::Unauthorized(_))));
}

#[tokio::test]
async fn test_create_car_requires_admin() {
    let env = test_env();
    let cars = car_controller(&env);

    let user = seed_user(&env, "user@example.com", UserRole::User).await;
    let result = cars.create(&user, car_request("Ibiza", "Seat", "compacto", 40)).await;

    assert!(matches!(result, Err(AppError::Forbidden(_))));
    assert!(cars.list(CarFilters::default()).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_then_fetch_returns_equal_record() {
    let env = test_env();
    let cars = car_controller(&env);
    let admin = seed_user(&env, "admin@example.com", UserRole::Admin).await;

    let created = cars
        .create(&admin, car_request("Ibiza", "Seat", "compacto", 40))
        .await
        .unwrap()
        .data
        .unwrap();

    let fetched = cars.get_by_id(created.id).await.unwrap();

    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.name, "Ibiza");
    assert_eq!(fetched.brand, "Seat");
    assert_eq!(fetched.price_per_day, Decimal::from(40));
    assert_eq!(fetched.availability_status, CarStatus::Available);
}

#[tokio::test]
async fn test_create_car_rejects_nonpositive_price() {
    let env = test_env();
    let cars = car_controller(&env);
    let admin = seed_user(&env, "admin@example.com", UserRole::Admin).await;

    let mut request = car_request("Ibiza", "Seat", "compacto", 40);
    request.price_per_day = Decimal::ZERO;

    assert!(matches!(
        cars.create(&admin, request).await,
        Err(AppError::Validation(_))
    ));
}

#[tokio::test]
async fn test_update_merges_only_supplied_fields() {
    let env = test_env();
    let cars = car_controller(&env);
    let admin = seed_user(&env, "admin@example.com", UserRole::Admin).await;

    let created = cars
        .create(&admin, car_request("Ibiza", "Seat", "compacto", 40))
        .await
        .unwrap()
        .data
        .unwrap();

    let updated = cars
        .update(
            &admin,
            created.id,
            UpdateCarRequest {
                price_per_day: Some(Decimal::from(55)),
                availability_status: Some(CarStatus::Unavailable),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .data
        .unwrap();

    // Campos enviados actualizados, el resto intacto
    assert_eq!(updated.price_per_day, Decimal::from(55));
    assert_eq!(updated.availability_status, CarStatus::Unavailable);
    assert_eq!(updated.name, "Ibiza");
    assert_eq!(updated.brand, "Seat");
    assert_eq!(updated.seats, 5);
}

#[tokio::test]
async fn test_update_unknown_car_is_not_found() {
    let env = test_env();
    let cars = car_controller(&env);
    let admin = seed_user(&env, "admin@example.com", UserRole::Admin).await;

    let result = cars
        .update(&admin, Uuid::new_v4(), UpdateCarRequest::default())
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn test_delete_then_fetch_is_not_found() {
    let env = test_env();
    let cars = car_controller(&env);
    let admin = seed_user(&env, "admin@example.com", UserRole::Admin).await;

    let created = cars
        .create(&admin, car_request("Ibiza", "Seat", "compacto", 40))
        .await
        .unwrap()
        .data
        .unwrap();

    cars.delete(&admin, created.id).await.unwrap();

    assert!(matches!(cars.get_by_id(created.id).await, Err(AppError::NotFound(_))));
    // Repetir el borrado también reporta not-found
    assert!(matches!(cars.delete(&admin, created.id).await, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn test_list_filters() {
    let env = test_env();
    let cars = car_controller(&env);
    let admin = seed_user(&env, "admin@example.com", UserRole::Admin).await;

    cars.create(&admin, car_request("Ibiza", "Seat", "compacto", 40)).await.unwrap();
    cars.create(&admin, car_request("Corolla", "Toyota", "sedán", 60)).await.unwrap();
    cars.create(&admin, car_request("RAV4", "Toyota", "suv", 90)).await.unwrap();

    // Sin filtro: todos, en orden de inserción
    let all = cars.list(CarFilters::default()).await.unwrap();
    assert_eq!(all.len(), 3);
    assert_eq!(all[0].name, "Ibiza");
    assert_eq!(all[2].name, "RAV4");

    // Marca: substring case-insensitive
    let toyotas = cars
        .list(CarFilters {
            brand: Some("toyo".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(toyotas.len(), 2);

    // Categoría: exacta, case-insensitive
    let suvs = cars
        .list(CarFilters {
            category: Some("SUV".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(suvs.len(), 1);
    assert_eq!(suvs[0].name, "RAV4");

    // Rango de precio inclusivo en ambos extremos
    let mid_range = cars
        .list(CarFilters {
            min_price: Some(Decimal::from(40)),
            max_price: Some(Decimal::from(60)),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(mid_range.len(), 2);
}
