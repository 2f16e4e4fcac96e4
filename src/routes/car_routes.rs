use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::car_controller::CarController;
use crate::dto::car_dto::{CarFilters, CarResponse, CreateCarRequest, UpdateCarRequest};
use crate::dto::ApiResponse;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_car_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_cars))
        .route("/", post(create_car))
        .route("/:id", get(get_car))
        .route("/:id", put(update_car))
        .route("/:id", delete(delete_car))
}

// Lectura pública: sin extractor de auth
async fn list_cars(
    State(state): State<AppState>,
    Query(filters): Query<CarFilters>,
) -> Result<Json<Vec<CarResponse>>, AppError> {
    let controller = CarController::new(state.cars.clone());
    let response = controller.list(filters).await?;
    Ok(Json(response))
}

async fn get_car(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CarResponse>, AppError> {
    let controller = CarController::new(state.cars.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn create_car(
    State(state): State<AppState>,
    caller: AuthUser,
    Json(request): Json<CreateCarRequest>,
) -> Result<Json<ApiResponse<CarResponse>>, AppError> {
    let controller = CarController::new(state.cars.clone());
    let response = controller.create(&caller, request).await?;
    Ok(Json(response))
}

async fn update_car(
    State(state): State<AppState>,
    caller: AuthUser,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateCarRequest>,
) -> Result<Json<ApiResponse<CarResponse>>, AppError> {
    let controller = CarController::new(state.cars.clone());
    let response = controller.update(&caller, id, request).await?;
    Ok(Json(response))
}

async fn delete_car(
    State(state): State<AppState>,
    caller: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = CarController::new(state.cars.clone());
    controller.delete(&caller, id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Coche eliminado exitosamente"
    })))
}
