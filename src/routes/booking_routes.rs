use axum::{
    extract::{Path, State},
    routing::{get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::booking_controller::BookingController;
use crate::dto::booking_dto::{
    BookingResponse, CreateBookingRequest, UpdateBookingStatusRequest,
};
use crate::dto::ApiResponse;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_booking_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_booking))
        .route("/", get(list_all_bookings))
        .route("/my", get(list_my_bookings))
        .route("/:id/status", put(update_booking_status))
}

fn controller(state: &AppState) -> BookingController {
    BookingController::new(state.bookings.clone(), state.cars.clone(), state.users.clone())
}

async fn create_booking(
    State(state): State<AppState>,
    caller: AuthUser,
    Json(request): Json<CreateBookingRequest>,
) -> Result<Json<ApiResponse<BookingResponse>>, AppError> {
    let response = controller(&state).create(&caller, request).await?;
    Ok(Json(response))
}

async fn list_my_bookings(
    State(state): State<AppState>,
    caller: AuthUser,
) -> Result<Json<Vec<BookingResponse>>, AppError> {
    let response = controller(&state).list_my(&caller).await?;
    Ok(Json(response))
}

async fn list_all_bookings(
    State(state): State<AppState>,
    caller: AuthUser,
) -> Result<Json<Vec<BookingResponse>>, AppError> {
    let response = controller(&state).list_all(&caller).await?;
    Ok(Json(response))
}

async fn update_booking_status(
    State(state): State<AppState>,
    caller: AuthUser,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateBookingStatusRequest>,
) -> Result<Json<ApiResponse<BookingResponse>>, AppError> {
    let response = controller(&state).set_status(&caller, id, request).await?;
    Ok(Json(response))
}
