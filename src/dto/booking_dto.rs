use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::dto::auth_dto::UserResponse;
use crate::dto::car_dto::CarResponse;
use crate::models::booking::{Booking, BookingStatus};
use crate::models::car::Car;
use crate::models::user::User;

/// Request para crear una reserva
#[derive(Debug, Deserialize, Validate)]
pub struct CreateBookingRequest {
    pub car_id: Uuid,

    pub start_date: NaiveDate,
    pub end_date: NaiveDate,

    #[validate(length(min = 1, max = 100))]
    pub pickup_location: String,

    #[validate(length(min = 1, max = 100))]
    pub drop_location: String,

    /// Total calculado por el cliente. Solo es un hint de presentación:
    /// el servidor recalcula siempre el precio y descarta este valor.
    pub total_price: Option<Decimal>,
}

/// Request para cambiar el estado de una reserva
#[derive(Debug, Deserialize)]
pub struct UpdateBookingStatusRequest {
    pub status: BookingStatus,
}

/// Response de reserva con las referencias resueltas contra el estado
/// actual del catálogo. `car` es None si el coche fue borrado después de
/// crear la reserva (placeholder "vehículo desconocido"); el precio
/// congelado se conserva igualmente.
#[derive(Debug, Serialize)]
pub struct BookingResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub car_id: Uuid,
    pub car: Option<CarResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserResponse>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub pickup_location: String,
    pub drop_location: String,
    pub total_price: Decimal,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

impl BookingResponse {
    pub fn from_parts(booking: Booking, car: Option<Car>, user: Option<User>) -> Self {
        Self {
            id: booking.id,
            user_id: booking.user_id,
            car_id: booking.car_id,
            car: car.map(CarResponse::from),
            user: user.map(UserResponse::from),
            start_date: booking.start_date,
            end_date: booking.end_date,
            pickup_location: booking.pickup_location,
            drop_location: booking.drop_location,
            total_price: booking.total_price,
            status: booking.status,
            created_at: booking.created_at,
        }
    }
}
