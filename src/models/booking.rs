//! Modelo de Booking
//!
//! Una reserva referencia a su usuario y a su coche por id (referencias no
//! propietarias). El precio total se congela al crear la reserva: cambios
//! posteriores de tarifa del coche nunca la afectan.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use uuid::Uuid;

/// Estado de la reserva - mapea al ENUM booking_status
///
/// No hay máquina de estados estricta: cualquier estado puede pasar a
/// cualquier otro si el llamante está autorizado (comportamiento base
/// preservado, ver DESIGN.md).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "booking_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
        }
    }
}

/// Booking principal - mapea exactamente a la tabla bookings
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Booking {
    pub id: Uuid,
    pub user_id: Uuid,
    pub car_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub pickup_location: String,
    pub drop_location: String,
    pub total_price: Decimal,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_id: Uuid,
        car_id: Uuid,
        start_date: NaiveDate,
        end_date: NaiveDate,
        pickup_location: String,
        drop_location: String,
        total_price: Decimal,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            car_id,
            start_date,
            end_date,
            pickup_location,
            drop_location,
            total_price,
            // Toda reserva nace pendiente, sin excepción
            status: BookingStatus::Pending,
            created_at: Utc::now(),
        }
    }

    /// Duración facturable en días enteros
    pub fn duration_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }
}
