//! Cálculo de precios de reserva
//!
//! El precio se calcula siempre en el servidor a partir de la tarifa
//! vigente del coche; cualquier total enviado por el cliente es solo un
//! hint de presentación y se ignora.

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Duración facturable en días enteros. Puede ser cero o negativa si el
/// rango de fechas es inválido; el llamante debe rechazar la reserva.
pub fn rental_days(start_date: NaiveDate, end_date: NaiveDate) -> i64 {
    (end_date - start_date).num_days()
}

/// Calcular el precio total de una reserva: días × tarifa diaria.
///
/// Si la duración es <= 0 devuelve cero y la reserva no es válida.
pub fn compute_total(price_per_day: Decimal, start_date: NaiveDate, end_date: NaiveDate) -> Decimal {
    let days = rental_days(start_date, end_date);
    if days <= 0 {
        return Decimal::ZERO;
    }
    price_per_day * Decimal::from(days)
}
