//! Booking Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A confirmed reservation: one customer name bound to one date+slot.
///
/// The (reservation_date, reservation_slot) pair is unique across the
/// table, enforced by a unique index. Bookings are never mutated after
/// creation.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Booking {
    pub id: i64,
    pub first_name: String,
    pub reservation_date: NaiveDate,
    pub reservation_slot: i64,
    pub created_at: i64,
}

/// Create booking payload
///
/// The date arrives as text so that a malformed value produces a
/// field-level validation error instead of a deserialization failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingCreate {
    pub first_name: String,
    pub reservation_date: String,
    #[serde(default)]
    pub reservation_slot: Option<i64>,
}
