//! Booking API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::ServerState;
use crate::db::models::{Booking, BookingCreate};
use crate::db::repository::booking;
use crate::slots;
use crate::utils::validation::{MAX_NAME_LEN, validate_required_text};
use crate::utils::{AppError, AppResult, time};

/// POST /api/bookings - create a booking (public form submission)
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<BookingCreate>,
) -> AppResult<(StatusCode, Json<Booking>)> {
    validate_required_text(&payload.first_name, "first_name", MAX_NAME_LEN)?;
    let date = time::parse_date(&payload.reservation_date)
        .map_err(|_| AppError::validation(format!(
            "reservation_date: invalid date '{}', use YYYY-MM-DD",
            payload.reservation_date
        )))?;

    // The form presents a closed choice, but direct API calls can send
    // anything; out-of-catalog slots are rejected here.
    let slot = payload.reservation_slot.unwrap_or(slots::DEFAULT_SLOT);
    if !slots::is_bookable(slot) {
        return Err(AppError::validation(format!(
            "reservation_slot: {slot} is not a bookable slot (valid: 10-20)"
        )));
    }

    let booking = booking::create(&state.pool, payload.first_name.trim(), date, slot).await?;

    tracing::info!(
        booking_id = booking.id,
        date = %booking.reservation_date,
        slot = booking.reservation_slot,
        "Booking created"
    );

    Ok((StatusCode::CREATED, Json(booking)))
}

/// GET /api/bookings - list all bookings
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Booking>>> {
    let bookings = booking::find_all(&state.pool).await?;
    Ok(Json(bookings))
}

/// GET /api/bookings/:id - fetch a single booking
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Booking>> {
    let booking = booking::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Booking {id} not found")))?;
    Ok(Json(booking))
}

/// Query params for the availability lookup
#[derive(Debug, Deserialize)]
pub struct AvailabilityQuery {
    pub date: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AvailabilityResponse {
    pub date: NaiveDate,
    pub booked_slots: Vec<i64>,
    pub available_slots: Vec<i64>,
}

/// GET /api/booked-slots?date=YYYY-MM-DD - booked vs. available slots
pub async fn availability(
    State(state): State<ServerState>,
    Query(query): Query<AvailabilityQuery>,
) -> AppResult<Json<AvailabilityResponse>> {
    let date_str = query
        .date
        .ok_or_else(|| AppError::validation("date parameter is required"))?;
    let date = time::parse_date(&date_str)?;

    let booked = booking::booked_slots(&state.pool, date).await?;
    let available: Vec<i64> = slots::ALL_SLOTS
        .iter()
        .copied()
        .filter(|s| !booked.contains(s))
        .collect();

    Ok(Json(AvailabilityResponse {
        date,
        booked_slots: booked,
        available_slots: available,
    }))
}
