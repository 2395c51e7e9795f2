//! Booking API module
//!
//! Booking creation is public (it backs the booking form); reads require
//! authentication. The availability lookup is public so the form can grey
//! out taken slots.

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/bookings", post(handler::create).get(handler::list))
        .route("/api/bookings/{id}", get(handler::get_by_id))
        .route("/api/booked-slots", get(handler::availability))
}
