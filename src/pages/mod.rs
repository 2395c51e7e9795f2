//! Server-rendered HTML pages
//!
//! A thin view layer over the booking data: home, about, the booking form
//! and the reservations listing. Templates are embedded in the binary;
//! dynamic parts are plain placeholder substitution.

use axum::{Router, extract::State, response::Html, routing::get};

use crate::core::ServerState;
use crate::db::repository::booking;
use crate::slots;
use crate::utils::AppResult;

const INDEX_HTML: &str = include_str!("../../templates/index.html");
const ABOUT_HTML: &str = include_str!("../../templates/about.html");
const BOOK_HTML: &str = include_str!("../../templates/book.html");
const BOOKINGS_HTML: &str = include_str!("../../templates/bookings.html");

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/", get(home))
        .route("/about", get(about))
        .route("/book", get(book))
        .route("/reservations", get(reservations))
}

async fn home() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn about() -> Html<&'static str> {
    Html(ABOUT_HTML)
}

/// Booking form with the slot dropdown populated from the catalog
async fn book() -> Html<String> {
    let options: String = slots::ALL_SLOTS
        .iter()
        .map(|&slot| {
            format!(
                "<option value=\"{slot}\">{}</option>",
                slots::label(slot)
            )
        })
        .collect();
    Html(BOOK_HTML.replace("<!--SLOT_OPTIONS-->", &options))
}

/// Listing of all reservations
async fn reservations(State(state): State<ServerState>) -> AppResult<Html<String>> {
    let bookings = booking::find_all(&state.pool).await?;
    let rows: String = bookings
        .iter()
        .map(|b| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
                escape(&b.first_name),
                b.reservation_date,
                slots::label(b.reservation_slot)
            )
        })
        .collect();
    Ok(Html(BOOKINGS_HTML.replace("<!--BOOKING_ROWS-->", &rows)))
}

/// Minimal HTML escaping for user-supplied text
fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
