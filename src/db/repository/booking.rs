//! Booking Repository
//!
//! The (reservation_date, reservation_slot) unique index is the single
//! source of truth for duplicate prevention: there is no pre-check, so
//! concurrent writers race on the index and exactly one insert wins.

use super::{RepoError, RepoResult};
use crate::db::models::Booking;
use chrono::NaiveDate;
use sqlx::SqlitePool;

const BOOKING_SELECT: &str =
    "SELECT id, first_name, reservation_date, reservation_slot, created_at FROM booking";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Booking>> {
    let sql = format!("{BOOKING_SELECT} ORDER BY reservation_date, reservation_slot");
    let bookings = sqlx::query_as::<_, Booking>(&sql).fetch_all(pool).await?;
    Ok(bookings)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Booking>> {
    let sql = format!("{BOOKING_SELECT} WHERE id = ?");
    let booking = sqlx::query_as::<_, Booking>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(booking)
}

/// Slots already taken on `date`, ascending. Never contains duplicates
/// (the unique index forbids them).
pub async fn booked_slots(pool: &SqlitePool, date: NaiveDate) -> RepoResult<Vec<i64>> {
    let slots = sqlx::query_scalar::<_, i64>(
        "SELECT reservation_slot FROM booking WHERE reservation_date = ? ORDER BY reservation_slot",
    )
    .bind(date)
    .fetch_all(pool)
    .await?;
    Ok(slots)
}

pub async fn create(
    pool: &SqlitePool,
    first_name: &str,
    date: NaiveDate,
    slot: i64,
) -> RepoResult<Booking> {
    let now = crate::utils::time::now_millis();
    let booking = sqlx::query_as::<_, Booking>(
        "INSERT INTO booking (first_name, reservation_date, reservation_slot, created_at) \
         VALUES (?, ?, ?, ?) \
         RETURNING id, first_name, reservation_date, reservation_slot, created_at",
    )
    .bind(first_name)
    .bind(date)
    .bind(slot)
    .bind(now)
    .fetch_one(pool)
    .await
    .map_err(|e| match RepoError::from(e) {
        RepoError::Duplicate(_) => {
            RepoError::Duplicate(format!("Slot {slot} on {date} is already booked"))
        }
        other => other,
    })?;
    Ok(booking)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    /// In-memory SQLite pool with the full schema applied.
    /// max_connections(1): each :memory: connection is its own database.
    async fn test_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        sqlx::migrate!("./migrations").run(&pool).await.unwrap();
        pool
    }

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[tokio::test]
    async fn create_assigns_id_and_roundtrips() {
        let pool = test_pool().await;
        let b = create(&pool, "John", date("2025-12-25"), 18).await.unwrap();
        assert!(b.id > 0);

        let fetched = find_by_id(&pool, b.id).await.unwrap().unwrap();
        assert_eq!(fetched.first_name, "John");
        assert_eq!(fetched.reservation_date, date("2025-12-25"));
        assert_eq!(fetched.reservation_slot, 18);
    }

    #[tokio::test]
    async fn duplicate_date_slot_rejected() {
        let pool = test_pool().await;
        create(&pool, "John", date("2025-12-25"), 18).await.unwrap();

        let err = create(&pool, "Jane", date("2025-12-25"), 18)
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::Duplicate(_)));

        // Only the first booking survives
        assert_eq!(find_all(&pool).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn same_slot_different_date_allowed() {
        let pool = test_pool().await;
        create(&pool, "John", date("2025-12-25"), 18).await.unwrap();
        create(&pool, "Jane", date("2025-12-26"), 18).await.unwrap();
        assert_eq!(find_all(&pool).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn booked_slots_per_date() {
        let pool = test_pool().await;
        create(&pool, "John", date("2025-12-25"), 18).await.unwrap();
        create(&pool, "Jane", date("2025-12-25"), 10).await.unwrap();
        create(&pool, "Ana", date("2025-12-26"), 12).await.unwrap();

        let slots = booked_slots(&pool, date("2025-12-25")).await.unwrap();
        assert_eq!(slots, vec![10, 18]);

        let empty = booked_slots(&pool, date("2025-01-01")).await.unwrap();
        assert!(empty.is_empty());
    }
}
