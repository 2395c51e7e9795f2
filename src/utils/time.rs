//! Time helpers
//!
//! Date parsing happens at the API handler layer; the repository layer
//! receives already-validated `NaiveDate` values.

use chrono::NaiveDate;

use super::{AppError, AppResult};

/// Parse a date string (YYYY-MM-DD)
pub fn parse_date(date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| AppError::validation(format!("Invalid date format: {date}, use YYYY-MM-DD")))
}

/// Current Unix time in milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_dates() {
        let d = parse_date("2025-12-25").unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(2025, 12, 25).unwrap());
    }

    #[test]
    fn rejects_malformed_dates() {
        assert!(parse_date("25/12/2025").is_err());
        assert!(parse_date("2025-13-01").is_err());
        assert!(parse_date("not-a-date").is_err());
        assert!(parse_date("").is_err());
    }
}
