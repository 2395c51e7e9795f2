//! Reservation slot catalog
//!
//! The restaurant takes bookings for eleven fixed hourly slots, 10:00
//! through 20:00. A slot is identified by its starting hour.

/// All bookable slots, in order.
pub const ALL_SLOTS: [i64; 11] = [10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20];

/// Slot assigned when a booking request does not name one.
pub const DEFAULT_SLOT: i64 = 10;

/// Whether `slot` is in the catalog.
pub fn is_bookable(slot: i64) -> bool {
    ALL_SLOTS.contains(&slot)
}

/// Human-readable label for a slot, as shown in the booking form dropdown.
///
/// Only defined for catalog slots; anything else reuses the 24h hour as-is.
pub fn label(slot: i64) -> String {
    match slot {
        10 | 11 => format!("{slot}:00 AM"),
        12 => "12:00 PM".to_string(),
        13..=20 => format!("{}:00 PM", slot - 12),
        _ => format!("{slot}:00"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_ten_to_twenty_hourly() {
        assert_eq!(ALL_SLOTS.len(), 11);
        assert_eq!(ALL_SLOTS.first(), Some(&10));
        assert_eq!(ALL_SLOTS.last(), Some(&20));
        assert!(ALL_SLOTS.windows(2).all(|w| w[1] == w[0] + 1));
    }

    #[test]
    fn membership() {
        for slot in ALL_SLOTS {
            assert!(is_bookable(slot));
        }
        assert!(!is_bookable(9));
        assert!(!is_bookable(21));
        assert!(!is_bookable(0));
        assert!(!is_bookable(-10));
    }

    #[test]
    fn labels_match_the_form_wording() {
        assert_eq!(label(10), "10:00 AM");
        assert_eq!(label(11), "11:00 AM");
        assert_eq!(label(12), "12:00 PM");
        assert_eq!(label(13), "1:00 PM");
        assert_eq!(label(20), "8:00 PM");
    }
}
