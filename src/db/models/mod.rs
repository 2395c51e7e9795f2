//! Database models
//!
//! Entity structs plus their Create/Update payloads.

pub mod account;
pub mod booking;
pub mod menu_item;

pub use account::{Account, AccountCreate};
pub use booking::{Booking, BookingCreate};
pub use menu_item::{MenuItem, MenuItemCreate, MenuItemUpdate};
