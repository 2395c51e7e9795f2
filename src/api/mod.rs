//! API route modules
//!
//! # Structure
//!
//! - [`health`] - health checks
//! - [`accounts`] - registration and token issuance
//! - [`bookings`] - booking intake, listing, availability
//! - [`menu`] - menu item CRUD

pub mod accounts;
pub mod bookings;
pub mod health;
pub mod menu;
