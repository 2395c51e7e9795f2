//! Booking Server - restaurant booking and menu service
//!
//! # Overview
//!
//! - **HTTP API** (`api`): bookings, menu CRUD, accounts, health
//! - **Auth** (`auth`): JWT + Argon2
//! - **Database** (`db`): embedded SQLite via sqlx, migrations on startup
//! - **Pages** (`pages`): server-rendered HTML views
//! - **Slot catalog** (`slots`): the eleven bookable hourly slots
//!
//! # Module structure
//!
//! ```text
//! src/
//! ├── core/          # config, state, server
//! ├── auth/          # JWT auth middleware
//! ├── api/           # HTTP routes and handlers
//! ├── pages/         # HTML views
//! ├── db/            # models and repositories
//! ├── slots.rs       # reservation slot catalog
//! └── utils/         # errors, validation, time, logging
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod pages;
pub mod slots;
pub mod utils;

// Re-export public types
pub use crate::auth::{CurrentUser, JwtService};
pub use crate::core::{Config, Server, ServerState, build_router};
pub use crate::utils::{AppError, AppResult};

// Re-export logger functions
pub use crate::utils::logger::{init_logger, init_logger_with_file};

// Security logging macro - structured events on the `security` target
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}
