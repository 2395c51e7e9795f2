//! Authentication
//!
//! JWT issuance/validation and the request-level auth gate.

pub mod jwt;
pub mod middleware;

pub use jwt::{Claims, CurrentUser, JwtConfig, JwtError, JwtService};
pub use middleware::require_auth;
