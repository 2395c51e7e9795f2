//! Input validation helpers
//!
//! Centralized text length constants and validation functions.
//! SQLite TEXT has no built-in length enforcement, so limits are
//! applied here before persistence.

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Customer first names on bookings
pub const MAX_NAME_LEN: usize = 200;

/// Menu item titles
pub const MAX_TITLE_LEN: usize = 255;

/// Usernames
pub const MAX_USERNAME_LEN: usize = 150;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Passwords (before hashing)
pub const MIN_PASSWORD_LEN: usize = 8;
pub const MAX_PASSWORD_LEN: usize = 128;

// ── Validation helpers (CRUD handlers) ──────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is non-empty and within the limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value {
        validate_required_text(v, field, max_len)?;
    }
    Ok(())
}

/// Minimal shape check for email addresses: local@domain, no spaces.
///
/// Deliverability is not our problem; this only rejects obvious garbage.
pub fn validate_email(value: &str) -> Result<(), AppError> {
    validate_required_text(value, "email", MAX_EMAIL_LEN)?;
    let valid = match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && !domain.is_empty() && !value.contains(char::is_whitespace)
        }
        None => false,
    };
    if !valid {
        return Err(AppError::validation(format!(
            "email is not a valid address: {value}"
        )));
    }
    Ok(())
}

/// Validate password length bounds (content rules are out of scope).
pub fn validate_password(value: &str) -> Result<(), AppError> {
    if value.len() < MIN_PASSWORD_LEN {
        return Err(AppError::validation(format!(
            "password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    if value.len() > MAX_PASSWORD_LEN {
        return Err(AppError::validation(format!(
            "password is too long (max {MAX_PASSWORD_LEN} characters)"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_text_rejects_empty_and_overlong() {
        assert!(validate_required_text("Ana", "first_name", MAX_NAME_LEN).is_ok());
        assert!(validate_required_text("   ", "first_name", MAX_NAME_LEN).is_err());
        let long = "x".repeat(MAX_NAME_LEN + 1);
        assert!(validate_required_text(&long, "first_name", MAX_NAME_LEN).is_err());
    }

    #[test]
    fn email_shape() {
        assert!(validate_email("newuser@test.com").is_ok());
        assert!(validate_email("no-at-sign").is_err());
        assert!(validate_email("@missing-local").is_err());
        assert!(validate_email("missing-domain@").is_err());
        assert!(validate_email("has space@test.com").is_err());
    }

    #[test]
    fn password_bounds() {
        assert!(validate_password("newpass123").is_ok());
        assert!(validate_password("short").is_err());
        assert!(validate_password(&"p".repeat(MAX_PASSWORD_LEN + 1)).is_err());
    }
}
