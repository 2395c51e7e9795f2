//! Account Handlers
//!
//! Registration and bearer-token issuance

use std::time::Duration;

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use crate::core::ServerState;
use crate::db::models::AccountCreate;
use crate::db::repository::{RepoError, account};
use crate::security_log;
use crate::utils::validation::{
    MAX_USERNAME_LEN, validate_email, validate_password, validate_required_text,
};
use crate::utils::{AppError, AppResult};

/// Fixed delay for authentication to prevent timing attacks
const AUTH_FIXED_DELAY_MS: u64 = 500;

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct TokenRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

/// POST /api/register - create a new account
///
/// Public. Does not issue a token; callers follow up with POST /api/token.
pub async fn register(
    State(state): State<ServerState>,
    Json(payload): Json<AccountCreate>,
) -> AppResult<(StatusCode, Json<RegisterResponse>)> {
    validate_required_text(&payload.username, "username", MAX_USERNAME_LEN)?;
    if payload.username.contains(char::is_whitespace) {
        return Err(AppError::validation("username must not contain whitespace"));
    }
    validate_email(&payload.email)?;
    validate_password(&payload.password)?;

    let username = payload.username.clone();
    let account = account::create(&state.pool, payload)
        .await
        .map_err(|e| match e {
            // a taken username is a fixable client mistake, not a conflict
            // between two live resources
            RepoError::Duplicate(_) => {
                AppError::validation(format!("username: '{username}' is already taken"))
            }
            other => other.into(),
        })?;

    tracing::info!(account_id = account.id, username = %account.username, "Account registered");

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User created successfully".to_string(),
        }),
    ))
}

/// POST /api/token - exchange credentials for a bearer token
///
/// Public (credential-gated). Failures use a unified message and a fixed
/// delay so that usernames cannot be enumerated or timed.
pub async fn token(
    State(state): State<ServerState>,
    Json(req): Json<TokenRequest>,
) -> AppResult<Json<TokenResponse>> {
    let account = account::find_by_username(&state.pool, &req.username).await?;

    // Fixed delay to prevent timing attacks (before checking result)
    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    let account = match account {
        Some(a) => {
            let password_valid = a
                .verify_password(&req.password)
                .map_err(|e| AppError::internal(format!("Password verification failed: {e}")))?;

            if !password_valid {
                security_log!(
                    "WARN",
                    "token_failed",
                    username = req.username.clone(),
                    reason = "invalid_credentials"
                );
                return Err(AppError::invalid_credentials());
            }

            a
        }
        None => {
            security_log!(
                "WARN",
                "token_failed",
                username = req.username.clone(),
                reason = "user_not_found"
            );
            return Err(AppError::invalid_credentials());
        }
    };

    let jwt_service = state.get_jwt_service();
    let token = jwt_service
        .generate_token(account.id, &account.username)
        .map_err(|e| AppError::internal(format!("Failed to generate token: {e}")))?;

    tracing::info!(account_id = account.id, username = %account.username, "Token issued");

    Ok(Json(TokenResponse { token }))
}
