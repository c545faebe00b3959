//! # Auth Handlers
//!
//! Login, token refresh, and logout. Login failures are uniform: an unknown
//! email and a wrong password both produce the same `InvalidCredentials`
//! response, so the endpoint cannot be used to enumerate accounts. Refresh
//! rotates the stored refresh token in a single update keyed on the old
//! value, which makes concurrent reuse of a stale token fail.

use axum::{extract::State, Json};
use chrono::{Duration, Utc};
use std::sync::Arc;
use availo_core::{
    errors::AvailoError,
    models::auth::{
        LoginRequest, LoginResponse, LogoutRequest, LogoutResponse, RefreshTokenRequest,
        RefreshTokenResponse,
    },
};

use crate::{
    middleware::{auth, error_handling::AppError},
    ApiState,
};

#[axum::debug_handler]
pub async fn login(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let user = availo_db::repositories::user::get_user_by_email(&state.db_pool, &payload.email)
        .await
        .map_err(AvailoError::Database)?
        .ok_or(AvailoError::InvalidCredentials)?;

    let is_valid = auth::verify_password(&payload.password, &user.password_hash)
        .map_err(|e| AvailoError::Internal(e.into()))?;
    if !is_valid {
        return Err(AppError(AvailoError::InvalidCredentials));
    }

    let ttl = Duration::minutes(state.config.access_token_ttl_minutes);
    let token = auth::issue_token(&state.config.jwt_secret, &user.id.to_string(), ttl)
        .map_err(|e| AvailoError::Internal(e.into()))?;

    let response = LoginResponse {
        token,
        expires_in: state.config.access_token_ttl_minutes * 60,
    };

    Ok(Json(response))
}

#[axum::debug_handler]
pub async fn refresh(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<RefreshTokenRequest>,
) -> Result<Json<RefreshTokenResponse>, AppError> {
    let auth_token =
        availo_db::repositories::auth_token::get_by_token(&state.db_pool, &payload.refresh_token)
            .await
            .map_err(AvailoError::Database)?
            .ok_or(AvailoError::InvalidToken)?;

    if Utc::now() > auth_token.expiry_date {
        return Err(AppError(AvailoError::InvalidToken));
    }

    let subject = auth_token.user_id.to_string();

    let access_ttl = Duration::minutes(state.config.access_token_ttl_minutes);
    let access_token = auth::issue_token(&state.config.jwt_secret, &subject, access_ttl)
        .map_err(|e| AvailoError::Internal(e.into()))?;

    let refresh_ttl = Duration::days(state.config.refresh_token_ttl_days);
    let new_refresh_token = auth::issue_token(&state.config.jwt_secret, &subject, refresh_ttl)
        .map_err(|e| AvailoError::Internal(e.into()))?;
    let new_expiry = Utc::now() + refresh_ttl;

    // Single update keyed on the old token value; a stale token matches
    // nothing once a concurrent refresh has already rotated the row.
    availo_db::repositories::auth_token::rotate(
        &state.db_pool,
        &payload.refresh_token,
        &new_refresh_token,
        new_expiry,
    )
    .await
    .map_err(AvailoError::Database)?
    .ok_or(AvailoError::InvalidToken)?;

    let response = RefreshTokenResponse {
        access_token,
        refresh_token: new_refresh_token,
        token_type: "bearer".to_string(),
        expires_in: state.config.access_token_ttl_minutes * 60,
    };

    Ok(Json(response))
}

#[axum::debug_handler]
pub async fn logout(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<LogoutRequest>,
) -> Result<Json<LogoutResponse>, AppError> {
    // Idempotent: deleting zero rows is still a successful logout
    availo_db::repositories::auth_token::delete_by_token(&state.db_pool, &payload.token)
        .await
        .map_err(AvailoError::Database)?;

    let response = LogoutResponse {
        message: "User successfully logged out.".to_string(),
    };

    Ok(Json(response))
}
