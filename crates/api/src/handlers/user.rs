//! # User Handlers
//!
//! Account creation, partial profile updates, and profile reads. Updates are
//! patches: only the fields present in the payload are applied, everything
//! else is left untouched.

use std::str::FromStr;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use availo_core::{
    errors::AvailoError,
    models::user::{
        CreateUserRequest, CreateUserResponse, NotificationPreferences, Role, UpdateUserRequest,
        UpdateUserResponse, UserProfileResponse,
    },
};
use uuid::Uuid;

use crate::{
    middleware::{auth, error_handling::AppError},
    ApiState,
};

#[axum::debug_handler]
pub async fn create_user(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<Json<CreateUserResponse>, AppError> {
    let password_hash =
        auth::hash_password(&payload.password).map_err(|e| AvailoError::Internal(e.into()))?;

    let user = match availo_db::repositories::user::create_user(
        &state.db_pool,
        &payload.email,
        &password_hash,
        payload.role.as_str(),
    )
    .await
    {
        Ok(user) => user,
        // A duplicate email trips the UNIQUE constraint on users.email;
        // that is a caller error, not a persistence fault
        Err(err) if availo_db::is_unique_violation(&err) => {
            return Err(AppError(AvailoError::Validation(format!(
                "A user with email {} already exists",
                payload.email
            ))));
        }
        Err(err) => return Err(AppError(AvailoError::Database(err))),
    };

    availo_db::repositories::user::create_profile(
        &state.db_pool,
        user.id,
        &payload.first_name,
        &payload.last_name,
    )
    .await
    .map_err(AvailoError::Database)?;

    // Preferences start disabled until the user opts in
    availo_db::repositories::notification::upsert_preferences(
        &state.db_pool,
        user.id,
        false,
        false,
        false,
    )
    .await
    .map_err(AvailoError::Database)?;

    let response = CreateUserResponse {
        id: user.id,
        status: "User created successfully.".to_string(),
    };

    Ok(Json(response))
}

#[axum::debug_handler]
pub async fn update_user(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateUserRequest>,
) -> Result<Json<UpdateUserResponse>, AppError> {
    let user = availo_db::repositories::user::get_user_by_id(&state.db_pool, id)
        .await
        .map_err(AvailoError::Database)?
        .ok_or_else(|| AvailoError::NotFound(format!("User with ID {} not found", id)))?;

    let updated_user = if payload.email.is_some() || payload.role.is_some() {
        availo_db::repositories::user::update_user(
            &state.db_pool,
            id,
            payload.email.as_deref(),
            payload.role.map(|role| role.as_str()),
        )
        .await
        .map_err(AvailoError::Database)?
    } else {
        user
    };

    if payload.first_name.is_some() || payload.last_name.is_some() {
        availo_db::repositories::user::update_profile(
            &state.db_pool,
            id,
            payload.first_name.as_deref(),
            payload.last_name.as_deref(),
        )
        .await
        .map_err(AvailoError::Database)?;
    }

    let role = Role::from_str(&updated_user.role).ok();
    let response = UpdateUserResponse {
        id,
        email: Some(updated_user.email),
        first_name: payload.first_name,
        last_name: payload.last_name,
        role,
        update_status: "User profile successfully updated.".to_string(),
    };

    Ok(Json(response))
}

#[axum::debug_handler]
pub async fn get_user_profile(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<UserProfileResponse>, AppError> {
    let user = availo_db::repositories::user::get_user_by_id(&state.db_pool, id)
        .await
        .map_err(AvailoError::Database)?
        .ok_or_else(|| AvailoError::NotFound(format!("User with ID {} not found", id)))?;

    let role = Role::from_str(&user.role)?;

    let profile = availo_db::repositories::user::get_profile_by_user_id(&state.db_pool, id)
        .await
        .map_err(AvailoError::Database)?;

    let linked_schedules =
        availo_db::repositories::schedule::get_schedule_ids_for_user(&state.db_pool, id)
            .await
            .map_err(AvailoError::Database)?;

    // Absent preference row reads as everything disabled
    let preferences = availo_db::repositories::notification::get_preferences(&state.db_pool, id)
        .await
        .map_err(AvailoError::Database)?;
    let notification_preferences = match preferences {
        Some(prefs) => NotificationPreferences {
            email_notifications_enabled: prefs.email_enabled,
            sms_notifications_enabled: prefs.sms_enabled,
            app_notifications_enabled: prefs.in_app_enabled,
        },
        None => NotificationPreferences {
            email_notifications_enabled: false,
            sms_notifications_enabled: false,
            app_notifications_enabled: false,
        },
    };

    let (first_name, last_name) = match profile {
        Some(profile) => (profile.first_name, profile.last_name),
        None => (String::new(), String::new()),
    };

    let response = UserProfileResponse {
        user_id: user.id,
        email: user.email,
        role,
        first_name,
        last_name,
        linked_schedules,
        notification_preferences,
    };

    Ok(Json(response))
}
