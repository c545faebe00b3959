//! # Notification Handlers
//!
//! Notification dispatch and per-user channel preferences. Actual delivery
//! belongs to external services; this module emits the send through the
//! tracing pipeline, records delivered notifications in the log table, and
//! collects unsupported channels into the failure list.

use std::sync::Arc;

use axum::{extract::State, Json};
use availo_core::{
    errors::AvailoError,
    models::notification::{
        SendNotificationRequest, SendNotificationResponse, UpdateNotificationPreferencesRequest,
        UpdateNotificationPreferencesResponse,
    },
};
use tracing::{info, warn};

use crate::{middleware::error_handling::AppError, ApiState};

#[axum::debug_handler]
pub async fn send_notification(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<SendNotificationRequest>,
) -> Result<Json<SendNotificationResponse>, AppError> {
    let mut failed_channels = Vec::new();
    let mut delivered = false;

    for channel in &payload.channels {
        match channel.as_str() {
            "email" => {
                info!(
                    "Sending email to {} with message: {}",
                    payload.recipient_id, payload.message
                );
                delivered = true;
            }
            "sms" => {
                info!(
                    "Sending SMS to {} with message: {}",
                    payload.recipient_id, payload.message
                );
                delivered = true;
            }
            "in_app" => {
                info!(
                    "Sending in-app notification to {} with message: {}",
                    payload.recipient_id, payload.message
                );
                delivered = true;
            }
            other => {
                warn!("Unsupported notification channel: {}", other);
                failed_channels.push(other.to_string());
            }
        }
    }

    if delivered {
        availo_db::repositories::notification::record_notification(
            &state.db_pool,
            payload.recipient_id,
            &payload.message,
        )
        .await
        .map_err(AvailoError::Database)?;
    }

    let response = if failed_channels.is_empty() {
        SendNotificationResponse {
            success: true,
            failed_channels,
            error_message: None,
        }
    } else {
        SendNotificationResponse {
            success: false,
            failed_channels,
            error_message: Some("Some channels failed.".to_string()),
        }
    };

    Ok(Json(response))
}

#[axum::debug_handler]
pub async fn update_preferences(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<UpdateNotificationPreferencesRequest>,
) -> Result<Json<UpdateNotificationPreferencesResponse>, AppError> {
    let user = availo_db::repositories::user::get_user_by_id(&state.db_pool, payload.user_id)
        .await
        .map_err(AvailoError::Database)?;

    if user.is_none() {
        return Ok(Json(UpdateNotificationPreferencesResponse {
            user_id: payload.user_id,
            status: "User not found".to_string(),
        }));
    }

    availo_db::repositories::notification::upsert_preferences(
        &state.db_pool,
        payload.user_id,
        payload.email_notifications,
        payload.sms_notifications,
        payload.in_app_notifications,
    )
    .await
    .map_err(AvailoError::Database)?;

    Ok(Json(UpdateNotificationPreferencesResponse {
        user_id: payload.user_id,
        status: "Success".to_string(),
    }))
}
