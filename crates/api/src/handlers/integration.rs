//! # Integration Handlers
//!
//! External calendar/service integrations: token storage for services like
//! Google Calendar. All three operations report soft outcomes; a malformed
//! expiry date or missing row lands in the response body, not a 4xx.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use availo_core::{
    errors::AvailoError,
    models::integration::{
        AddIntegrationRequest, AddIntegrationResponse, IntegrationDetails,
        RemoveIntegrationResponse, UpdateIntegrationRequest, UpdateIntegrationResponse,
    },
};
use uuid::Uuid;

use crate::{middleware::error_handling::AppError, ApiState};

#[axum::debug_handler]
pub async fn add_integration(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<AddIntegrationRequest>,
) -> Result<Json<AddIntegrationResponse>, AppError> {
    let expiry_date = match &payload.expiry_date {
        Some(raw) => match DateTime::parse_from_rfc3339(raw) {
            Ok(parsed) => Some(parsed.with_timezone(&Utc)),
            Err(err) => {
                return Ok(Json(AddIntegrationResponse {
                    integration_id: None,
                    success: false,
                    message: format!("Failed to add integration: invalid expiry date: {}", err),
                }));
            }
        },
        None => None,
    };

    let integration = availo_db::repositories::integration::create_integration(
        &state.db_pool,
        payload.user_id,
        &payload.service,
        &payload.access_token,
        payload.refresh_token.as_deref(),
        expiry_date,
    )
    .await
    .map_err(AvailoError::Database)?;

    Ok(Json(AddIntegrationResponse {
        integration_id: Some(integration.id),
        success: true,
        message: "Integration added successfully.".to_string(),
    }))
}

#[axum::debug_handler]
pub async fn update_integration(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateIntegrationRequest>,
) -> Result<Json<UpdateIntegrationResponse>, AppError> {
    let updated = availo_db::repositories::integration::update_integration(
        &state.db_pool,
        id,
        &payload.service,
        &payload.access_token,
        payload.refresh_token.as_deref(),
        payload.expiry_date,
    )
    .await
    .map_err(AvailoError::Database)?;

    let response = match updated {
        Some(integration) => UpdateIntegrationResponse {
            status: "success".to_string(),
            updated_integration: Some(IntegrationDetails {
                id: integration.id,
                service: integration.service,
                access_token: integration.access_token,
                refresh_token: integration.refresh_token,
                expiry_date: integration.expiry_date,
            }),
        },
        None => UpdateIntegrationResponse {
            status: "failed: integration not found".to_string(),
            updated_integration: None,
        },
    };

    Ok(Json(response))
}

#[axum::debug_handler]
pub async fn remove_integration(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<RemoveIntegrationResponse>, AppError> {
    let deleted = availo_db::repositories::integration::delete_integration(&state.db_pool, id)
        .await
        .map_err(AvailoError::Database)?;

    let response = if deleted > 0 {
        RemoveIntegrationResponse {
            success: true,
            message: "Integration successfully removed.".to_string(),
        }
    } else {
        RemoveIntegrationResponse {
            success: false,
            message: "Integration not found.".to_string(),
        }
    };

    Ok(Json(response))
}
