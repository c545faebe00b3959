//! # Schedule Handlers
//!
//! CRUD over schedule blocks. Reads fail hard with a 404 when the schedule
//! is missing; updates and deletes report a soft `success`/`message` body
//! instead, so a stale id is an outcome rather than an error.

use std::str::FromStr;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use availo_core::{
    errors::AvailoError,
    models::{
        schedule::{
            AppointmentBrief, CreateScheduleRequest, CreateScheduleResponse,
            DeleteScheduleResponse, GetScheduleResponse, UpdateScheduleRequest,
            UpdateScheduleResponse, UserBrief,
        },
        user::Role,
    },
};
use uuid::Uuid;

use crate::{middleware::error_handling::AppError, ApiState};

#[axum::debug_handler]
pub async fn create_schedule(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateScheduleRequest>,
) -> Result<Json<CreateScheduleResponse>, AppError> {
    if payload.start_time >= payload.end_time {
        return Err(AppError(AvailoError::Validation(
            "startTime must be before endTime".to_string(),
        )));
    }

    let schedule = availo_db::repositories::schedule::create_schedule(
        &state.db_pool,
        payload.user_id,
        payload.start_time,
        payload.end_time,
        &payload.title,
        payload.description.as_deref(),
        payload.available,
    )
    .await
    .map_err(AvailoError::Database)?;

    let response = CreateScheduleResponse {
        id: schedule.id,
        status: "Success".to_string(),
        message: format!(
            "Schedule for {} has been successfully created.",
            payload.title
        ),
    };

    Ok(Json(response))
}

#[axum::debug_handler]
pub async fn get_schedule(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<GetScheduleResponse>, AppError> {
    let schedule = availo_db::repositories::schedule::get_schedule_by_id(&state.db_pool, id)
        .await
        .map_err(AvailoError::Database)?
        .ok_or_else(|| AvailoError::NotFound(format!("Schedule with ID {} not found", id)))?;

    let user = availo_db::repositories::user::get_user_by_id(&state.db_pool, schedule.user_id)
        .await
        .map_err(AvailoError::Database)?
        .ok_or_else(|| {
            AvailoError::NotFound(format!("User with ID {} not found", schedule.user_id))
        })?;

    let appointments = availo_db::repositories::appointment::get_appointments_by_schedule_id(
        &state.db_pool,
        id,
    )
    .await
    .map_err(AvailoError::Database)?;

    let response = GetScheduleResponse {
        schedule_id: schedule.id,
        start_time: schedule.start_time,
        end_time: schedule.end_time,
        title: schedule.title,
        description: schedule.description,
        available: schedule.available,
        user: UserBrief {
            user_id: user.id,
            email: user.email,
            role: Role::from_str(&user.role)?,
        },
        appointments: appointments
            .into_iter()
            .map(|appointment| AppointmentBrief {
                appointment_id: appointment.id,
                title: appointment.title,
                start_time: appointment.start_time,
                end_time: appointment.end_time,
                description: appointment.description,
            })
            .collect(),
    };

    Ok(Json(response))
}

#[axum::debug_handler]
pub async fn update_schedule(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateScheduleRequest>,
) -> Result<Json<UpdateScheduleResponse>, AppError> {
    let existing = availo_db::repositories::schedule::get_schedule_by_id(&state.db_pool, id)
        .await
        .map_err(AvailoError::Database)?;

    if existing.is_none() {
        return Ok(Json(UpdateScheduleResponse {
            success: false,
            message: "Schedule not found.".to_string(),
        }));
    }

    availo_db::repositories::schedule::update_schedule(
        &state.db_pool,
        id,
        payload.start_time,
        payload.end_time,
        payload.title.as_deref(),
        payload.description.as_ref().map(|d| d.as_deref()),
        payload.available,
    )
    .await
    .map_err(AvailoError::Database)?;

    Ok(Json(UpdateScheduleResponse {
        success: true,
        message: "Schedule updated successfully.".to_string(),
    }))
}

#[axum::debug_handler]
pub async fn delete_schedule(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteScheduleResponse>, AppError> {
    let deleted = availo_db::repositories::schedule::delete_schedule(&state.db_pool, id)
        .await
        .map_err(AvailoError::Database)?;

    let response = if deleted > 0 {
        DeleteScheduleResponse {
            success: true,
            message: "Schedule deleted successfully".to_string(),
        }
    } else {
        DeleteScheduleResponse {
            success: false,
            message: "Schedule not found".to_string(),
        }
    };

    Ok(Json(response))
}
