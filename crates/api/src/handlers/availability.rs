//! # Availability Handlers
//!
//! Endpoints for querying a professional's current availability and for
//! bulk-flipping the availability flag on their upcoming schedules.
//!
//! The availability query is a straight read: find the schedule containing
//! the current instant (boundaries inclusive), check whether it is marked
//! available and unoccupied, and if not, look for the earliest later block
//! marked available. The decision itself lives in
//! [`availo_core::availability`]; this handler only runs the queries and
//! shapes the response. Nothing is cached; every call re-evaluates against
//! the database.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use std::sync::Arc;
use availo_core::{
    availability::{self, CurrentBlock},
    errors::AvailoError,
    models::availability::{
        GetAvailabilityResponse, UpdateAvailabilityRequest, UpdateAvailabilityResponse,
    },
};
use uuid::Uuid;

use crate::{middleware::error_handling::AppError, ApiState};

#[axum::debug_handler]
pub async fn get_availability(
    State(state): State<Arc<ApiState>>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<GetAvailabilityResponse>, AppError> {
    let now = Utc::now();

    // Find the schedule containing this instant, if any
    let current_schedule =
        availo_db::repositories::schedule::get_current_for_user(&state.db_pool, user_id, now)
            .await
            .map_err(AvailoError::Database)?;

    let current = match &current_schedule {
        Some(schedule) => {
            let appointment_count = availo_db::repositories::appointment::count_for_schedule(
                &state.db_pool,
                schedule.id,
            )
            .await
            .map_err(AvailoError::Database)?;

            Some(CurrentBlock {
                available: schedule.available,
                occupied: appointment_count > 0,
            })
        }
        None => None,
    };

    // The forward search only matters when the current block is closed
    let needs_next = matches!(current, Some(block) if !block.is_open());
    let next_start = if needs_next {
        availo_db::repositories::schedule::get_next_available(&state.db_pool, user_id, now)
            .await
            .map_err(AvailoError::Database)?
            .map(|schedule| schedule.start_time)
    } else {
        None
    };

    let decision = availability::decide(current, next_start);
    let response = availability::to_response(user_id, now, decision);

    Ok(Json(response))
}

#[axum::debug_handler]
pub async fn update_availability(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<UpdateAvailabilityRequest>,
) -> Result<Json<UpdateAvailabilityResponse>, AppError> {
    let now = Utc::now();

    let result = availo_db::repositories::schedule::set_availability_for_upcoming(
        &state.db_pool,
        payload.professional_id,
        now,
        payload.new_availability,
    )
    .await;

    let response = match result {
        Ok(_) => UpdateAvailabilityResponse {
            success: true,
            updated_availability: payload.new_availability,
            message: Some("Professional's availability status updated successfully.".to_string()),
        },
        Err(err) => UpdateAvailabilityResponse {
            success: false,
            updated_availability: payload.new_availability,
            message: Some(format!(
                "Failed to update availability status due to an error: {}",
                err
            )),
        },
    };

    Ok(Json(response))
}
